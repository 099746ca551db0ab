//! Planet surface material: pulsing two-colour blend with a rippled surface.
use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    RenderPipelineDescriptor, ShaderType, SpecializedMeshPipelineError,
};
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::scene::{
    ACCENT_PRIMARY, ACCENT_SECONDARY, PLANET_DISPLACEMENT, PLANET_OPACITY, PLANET_PULSE_SPEED,
};

const PLANET_SHADER_PATH: &str = "shaders/planet.wgsl";

#[derive(Debug, Clone, Copy, ShaderType)]
#[repr(C)]
pub struct PlanetUniform {
    pub color_a: Vec4,
    pub color_b: Vec4,
    /// Scene time in seconds, written every frame
    pub time: f32,
    pub displacement: f32,
    pub pulse_speed: f32,
    pub opacity: f32,
}

impl Default for PlanetUniform {
    fn default() -> Self {
        Self {
            color_a: ACCENT_PRIMARY.to_linear().to_vec4(),
            color_b: ACCENT_SECONDARY.to_linear().to_vec4(),
            time: 0.0,
            displacement: PLANET_DISPLACEMENT,
            pulse_speed: PLANET_PULSE_SPEED,
            opacity: PLANET_OPACITY,
        }
    }
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct PlanetMaterial {
    #[uniform(0)]
    pub params: PlanetUniform,
}

impl Material for PlanetMaterial {
    fn vertex_shader() -> ShaderRef {
        PLANET_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        PLANET_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Blend
    }

    /// Double sided, and only position/normal/uv reach the vertex stage.
    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        descriptor.primitive.cull_mode = None;
        Ok(())
    }
}
