//! Seeded ring-shaped point field around the planet.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::scene::{
    PARTICLE_COLOR, PARTICLE_COUNT, PARTICLE_HALF_HEIGHT, PARTICLE_MAX_RADIUS,
    PARTICLE_MIN_RADIUS, PARTICLE_OPACITY, PARTICLE_SEED, PARTICLE_SPIN_STEP,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use super::spin::Spin;

#[derive(Component)]
pub struct ParticleField;

/// Cylindrical scatter: radius in [min, max), angle in [0, 2π), height in
/// [-half, half).
pub fn particle_positions(seed: u64, count: usize) -> Vec<[f32; 3]> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let radius = rng.random_range(PARTICLE_MIN_RADIUS..PARTICLE_MAX_RADIUS);
            let angle = rng.random_range(0.0..TAU);
            let height = rng.random_range(-PARTICLE_HALF_HEIGHT..PARTICLE_HALF_HEIGHT);
            [angle.cos() * radius, height, angle.sin() * radius]
        })
        .collect()
}

pub fn create_particle_mesh(positions: Vec<[f32; 3]>) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

fn particle_material() -> StandardMaterial {
    StandardMaterial {
        base_color: PARTICLE_COLOR.with_alpha(PARTICLE_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

pub fn spawn_particle_field(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let positions = particle_positions(PARTICLE_SEED, PARTICLE_COUNT);
    info!("Particle field: {} points", positions.len());

    let material = materials.add(particle_material());

    commands.spawn((
        Mesh3d(meshes.add(create_particle_mesh(positions))),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Spin::about_y(PARTICLE_SPIN_STEP),
        ParticleField,
        Name::new("Particle field"),
    ));
}
