use bevy::prelude::*;
use constants::scene::{PLANET_RADIUS, PLANET_SECTORS, PLANET_SPIN_STEP, PLANET_STACKS};

use super::SceneState;
use super::spin::Spin;
use crate::engine::shaders::PlanetMaterial;

#[derive(Component)]
pub struct Planet;

pub fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<PlanetMaterial>,
) {
    let mesh = Sphere::new(PLANET_RADIUS)
        .mesh()
        .uv(PLANET_SECTORS, PLANET_STACKS);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(PlanetMaterial::default())),
        Transform::IDENTITY,
        Spin::about_y(PLANET_SPIN_STEP),
        Planet,
        Name::new("Planet"),
    ));
}

/// Feed scene time into the planet shader.
pub fn update_planet_material(
    scene: Res<SceneState>,
    planets: Query<&MeshMaterial3d<PlanetMaterial>, With<Planet>>,
    mut materials: ResMut<Assets<PlanetMaterial>>,
) {
    for handle in &planets {
        if let Some(material) = materials.get_mut(&handle.0) {
            material.params.time = scene.elapsed;
        }
    }
}
