//! Decorative hero scene: planet, orbit rings, halo and particle field.
//!
//! Every object is created once at startup and only ever rotated or
//! re-parameterised afterwards.

pub mod orbits;
pub mod particles;
pub mod planet;
pub mod spin;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::scene::{ACCENT_PRIMARY, AMBIENT_BRIGHTNESS, PARALLAX_RANGE_X, PARALLAX_RANGE_Y};

use crate::engine::camera::hero_camera::{
    OrbitRig, apply_pointer_parallax, orbit_controls, spawn_hero_camera,
};
use crate::engine::shaders::PlanetMaterial;
use crate::engine::systems::viewport::apply_viewport_resize;
use orbits::{spawn_halo, spawn_orbit_rings};
use particles::spawn_particle_field;
use planet::{spawn_planet, update_planet_material};
use spin::advance_spins;

/// Per-page scene state shared by the frame systems.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneState {
    /// Seconds since the scene started
    pub elapsed: f32,
    /// Normalised pointer offset used as the camera parallax target
    pub pointer_offset: Vec2,
    /// Last known viewport size in logical pixels
    pub viewport: Vec2,
}

impl SceneState {
    /// Map a client-space pointer position onto the parallax range.
    /// Ignored while the viewport has no area.
    pub fn set_pointer_from_client(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.pointer_offset = Vec2::new(
            (x / width * 2.0 - 1.0) * PARALLAX_RANGE_X,
            (y / height * 2.0 - 1.0) * PARALLAX_RANGE_Y,
        );
    }
}

pub struct HeroScenePlugin;

impl Plugin for HeroScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<PlanetMaterial>::default())
            .init_resource::<SceneState>()
            .init_resource::<OrbitRig>()
            .insert_resource(ClearColor(Color::NONE))
            .insert_resource(AmbientLight {
                color: ACCENT_PRIMARY,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_systems(Startup, spawn_hero_scene)
            .add_systems(
                Update,
                (
                    apply_viewport_resize,
                    tick_scene_clock,
                    update_planet_material,
                    advance_spins,
                    apply_pointer_parallax,
                    orbit_controls,
                )
                    .chain(),
            );
    }
}

fn spawn_hero_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut planet_materials: ResMut<Assets<PlanetMaterial>>,
    mut scene: ResMut<SceneState>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if let Ok(window) = windows.single() {
        scene.viewport = Vec2::new(window.width(), window.height());
    }

    spawn_hero_camera(&mut commands, scene.viewport);
    spawn_planet(&mut commands, &mut meshes, &mut planet_materials);
    spawn_orbit_rings(&mut commands, &mut meshes, &mut materials);
    spawn_halo(&mut commands, &mut meshes, &mut materials);
    spawn_particle_field(&mut commands, &mut meshes, &mut materials);

    info!("Hero scene ready ({}x{})", scene.viewport.x, scene.viewport.y);
}

fn tick_scene_clock(time: Res<Time>, mut scene: ResMut<SceneState>) {
    scene.elapsed = time.elapsed_secs();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_maps_corners_onto_range() {
        let mut scene = SceneState::default();

        scene.set_pointer_from_client(0.0, 0.0, 1000.0, 500.0);
        assert!((scene.pointer_offset - Vec2::new(-0.4, -0.25)).length() < 1e-6);

        scene.set_pointer_from_client(1000.0, 500.0, 1000.0, 500.0);
        assert!((scene.pointer_offset - Vec2::new(0.4, 0.25)).length() < 1e-6);

        scene.set_pointer_from_client(500.0, 250.0, 1000.0, 500.0);
        assert!(scene.pointer_offset.length() < 1e-6);
    }

    #[test]
    fn test_pointer_ignored_without_viewport() {
        let mut scene = SceneState {
            pointer_offset: Vec2::new(0.1, 0.1),
            ..default()
        };
        scene.set_pointer_from_client(10.0, 10.0, 0.0, 0.0);
        assert_eq!(scene.pointer_offset, Vec2::new(0.1, 0.1));
    }
}
