use bevy::prelude::*;
use constants::scene::{
    ACCENT_SECONDARY, HALO_INNER_RADIUS, HALO_OPACITY, HALO_OUTER_RADIUS, HALO_SEGMENTS,
    ORBIT_RING_BASE_RADIUS, ORBIT_RING_COLOR, ORBIT_RING_COUNT, ORBIT_RING_OPACITY,
    ORBIT_RING_PHASE_STEP, ORBIT_RING_RADIUS_STEP, ORBIT_RING_SEGMENTS, ORBIT_RING_SPIN_BASE,
    ORBIT_RING_SPIN_INCREMENT, ORBIT_RING_TILT, ORBIT_RING_TUBE_RADIUS, ORBIT_RING_TUBE_SEGMENTS,
};
use std::f32::consts::FRAC_PI_2;

use super::spin::Spin;

#[derive(Component)]
pub struct OrbitRing;

#[derive(Component)]
pub struct Halo;

/// Outer rings spin faster than inner ones.
pub fn ring_spin_step(index: usize) -> f32 {
    ORBIT_RING_SPIN_BASE + ORBIT_RING_SPIN_INCREMENT * index as f32
}

pub fn ring_radius(index: usize) -> f32 {
    ORBIT_RING_BASE_RADIUS + ORBIT_RING_RADIUS_STEP * index as f32
}

fn ring_material() -> StandardMaterial {
    StandardMaterial {
        base_color: ORBIT_RING_COLOR.with_alpha(ORBIT_RING_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// Torus meshes lie in XZ with their axis on Y. Lift the axis onto Z
/// first, then tilt about X.
fn ring_base_rotation() -> Quat {
    Quat::from_rotation_x(ORBIT_RING_TILT + FRAC_PI_2)
}

pub fn spawn_orbit_rings(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let material = materials.add(ring_material());

    for index in 0..ORBIT_RING_COUNT {
        let mesh = Torus {
            minor_radius: ORBIT_RING_TUBE_RADIUS,
            major_radius: ring_radius(index),
        }
        .mesh()
        .minor_resolution(ORBIT_RING_TUBE_SEGMENTS)
        .major_resolution(ORBIT_RING_SEGMENTS);

        let spin = Spin::new(
            ring_base_rotation(),
            Vec3::Y,
            ORBIT_RING_PHASE_STEP * index as f32,
            ring_spin_step(index),
        );

        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material.clone()),
            Transform::from_rotation(spin.rotation()),
            spin,
            OrbitRing,
            Name::new(format!("Orbit ring {index}")),
        ));
    }
}

/// Flat glow band around the equator. Static.
pub fn spawn_halo(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mesh = Annulus::new(HALO_INNER_RADIUS, HALO_OUTER_RADIUS)
        .mesh()
        .resolution(HALO_SEGMENTS);

    let material = materials.add(StandardMaterial {
        base_color: ACCENT_SECONDARY.with_alpha(HALO_OPACITY),
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        double_sided: true,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        // Annulus meshes are built in XY; lay it flat in XZ.
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        Halo,
        Name::new("Halo"),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_radii_step_outwards() {
        assert_eq!(ring_radius(0), 11.0);
        assert_eq!(ring_radius(3), 15.5);
    }

    #[test]
    fn test_ring_axis_is_tilted_from_view_axis() {
        // Axis starts on +Z (facing the camera) and tilts by π/2.5 about X.
        let axis = ring_base_rotation() * Vec3::Y;
        let expected = Quat::from_rotation_x(ORBIT_RING_TILT) * Vec3::Z;
        assert!((axis - expected).length() < 1e-5);
    }

    #[test]
    fn test_rings_are_translucent_white() {
        let material = ring_material();
        assert_eq!(material.base_color, Color::WHITE.with_alpha(0.3));
        assert_eq!(material.alpha_mode, AlphaMode::Blend);
        assert!(material.unlit);
    }

    #[test]
    fn test_spin_steps_match_index_formula() {
        assert!((ring_spin_step(0) - 0.0015).abs() < 1e-7);
        assert!((ring_spin_step(3) - 0.0027).abs() < 1e-7);
    }
}
