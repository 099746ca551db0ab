use bevy::{input::mouse::MouseMotion, prelude::*};
use constants::scene::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_DISTANCE, ORBIT_AUTO_ROTATE_SPEED,
    ORBIT_MAX_POLAR, ORBIT_MIN_POLAR, ORBIT_ROTATE_SPEED, PARALLAX_SMOOTHING,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::engine::scene::SceneState;

/// Keeps the polar angle off the poles where the look-at basis degenerates.
const POLAR_EPSILON: f32 = 1e-6;

#[derive(Component)]
pub struct HeroCamera;

/// Orbit controller. The spherical coordinates here are the only source
/// of the camera's orbit position; pointer parallax is a separate offset
/// in the camera's right/up plane and never feeds back into them.
/// Zoom and pan are not supported, so `radius` never changes.
#[derive(Resource, Debug, Clone)]
pub struct OrbitRig {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    /// Angle about +Y, measured from +Z towards +X, kept in [0, 2π)
    pub azimuth: f32,
    /// Angle from +Y
    pub polar: f32,
    pub radius: f32,
    /// Smoothed parallax offset (right, up) in world units
    pub parallax: Vec2,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            azimuth: 0.0,
            polar: FRAC_PI_2,
            radius: CAMERA_START_DISTANCE,
            parallax: Vec2::ZERO,
        }
    }
}

impl OrbitRig {
    /// Azimuth turned per idle frame. A speed of 1.0 is one revolution per
    /// 60 seconds at 60 frames per second.
    pub fn auto_rotate_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    /// Azimuth and polar angles for a pointer drag. A drag the height of
    /// the viewport turns a full revolution.
    pub fn drag_angles(&self, delta: Vec2, viewport_height: f32) -> Vec2 {
        if viewport_height <= 0.0 {
            return Vec2::ZERO;
        }
        delta * (TAU / viewport_height) * self.rotate_speed
    }

    /// Turn the orbit, clamping the polar angle to the rig's range.
    pub fn rotate(&mut self, azimuth_delta: f32, polar_delta: f32) {
        self.azimuth = (self.azimuth + azimuth_delta).rem_euclid(TAU);
        self.polar = (self.polar + polar_delta)
            .clamp(self.min_polar, self.max_polar)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
    }

    /// Point on the orbit sphere for the current angles.
    pub fn orbit_position(&self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            ring * self.azimuth.cos(),
        )
    }

    /// Orbit position shifted by the parallax offset along the camera's
    /// own right and up axes.
    pub fn camera_translation(&self) -> Vec3 {
        let orbit = self.orbit_position();
        let forward = -orbit.normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        orbit + right * self.parallax.x + up * self.parallax.y
    }
}

/// First-order approach towards `target`: never overshoots for a factor in
/// (0, 1].
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

pub fn spawn_hero_camera(commands: &mut Commands, viewport: Vec2) {
    let aspect_ratio = if viewport.y > 0.0 {
        viewport.x / viewport.y
    } else {
        1.0
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            aspect_ratio,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_START_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        HeroCamera,
    ));
}

/// Ease the parallax offset towards the pointer target. Screen y grows
/// downwards, so the vertical target is inverted.
pub fn apply_pointer_parallax(scene: Res<SceneState>, mut rig: ResMut<OrbitRig>) {
    let target = Vec2::new(scene.pointer_offset.x, -scene.pointer_offset.y);
    let parallax = Vec2::new(
        smooth_toward(rig.parallax.x, target.x, PARALLAX_SMOOTHING),
        smooth_toward(rig.parallax.y, target.y, PARALLAX_SMOOTHING),
    );
    rig.parallax = parallax;
}

/// Drag with the primary button to orbit, otherwise auto-rotate. Places
/// the camera from the rig and re-aims it at the origin.
pub fn orbit_controls(
    mut rig: ResMut<OrbitRig>,
    scene: Res<SceneState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut cameras: Query<&mut Transform, With<HeroCamera>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let (azimuth_delta, polar_delta) = if mouse_button.pressed(MouseButton::Left) {
        let angles = rig.drag_angles(mouse_delta, scene.viewport.y);
        (-angles.x, -angles.y)
    } else if rig.auto_rotate {
        (-rig.auto_rotate_angle(), 0.0)
    } else {
        (0.0, 0.0)
    };
    rig.rotate(azimuth_delta, polar_delta);

    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };
    transform.translation = rig.camera_translation();
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_app(scene: SceneState, rig: OrbitRig) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<MouseMotion>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(scene)
            .insert_resource(rig)
            .add_systems(Update, (apply_pointer_parallax, orbit_controls).chain());

        let camera = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, CAMERA_START_DISTANCE), HeroCamera))
            .id();
        (app, camera)
    }

    fn camera_translation(app: &App, camera: Entity) -> Vec3 {
        let transform = app.world().get::<Transform>(camera).copied();
        transform.expect("camera exists").translation
    }

    /// Signed azimuth difference wrapped to (-π, π].
    fn azimuth_gap(a: f32, b: f32) -> f32 {
        let gap = (a - b).rem_euclid(TAU);
        if gap > PI { gap - TAU } else { gap }
    }

    #[test]
    fn test_smoothing_converges_without_overshoot() {
        for (start, target) in [(0.0_f32, 0.4_f32), (0.0, -0.25), (3.0, -0.4)] {
            let mut position = start;
            let mut gap = (target - position).abs();

            for _ in 0..400 {
                position = smooth_toward(position, target, PARALLAX_SMOOTHING);
                let next_gap = (target - position).abs();
                assert!(next_gap <= gap, "gap grew from {gap} to {next_gap}");
                assert!(
                    (target - position).signum() == (target - start).signum() || next_gap < 1e-6,
                    "crossed the target"
                );
                gap = next_gap;
            }
            assert!(gap < 1e-3, "did not converge: {gap}");
        }
    }

    #[test]
    fn test_parallax_follows_pointer() {
        let scene = SceneState {
            pointer_offset: Vec2::new(0.4, 0.25),
            viewport: Vec2::new(800.0, 600.0),
            ..default()
        };
        let rig = OrbitRig {
            auto_rotate: false,
            ..default()
        };
        let (mut app, camera) = camera_app(scene, rig);

        for _ in 0..300 {
            app.update();
        }

        // Facing -Z the camera's right is +X and its up is +Y.
        let translation = camera_translation(&app, camera);
        assert!((translation.x - 0.4).abs() < 1e-3);
        assert!((translation.y + 0.25).abs() < 1e-3);
        assert!((translation.z - CAMERA_START_DISTANCE).abs() < 1e-3);

        let rig = app.world().resource::<OrbitRig>();
        assert_eq!(rig.azimuth, 0.0);
        assert_eq!(rig.polar, FRAC_PI_2);

        let transform = app.world().get::<Transform>(camera).copied();
        let transform = transform.expect("camera exists");
        let forward = transform.forward().as_vec3();
        let to_origin = (-transform.translation).normalize();
        assert!(forward.dot(to_origin) > 0.9999);
    }

    #[test]
    fn test_idle_rotation_keeps_turning_under_parallax() {
        let scene = SceneState {
            pointer_offset: Vec2::new(0.4, 0.25),
            viewport: Vec2::new(800.0, 600.0),
            ..default()
        };
        let (mut app, camera) = camera_app(scene, OrbitRig::default());
        let step = OrbitRig::default().auto_rotate_angle();

        for _ in 0..600 {
            app.update();
        }

        let rig = app.world().resource::<OrbitRig>().clone();
        assert!(azimuth_gap(rig.azimuth, -600.0 * step).abs() < 1e-3);
        assert_eq!(rig.radius, CAMERA_START_DISTANCE);

        // The camera sits on the orbit, shifted only by the parallax.
        let translation = camera_translation(&app, camera);
        let shift = translation - rig.orbit_position();
        assert!((shift.length() - rig.parallax.length()).abs() < 1e-3);
        assert!(shift.dot(rig.orbit_position()).abs() < 1e-2);
    }

    #[test]
    fn test_drag_then_release_preserves_radius() {
        let scene = SceneState {
            pointer_offset: Vec2::new(-0.4, 0.25),
            viewport: Vec2::new(1200.0, 800.0),
            ..default()
        };
        let (mut app, camera) = camera_app(scene, OrbitRig::default());

        // 200px of an 800px viewport is a quarter turn.
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(200.0, 0.0),
        });
        app.update();

        let azimuth = app.world().resource::<OrbitRig>().azimuth;
        assert!(azimuth_gap(azimuth, -FRAC_PI_2).abs() < 1e-4);

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .release(MouseButton::Left);
        for _ in 0..300 {
            app.update();
            let distance = camera_translation(&app, camera).length();
            assert!(
                (distance - CAMERA_START_DISTANCE).abs() < 0.01,
                "camera left its orbit: {distance}"
            );
        }

        let step = OrbitRig::default().auto_rotate_angle();
        let rig = app.world().resource::<OrbitRig>();
        assert!(azimuth_gap(rig.azimuth, -FRAC_PI_2 - 300.0 * step).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_clamps_polar_and_wraps_azimuth() {
        let mut rig = OrbitRig::default();

        rig.rotate(0.0, -10.0);
        assert_eq!(rig.polar, ORBIT_MIN_POLAR);
        rig.rotate(0.0, 10.0);
        assert_eq!(rig.polar, ORBIT_MAX_POLAR);

        rig.rotate(-0.5, 0.0);
        assert!((rig.azimuth - (TAU - 0.5)).abs() < 1e-5);
        assert!((rig.orbit_position().length() - CAMERA_START_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn test_auto_rotation_step() {
        let rig = OrbitRig::default();
        let expected = TAU / 3600.0 * 0.45;
        assert!((rig.auto_rotate_angle() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_drag_angles_scale_with_viewport_height() {
        let rig = OrbitRig::default();
        let angles = rig.drag_angles(Vec2::new(400.0, 200.0), 800.0);
        assert!((angles.x - PI).abs() < 1e-5);
        assert!((angles.y - PI / 2.0).abs() < 1e-5);
        assert_eq!(rig.drag_angles(Vec2::new(5.0, 5.0), 0.0), Vec2::ZERO);
    }
}
