use bevy::prelude::*;
use std::f32::consts::TAU;

/// Constant per-frame rotation about a local axis, applied after a fixed
/// base orientation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub base: Quat,
    pub axis: Vec3,
    /// Current angle in radians, kept in [0, 2π)
    pub angle: f32,
    /// Radians added every frame
    pub step: f32,
}

impl Spin {
    pub fn new(base: Quat, axis: Vec3, angle: f32, step: f32) -> Self {
        Self {
            base,
            axis: axis.normalize_or(Vec3::Y),
            angle: angle.rem_euclid(TAU),
            step,
        }
    }

    /// Spin about Y with no base orientation.
    pub fn about_y(step: f32) -> Self {
        Self::new(Quat::IDENTITY, Vec3::Y, 0.0, step)
    }

    pub fn advance(&mut self) {
        self.angle = (self.angle + self.step).rem_euclid(TAU);
    }

    pub fn rotation(&self) -> Quat {
        self.base * Quat::from_axis_angle(self.axis, self.angle)
    }
}

/// Step every spinning object once per frame.
pub fn advance_spins(mut spinners: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut spinners {
        spin.advance();
        transform.rotation = spin.rotation();
    }
}
