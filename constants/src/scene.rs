use bevy::color::Color;

/// Camera vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 55.0;

/// Camera near clipping plane
pub const CAMERA_NEAR: f32 = 0.1;

/// Camera far clipping plane
pub const CAMERA_FAR: f32 = 200.0;

/// Initial camera distance from the origin along +Z
pub const CAMERA_START_DISTANCE: f32 = 32.0;

/// Primary accent colour (#6b6eff), used by the ambient light and the planet
pub const ACCENT_PRIMARY: Color = Color::srgb(107.0 / 255.0, 110.0 / 255.0, 1.0);

/// Secondary accent colour (#a65dff), used by the planet blend and the halo
pub const ACCENT_SECONDARY: Color = Color::srgb(166.0 / 255.0, 93.0 / 255.0, 1.0);

/// Ambient light brightness (intensity 1.5 on the engine's lux-like scale)
pub const AMBIENT_BRIGHTNESS: f32 = 1500.0;

pub const PLANET_RADIUS: f32 = 9.0;
pub const PLANET_SECTORS: u32 = 64;
pub const PLANET_STACKS: u32 = 64;

/// Amplitude of the sinusoidal vertex displacement along the surface normal
pub const PLANET_DISPLACEMENT: f32 = 0.3;

/// Temporal frequency of the colour pulse (radians per second)
pub const PLANET_PULSE_SPEED: f32 = 0.4;

pub const PLANET_OPACITY: f32 = 0.9;

/// Planet spin about Y, radians per frame
pub const PLANET_SPIN_STEP: f32 = 0.0025;

pub const ORBIT_RING_COUNT: usize = 4;
pub const ORBIT_RING_BASE_RADIUS: f32 = 11.0;
pub const ORBIT_RING_RADIUS_STEP: f32 = 1.5;
pub const ORBIT_RING_TUBE_RADIUS: f32 = 0.08;
pub const ORBIT_RING_TUBE_SEGMENTS: usize = 16;
pub const ORBIT_RING_SEGMENTS: usize = 180;
/// Rings and particles are plain white; only their opacity differs
pub const ORBIT_RING_COLOR: Color = Color::WHITE;
pub const ORBIT_RING_OPACITY: f32 = 0.3;

/// Ring tilt about X (π / 2.5)
pub const ORBIT_RING_TILT: f32 = std::f32::consts::PI / 2.5;

/// Initial spin offset between consecutive rings (π / 4)
pub const ORBIT_RING_PHASE_STEP: f32 = std::f32::consts::FRAC_PI_4;

/// Ring spin, radians per frame: base + index * increment
pub const ORBIT_RING_SPIN_BASE: f32 = 0.0015;
pub const ORBIT_RING_SPIN_INCREMENT: f32 = 0.0004;

pub const HALO_INNER_RADIUS: f32 = 11.5;
pub const HALO_OUTER_RADIUS: f32 = 12.5;
pub const HALO_SEGMENTS: u32 = 64;
pub const HALO_OPACITY: f32 = 0.18;

pub const PARTICLE_COUNT: usize = 420;
pub const PARTICLE_MIN_RADIUS: f32 = 14.0;
pub const PARTICLE_MAX_RADIUS: f32 = 22.0;
pub const PARTICLE_HALF_HEIGHT: f32 = 3.0;
pub const PARTICLE_COLOR: Color = Color::WHITE;
pub const PARTICLE_OPACITY: f32 = 0.7;

/// Seed for the particle field so every page load shows the same sky
pub const PARTICLE_SEED: u64 = 0x2025_F5C4;

/// Particle field spin about Y, radians per frame
pub const PARTICLE_SPIN_STEP: f32 = 0.0007;

/// Horizontal / vertical pointer parallax range
pub const PARALLAX_RANGE_X: f32 = 0.4;
pub const PARALLAX_RANGE_Y: f32 = 0.25;

/// First-order smoothing factor applied to the camera each frame
pub const PARALLAX_SMOOTHING: f32 = 0.05;

/// Orbit auto-rotation speed (one full turn per 60s at 60fps when 1.0)
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.45;

/// Orbit drag speed multiplier
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

/// Polar angle bounds, measured from +Y
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::PI / 2.7;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::PI - std::f32::consts::PI / 2.7;
