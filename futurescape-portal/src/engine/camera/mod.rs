//! Hero camera: pointer parallax and a constrained orbit rig.
//!
//! The camera always looks at the origin. Pointer movement nudges it with
//! first-order smoothing, dragging orbits it on a sphere of fixed radius and
//! an idle rig turns slowly on its own.

/// Hero camera spawning, parallax smoothing and orbit controller systems.
pub mod hero_camera;
