pub mod camera;
pub mod core;
pub mod scene;
pub mod shaders;
pub mod systems;
