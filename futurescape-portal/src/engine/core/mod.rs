//! Core application setup.
//!
//! Builds the Bevy app, wires every feature plugin and configures the
//! window for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the hero scene, the registration wizard, the
/// page runtime and the DOM bridge.
pub mod app_setup;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
