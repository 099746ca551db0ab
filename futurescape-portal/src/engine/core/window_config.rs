use bevy::prelude::*;
use bevy::window::PresentMode;

/// Canvas the hero scene renders into on the landing page.
#[cfg(target_arch = "wasm32")]
const HERO_CANVAS_SELECTOR: &str = "#hero-canvas";

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(HERO_CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // Page scrolling, clicks and form input must keep working.
            prevent_default_event_handling: false,
            transparent: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "FutureScape 2025".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
