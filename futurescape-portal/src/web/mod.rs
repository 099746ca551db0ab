//! Bridge between the page and the app.
//!
//! Inbound: DOM callbacks push [`events::PageEvent`]s onto a shared queue
//! which is drained and routed at the start of every frame. Outbound:
//! projection systems write state back onto the DOM after the frame's
//! updates. Off the web only the inbound half exists, fed by window input.

pub mod error;
pub mod events;

#[cfg(target_arch = "wasm32")]
pub mod animations;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod listeners;
#[cfg(not(target_arch = "wasm32"))]
pub mod native_input;
#[cfg(target_arch = "wasm32")]
pub mod projection;

use bevy::prelude::*;

use events::{DomAction, PageEvent, PageEventQueue, drain_page_event_queue, route_page_events};

pub struct WebBridgePlugin;

impl Plugin for WebBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageEventQueue>()
            .add_event::<PageEvent>()
            .add_event::<DomAction>()
            .add_systems(
                PreUpdate,
                (drain_page_event_queue, route_page_events).chain(),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            PreUpdate,
            native_input::forward_cursor_moves.before(drain_page_event_queue),
        );

        #[cfg(target_arch = "wasm32")]
        {
            use projection::*;

            app.add_systems(Startup, listeners::install_page_bridge)
                .add_systems(
                    PostUpdate,
                    (
                        project_wizard,
                        play_wizard_feedback,
                        build_speaker_cards,
                        project_speaker_playback,
                        project_programme,
                        project_glitch,
                        project_hero,
                        project_afterparty,
                        run_dom_actions,
                    )
                        .chain(),
                )
                .add_systems(
                    PostUpdate,
                    animations::advance_dom_animations.after(run_dom_actions),
                );
        }
    }
}
