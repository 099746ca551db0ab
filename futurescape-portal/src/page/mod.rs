//! Page runtime: static content plus the small state models behind the
//! page sections. Each model is a resource mutated by routed page events
//! and projected onto the DOM by the web bridge.

pub mod afterparty;
pub mod content;
pub mod glitch;
pub mod hero;
pub mod intro;
pub mod programme;
pub mod reveal;

use bevy::prelude::*;

use afterparty::{AfterpartyState, unlock_on_confirmation};
use content::{ContentLoader, install_landing_content, start_content_loading};
use glitch::{GlitchState, tick_glitch_bursts};
use hero::HeroOrbitList;
use programme::ProgrammeView;
use reveal::{RevealState, SpeakerPlayback};

pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgrammeView>()
            .init_resource::<RevealState>()
            .init_resource::<SpeakerPlayback>()
            .init_resource::<GlitchState>()
            .init_resource::<HeroOrbitList>()
            .init_resource::<AfterpartyState>()
            .init_resource::<ContentLoader>()
            .add_systems(Startup, start_content_loading)
            .add_systems(
                Update,
                (
                    install_landing_content,
                    unlock_on_confirmation,
                    tick_glitch_bursts,
                ),
            );
    }
}
