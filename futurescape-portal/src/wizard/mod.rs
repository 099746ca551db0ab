//! Multi-step registration wizard ("portal form").
//!
//! Pure state machine in [`state`], driven by [`WizardCommand`] events and
//! reporting back through [`WizardFeedback`] events for the presentation
//! layer.

pub mod state;
pub mod systems;

use bevy::prelude::*;

use state::WizardState;
use systems::{handle_wizard_commands, tick_pending_confirmation};

/// Request to the wizard, produced by the page bridge.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Next,
    Prev,
    Submit,
    SetValue { name: String, value: String },
}

/// Observable wizard outcomes that drive animation and page effects.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum WizardFeedback {
    StepEntered { step: usize },
    FieldsFlagged { step: usize, fields: Vec<String> },
    ProcessingStarted,
    Confirmed { unlock_afterparty: bool },
}

pub struct WizardPlugin;

impl Plugin for WizardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WizardState>()
            .add_event::<WizardCommand>()
            .add_event::<WizardFeedback>()
            // Ticking first means a timer created by this frame's submit
            // only counts frame time from the next frame on.
            .add_systems(
                Update,
                (tick_pending_confirmation, handle_wizard_commands).chain(),
            );
    }
}
