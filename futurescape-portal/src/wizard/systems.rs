use bevy::prelude::*;

use super::state::{WizardState, WizardTransition};
use super::{WizardCommand, WizardFeedback};

/// Apply queued wizard commands in arrival order.
pub fn handle_wizard_commands(
    mut commands: EventReader<WizardCommand>,
    mut wizard: ResMut<WizardState>,
    mut feedback: EventWriter<WizardFeedback>,
) {
    for command in commands.read() {
        let transition = match command {
            WizardCommand::SetValue { name, value } => {
                wizard.set_value(name.clone(), value.clone());
                continue;
            }
            WizardCommand::Next => wizard.next(),
            WizardCommand::Prev => wizard.prev(),
            WizardCommand::Submit => wizard.submit(),
        };

        match transition {
            WizardTransition::Entered { step } => {
                debug!("Wizard entered step {}", step);
                feedback.write(WizardFeedback::StepEntered { step });
            }
            WizardTransition::Blocked { step, missing } => {
                info!("Wizard step {} missing: {}", step, missing.join(", "));
                feedback.write(WizardFeedback::FieldsFlagged {
                    step,
                    fields: missing,
                });
            }
            WizardTransition::Processing => {
                info!("Wizard submitted, awaiting confirmation");
                feedback.write(WizardFeedback::ProcessingStarted);
            }
            WizardTransition::Ignored => {
                warn!("Submit ignored: confirmation already pending");
            }
        }
    }
}

/// Advance the deferred confirmation with frame time.
pub fn tick_pending_confirmation(
    time: Res<Time>,
    mut wizard: ResMut<WizardState>,
    mut feedback: EventWriter<WizardFeedback>,
) {
    if !wizard.is_pending() {
        return;
    }

    if let Some(confirmation) = wizard.tick(time.delta()) {
        info!(
            "Registration confirmed (afterparty: {})",
            confirmation.unlock_afterparty
        );
        feedback.write(WizardFeedback::Confirmed {
            unlock_afterparty: confirmation.unlock_afterparty,
        });
    }
}
