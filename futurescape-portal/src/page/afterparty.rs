use bevy::prelude::*;

use crate::wizard::WizardFeedback;

/// Hidden afterparty portal: unlocked by a confirmed registration that
/// opted in, then opened and closed as an overlay.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AfterpartyState {
    unlocked: bool,
    open: bool,
}

impl AfterpartyState {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true on the first unlock.
    pub fn unlock(&mut self) -> bool {
        !std::mem::replace(&mut self.unlocked, true)
    }

    /// Opening requires an unlock. Returns true if the overlay opened.
    pub fn open(&mut self) -> bool {
        if !self.unlocked {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Unlock when a confirmation carries the afterparty opt-in.
pub fn unlock_on_confirmation(
    mut feedback: EventReader<WizardFeedback>,
    mut afterparty: ResMut<AfterpartyState>,
) {
    for event in feedback.read() {
        if let WizardFeedback::Confirmed {
            unlock_afterparty: true,
        } = event
        {
            if afterparty.unlock() {
                info!("Afterparty portal unlocked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_overlay_cannot_open() {
        let mut state = AfterpartyState::default();
        assert!(!state.open());
        assert!(!state.is_open());
    }

    #[test]
    fn test_unlock_open_close() {
        let mut state = AfterpartyState::default();
        assert!(state.unlock());
        assert!(!state.unlock());

        assert!(state.open());
        assert!(state.is_open());

        state.close();
        assert!(!state.is_open());
        assert!(state.is_unlocked());
    }

    #[test]
    fn test_only_opted_in_confirmation_unlocks() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WizardFeedback>()
            .init_resource::<AfterpartyState>()
            .add_systems(Update, unlock_on_confirmation);

        app.world_mut().send_event(WizardFeedback::Confirmed {
            unlock_afterparty: false,
        });
        app.update();
        assert!(!app.world().resource::<AfterpartyState>().is_unlocked());

        app.world_mut().send_event(WizardFeedback::Confirmed {
            unlock_afterparty: true,
        });
        app.update();
        assert!(app.world().resource::<AfterpartyState>().is_unlocked());
    }
}
