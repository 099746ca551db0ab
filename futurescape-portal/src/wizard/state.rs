use bevy::prelude::*;
use constants::wizard::{
    AFTERPARTY_FIELD, CONFIRMATION_DELAY_SECS, STATUS_CONFIRMED, STATUS_FILL_REQUIRED,
    STATUS_POSITION_PREFIX, STATUS_PROCESSING, STATUS_SUBMIT_FILL_REQUIRED,
};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Value stored for a checked toggle. Unchecked toggles store "".
pub const TOGGLE_ON: &str = "on";

/// Kind of form control behind a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            required,
        }
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepDefinition {
    pub fields: Vec<FieldDefinition>,
}

/// Message shown in the wizard's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStatus {
    Position { current: usize, total: usize },
    FillRequired,
    SubmitFillRequired,
    Processing,
    Confirmed,
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStatus::Position { current, total } => {
                write!(f, "{} {} / {}", STATUS_POSITION_PREFIX, current + 1, total)
            }
            WizardStatus::FillRequired => f.write_str(STATUS_FILL_REQUIRED),
            WizardStatus::SubmitFillRequired => f.write_str(STATUS_SUBMIT_FILL_REQUIRED),
            WizardStatus::Processing => f.write_str(STATUS_PROCESSING),
            WizardStatus::Confirmed => f.write_str(STATUS_CONFIRMED),
        }
    }
}

/// Outcome of a wizard command, consumed by the feedback layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardTransition {
    /// A step was (re)entered and should play its entrance.
    Entered { step: usize },
    /// Validation failed; `missing` lists the required fields left empty.
    Blocked { step: usize, missing: Vec<String> },
    /// Submit accepted; confirmation pending.
    Processing,
    /// Submit arrived while a confirmation was already pending.
    Ignored,
}

/// Fired once the deferred confirmation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub unlock_afterparty: bool,
}

#[derive(Debug)]
struct PendingConfirmation {
    timer: Timer,
    unlock_afterparty: bool,
}

/// Registration wizard: ordered steps, field values and the current index.
///
/// `current` only moves forward through a validated step. Moving back is
/// always allowed. Both directions clamp to the step range.
#[derive(Resource, Debug, Default)]
pub struct WizardState {
    steps: Vec<StepDefinition>,
    values: HashMap<String, String>,
    current: usize,
    status: Option<WizardStatus>,
    submitted: bool,
    pending: Option<PendingConfirmation>,
}

impl WizardState {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        Self {
            steps,
            ..default()
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn status(&self) -> Option<&WizardStatus> {
        self.status.as_ref()
    }

    /// True only after a confirmation has fired.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn set_toggle(&mut self, name: impl Into<String>, checked: bool) {
        let value = if checked { TOGGLE_ON } else { "" };
        self.set_value(name, value);
    }

    pub fn is_toggle_on(&self, name: &str) -> bool {
        !self.value(name).is_empty()
    }

    fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    fn is_filled(&self, field: &FieldDefinition) -> bool {
        match field.kind {
            FieldKind::Text | FieldKind::Select => !self.value(&field.name).trim().is_empty(),
            FieldKind::Toggle => self.is_toggle_on(&field.name),
        }
    }

    /// Required fields of `step` left empty. Text and select values are
    /// trimmed; a toggle counts only when checked.
    pub fn missing_required(&self, step: usize) -> Vec<String> {
        let Some(definition) = self.steps.get(step) else {
            return Vec::new();
        };

        definition
            .fields
            .iter()
            .filter(|field| field.required && !self.is_filled(field))
            .map(|field| field.name.clone())
            .collect()
    }

    fn enter(&mut self, step: usize) -> WizardTransition {
        self.current = step.min(self.last_index());
        self.status = Some(WizardStatus::Position {
            current: self.current,
            total: self.steps.len(),
        });
        WizardTransition::Entered { step: self.current }
    }

    /// Advance one step if the current step validates.
    pub fn next(&mut self) -> WizardTransition {
        let missing = self.missing_required(self.current);
        if !missing.is_empty() {
            self.status = Some(WizardStatus::FillRequired);
            return WizardTransition::Blocked {
                step: self.current,
                missing,
            };
        }
        self.enter(self.current + 1)
    }

    /// Go back one step. Never validated.
    pub fn prev(&mut self) -> WizardTransition {
        self.enter(self.current.saturating_sub(1))
    }

    /// Submit from the last step. Before the last step this acts as `next`
    /// so an implicit form submission cannot skip steps.
    pub fn submit(&mut self) -> WizardTransition {
        if self.pending.is_some() {
            return WizardTransition::Ignored;
        }

        if self.current < self.last_index() {
            return self.next();
        }

        let missing = self.missing_required(self.current);
        if !missing.is_empty() {
            self.status = Some(WizardStatus::SubmitFillRequired);
            return WizardTransition::Blocked {
                step: self.current,
                missing,
            };
        }

        self.status = Some(WizardStatus::Processing);
        self.pending = Some(PendingConfirmation {
            timer: Timer::from_seconds(CONFIRMATION_DELAY_SECS, TimerMode::Once),
            unlock_afterparty: self.is_toggle_on(AFTERPARTY_FIELD),
        });
        WizardTransition::Processing
    }

    /// Advance the pending confirmation, returning it once it fires.
    pub fn tick(&mut self, delta: Duration) -> Option<Confirmation> {
        let pending = self.pending.as_mut()?;
        if !pending.timer.tick(delta).finished() {
            return None;
        }

        let unlock_afterparty = pending.unlock_afterparty;
        self.pending = None;
        self.submitted = true;
        self.status = Some(WizardStatus::Confirmed);
        Some(Confirmation { unlock_afterparty })
    }
}
