use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Programme section view modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgrammeMode {
    #[default]
    Day,
    Week,
    Map,
}

impl ProgrammeMode {
    pub const ALL: [ProgrammeMode; 3] = [Self::Day, Self::Week, Self::Map];

    /// Parse a `data-mode` attribute value.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "map" => Some(Self::Map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Map => "map",
        }
    }
}

/// Selected programme mode. Every selection re-renders the session list,
/// including re-selecting the active mode.
#[derive(Resource, Debug, Default)]
pub struct ProgrammeView {
    mode: ProgrammeMode,
    renders: u32,
}

impl ProgrammeView {
    pub fn mode(&self) -> ProgrammeMode {
        self.mode
    }

    /// Number of selections so far; the initial render is 0.
    pub fn renders(&self) -> u32 {
        self.renders
    }

    pub fn select(&mut self, mode: ProgrammeMode) {
        self.mode = mode;
        self.renders = self.renders.wrapping_add(1);
        info!("Programme mode: {}", mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings_round_trip() {
        for mode in ProgrammeMode::ALL {
            assert_eq!(ProgrammeMode::from_string(mode.as_str()), Some(mode));
        }
        assert_eq!(ProgrammeMode::from_string(" WEEK "), Some(ProgrammeMode::Week));
        assert_eq!(ProgrammeMode::from_string("month"), None);
    }

    #[test]
    fn test_default_is_day() {
        let view = ProgrammeView::default();
        assert_eq!(view.mode(), ProgrammeMode::Day);
        assert_eq!(view.renders(), 0);
    }

    #[test]
    fn test_reselecting_still_rerenders() {
        let mut view = ProgrammeView::default();
        view.select(ProgrammeMode::Map);
        view.select(ProgrammeMode::Map);
        assert_eq!(view.mode(), ProgrammeMode::Map);
        assert_eq!(view.renders(), 2);
    }
}
