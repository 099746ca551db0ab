use bevy::prelude::*;
use constants::page::GLITCH_SECS;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Elements carrying the glitch hover effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlitchTarget {
    /// A call-to-action or programme-mode button, by document order.
    Button(usize),
    AfterpartyLink,
}

/// Elements currently glitching: hovered ones plus timed bursts.
#[derive(Resource, Debug, Default)]
pub struct GlitchState {
    hovered: HashSet<GlitchTarget>,
    bursts: HashMap<GlitchTarget, Timer>,
}

impl GlitchState {
    pub fn set_hovered(&mut self, target: GlitchTarget, hovered: bool) {
        if hovered {
            self.hovered.insert(target);
        } else {
            self.hovered.remove(&target);
        }
    }

    /// Glitch for a fixed time regardless of hover. Retriggering restarts
    /// the burst.
    pub fn trigger(&mut self, target: GlitchTarget) {
        self.bursts
            .insert(target, Timer::from_seconds(GLITCH_SECS, TimerMode::Once));
    }

    /// Returns true when any burst ended this tick.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let before = self.bursts.len();
        self.bursts
            .retain(|_, timer| !timer.tick(delta).finished());
        self.bursts.len() != before
    }

    pub fn is_glitching(&self, target: GlitchTarget) -> bool {
        self.hovered.contains(&target) || self.bursts.contains_key(&target)
    }

    pub fn has_bursts(&self) -> bool {
        !self.bursts.is_empty()
    }
}

pub fn tick_glitch_bursts(time: Res<Time>, mut glitch: ResMut<GlitchState>) {
    // Avoid flagging the resource as changed on idle frames.
    if !glitch.has_bursts() {
        return;
    }
    glitch.tick(time.delta());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_glitches_until_leave() {
        let mut glitch = GlitchState::default();
        let cta = GlitchTarget::Button(0);

        glitch.set_hovered(cta, true);
        assert!(glitch.is_glitching(cta));
        assert!(!glitch.is_glitching(GlitchTarget::Button(1)));

        glitch.set_hovered(cta, false);
        assert!(!glitch.is_glitching(cta));
    }

    #[test]
    fn test_burst_lasts_its_duration() {
        let mut glitch = GlitchState::default();
        let link = GlitchTarget::AfterpartyLink;
        glitch.trigger(link);

        assert!(!glitch.tick(Duration::from_millis(1000)));
        assert!(glitch.is_glitching(link));

        assert!(glitch.tick(Duration::from_millis(250)));
        assert!(!glitch.is_glitching(link));
        assert!(!glitch.has_bursts());
    }

    #[test]
    fn test_hover_outlives_burst() {
        let mut glitch = GlitchState::default();
        let link = GlitchTarget::AfterpartyLink;
        glitch.set_hovered(link, true);
        glitch.trigger(link);

        glitch.tick(Duration::from_secs(2));
        assert!(glitch.is_glitching(link));
    }
}
