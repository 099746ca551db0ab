use bevy::prelude::*;
use std::collections::BTreeSet;

/// Elements whose visibility the page tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observed {
    HeroSection,
    TimelineItem(usize),
    SpeakerVideo(usize),
}

/// Observers report ratios a hair under the threshold they just crossed.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Whether an intersection report counts as visible at `threshold`.
pub fn meets_threshold(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + RATIO_TOLERANCE >= threshold
}

/// Scroll-driven state: hero split and one-shot timeline reveals.
#[derive(Resource, Debug, Default)]
pub struct RevealState {
    hero_split: bool,
    revealed: BTreeSet<usize>,
}

impl RevealState {
    /// Split while the hero has scrolled (mostly) out of view.
    pub fn is_hero_split(&self) -> bool {
        self.hero_split
    }

    pub fn is_revealed(&self, item: usize) -> bool {
        self.revealed.contains(&item)
    }

    pub fn revealed(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().copied()
    }

    pub fn set_hero_visible(&mut self, visible: bool) {
        self.hero_split = !visible;
    }

    /// Returns true the first time an item becomes visible. Reveals are
    /// never undone.
    pub fn reveal(&mut self, item: usize) -> bool {
        self.revealed.insert(item)
    }
}

/// Which speaker clips should be playing.
#[derive(Resource, Debug, Default)]
pub struct SpeakerPlayback {
    playing: BTreeSet<usize>,
}

impl SpeakerPlayback {
    pub fn is_playing(&self, index: usize) -> bool {
        self.playing.contains(&index)
    }

    pub fn set_active(&mut self, index: usize, active: bool) {
        if active {
            self.playing.insert(index);
        } else {
            self.playing.remove(&index);
        }
    }
}
