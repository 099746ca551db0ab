use crate::animation::easing::Easing;

/// One entry of the page-load intro: every element matching `selector`
/// rises in from `offset_px` below, the n-th match starting `stagger`
/// seconds after the previous.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroStep {
    pub selector: &'static str,
    pub offset_px: f32,
    pub delay: f32,
    pub duration: f32,
    pub stagger: f32,
    pub easing: Easing,
}

pub const INTRO_SEQUENCE: [IntroStep; 4] = [
    IntroStep {
        selector: ".hero__content h1",
        offset_px: 40.0,
        delay: 0.0,
        duration: 1.0,
        stagger: 0.0,
        easing: Easing::ExpoOut,
    },
    IntroStep {
        selector: ".hero__lead",
        offset_px: 30.0,
        delay: 0.2,
        duration: 1.0,
        stagger: 0.0,
        easing: Easing::ExpoOut,
    },
    IntroStep {
        selector: ".hero__cta-group",
        offset_px: 30.0,
        delay: 0.4,
        duration: 1.0,
        stagger: 0.0,
        easing: Easing::ExpoOut,
    },
    IntroStep {
        selector: ".hero__orbit-list li",
        offset_px: 20.0,
        delay: 0.5,
        duration: 0.8,
        stagger: 0.1,
        easing: Easing::CubicOut,
    },
];

impl IntroStep {
    /// Start delay of the `index`-th matching element.
    pub fn delay_for(&self, index: usize) -> f32 {
        self.delay + self.stagger * index as f32
    }
}
