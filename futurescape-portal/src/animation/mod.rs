//! Time-based presentation animation.
//!
//! Small tweening layer used for the page's visual feedback: step entrance,
//! field attention pulses, card reveals and the intro sequence. Tweens are
//! advanced by the frame loop and produce inline style values; the DOM
//! bridge applies them.

/// Easing curves matching the page's motion language.
pub mod easing;

/// Inline style effects driven by tween progress.
pub mod style_effect;

/// Delayed, optionally mirrored tween with eased progress.
pub mod tween;
