use super::easing::Easing;

/// A single tween: waits `delay` seconds, then plays over `duration`.
///
/// A mirrored tween plays forward and then back once (a "pulse"), so its
/// progress returns to zero when it finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    delay: f32,
    duration: f32,
    easing: Easing,
    mirrored: bool,
    elapsed: f32,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            delay: 0.0,
            duration: duration.max(f32::EPSILON),
            easing,
            mirrored: false,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Play forward then back once.
    pub fn mirrored(mut self) -> Self {
        self.mirrored = true;
        self
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.elapsed = (self.elapsed + delta_secs.max(0.0)).min(self.total());
    }

    /// Total lifetime including delay and the mirrored leg.
    pub fn total(&self) -> f32 {
        let legs = if self.mirrored { 2.0 } else { 1.0 };
        self.delay + self.duration * legs
    }

    pub fn has_started(&self) -> bool {
        self.elapsed > self.delay
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total()
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        let local = ((self.elapsed - self.delay) / self.duration).max(0.0);
        if self.mirrored {
            if local <= 1.0 {
                self.easing.evaluate(local)
            } else {
                self.easing.evaluate(2.0 - local)
            }
        } else {
            self.easing.evaluate(local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_holds_progress_at_zero() {
        let mut tween = Tween::new(1.0, Easing::Linear).with_delay(0.5);
        tween.advance(0.4);
        assert_eq!(tween.progress(), 0.0);
        assert!(!tween.has_started());

        tween.advance(0.35);
        assert!(tween.has_started());
        assert!((tween.progress() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_forward_tween_finishes_at_one() {
        let mut tween = Tween::new(0.65, Easing::ExpoOut);
        for _ in 0..60 {
            tween.advance(1.0 / 60.0);
        }
        assert!(tween.is_finished());
        assert!((tween.progress() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored_tween_peaks_then_returns() {
        let mut tween = Tween::new(0.35, Easing::Linear).mirrored();
        assert!((tween.total() - 0.7).abs() < 1e-6);

        tween.advance(0.35);
        assert!((tween.progress() - 1.0).abs() < 1e-5);

        tween.advance(0.35);
        assert!(tween.is_finished());
        assert!(tween.progress().abs() < 1e-5);
    }

    #[test]
    fn test_elapsed_is_capped() {
        let mut tween = Tween::new(0.2, Easing::Linear);
        tween.advance(10.0);
        assert!(tween.is_finished());
        assert!((tween.progress() - 1.0).abs() < 1e-6);

        tween.advance(-1.0);
        assert!(tween.is_finished());
    }
}
