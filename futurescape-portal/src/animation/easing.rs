/// Easing function variants for presentation tweens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out, the default for short pulses.
    QuadOut,
    /// Cubic ease-out, used for staggered list items.
    CubicOut,
    /// Exponential ease-out: very fast start, long settle.
    ExpoOut,
}

impl Easing {
    /// Evaluate the curve at `t`. Input is clamped to [0, 1] and both
    /// endpoints map exactly onto 0 and 1.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::QuadOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::QuadOut
    }
}
