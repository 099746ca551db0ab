use constants::wizard::{
    FIELD_PULSE_GLOW_PX, FIELD_PULSE_SCALE, STEP_ENTER_BLUR_PX, STEP_ENTER_SCALE,
};

/// Inline style property/value pair ready to be written onto an element.
pub type StyleDeclaration = (&'static str, String);

/// Visual effect applied to an element as a tween progresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleEffect {
    /// Wizard step entrance: fade in, unblur, scale up to 1.
    StepEnter,
    /// Attention glow on a required field that failed validation.
    FieldPulse,
    /// Form background flash while a submit is processing.
    FormPulse,
    /// Fade in while sliding up from `offset_px` below the resting position.
    RiseIn { offset_px: f32 },
}

impl StyleEffect {
    /// Property values at eased `progress` in [0, 1].
    pub fn declarations(&self, progress: f32) -> Vec<StyleDeclaration> {
        let p = progress.clamp(0.0, 1.0);

        match self {
            StyleEffect::StepEnter => {
                let blur = STEP_ENTER_BLUR_PX * (1.0 - p);
                let scale = STEP_ENTER_SCALE + (1.0 - STEP_ENTER_SCALE) * p;
                vec![
                    ("opacity", format!("{p:.3}")),
                    ("filter", format!("blur({blur:.2}px)")),
                    ("transform", format!("scale({scale:.4})")),
                ]
            }
            StyleEffect::FieldPulse => {
                let glow = FIELD_PULSE_GLOW_PX * p;
                let scale = 1.0 + (FIELD_PULSE_SCALE - 1.0) * p;
                vec![
                    (
                        "box-shadow",
                        format!("0 0 {glow:.2}px rgba(166, 93, 255, {:.3})", 0.75 * p),
                    ),
                    ("transform", format!("scale({scale:.4})")),
                ]
            }
            StyleEffect::FormPulse => {
                vec![("background", format!("rgba(35, 12, 65, {:.3})", 0.85 * p))]
            }
            StyleEffect::RiseIn { offset_px } => {
                let offset = offset_px * (1.0 - p);
                vec![
                    ("opacity", format!("{p:.3}")),
                    ("transform", format!("translate3d(0, {offset:.2}px, 0)")),
                ]
            }
        }
    }

    /// Inline properties to drop once the effect ends, handing control back
    /// to the stylesheet.
    pub fn cleared_on_finish(&self) -> &'static [&'static str] {
        match self {
            StyleEffect::StepEnter => &["filter", "transform"],
            StyleEffect::FieldPulse => &["box-shadow", "transform"],
            StyleEffect::FormPulse => &["background"],
            StyleEffect::RiseIn { .. } => &["transform"],
        }
    }
}
