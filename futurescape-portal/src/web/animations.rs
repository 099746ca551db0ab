use bevy::prelude::*;
use web_sys::HtmlElement;

use super::dom::{apply_styles, clear_styles};
use crate::animation::style_effect::StyleEffect;
use crate::animation::tween::Tween;

struct DomAnimation {
    element: HtmlElement,
    effect: StyleEffect,
    tween: Tween,
}

/// Running inline-style tweens. Non-send: holds DOM handles.
#[derive(Default)]
pub struct DomAnimations {
    active: Vec<DomAnimation>,
}

impl DomAnimations {
    /// Start (or restart) `effect` on `element`. The starting frame is
    /// written immediately so delayed elements do not flash in.
    pub fn start(&mut self, element: HtmlElement, effect: StyleEffect, tween: Tween) {
        self.active
            .retain(|running| !(running.element == element && running.effect == effect));

        if let Err(error) = apply_styles(&element, &effect.declarations(tween.progress())) {
            warn!("Animation start failed: {}", error);
            return;
        }

        self.active.push(DomAnimation {
            element,
            effect,
            tween,
        });
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.active.retain_mut(|animation| {
            animation.tween.advance(delta_secs);

            let result = if animation.tween.is_finished() {
                apply_styles(
                    &animation.element,
                    &animation.effect.declarations(animation.tween.progress()),
                )
                .and_then(|_| {
                    clear_styles(&animation.element, animation.effect.cleared_on_finish())
                })
            } else if animation.tween.has_started() {
                apply_styles(
                    &animation.element,
                    &animation.effect.declarations(animation.tween.progress()),
                )
            } else {
                Ok(())
            };

            if let Err(error) = result {
                warn!("Animation step failed: {}", error);
                return false;
            }
            !animation.tween.is_finished()
        });
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

pub fn advance_dom_animations(time: Res<Time>, animations: Option<NonSendMut<DomAnimations>>) {
    let Some(mut animations) = animations else {
        return;
    };
    if animations.is_idle() {
        return;
    }
    animations.advance(time.delta_secs());
}
