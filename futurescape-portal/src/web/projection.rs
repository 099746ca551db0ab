//! One-way projection of page state onto the DOM.
//!
//! Systems here only read state and write the page. Nothing flows back
//! except through the listeners in `listeners.rs`.

use bevy::prelude::*;
use constants::page::{
    AFTERPARTY_ENTER_OFFSET_PX, AFTERPARTY_ENTER_SECS, AFTERPARTY_GLITCH_LABEL,
    AFTERPARTY_LINK_LABEL, PROGRAMME_CARD_OFFSET_PX, PROGRAMME_CARD_SECS,
    PROGRAMME_CARD_STAGGER_SECS, SPEAKER_CARD_DELAY_STEP_SECS,
};
use constants::wizard::{FIELD_PULSE_SECS, FIELD_PULSE_STAGGER_SECS, FORM_PULSE_SECS, STEP_ENTER_SECS};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::animations::DomAnimations;
use super::dom::{create, document, html_elements, query, query_all, set_class};
use super::error::DomError;
use super::events::{DomAction, PageEventQueue};
use super::listeners::{PageDom, SPEAKER_INDEX_ATTRIBUTE, install_speaker_video_listeners};
use crate::animation::easing::Easing;
use crate::animation::style_effect::StyleEffect;
use crate::animation::tween::Tween;
use crate::page::afterparty::AfterpartyState;
use crate::page::content::{LandingContent, Session, Speaker};
use crate::page::glitch::GlitchState;
use crate::page::hero::HeroOrbitList;
use crate::page::intro::INTRO_SEQUENCE;
use crate::page::programme::ProgrammeView;
use crate::page::reveal::{RevealState, SpeakerPlayback};
use crate::wizard::WizardFeedback;
use crate::wizard::state::WizardState;

fn report(context: &str, result: Result<(), DomError>) {
    if let Err(error) = result {
        warn!("{}: {}", context, error);
    }
}

/// Active step class and status line.
pub fn project_wizard(wizard: Res<WizardState>, dom: Option<NonSend<PageDom>>) {
    let Some(dom) = dom else {
        return;
    };
    if !wizard.is_changed() {
        return;
    }

    for (index, step) in dom.steps.iter().enumerate() {
        report(
            "Wizard step class",
            set_class(step, "is-active", index == wizard.current()),
        );
    }

    if let (Some(status), Some(message)) = (&dom.status, wizard.status()) {
        status.set_text_content(Some(&message.to_string()));
    }
}

/// Entrance, attention and processing animations.
pub fn play_wizard_feedback(
    mut feedback: EventReader<WizardFeedback>,
    dom: Option<NonSend<PageDom>>,
    animations: Option<NonSendMut<DomAnimations>>,
) {
    let (Some(dom), Some(mut animations)) = (dom, animations) else {
        feedback.clear();
        return;
    };

    for event in feedback.read() {
        match event {
            WizardFeedback::StepEntered { step } => {
                if let Some(element) = dom.steps.get(*step) {
                    animations.start(
                        element.clone(),
                        StyleEffect::StepEnter,
                        Tween::new(STEP_ENTER_SECS, Easing::ExpoOut),
                    );
                }
            }
            WizardFeedback::FieldsFlagged { fields, .. } => {
                for (index, name) in fields.iter().enumerate() {
                    let Some(element) = dom.fields.get(name) else {
                        continue;
                    };
                    animations.start(
                        element.clone(),
                        StyleEffect::FieldPulse,
                        Tween::new(FIELD_PULSE_SECS, Easing::QuadOut)
                            .mirrored()
                            .with_delay(FIELD_PULSE_STAGGER_SECS * index as f32),
                    );
                }
            }
            WizardFeedback::ProcessingStarted => {
                if let Some(form) = &dom.form {
                    animations.start(
                        form.clone(),
                        StyleEffect::FormPulse,
                        Tween::new(FORM_PULSE_SECS, Easing::QuadOut).mirrored(),
                    );
                }
            }
            WizardFeedback::Confirmed { .. } => {}
        }
    }
}

/// Create the speaker cards once content is available.
pub fn build_speaker_cards(
    content: Option<Res<LandingContent>>,
    dom: Option<NonSendMut<PageDom>>,
    queue: Res<PageEventQueue>,
) {
    let (Some(content), Some(mut dom)) = (content, dom) else {
        return;
    };
    if !dom.speaker_videos.is_empty() || content.speakers.is_empty() {
        return;
    }
    let Some(grid) = dom.speakers_grid.clone() else {
        return;
    };
    let Ok(document) = document() else {
        return;
    };

    for (index, speaker) in content.speakers.iter().enumerate() {
        match create_speaker_card(&document, speaker, index) {
            Ok((card, video)) => {
                report("Speaker card", grid.append_child(&card).map(|_| ()).map_err(Into::into));
                report(
                    "Speaker listeners",
                    install_speaker_video_listeners(&video, index, &queue),
                );
                if let Some(observer) = &dom.video_observer {
                    observer.observe(&video);
                }
                dom.speaker_videos.push(video);
            }
            Err(error) => warn!("Speaker card {} skipped: {}", index, error),
        }
    }
    info!("Speaker grid: {} cards", dom.speaker_videos.len());
}

fn create_speaker_card(
    document: &Document,
    speaker: &Speaker,
    index: usize,
) -> Result<(Element, HtmlVideoElement), DomError> {
    let card = create(document, "article", "speaker-card")?;
    card.set_attribute("role", "listitem")?;
    if let Some(card) = card.dyn_ref::<HtmlElement>() {
        let delay = index as f32 * SPEAKER_CARD_DELAY_STEP_SECS;
        card.style().set_property("--delay", &format!("{delay}s"))?;
    }

    let avatar = create(document, "div", "speaker-card__avatar")?;
    let video = document
        .create_element("video")?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| DomError::WrongElementType {
            selector: "video".to_string(),
            expected: "HtmlVideoElement",
        })?;
    video.set_src(&speaker.video);
    video.set_loop(true);
    video.set_muted(true);
    video.set_attribute("playsinline", "")?;
    video.set_preload("metadata");
    video.set_poster(&speaker.fallback);
    video.set_attribute(SPEAKER_INDEX_ATTRIBUTE, &index.to_string())?;
    avatar.append_child(&video)?;

    let info = create(document, "div", "speaker-card__info")?;
    let name = create(document, "h3", "")?;
    name.set_text_content(Some(&speaker.name));
    let role = create(document, "p", "")?;
    role.set_text_content(Some(&speaker.role));
    info.append_child(&name)?;
    info.append_child(&role)?;

    card.append_child(&avatar)?;
    card.append_child(&info)?;
    Ok((card, video))
}

/// Play or pause clips to match [`SpeakerPlayback`].
pub fn project_speaker_playback(playback: Res<SpeakerPlayback>, dom: Option<NonSend<PageDom>>) {
    let Some(dom) = dom else {
        return;
    };
    if !playback.is_changed() {
        return;
    }

    for (index, video) in dom.speaker_videos.iter().enumerate() {
        let wanted = playback.is_playing(index);
        if wanted && video.paused() {
            // Muted clips are allowed to autoplay; a rejected promise just
            // leaves the poster showing.
            if let Err(error) = video.play() {
                warn!("Speaker clip {} failed to play: {:?}", index, error);
            }
        } else if !wanted && !video.paused() {
            report("Speaker clip pause", video.pause().map_err(Into::into));
        }
    }
}

/// Render sessions for the selected mode and mark the active mode button.
pub fn project_programme(
    view: Res<ProgrammeView>,
    content: Option<Res<LandingContent>>,
    dom: Option<NonSend<PageDom>>,
    animations: Option<NonSendMut<DomAnimations>>,
    mut rendered: Local<Option<u32>>,
) {
    let (Some(content), Some(dom), Some(mut animations)) = (content, dom, animations) else {
        return;
    };
    if *rendered == Some(view.renders()) {
        return;
    }
    *rendered = Some(view.renders());

    for (mode, button) in &dom.programme_modes {
        let active = *mode == view.mode();
        report("Programme mode class", set_class(button, "is-active", active));
        report(
            "Programme mode aria",
            button
                .set_attribute("aria-checked", if active { "true" } else { "false" })
                .map_err(Into::into),
        );
    }

    let Some(container) = &dom.programme_view else {
        return;
    };
    let sessions = content.schedule.sessions(view.mode());
    match render_sessions(container, sessions) {
        Ok(cards) => {
            for (index, card) in cards.into_iter().enumerate() {
                animations.start(
                    card,
                    StyleEffect::RiseIn {
                        offset_px: PROGRAMME_CARD_OFFSET_PX,
                    },
                    Tween::new(PROGRAMME_CARD_SECS, Easing::ExpoOut)
                        .with_delay(PROGRAMME_CARD_STAGGER_SECS * index as f32),
                );
            }
        }
        Err(error) => warn!("Programme render failed: {}", error),
    }
}

fn render_sessions(container: &Element, sessions: &[Session]) -> Result<Vec<HtmlElement>, DomError> {
    let document = document()?;
    container.set_inner_html("");

    let mut cards = Vec::with_capacity(sessions.len());
    for session in sessions {
        let card = create(&document, "article", "program-card")?;

        let title = create(&document, "h3", "")?;
        title.set_text_content(Some(&session.title));
        let time = create(&document, "span", "program-card__time")?;
        time.set_text_content(Some(&session.time));

        let meta = create(&document, "div", "program-card__meta")?;
        for detail in &session.details {
            let badge = create(&document, "span", "")?;
            badge.set_text_content(Some(detail));
            meta.append_child(&badge)?;
        }

        card.append_child(&title)?;
        card.append_child(&time)?;
        card.append_child(&meta)?;
        container.append_child(&card)?;
        cards.push(card);
    }
    Ok(html_elements(cards, ".program-card"))
}

pub fn project_glitch(glitch: Res<GlitchState>, dom: Option<NonSend<PageDom>>) {
    let Some(dom) = dom else {
        return;
    };
    if !glitch.is_changed() {
        return;
    }
    for (target, element) in &dom.glitch_targets {
        report(
            "Glitch class",
            set_class(element, "is-glitching", glitch.is_glitching(*target)),
        );
    }
}

/// Orbit-list parallax, hero split and timeline reveals.
pub fn project_hero(
    orbit_list: Res<HeroOrbitList>,
    reveal: Res<RevealState>,
    dom: Option<NonSend<PageDom>>,
) {
    let Some(dom) = dom else {
        return;
    };

    if orbit_list.is_changed() {
        if let Some(list) = &dom.orbit_list {
            report(
                "Orbit list transform",
                list.style()
                    .set_property("transform", &orbit_list.css_transform())
                    .map_err(Into::into),
            );
        }
    }

    if reveal.is_changed() {
        if let Some(split) = &dom.split_target {
            report("Hero split", set_class(split, "is-split", reveal.is_hero_split()));
        }
        for index in reveal.revealed() {
            if let Some(item) = dom.timeline_items.get(index) {
                report("Timeline reveal", set_class(item, "is-visible", true));
            }
        }
    }
}

/// Link visibility, overlay visibility and scroll lock.
pub fn project_afterparty(
    afterparty: Res<AfterpartyState>,
    dom: Option<NonSend<PageDom>>,
    animations: Option<NonSendMut<DomAnimations>>,
    mut previous: Local<AfterpartyState>,
) {
    let (Some(dom), Some(mut animations)) = (dom, animations) else {
        return;
    };
    if *afterparty == *previous {
        return;
    }

    if afterparty.is_unlocked() && !previous.is_unlocked() {
        if let Some(link) = &dom.afterparty_link {
            link.set_hidden(false);
            link.set_text_content(Some(AFTERPARTY_LINK_LABEL));
            report(
                "Afterparty link",
                link.set_attribute("data-glitch", AFTERPARTY_GLITCH_LABEL)
                    .map_err(Into::into),
            );
        }
    }

    if afterparty.is_open() != previous.is_open() {
        if let Some(section) = &dom.afterparty_section {
            section.set_hidden(!afterparty.is_open());
        }
        if let Some(body) = &dom.body {
            let overflow = if afterparty.is_open() { "hidden" } else { "" };
            report(
                "Body scroll lock",
                body.style()
                    .set_property("overflow", overflow)
                    .map_err(Into::into),
            );
        }
        if afterparty.is_open() {
            if let Some(content) = &dom.afterparty_content {
                animations.start(
                    content.clone(),
                    StyleEffect::RiseIn {
                        offset_px: AFTERPARTY_ENTER_OFFSET_PX,
                    },
                    Tween::new(AFTERPARTY_ENTER_SECS, Easing::ExpoOut),
                );
            }
        }
    }

    *previous = *afterparty;
}

/// Smooth scrolling and the intro sequence.
pub fn run_dom_actions(
    mut actions: EventReader<DomAction>,
    animations: Option<NonSendMut<DomAnimations>>,
) {
    let Some(mut animations) = animations else {
        actions.clear();
        return;
    };

    for action in actions.read() {
        match action {
            DomAction::ScrollTo { selector } => report("Smooth scroll", scroll_to(selector)),
            DomAction::PlayIntro => {
                for step in INTRO_SEQUENCE {
                    let elements = match query_all(step.selector) {
                        Ok(elements) => html_elements(elements, step.selector),
                        Err(error) => {
                            warn!("Intro step skipped: {}", error);
                            continue;
                        }
                    };
                    for (index, element) in elements.into_iter().enumerate() {
                        animations.start(
                            element,
                            StyleEffect::RiseIn {
                                offset_px: step.offset_px,
                            },
                            Tween::new(step.duration, step.easing).with_delay(step.delay_for(index)),
                        );
                    }
                }
            }
        }
    }
}

fn scroll_to(selector: &str) -> Result<(), DomError> {
    let target = query(selector)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
