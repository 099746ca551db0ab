//! Page wiring: locate elements, scan the wizard and attach listeners.
//!
//! Every callback only pushes a [`PageEvent`] onto the shared queue.

use bevy::prelude::*;
use constants::page::{
    HERO_SPLIT_THRESHOLD, SPEAKER_VIDEO_THRESHOLD,
    TIMELINE_REVEAL_THRESHOLD,
};
use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlVideoElement,
    IntersectionObserver, MouseEvent,
};

use super::animations::DomAnimations;
use super::dom::{
    document, html_elements, index_attribute, listen, observe_visibility, query_all,
    query_all_in, query_optional, window,
};
use super::error::DomError;
use super::events::{PageEvent, PageEventQueue, page_already_loaded};
use crate::page::glitch::GlitchTarget;
use crate::page::hero::relative_in_rect;
use crate::page::programme::ProgrammeMode;
use crate::page::reveal::{Observed, meets_threshold};
use crate::wizard::state::{
    FieldDefinition, FieldKind, StepDefinition, TOGGLE_ON, WizardState,
};

pub const FIELD_KEY_ATTRIBUTE: &str = "data-field-key";
const TIMELINE_INDEX_ATTRIBUTE: &str = "data-reveal-index";
pub const SPEAKER_INDEX_ATTRIBUTE: &str = "data-speaker-index";

/// Handles to every element the page runtime reads or writes.
pub struct PageDom {
    pub body: Option<HtmlElement>,
    pub form: Option<HtmlElement>,
    pub steps: Vec<HtmlElement>,
    pub status: Option<Element>,
    pub fields: HashMap<String, HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub split_target: Option<Element>,
    pub orbit_list: Option<HtmlElement>,
    pub timeline_items: Vec<Element>,
    pub speakers_grid: Option<Element>,
    pub speaker_videos: Vec<HtmlVideoElement>,
    pub video_observer: Option<IntersectionObserver>,
    pub programme_view: Option<Element>,
    pub programme_modes: Vec<(ProgrammeMode, Element)>,
    pub glitch_targets: Vec<(GlitchTarget, Element)>,
    pub afterparty_section: Option<HtmlElement>,
    pub afterparty_content: Option<HtmlElement>,
    pub afterparty_link: Option<HtmlElement>,
}

impl PageDom {
    fn locate() -> Result<Self, DomError> {
        let document = document()?;
        let form: Option<HtmlElement> = query_optional(".portal-form");

        let steps = match &form {
            Some(form) => html_elements(query_all_in(form, ".portal-step")?, ".portal-step"),
            None => Vec::new(),
        };

        let programme_modes = query_all(".program-mode")?
            .into_iter()
            .filter_map(|button| {
                let mode = button
                    .get_attribute("data-mode")
                    .and_then(|value| ProgrammeMode::from_string(&value));
                if mode.is_none() {
                    warn!("Programme button without a valid data-mode");
                }
                mode.map(|mode| (mode, button))
            })
            .collect();

        let mut glitch_targets: Vec<(GlitchTarget, Element)> = query_all(".cta, .program-mode")?
            .into_iter()
            .enumerate()
            .map(|(index, element)| (GlitchTarget::Button(index), element))
            .collect();

        let afterparty_link: Option<HtmlElement> = query_optional(".afterparty-link");
        if let Some(link) = &afterparty_link {
            glitch_targets.push((GlitchTarget::AfterpartyLink, link.clone().into()));
        }

        Ok(Self {
            body: document.body(),
            status: form
                .as_ref()
                .and_then(|form| form.query_selector(".portal-status").ok().flatten()),
            form,
            steps,
            fields: HashMap::new(),
            hero: query_optional("#hero"),
            split_target: query_optional("[data-scroll-split]"),
            orbit_list: query_optional(".hero__orbit-list"),
            timeline_items: query_all(".timeline__item")?,
            speakers_grid: query_optional(".speakers-grid"),
            speaker_videos: Vec::new(),
            video_observer: None,
            programme_view: query_optional(".program-view"),
            programme_modes,
            glitch_targets,
            afterparty_section: query_optional("#afterparty"),
            afterparty_content: query_optional("#afterparty .afterparty__content"),
            afterparty_link,
        })
    }
}

/// Startup: build the DOM handles and wizard state, attach listeners.
pub fn install_page_bridge(world: &mut World) {
    let Some(queue) = world.get_resource::<PageEventQueue>().cloned() else {
        error!("Page event queue missing; DOM bridge not installed");
        return;
    };

    let mut dom = match PageDom::locate() {
        Ok(dom) => dom,
        Err(error) => {
            error!("DOM bridge disabled: {}", error);
            return;
        }
    };

    let wizard = scan_wizard(&mut dom);
    info!(
        "Wizard: {} steps, {} fields",
        wizard.step_count(),
        dom.fields.len()
    );
    world.insert_resource(wizard);

    let installers: [(&str, fn(&mut PageDom, &PageEventQueue) -> Result<(), DomError>); 8] = [
        ("pointer", install_pointer_listeners),
        ("wizard", install_wizard_listeners),
        ("scroll", install_scroll_listeners),
        ("programme", install_programme_listeners),
        ("glitch", install_glitch_listeners),
        ("afterparty", install_afterparty_listeners),
        ("visibility", install_visibility_observers),
        ("load", install_load_listener),
    ];
    for (name, install) in installers {
        if let Err(error) = install(&mut dom, &queue) {
            warn!("Failed to install {} listeners: {}", name, error);
        }
    }

    world.insert_non_send_resource(dom);
    world.insert_non_send_resource(DomAnimations::default());
    info!("DOM bridge installed");
}

/// Read the form's steps and fields into a wizard, tagging every field
/// with the key its edits are reported under.
fn scan_wizard(dom: &mut PageDom) -> WizardState {
    let mut steps = Vec::with_capacity(dom.steps.len());
    let mut initial_values = Vec::new();

    for (step_index, step) in dom.steps.iter().enumerate() {
        let controls = query_all_in(step, "input, select").unwrap_or_default();
        let mut definition = StepDefinition::default();

        for (field_index, control) in controls.into_iter().enumerate() {
            let key = control
                .get_attribute("name")
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("step{}-field{}", step_index + 1, field_index + 1));

            if let Err(error) = control.set_attribute(FIELD_KEY_ATTRIBUTE, &key) {
                warn!("Cannot tag field {}: {:?}", key, error);
            }

            let kind = field_kind(&control);
            definition.fields.push(FieldDefinition::new(
                key.clone(),
                kind,
                control.has_attribute("required"),
            ));

            if let Some(value) = field_value(&control) {
                initial_values.push((key.clone(), value));
            }
            if let Ok(control) = control.dyn_into::<HtmlElement>() {
                dom.fields.insert(key, control);
            }
        }
        steps.push(definition);
    }

    let mut wizard = WizardState::new(steps);
    for (key, value) in initial_values {
        wizard.set_value(key, value);
    }
    wizard
}

fn field_kind(control: &Element) -> FieldKind {
    if control.is_instance_of::<HtmlSelectElement>() {
        FieldKind::Select
    } else if control
        .dyn_ref::<HtmlInputElement>()
        .is_some_and(|input| input.type_() == "checkbox")
    {
        FieldKind::Toggle
    } else {
        FieldKind::Text
    }
}

fn field_value(control: &Element) -> Option<String> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            let value = if input.checked() { TOGGLE_ON } else { "" };
            return Some(value.to_string());
        }
        return Some(input.value());
    }
    control
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn install_pointer_listeners(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    let window = window()?;
    let viewport_source = window.clone();
    let events = queue.clone();
    listen(&window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let width = viewport_source.inner_width().ok().and_then(|v| v.as_f64());
        let height = viewport_source.inner_height().ok().and_then(|v| v.as_f64());
        if let (Some(width), Some(height)) = (width, height) {
            events.push(PageEvent::PointerMoved {
                client: Vec2::new(event.client_x() as f32, event.client_y() as f32),
                viewport: Vec2::new(width as f32, height as f32),
            });
        }
    })?;

    let Some(hero) = dom.hero.clone() else {
        return Ok(());
    };

    let rect_source = hero.clone();
    let events = queue.clone();
    listen(&hero, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = rect_source.get_bounding_client_rect();
        let relative = relative_in_rect(
            Vec2::new(event.client_x() as f32, event.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        if let Some(relative) = relative {
            events.push(PageEvent::HeroPointerMoved { relative });
        }
    })?;

    let events = queue.clone();
    listen(&hero, "mouseleave", move |_| {
        events.push(PageEvent::HeroPointerLeft);
    })
}

fn install_wizard_listeners(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    let Some(form) = dom.form.clone() else {
        return Ok(());
    };

    let events = queue.clone();
    listen(&form, "click", move |event| {
        let Some(target) = event_element(&event) else {
            return;
        };
        if target.closest("[data-next]").ok().flatten().is_some() {
            events.push(PageEvent::WizardNext);
        } else if target.closest("[data-prev]").ok().flatten().is_some() {
            events.push(PageEvent::WizardPrev);
        }
    })?;

    let events = queue.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        events.push(PageEvent::WizardSubmit);
    })?;

    for kind in ["input", "change"] {
        let events = queue.clone();
        listen(&form, kind, move |event| {
            let Some(target) = event_element(&event) else {
                return;
            };
            let (Some(name), Some(value)) =
                (target.get_attribute(FIELD_KEY_ATTRIBUTE), field_value(&target))
            else {
                return;
            };
            events.push(PageEvent::FieldEdited { name, value });
        })?;
    }
    Ok(())
}

fn install_scroll_listeners(_dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    for button in query_all("[data-scroll]")? {
        let Some(selector) = button.get_attribute("data-scroll") else {
            continue;
        };
        let events = queue.clone();
        listen(&button, "click", move |event| {
            event.prevent_default();
            events.push(PageEvent::ScrollRequested {
                selector: selector.clone(),
            });
        })?;
    }
    Ok(())
}

fn install_programme_listeners(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    for (mode, button) in &dom.programme_modes {
        let mode = *mode;
        let events = queue.clone();
        listen(button, "click", move |_| {
            events.push(PageEvent::ProgrammeModeSelected(mode));
        })?;
    }
    Ok(())
}

fn install_glitch_listeners(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    for (target, element) in &dom.glitch_targets {
        let label = element.text_content().unwrap_or_default();
        element.set_attribute("data-glitch", label.trim())?;

        for (kind, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = *target;
            let events = queue.clone();
            listen(element, kind, move |_| {
                events.push(PageEvent::GlitchHover { target, entered });
            })?;
        }
    }
    Ok(())
}

fn install_afterparty_listeners(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    if let Some(link) = &dom.afterparty_link {
        let events = queue.clone();
        listen(link, "click", move |event| {
            event.prevent_default();
            events.push(PageEvent::AfterpartyLinkClicked);
        })?;
    }

    if let Some(section) = &dom.afterparty_section {
        let backdrop = JsValue::from(section.clone());
        let events = queue.clone();
        listen(section, "click", move |event| {
            // Only the backdrop itself, not clicks inside the content.
            if event.target().map(JsValue::from).as_ref() == Some(&backdrop) {
                events.push(PageEvent::AfterpartyBackdropClicked);
            }
        })?;
    }
    Ok(())
}

fn install_visibility_observers(dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    if let Some(hero) = &dom.hero {
        let events = queue.clone();
        let observer = observe_visibility(HERO_SPLIT_THRESHOLD, move |entry, _| {
            events.push(PageEvent::VisibilityChanged {
                target: Observed::HeroSection,
                visible: meets_threshold(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    HERO_SPLIT_THRESHOLD,
                ),
            });
        })?;
        observer.observe(hero);
    }

    let events = queue.clone();
    let timeline_observer = observe_visibility(TIMELINE_REVEAL_THRESHOLD, move |entry, observer| {
        let visible = meets_threshold(
            entry.is_intersecting(),
            entry.intersection_ratio(),
            TIMELINE_REVEAL_THRESHOLD,
        );
        if !visible {
            return;
        }
        let target = entry.target();
        if let Some(index) = index_attribute(&target, TIMELINE_INDEX_ATTRIBUTE) {
            events.push(PageEvent::VisibilityChanged {
                target: Observed::TimelineItem(index),
                visible,
            });
        }
        // Revealed for good; stop watching.
        observer.unobserve(&target);
    })?;
    for (index, item) in dom.timeline_items.iter().enumerate() {
        item.set_attribute(TIMELINE_INDEX_ATTRIBUTE, &index.to_string())?;
        timeline_observer.observe(item);
    }

    let events = queue.clone();
    let video_observer = observe_visibility(SPEAKER_VIDEO_THRESHOLD, move |entry, _| {
        let visible = meets_threshold(
            entry.is_intersecting(),
            entry.intersection_ratio(),
            SPEAKER_VIDEO_THRESHOLD,
        );
        if let Some(index) = index_attribute(&entry.target(), SPEAKER_INDEX_ATTRIBUTE) {
            events.push(PageEvent::VisibilityChanged {
                target: Observed::SpeakerVideo(index),
                visible,
            });
        }
    })?;
    dom.video_observer = Some(video_observer);
    Ok(())
}

/// Attach the per-clip listeners for a freshly created speaker video.
pub fn install_speaker_video_listeners(
    video: &HtmlVideoElement,
    index: usize,
    queue: &PageEventQueue,
) -> Result<(), DomError> {
    for (kind, active) in [
        ("mouseenter", true),
        ("focus", true),
        ("mouseleave", false),
        ("blur", false),
    ] {
        let events = queue.clone();
        listen(video, kind, move |_| {
            events.push(PageEvent::SpeakerClipActive { index, active });
        })?;
    }
    Ok(())
}

fn install_load_listener(_dom: &mut PageDom, queue: &PageEventQueue) -> Result<(), DomError> {
    // The app may start after the load event already fired.
    if page_already_loaded(&document()?.ready_state()) {
        queue.push(PageEvent::PageLoaded);
        return Ok(());
    }

    let events = queue.clone();
    listen(&window()?, "load", move |_| {
        events.push(PageEvent::PageLoaded);
    })
}

