use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use crate::engine::scene::SceneState;
use crate::page::afterparty::AfterpartyState;
use crate::page::glitch::{GlitchState, GlitchTarget};
use crate::page::hero::HeroOrbitList;
use crate::page::programme::{ProgrammeMode, ProgrammeView};
use crate::page::reveal::{Observed, RevealState, SpeakerPlayback};
use crate::wizard::WizardCommand;

/// Everything the page can tell the app. DOM callbacks (or native window
/// input) only produce these; state changes happen in [`route_page_events`].
#[derive(Event, Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer anywhere in the window, in client coordinates.
    PointerMoved { client: Vec2, viewport: Vec2 },
    /// Pointer inside the hero section, centred on [-0.5, 0.5] per axis.
    HeroPointerMoved { relative: Vec2 },
    HeroPointerLeft,
    ScrollRequested { selector: String },
    ProgrammeModeSelected(ProgrammeMode),
    WizardNext,
    WizardPrev,
    WizardSubmit,
    FieldEdited { name: String, value: String },
    GlitchHover { target: GlitchTarget, entered: bool },
    VisibilityChanged { target: Observed, visible: bool },
    /// Pointer enter or focus (`active`) and leave or blur on a speaker clip.
    SpeakerClipActive { index: usize, active: bool },
    AfterpartyLinkClicked,
    AfterpartyBackdropClicked,
    PageLoaded,
}

/// One-shot DOM effects with no lasting state behind them.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum DomAction {
    ScrollTo { selector: String },
    PlayIntro,
}

/// `document.readyState` once every subresource has loaded.
const DOCUMENT_COMPLETE: &str = "complete";

/// Whether the window `load` event has already fired for a document in
/// `ready_state`, in which case [`PageEvent::PageLoaded`] is sent at once.
pub fn page_already_loaded(ready_state: &str) -> bool {
    ready_state == DOCUMENT_COMPLETE
}

/// Queue shared between DOM callbacks and the frame loop.
#[derive(Resource, Clone, Default)]
pub struct PageEventQueue(Arc<Mutex<Vec<PageEvent>>>);

impl PageEventQueue {
    pub fn push(&self, event: PageEvent) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(event);
        }
    }

    pub fn drain(&self) -> Vec<PageEvent> {
        if let Ok(mut queue) = self.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

pub fn drain_page_event_queue(queue: Res<PageEventQueue>, mut events: EventWriter<PageEvent>) {
    for event in queue.drain() {
        events.write(event);
    }
}

/// State touched by page events.
#[derive(SystemParam)]
pub struct PageTargets<'w> {
    scene: ResMut<'w, SceneState>,
    programme: ResMut<'w, ProgrammeView>,
    reveal: ResMut<'w, RevealState>,
    playback: ResMut<'w, SpeakerPlayback>,
    glitch: ResMut<'w, GlitchState>,
    orbit_list: ResMut<'w, HeroOrbitList>,
    afterparty: ResMut<'w, AfterpartyState>,
    wizard: EventWriter<'w, WizardCommand>,
    dom_actions: EventWriter<'w, DomAction>,
}

pub fn route_page_events(mut events: EventReader<PageEvent>, mut targets: PageTargets) {
    for event in events.read() {
        dispatch_page_event(event, &mut targets);
    }
}

/// The dispatch table: one arm per event kind.
fn dispatch_page_event(event: &PageEvent, targets: &mut PageTargets) {
    match event {
        PageEvent::PointerMoved { client, viewport } => {
            targets
                .scene
                .set_pointer_from_client(client.x, client.y, viewport.x, viewport.y);
        }
        PageEvent::HeroPointerMoved { relative } => targets.orbit_list.follow(*relative),
        PageEvent::HeroPointerLeft => targets.orbit_list.reset(),
        PageEvent::ScrollRequested { selector } => {
            targets.dom_actions.write(DomAction::ScrollTo {
                selector: selector.clone(),
            });
        }
        PageEvent::ProgrammeModeSelected(mode) => targets.programme.select(*mode),
        PageEvent::WizardNext => {
            targets.wizard.write(WizardCommand::Next);
        }
        PageEvent::WizardPrev => {
            targets.wizard.write(WizardCommand::Prev);
        }
        PageEvent::WizardSubmit => {
            targets.wizard.write(WizardCommand::Submit);
        }
        PageEvent::FieldEdited { name, value } => {
            targets.wizard.write(WizardCommand::SetValue {
                name: name.clone(),
                value: value.clone(),
            });
        }
        PageEvent::GlitchHover { target, entered } => {
            targets.glitch.set_hovered(*target, *entered);
        }
        PageEvent::VisibilityChanged { target, visible } => {
            handle_visibility(targets, *target, *visible);
        }
        PageEvent::SpeakerClipActive { index, active } => {
            targets.playback.set_active(*index, *active);
        }
        PageEvent::AfterpartyLinkClicked => {
            if targets.afterparty.open() {
                targets.glitch.trigger(GlitchTarget::AfterpartyLink);
            } else {
                warn!("Afterparty link clicked while locked");
            }
        }
        PageEvent::AfterpartyBackdropClicked => targets.afterparty.close(),
        PageEvent::PageLoaded => {
            targets.dom_actions.write(DomAction::PlayIntro);
        }
    }
}

fn handle_visibility(targets: &mut PageTargets, target: Observed, visible: bool) {
    match target {
        Observed::HeroSection => targets.reveal.set_hero_visible(visible),
        Observed::TimelineItem(index) => {
            if visible && targets.reveal.reveal(index) {
                debug!("Timeline item {} revealed", index);
            }
        }
        Observed::SpeakerVideo(index) => {
            if !visible {
                targets.playback.set_active(index, false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Captured {
        wizard: Vec<WizardCommand>,
        dom: Vec<DomAction>,
    }

    fn capture(
        mut wizard: EventReader<WizardCommand>,
        mut dom: EventReader<DomAction>,
        mut captured: ResMut<Captured>,
    ) {
        captured.wizard.extend(wizard.read().cloned());
        captured.dom.extend(dom.read().cloned());
    }

    fn routing_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<PageEvent>()
            .add_event::<WizardCommand>()
            .add_event::<DomAction>()
            .init_resource::<PageEventQueue>()
            .init_resource::<SceneState>()
            .init_resource::<ProgrammeView>()
            .init_resource::<RevealState>()
            .init_resource::<SpeakerPlayback>()
            .init_resource::<GlitchState>()
            .init_resource::<HeroOrbitList>()
            .init_resource::<AfterpartyState>()
            .init_resource::<Captured>()
            .add_systems(
                Update,
                (drain_page_event_queue, route_page_events, capture).chain(),
            );
        app
    }

    fn push_all(app: &App, events: impl IntoIterator<Item = PageEvent>) {
        let queue = app.world().resource::<PageEventQueue>().clone();
        for event in events {
            queue.push(event);
        }
    }

    #[test]
    fn test_queue_drains_in_order() {
        let queue = PageEventQueue::default();
        queue.push(PageEvent::WizardNext);
        queue.push(PageEvent::WizardPrev);

        assert_eq!(
            queue.drain(),
            vec![PageEvent::WizardNext, PageEvent::WizardPrev]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_only_complete_document_counts_as_loaded() {
        assert!(page_already_loaded("complete"));
        assert!(!page_already_loaded("interactive"));
        assert!(!page_already_loaded("loading"));
    }

    #[test]
    fn test_pointer_last_value_wins() {
        let mut app = routing_app();
        push_all(
            &app,
            [
                PageEvent::PointerMoved {
                    client: Vec2::ZERO,
                    viewport: Vec2::new(1000.0, 500.0),
                },
                PageEvent::PointerMoved {
                    client: Vec2::new(1000.0, 500.0),
                    viewport: Vec2::new(1000.0, 500.0),
                },
            ],
        );
        app.update();

        let offset = app.world().resource::<SceneState>().pointer_offset;
        assert!((offset - Vec2::new(0.4, 0.25)).length() < 1e-6);
    }

    #[test]
    fn test_wizard_events_become_commands() {
        let mut app = routing_app();
        push_all(
            &app,
            [
                PageEvent::FieldEdited {
                    name: "email".into(),
                    value: "a@b.com".into(),
                },
                PageEvent::WizardNext,
                PageEvent::WizardPrev,
                PageEvent::WizardSubmit,
            ],
        );
        app.update();

        assert_eq!(
            app.world().resource::<Captured>().wizard,
            vec![
                WizardCommand::SetValue {
                    name: "email".into(),
                    value: "a@b.com".into(),
                },
                WizardCommand::Next,
                WizardCommand::Prev,
                WizardCommand::Submit,
            ]
        );
    }

    #[test]
    fn test_visibility_routing() {
        let mut app = routing_app();
        app.world_mut()
            .resource_mut::<SpeakerPlayback>()
            .set_active(1, true);

        push_all(
            &app,
            [
                PageEvent::VisibilityChanged {
                    target: Observed::HeroSection,
                    visible: false,
                },
                PageEvent::VisibilityChanged {
                    target: Observed::TimelineItem(0),
                    visible: true,
                },
                PageEvent::VisibilityChanged {
                    target: Observed::TimelineItem(0),
                    visible: false,
                },
                PageEvent::VisibilityChanged {
                    target: Observed::SpeakerVideo(1),
                    visible: false,
                },
            ],
        );
        app.update();

        let world = app.world();
        assert!(world.resource::<RevealState>().is_hero_split());
        assert!(world.resource::<RevealState>().is_revealed(0));
        assert!(!world.resource::<SpeakerPlayback>().is_playing(1));
    }

    #[test]
    fn test_afterparty_link_needs_unlock() {
        let mut app = routing_app();
        push_all(&app, [PageEvent::AfterpartyLinkClicked]);
        app.update();
        assert!(!app.world().resource::<AfterpartyState>().is_open());

        app.world_mut().resource_mut::<AfterpartyState>().unlock();
        push_all(&app, [PageEvent::AfterpartyLinkClicked]);
        app.update();

        let world = app.world();
        assert!(world.resource::<AfterpartyState>().is_open());
        assert!(
            world
                .resource::<GlitchState>()
                .is_glitching(GlitchTarget::AfterpartyLink)
        );

        push_all(&app, [PageEvent::AfterpartyBackdropClicked]);
        app.update();
        assert!(!app.world().resource::<AfterpartyState>().is_open());
    }

    #[test]
    fn test_one_shot_actions() {
        let mut app = routing_app();
        push_all(
            &app,
            [
                PageEvent::ScrollRequested {
                    selector: "#program".into(),
                },
                PageEvent::PageLoaded,
                PageEvent::ProgrammeModeSelected(ProgrammeMode::Week),
                PageEvent::HeroPointerMoved {
                    relative: Vec2::new(0.5, 0.5),
                },
            ],
        );
        app.update();

        let world = app.world();
        assert_eq!(
            world.resource::<Captured>().dom,
            vec![
                DomAction::ScrollTo {
                    selector: "#program".into()
                },
                DomAction::PlayIntro,
            ]
        );
        assert_eq!(world.resource::<ProgrammeView>().mode(), ProgrammeMode::Week);
        assert_eq!(
            world.resource::<HeroOrbitList>().offset,
            Vec2::new(10.0, 10.0)
        );
    }
}
