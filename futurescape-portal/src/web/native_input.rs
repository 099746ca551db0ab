//! Desktop stand-in for the DOM listeners: window cursor movement feeds
//! the same page event queue the browser callbacks use.

use bevy::prelude::*;

use super::events::{PageEvent, PageEventQueue};

pub fn forward_cursor_moves(
    mut cursor_moves: EventReader<CursorMoved>,
    windows: Query<&Window>,
    queue: Res<PageEventQueue>,
) {
    for moved in cursor_moves.read() {
        let Ok(window) = windows.get(moved.window) else {
            continue;
        };
        queue.push(PageEvent::PointerMoved {
            client: moved.position,
            viewport: Vec2::new(window.width(), window.height()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    #[test]
    fn test_cursor_moves_are_queued_with_window_size() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CursorMoved>()
            .init_resource::<PageEventQueue>()
            .add_systems(Update, forward_cursor_moves);

        let window = app
            .world_mut()
            .spawn(Window {
                resolution: WindowResolution::new(800.0, 600.0),
                ..default()
            })
            .id();
        app.world_mut().send_event(CursorMoved {
            window,
            position: Vec2::new(200.0, 150.0),
            delta: None,
        });
        app.update();

        let queued = app.world().resource::<PageEventQueue>().drain();
        assert_eq!(
            queued,
            vec![PageEvent::PointerMoved {
                client: Vec2::new(200.0, 150.0),
                viewport: Vec2::new(800.0, 600.0),
            }]
        );
    }

    #[test]
    fn test_unknown_window_is_skipped() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CursorMoved>()
            .init_resource::<PageEventQueue>()
            .add_systems(Update, forward_cursor_moves);

        let stray = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(CursorMoved {
            window: stray,
            position: Vec2::ONE,
            delta: None,
        });
        app.update();

        assert!(app.world().resource::<PageEventQueue>().drain().is_empty());
    }
}
