use bevy::{prelude::*, window::WindowResized};

use crate::engine::camera::hero_camera::HeroCamera;
use crate::engine::scene::SceneState;

/// Track the viewport size and keep the hero camera's aspect ratio at
/// exactly width / height.
pub fn apply_viewport_resize(
    mut resize_events: EventReader<WindowResized>,
    mut scene: ResMut<SceneState>,
    mut cameras: Query<&mut Projection, With<HeroCamera>>,
) {
    for event in resize_events.read() {
        if event.width <= 0.0 || event.height <= 0.0 {
            debug!("Ignoring empty viewport {}x{}", event.width, event.height);
            continue;
        }

        scene.viewport = Vec2::new(event.width, event.height);

        for mut projection in &mut cameras {
            if let Projection::Perspective(perspective) = &mut *projection {
                perspective.aspect_ratio = event.width / event.height;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<WindowResized>()
            .init_resource::<SceneState>()
            .add_systems(Update, apply_viewport_resize);

        let camera = app
            .world_mut()
            .spawn((
                Projection::Perspective(PerspectiveProjection::default()),
                HeroCamera,
            ))
            .id();
        (app, camera)
    }

    fn aspect_of(app: &App, camera: Entity) -> Option<f32> {
        match app.world().get::<Projection>(camera) {
            Some(Projection::Perspective(perspective)) => Some(perspective.aspect_ratio),
            _ => None,
        }
    }

    #[test]
    fn test_resize_sets_exact_aspect() {
        let (mut app, camera) = resize_app();

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1280.0,
            height: 720.0,
        });
        app.update();

        assert_eq!(aspect_of(&app, camera), Some(1280.0 / 720.0));
        assert_eq!(
            app.world().resource::<SceneState>().viewport,
            Vec2::new(1280.0, 720.0)
        );
    }

    #[test]
    fn test_last_resize_wins() {
        let (mut app, camera) = resize_app();

        for (width, height) in [(800.0, 600.0), (390.0, 844.0)] {
            app.world_mut().send_event(WindowResized {
                window: Entity::PLACEHOLDER,
                width,
                height,
            });
        }
        app.update();

        assert_eq!(aspect_of(&app, camera), Some(390.0 / 844.0));
    }

    #[test]
    fn test_zero_height_is_ignored() {
        let (mut app, camera) = resize_app();
        let before = aspect_of(&app, camera);

        app.world_mut().send_event(WindowResized {
            window: Entity::PLACEHOLDER,
            width: 1024.0,
            height: 0.0,
        });
        app.update();

        assert_eq!(aspect_of(&app, camera), before);
    }
}
