use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::HeroScenePlugin;
use crate::page::PagePlugin;
use crate::page::content::LandingContent;
use crate::web::WebBridgePlugin;
use crate::wizard::WizardPlugin;

/// Build the landing page app: hero scene, registration wizard, page
/// runtime and the DOM bridge feeding them.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<LandingContent>::new(&["json"]))
        .add_plugins(HeroScenePlugin)
        .add_plugins(WizardPlugin)
        .add_plugins(PagePlugin)
        .add_plugins(WebBridgePlugin);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
