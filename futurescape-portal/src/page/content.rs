use bevy::prelude::*;
use constants::page::LANDING_CONTENT_PATH;
use serde::{Deserialize, Serialize};

use super::programme::ProgrammeMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    /// Looping preview clip
    pub video: String,
    /// Poster shown until (or instead of) the clip
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Sessions per programme mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub day: Vec<Session>,
    #[serde(default)]
    pub week: Vec<Session>,
    #[serde(default)]
    pub map: Vec<Session>,
}

impl Schedule {
    pub fn sessions(&self, mode: ProgrammeMode) -> &[Session] {
        match mode {
            ProgrammeMode::Day => &self.day,
            ProgrammeMode::Week => &self.week,
            ProgrammeMode::Map => &self.map,
        }
    }
}

/// Static page content as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingContent {
    pub speakers: Vec<Speaker>,
    pub schedule: Schedule,
}

#[derive(Resource, Default)]
pub struct ContentLoader {
    handle: Option<Handle<LandingContent>>,
    loaded: bool,
}

pub fn start_content_loading(mut loader: ResMut<ContentLoader>, asset_server: Res<AssetServer>) {
    info!("Loading landing content from: {}", LANDING_CONTENT_PATH);
    loader.handle = Some(asset_server.load(LANDING_CONTENT_PATH));
}

/// Install the content as a resource once the asset is ready. A failed
/// load leaves the speaker and programme sections empty.
pub fn install_landing_content(
    mut loader: ResMut<ContentLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    contents: Res<Assets<LandingContent>>,
) {
    if loader.loaded {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };

    if let Some(content) = contents.get(&handle) {
        info!(
            "Landing content loaded: {} speakers, {} sessions",
            content.speakers.len(),
            ProgrammeMode::ALL
                .iter()
                .map(|mode| content.schedule.sessions(*mode).len())
                .sum::<usize>()
        );
        commands.insert_resource(content.clone());
        loader.loaded = true;
    } else if asset_server.load_state(&handle).is_failed() {
        error!("Landing content failed to load: {}", LANDING_CONTENT_PATH);
        loader.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDING_JSON: &str = include_str!("../../assets/landing.json");

    fn landing() -> LandingContent {
        serde_json::from_str(LANDING_JSON).expect("landing.json parses")
    }

    #[test]
    fn test_bundled_content_parses() {
        let content = landing();
        assert_eq!(content.speakers.len(), 4);
        assert_eq!(content.speakers[1].name, "Ethan \"Pulse\" Navarro");
        assert!(content.speakers.iter().all(|s| !s.fallback.is_empty()));
    }

    #[test]
    fn test_sessions_keyed_by_mode() {
        let schedule = landing().schedule;
        assert_eq!(schedule.sessions(ProgrammeMode::Day).len(), 3);
        assert_eq!(schedule.sessions(ProgrammeMode::Week).len(), 2);
        assert_eq!(schedule.sessions(ProgrammeMode::Map).len(), 1);
        assert_eq!(
            schedule.sessions(ProgrammeMode::Week)[0].details,
            vec![
                "XR Bootcamps",
                "AI прототипирование",
                "Metaverse Venture Sessions",
                "Экскурсии по NeoCity XR Arena",
            ]
        );
    }

    #[test]
    fn test_missing_modes_default_to_empty() {
        let content: LandingContent = serde_json::from_str(
            r#"{ "speakers": [], "schedule": { "day": [{ "title": "T", "time": "09:00" }] } }"#,
        )
        .expect("partial content parses");
        assert_eq!(content.schedule.sessions(ProgrammeMode::Day)[0].details.len(), 0);
        assert!(content.schedule.sessions(ProgrammeMode::Map).is_empty());
    }
}
