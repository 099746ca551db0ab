/// Landing content manifest, relative to the asset root
pub const LANDING_CONTENT_PATH: &str = "landing.json";

/// Visibility ratios for the intersection observers
pub const HERO_SPLIT_THRESHOLD: f64 = 0.1;
pub const TIMELINE_REVEAL_THRESHOLD: f64 = 0.35;
pub const SPEAKER_VIDEO_THRESHOLD: f64 = 0.25;

/// How long a triggered glitch stays on an element
pub const GLITCH_SECS: f32 = 1.2;

/// Maximum hero orbit-list translation per axis, in pixels, at the hero edge
pub const ORBIT_LIST_PARALLAX_PX: f32 = 20.0;

/// Per-card animation delay in the speakers grid
pub const SPEAKER_CARD_DELAY_STEP_SECS: f32 = 0.15;

/// Programme card reveal
pub const PROGRAMME_CARD_SECS: f32 = 0.8;
pub const PROGRAMME_CARD_STAGGER_SECS: f32 = 0.12;
pub const PROGRAMME_CARD_OFFSET_PX: f32 = 40.0;

/// Afterparty overlay content slide-in
pub const AFTERPARTY_ENTER_SECS: f32 = 0.8;
pub const AFTERPARTY_ENTER_OFFSET_PX: f32 = 40.0;
pub const AFTERPARTY_LINK_LABEL: &str = "Afterparty Portal";
pub const AFTERPARTY_GLITCH_LABEL: &str = "Afterparty";
