/// Delay between a valid submit and the confirmation message (seconds)
pub const CONFIRMATION_DELAY_SECS: f32 = 0.9;

/// Step entrance animation: fade, unblur and scale in
pub const STEP_ENTER_SECS: f32 = 0.65;
pub const STEP_ENTER_BLUR_PX: f32 = 8.0;
pub const STEP_ENTER_SCALE: f32 = 0.97;

/// Field attention pulse: one glow out and back per field, staggered
pub const FIELD_PULSE_SECS: f32 = 0.35;
pub const FIELD_PULSE_STAGGER_SECS: f32 = 0.05;
pub const FIELD_PULSE_GLOW_PX: f32 = 20.0;
pub const FIELD_PULSE_SCALE: f32 = 1.02;

/// Form background pulse while the submit is processing
pub const FORM_PULSE_SECS: f32 = 0.6;

/// Name of the optional toggle that unlocks the afterparty
pub const AFTERPARTY_FIELD: &str = "afterparty";

pub const STATUS_POSITION_PREFIX: &str = "Портал";
pub const STATUS_FILL_REQUIRED: &str = "Пожалуйста, заполните обязательные поля.";
pub const STATUS_SUBMIT_FILL_REQUIRED: &str = "Заполните обязательные поля.";
pub const STATUS_PROCESSING: &str = "Синхронизация с порталами...";
pub const STATUS_CONFIRMED: &str =
    "Добро пожаловать в FutureScape 2025! Секретный портал активирован.";
