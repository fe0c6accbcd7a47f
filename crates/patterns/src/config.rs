//! Generator timing and brightness constants.
//!
//! Refresh intervals are deliberately heterogeneous: each generator rate-
//! limits itself against its own value rather than a global tick rate.

/// Loading bar step interval.
pub const LOADING_STEP_MS: u32 = 100;
/// Full-encoding refresh interval.
pub const FULL_REFRESH_MS: u32 = 100;
/// Week-encoding refresh interval.
pub const WEEK_REFRESH_MS: u32 = 100;
/// Timer-drop advance interval.
pub const TIMER_STEP_MS: u32 = 125;
/// Festive twinkle interval.
pub const FESTIVE_REFRESH_MS: u32 = 50;
/// Menu breathing interval.
pub const MENU_REFRESH_MS: u32 = 100;
/// Emotion pulse interval.
pub const EMOTION_REFRESH_MS: u32 = 100;
/// Custom-frame copy interval.
pub const CUSTOM_REFRESH_MS: u32 = 100;

/// Month pixel brightness in week mode (50%).
pub const MONTH_DIM: u8 = 128;
/// Today's pixel brightness while blinking in week mode (72%).
pub const TODAY_DIM: u8 = 184;
/// Future-day brightness in week mode (30%).
pub const FUTURE_DIM: u8 = 77;

/// Brightness steps for the breathing/pulsing generators.
pub const FADE_SEQUENCE: [u8; 8] = [32, 64, 96, 128, 160, 128, 96, 64];
