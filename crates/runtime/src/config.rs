//! Timing constants for the coordination core.

/// Idle time before the display dims.
pub const IDLE_DIM_MS: u32 = 30_000;
/// Idle time before the display turns off.
pub const IDLE_DISPLAY_OFF_MS: u32 = 60_000;
/// Idle time before the device enters deep sleep.
pub const IDLE_DEEP_SLEEP_MS: u32 = 90_000;

/// Display brightness while awake.
pub const BRIGHTNESS_AWAKE: u8 = 255;
/// Display brightness while dimmed.
pub const BRIGHTNESS_DIMMED: u8 = 64;
/// Display brightness with the display off.
pub const BRIGHTNESS_OFF: u8 = 0;

/// Dwell time on each boot status message.
pub const BOOT_STEP_MS: u32 = 800;
/// Overall budget for network association before degrading.
pub const NETWORK_TIMEOUT_MS: u32 = 20_000;
/// Interval between repeated connect requests while associating.
pub const NETWORK_RETRY_MS: u32 = 5_000;
/// Interval between clock-sync attempts.
pub const SYNC_RETRY_MS: u32 = 4_000;
/// Clock-sync attempts before degrading.
pub const SYNC_MAX_ATTEMPTS: u8 = 3;

/// How long a non-fatal error screen shows before auto-clearing.
pub const ERROR_DISMISS_MS: u32 = 5_000;
/// Grace period on a fatal error before the coordinator requests restart.
pub const FATAL_GRACE_MS: u32 = 10_000;

/// Default notification duration.
pub const NOTIFICATION_MS: u32 = 5_000;
