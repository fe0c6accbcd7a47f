//! Idle-driven power ladder.
//!
//! States only descend with idle time and only return to [`PowerState::Awake`]
//! through [`PowerStateMachine::record_activity`]. Each transition yields at
//! most one [`PowerCommand`]; the coordinator dispatches it to the sleep
//! controller.

use platform::{ActivityTracker, ClockReading};

use crate::config;

/// Power ladder, ordered from most to least awake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Full brightness, fully interactive.
    Awake,
    /// Display dimmed after the first idle threshold.
    Dimmed,
    /// Display dark after the second threshold.
    DisplayOff,
    /// Hardware deep sleep after the third threshold.
    DeepSleep,
}

/// Side effect requested by a power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerCommand {
    /// Set display brightness.
    SetBrightness(u8),
    /// Block in the sleep controller until a wake source fires.
    EnterDeepSleep,
}

fn state_for_idle(idle_ms: u32) -> PowerState {
    if idle_ms >= config::IDLE_DEEP_SLEEP_MS {
        PowerState::DeepSleep
    } else if idle_ms >= config::IDLE_DISPLAY_OFF_MS {
        PowerState::DisplayOff
    } else if idle_ms >= config::IDLE_DIM_MS {
        PowerState::Dimmed
    } else {
        PowerState::Awake
    }
}

fn entry_command(state: PowerState) -> PowerCommand {
    match state {
        PowerState::Awake => PowerCommand::SetBrightness(config::BRIGHTNESS_AWAKE),
        PowerState::Dimmed => PowerCommand::SetBrightness(config::BRIGHTNESS_DIMMED),
        PowerState::DisplayOff => PowerCommand::SetBrightness(config::BRIGHTNESS_OFF),
        PowerState::DeepSleep => PowerCommand::EnterDeepSleep,
    }
}

/// Tracks idle time and walks the power ladder.
#[derive(Debug)]
pub struct PowerStateMachine {
    state: PowerState,
    activity: ActivityTracker,
}

impl PowerStateMachine {
    /// Start awake, with activity recorded at `now`.
    pub fn new(now: ClockReading) -> Self {
        Self {
            state: PowerState::Awake,
            activity: ActivityTracker::new(now),
        }
    }

    /// Current rung of the ladder.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Milliseconds since the last recorded activity.
    pub fn idle_ms(&self, now: ClockReading) -> u32 {
        self.activity.idle_ms(now)
    }

    /// Note user activity. Returns the wake command when this actually
    /// leaves a lower rung.
    pub fn record_activity(&mut self, now: ClockReading) -> Option<PowerCommand> {
        self.activity.record(now);
        if self.state == PowerState::Awake {
            return None;
        }
        self.state = PowerState::Awake;
        log::info!("power: wake on activity");
        Some(entry_command(PowerState::Awake))
    }

    /// Re-evaluate the ladder against the current idle time. Emits the
    /// entry command of the rung being entered, or nothing when the rung
    /// is unchanged.
    pub fn advance(&mut self, now: ClockReading) -> Option<PowerCommand> {
        let target = state_for_idle(self.activity.idle_ms(now));
        if target == self.state {
            return None;
        }
        // Activity is the only way back up.
        if target < self.state {
            return None;
        }
        self.state = target;
        log::info!(
            "power: entering {}",
            match target {
                PowerState::Awake => "awake",
                PowerState::Dimmed => "dimmed",
                PowerState::DisplayOff => "display-off",
                PowerState::DeepSleep => "deep-sleep",
            }
        );
        Some(entry_command(target))
    }

    /// Called after the sleep controller returns from deep sleep. Restores
    /// the awake rung with activity stamped at the wake instant.
    pub fn wake_from_deep_sleep(&mut self, now: ClockReading) -> PowerCommand {
        self.activity.record(now);
        self.state = PowerState::Awake;
        log::info!("power: wake from deep sleep");
        entry_command(PowerState::Awake)
    }
}
