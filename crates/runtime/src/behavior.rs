//! Top-level behavior state machine.
//!
//! Exactly one transition happens per `advance` call. The machine never
//! touches hardware: it reads a [`WorldView`] snapshot and hands back at
//! most one [`BehaviorSignal`] for the coordinator to act on.

use platform::ClockReading;

use crate::config;
use crate::error::{ErrorRecord, CODE_NETWORK_TIMEOUT, CODE_SYNC_FAILED};

/// Boot status messages, shown one per boot step.
pub const BOOT_MESSAGES: [&str; 5] = [
    "Waking up hardware",
    "Starting core services",
    "Checking peripherals",
    "Warming up the radio",
    "Almost ready",
];

/// Sub-phase of the loading sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadingPhase {
    /// Cycling boot status messages.
    Booting,
    /// Waiting for network association.
    ConnectingNetwork,
    /// Waiting for wall-clock sync.
    SyncingClock,
}

/// Top-level device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BehaviorState {
    /// Boot sequence in progress.
    Loading(LoadingPhase),
    /// Normal interactive state.
    Home,
    /// Menu navigation open.
    Menu,
    /// An external app owns the device.
    App,
    /// Fatal error screen, awaiting restart.
    Error,
}

/// Snapshot of the outside world for one advance call.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldView {
    /// Network link is associated.
    pub network_connected: bool,
    /// Wall clock has been synchronized at least once.
    pub time_synced: bool,
    /// The app host reports an active app.
    pub app_active: bool,
}

/// Effects the coordinator must carry out for the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BehaviorSignal {
    /// A new boot status message is current.
    BootStep(usize),
    /// Issue a fire-and-forget network connect request.
    RequestConnect,
    /// Issue a clock-sync attempt.
    RequestTimeSync,
    /// Boot finished; `degraded` means network or sync gave up.
    ReachedHome {
        /// True when boot completed without network or clock sync.
        degraded: bool,
    },
    /// A non-fatal error record was raised.
    WarningRaised {
        /// Code of the raised record.
        code: u16,
    },
    /// The active non-fatal error auto-cleared.
    ErrorCleared,
    /// An external app took over.
    AppOpened,
    /// The external app released the device.
    AppClosed,
    /// Fatal grace elapsed; the caller should restart the device.
    RequestRestart,
}

/// The behavior machine itself.
#[derive(Debug)]
pub struct BehaviorMachine {
    state: BehaviorState,
    boot_step: usize,
    last_boot_step: ClockReading,
    network_started: ClockReading,
    last_connect: Option<ClockReading>,
    sync_attempts: u8,
    last_sync: Option<ClockReading>,
    sync_exhausted: bool,
    degraded: bool,
    menu_depth: u8,
    error: Option<(ErrorRecord, ClockReading)>,
}

impl BehaviorMachine {
    /// Start at the first boot step.
    pub fn new(now: ClockReading) -> Self {
        Self {
            state: BehaviorState::Loading(LoadingPhase::Booting),
            boot_step: 0,
            last_boot_step: now,
            network_started: now,
            last_connect: None,
            sync_attempts: 0,
            last_sync: None,
            sync_exhausted: false,
            degraded: false,
            menu_depth: 1,
            error: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> BehaviorState {
        self.state
    }

    /// Status message for the current boot step.
    pub fn boot_message(&self) -> &'static str {
        BOOT_MESSAGES
            .get(self.boot_step)
            .copied()
            .unwrap_or(BOOT_MESSAGES[BOOT_MESSAGES.len() - 1])
    }

    /// Index of the current boot step.
    pub fn boot_step(&self) -> usize {
        self.boot_step
    }

    /// Menu nesting depth, 1-based.
    pub fn menu_depth(&self) -> u8 {
        self.menu_depth
    }

    /// The error record currently on screen, fatal or counting down.
    pub fn active_error(&self) -> Option<&ErrorRecord> {
        self.error.as_ref().map(|(rec, _)| rec)
    }

    /// Seconds left before a non-fatal error clears, rounded up.
    pub fn error_countdown_s(&self, now: ClockReading) -> Option<u8> {
        let (rec, raised) = self.error.as_ref()?;
        if rec.fatal {
            return None;
        }
        let elapsed = now.elapsed_since(*raised);
        let remaining = config::ERROR_DISMISS_MS.saturating_sub(elapsed);
        let secs = remaining.div_ceil(1000).min(u32::from(u8::MAX));
        #[allow(clippy::cast_possible_truncation)]
        let secs = secs as u8;
        Some(secs)
    }

    /// Raise an error record. Fatal records force the error state; warnings
    /// render over whatever state is current and auto-clear.
    pub fn trigger_error(&mut self, record: ErrorRecord, now: ClockReading) {
        log::warn!(
            "error raised: code {:#06x} {} (fatal: {})",
            record.code,
            record.short,
            record.fatal
        );
        if record.fatal {
            self.state = BehaviorState::Error;
        }
        self.error = Some((record, now));
    }

    /// Rotary press: toggle the menu from home, or leave it.
    pub fn toggle_menu(&mut self) {
        match self.state {
            BehaviorState::Home => {
                self.state = BehaviorState::Menu;
                self.menu_depth = 1;
            }
            BehaviorState::Menu => self.state = BehaviorState::Home,
            _ => {}
        }
    }

    /// Rotary turn while the menu is open: walk nesting levels.
    pub fn adjust_menu_depth(&mut self, delta: i8) {
        if self.state != BehaviorState::Menu {
            return;
        }
        let depth = i16::from(self.menu_depth) + i16::from(delta);
        self.menu_depth = depth.clamp(1, 8) as u8;
    }

    /// One transition, at most, per call.
    pub fn advance(&mut self, now: ClockReading, world: WorldView) -> Option<BehaviorSignal> {
        if let Some(signal) = self.advance_error(now) {
            return Some(signal);
        }
        if self.state == BehaviorState::Error {
            return None;
        }

        match self.state {
            BehaviorState::Loading(LoadingPhase::Booting) => self.advance_booting(now),
            BehaviorState::Loading(LoadingPhase::ConnectingNetwork) => {
                self.advance_connecting(now, world)
            }
            BehaviorState::Loading(LoadingPhase::SyncingClock) => self.advance_syncing(now, world),
            BehaviorState::Home => {
                if world.app_active {
                    self.state = BehaviorState::App;
                    log::info!("behavior: app opened");
                    return Some(BehaviorSignal::AppOpened);
                }
                None
            }
            BehaviorState::App => {
                if !world.app_active {
                    self.state = BehaviorState::Home;
                    log::info!("behavior: app closed");
                    return Some(BehaviorSignal::AppClosed);
                }
                None
            }
            BehaviorState::Menu | BehaviorState::Error => None,
        }
    }

    fn advance_error(&mut self, now: ClockReading) -> Option<BehaviorSignal> {
        let (rec, raised) = self.error.as_ref()?;
        let elapsed = now.elapsed_since(*raised);
        if rec.fatal {
            if elapsed >= config::FATAL_GRACE_MS {
                return Some(BehaviorSignal::RequestRestart);
            }
            return None;
        }
        if elapsed >= config::ERROR_DISMISS_MS {
            self.error = None;
            return Some(BehaviorSignal::ErrorCleared);
        }
        None
    }

    fn advance_booting(&mut self, now: ClockReading) -> Option<BehaviorSignal> {
        if now.elapsed_since(self.last_boot_step) < config::BOOT_STEP_MS {
            return None;
        }
        self.last_boot_step = now;
        self.boot_step += 1;
        if self.boot_step >= BOOT_MESSAGES.len() {
            self.state = BehaviorState::Loading(LoadingPhase::ConnectingNetwork);
            self.network_started = now;
            self.last_connect = Some(now);
            log::info!("behavior: boot steps done, associating");
            return Some(BehaviorSignal::RequestConnect);
        }
        log::debug!("behavior: boot step {}", self.boot_step);
        Some(BehaviorSignal::BootStep(self.boot_step))
    }

    fn advance_connecting(&mut self, now: ClockReading, world: WorldView) -> Option<BehaviorSignal> {
        if world.network_connected {
            self.enter_syncing(now);
            return Some(BehaviorSignal::RequestTimeSync);
        }
        if now.elapsed_since(self.network_started) >= config::NETWORK_TIMEOUT_MS {
            self.degraded = true;
            self.enter_syncing_degraded(now);
            return Some(BehaviorSignal::WarningRaised {
                code: CODE_NETWORK_TIMEOUT,
            });
        }
        let due = match self.last_connect {
            Some(last) => now.elapsed_since(last) >= config::NETWORK_RETRY_MS,
            None => true,
        };
        if due {
            self.last_connect = Some(now);
            return Some(BehaviorSignal::RequestConnect);
        }
        None
    }

    fn enter_syncing(&mut self, now: ClockReading) {
        self.state = BehaviorState::Loading(LoadingPhase::SyncingClock);
        self.sync_attempts = 1;
        self.last_sync = Some(now);
        log::info!("behavior: network up, syncing clock");
    }

    fn enter_syncing_degraded(&mut self, now: ClockReading) {
        self.state = BehaviorState::Loading(LoadingPhase::SyncingClock);
        // The failed association consumed the sync budget's first slot too;
        // without a network the attempts will run out quickly.
        self.sync_attempts = 0;
        self.last_sync = None;
        log::warn!("behavior: network timeout, continuing without it");
        self.trigger_error(
            ErrorRecord::warning(
                CODE_NETWORK_TIMEOUT,
                "Network timeout",
                "Could not join a network; continuing offline",
            ),
            now,
        );
    }

    fn advance_syncing(&mut self, now: ClockReading, world: WorldView) -> Option<BehaviorSignal> {
        if world.time_synced {
            self.state = BehaviorState::Home;
            log::info!("behavior: home (degraded: {})", self.degraded);
            return Some(BehaviorSignal::ReachedHome {
                degraded: self.degraded,
            });
        }
        if self.sync_exhausted {
            self.state = BehaviorState::Home;
            log::warn!("behavior: home without clock sync");
            return Some(BehaviorSignal::ReachedHome { degraded: true });
        }
        let due = match self.last_sync {
            Some(last) => now.elapsed_since(last) >= config::SYNC_RETRY_MS,
            None => true,
        };
        if !due {
            return None;
        }
        if self.sync_attempts < config::SYNC_MAX_ATTEMPTS {
            self.sync_attempts += 1;
            self.last_sync = Some(now);
            log::debug!("behavior: sync attempt {}", self.sync_attempts);
            return Some(BehaviorSignal::RequestTimeSync);
        }
        self.degraded = true;
        self.sync_exhausted = true;
        self.trigger_error(
            ErrorRecord::warning(
                CODE_SYNC_FAILED,
                "Clock sync failed",
                "Time server unreachable; clock features limited",
            ),
            now,
        );
        Some(BehaviorSignal::WarningRaised {
            code: CODE_SYNC_FAILED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorRecord;

    fn t(ms: u32) -> ClockReading {
        ClockReading::from_millis(ms)
    }

    fn boot_to_connecting(machine: &mut BehaviorMachine) -> u32 {
        let mut ms = 0;
        loop {
            ms += config::BOOT_STEP_MS;
            if machine.advance(t(ms), WorldView::default())
                == Some(BehaviorSignal::RequestConnect)
            {
                return ms;
            }
            assert!(ms < 10_000, "boot never armed the network phase");
        }
    }

    #[test]
    fn boot_steps_walk_the_message_table() {
        let mut machine = BehaviorMachine::new(t(0));
        assert_eq!(machine.boot_message(), BOOT_MESSAGES[0]);
        assert_eq!(machine.advance(t(799), WorldView::default()), None);
        assert_eq!(
            machine.advance(t(800), WorldView::default()),
            Some(BehaviorSignal::BootStep(1))
        );
        assert_eq!(machine.boot_message(), BOOT_MESSAGES[1]);
    }

    #[test]
    fn finishing_boot_requests_a_connect() {
        let mut machine = BehaviorMachine::new(t(0));
        boot_to_connecting(&mut machine);
        assert_eq!(
            machine.state(),
            BehaviorState::Loading(LoadingPhase::ConnectingNetwork)
        );
    }

    #[test]
    fn connect_is_retried_on_an_interval() {
        let mut machine = BehaviorMachine::new(t(0));
        let ms = boot_to_connecting(&mut machine);
        assert_eq!(machine.advance(t(ms + 100), WorldView::default()), None);
        assert_eq!(
            machine.advance(t(ms + config::NETWORK_RETRY_MS), WorldView::default()),
            Some(BehaviorSignal::RequestConnect)
        );
    }

    #[test]
    fn association_moves_to_clock_sync() {
        let mut machine = BehaviorMachine::new(t(0));
        let ms = boot_to_connecting(&mut machine);
        let world = WorldView {
            network_connected: true,
            ..WorldView::default()
        };
        assert_eq!(
            machine.advance(t(ms + 10), world),
            Some(BehaviorSignal::RequestTimeSync)
        );
        assert_eq!(
            machine.state(),
            BehaviorState::Loading(LoadingPhase::SyncingClock)
        );
    }

    #[test]
    fn network_timeout_degrades_and_skips_ahead() {
        let mut machine = BehaviorMachine::new(t(0));
        let ms = boot_to_connecting(&mut machine);
        // Swallow the periodic reconnects until the timeout.
        let mut now = ms;
        let signal = loop {
            now += 1000;
            if let Some(s) = machine.advance(t(now), WorldView::default()) {
                if s != BehaviorSignal::RequestConnect {
                    break s;
                }
            }
            assert!(now < ms + 30_000, "timeout never fired");
        };
        assert_eq!(
            signal,
            BehaviorSignal::WarningRaised {
                code: CODE_NETWORK_TIMEOUT
            }
        );
        assert_eq!(
            machine.state(),
            BehaviorState::Loading(LoadingPhase::SyncingClock)
        );
        assert!(machine.active_error().is_some());
    }

    #[test]
    fn sync_exhaustion_reaches_home_degraded() {
        let mut machine = BehaviorMachine::new(t(0));
        let ms = boot_to_connecting(&mut machine);
        let world = WorldView {
            network_connected: true,
            ..WorldView::default()
        };
        machine.advance(t(ms + 10), world); // attempt 1
        let mut now = ms + 10;
        let mut saw_warning = false;
        let home = loop {
            now += 500;
            match machine.advance(t(now), world) {
                Some(BehaviorSignal::ReachedHome { degraded }) => break degraded,
                Some(BehaviorSignal::WarningRaised { code }) => {
                    assert_eq!(code, CODE_SYNC_FAILED);
                    saw_warning = true;
                }
                _ => {}
            }
            assert!(now < ms + 60_000, "never reached home");
        };
        assert!(home);
        assert!(saw_warning);
        assert_eq!(machine.state(), BehaviorState::Home);
    }

    #[test]
    fn successful_sync_reaches_home_clean() {
        let mut machine = BehaviorMachine::new(t(0));
        let ms = boot_to_connecting(&mut machine);
        let world = WorldView {
            network_connected: true,
            time_synced: true,
            ..WorldView::default()
        };
        machine.advance(t(ms + 10), world);
        assert_eq!(
            machine.advance(t(ms + 20), world),
            Some(BehaviorSignal::ReachedHome { degraded: false })
        );
    }

    #[test]
    fn menu_toggles_only_between_home_and_menu() {
        let mut machine = BehaviorMachine::new(t(0));
        machine.toggle_menu(); // still loading: no-op
        assert_eq!(
            machine.state(),
            BehaviorState::Loading(LoadingPhase::Booting)
        );
        machine.state = BehaviorState::Home;
        machine.toggle_menu();
        assert_eq!(machine.state(), BehaviorState::Menu);
        machine.adjust_menu_depth(2);
        assert_eq!(machine.menu_depth(), 3);
        machine.adjust_menu_depth(-7);
        assert_eq!(machine.menu_depth(), 1);
        machine.toggle_menu();
        assert_eq!(machine.state(), BehaviorState::Home);
    }

    #[test]
    fn app_takeover_and_release() {
        let mut machine = BehaviorMachine::new(t(0));
        machine.state = BehaviorState::Home;
        let active = WorldView {
            app_active: true,
            ..WorldView::default()
        };
        assert_eq!(
            machine.advance(t(0), active),
            Some(BehaviorSignal::AppOpened)
        );
        assert_eq!(machine.state(), BehaviorState::App);
        assert_eq!(
            machine.advance(t(10), WorldView::default()),
            Some(BehaviorSignal::AppClosed)
        );
        assert_eq!(machine.state(), BehaviorState::Home);
    }

    #[test]
    fn warning_counts_down_and_clears() {
        let mut machine = BehaviorMachine::new(t(0));
        machine.state = BehaviorState::Home;
        machine.trigger_error(ErrorRecord::warning(0x0301, "Hiccup", "detail"), t(1000));
        assert_eq!(machine.error_countdown_s(t(1000)), Some(5));
        assert_eq!(machine.error_countdown_s(t(4500)), Some(2));
        assert_eq!(
            machine.advance(t(6000), WorldView::default()),
            Some(BehaviorSignal::ErrorCleared)
        );
        assert!(machine.active_error().is_none());
        assert_eq!(machine.state(), BehaviorState::Home);
    }

    #[test]
    fn fatal_error_holds_then_requests_restart() {
        let mut machine = BehaviorMachine::new(t(0));
        machine.state = BehaviorState::Home;
        machine.trigger_error(ErrorRecord::fatal(0x0401, "Storage dead", "detail"), t(0));
        assert_eq!(machine.state(), BehaviorState::Error);
        assert_eq!(machine.advance(t(9_999), WorldView::default()), None);
        assert_eq!(
            machine.advance(t(10_000), WorldView::default()),
            Some(BehaviorSignal::RequestRestart)
        );
    }
}
