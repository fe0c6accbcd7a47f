//! The per-tick coordinator.
//!
//! [`DeviceCore::tick`] runs the fixed order: watchdog, clock, input,
//! behavior, power, patterns, tunes, render. Nothing in here sleeps or
//! waits; the single blocking point is the sleep controller's deep-sleep
//! call, dispatched inline when the power ladder bottoms out.

use patterns::engine::{BootStage, EncodingSubmode, PatternCue, PatternEngine, VisualMode};
use patterns::{color, PixelBuffer};
use platform::{
    AppHost, CalendarClock, ClockReading, ClockSource, DisplayLink, InputEvent, InputSource,
    LedStrip, NetworkLink, SleepControl, ToneSink, ViewFrame, Watchdog, RGB8, STRIP_LEN,
};
use tunes::library;
use tunes::{NoteCommand, TunePlayer};

use crate::behavior::{BehaviorMachine, BehaviorSignal, BehaviorState, LoadingPhase, WorldView};
use crate::config;
use crate::error::{ErrorRecord, HardwareFault};
use crate::overlay::NotificationOverlay;
use crate::power::{PowerCommand, PowerState, PowerStateMachine};

/// What the caller's loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// Perform a full device restart.
    Restart,
    /// The device deep-slept and woke during this tick.
    Halted,
}

/// All hardware collaborators, injected at construction.
pub struct Peripherals<C, K, D, L, A, N, I, W, S, H> {
    /// Monotonic millisecond clock.
    pub clock: C,
    /// Wall-clock calendar, valid after time sync.
    pub calendar: K,
    /// Main display.
    pub display: D,
    /// LED strip.
    pub strip: L,
    /// Tone output.
    pub tone: A,
    /// Network link.
    pub net: N,
    /// Input events.
    pub input: I,
    /// Hardware watchdog.
    pub watchdog: W,
    /// Brightness and deep-sleep control.
    pub sleep: S,
    /// External app host.
    pub apps: H,
}

/// The device core: owns every subsystem and drives them cooperatively.
pub struct DeviceCore<C, K, D, L, A, N, I, W, S, H>
where
    C: ClockSource,
    K: CalendarClock,
    D: DisplayLink,
    L: LedStrip,
    A: ToneSink,
    N: NetworkLink,
    I: InputSource,
    W: Watchdog,
    S: SleepControl,
    H: AppHost,
{
    p: Peripherals<C, K, D, L, A, N, I, W, S, H>,
    behavior: BehaviorMachine,
    power: PowerStateMachine,
    overlay: NotificationOverlay,
    engine: PatternEngine,
    buffer: PixelBuffer,
    player: TunePlayer,
    /// Mode to restore when returning to home.
    home_mode: VisualMode,
    /// The note currently sounding, for accent rendering.
    active_note: Option<(NoteCommand, ClockReading)>,
    /// One-shot cue tone queued for this tick.
    pending_tone: Option<NoteCommand>,
    connect_chirped: bool,
    restart_requested: bool,
}

impl<C, K, D, L, A, N, I, W, S, H> DeviceCore<C, K, D, L, A, N, I, W, S, H>
where
    C: ClockSource,
    K: CalendarClock,
    D: DisplayLink,
    L: LedStrip,
    A: ToneSink,
    N: NetworkLink,
    I: InputSource,
    W: Watchdog,
    S: SleepControl,
    H: AppHost,
{
    /// Build the core in its boot state.
    pub fn new(p: Peripherals<C, K, D, L, A, N, I, W, S, H>) -> Self {
        let now = p.clock.now();
        Self {
            p,
            behavior: BehaviorMachine::new(now),
            power: PowerStateMachine::new(now),
            overlay: NotificationOverlay::new(),
            engine: PatternEngine::new(),
            buffer: PixelBuffer::new(),
            player: TunePlayer::new(),
            home_mode: VisualMode::Encoding(EncodingSubmode::Full),
            active_note: None,
            pending_tone: None,
            connect_chirped: false,
            restart_requested: false,
        }
    }

    /// The injected collaborators, for host shells and tests.
    pub fn peripherals(&self) -> &Peripherals<C, K, D, L, A, N, I, W, S, H> {
        &self.p
    }

    /// Mutable access to the collaborators.
    pub fn peripherals_mut(&mut self) -> &mut Peripherals<C, K, D, L, A, N, I, W, S, H> {
        &mut self.p
    }

    /// Current behavior state, for host shells and tests.
    pub fn behavior_state(&self) -> BehaviorState {
        self.behavior.state()
    }

    /// Current power state.
    pub fn power_state(&self) -> PowerState {
        self.power.state()
    }

    /// Show a notification over the current view for the standard hold time.
    pub fn notify(&mut self, header: &str, body: &str, icon: &str) {
        self.notify_for(header, body, icon, config::NOTIFICATION_MS);
    }

    /// Show a notification with an explicit hold time.
    pub fn notify_for(&mut self, header: &str, body: &str, icon: &str, duration_ms: u32) {
        let now = self.p.clock.now();
        self.overlay.show(header, body, icon, duration_ms, now);
    }

    /// Stage the strip frame shown while an external app holds the device.
    pub fn set_custom_frame(&mut self, frame: [RGB8; STRIP_LEN]) {
        self.engine.set_custom_frame(frame);
    }

    /// Start a recorded clip on the audio driver.
    pub fn play_clip(&mut self, name: &str) {
        let now = self.p.clock.now();
        if let Err(err) = self.p.tone.play_clip(name) {
            log::error!("clip playback failed: {err:?}");
            self.raise_fault(HardwareFault::Audio, now);
        }
    }

    /// Raise an error record from outside the core (host shell, drivers).
    pub fn report_error(&mut self, record: ErrorRecord) {
        let now = self.p.clock.now();
        if !record.fatal {
            self.pending_tone = Some(library::error_tone(record.code));
        }
        self.behavior.trigger_error(record, now);
    }

    /// Run one cooperative tick.
    pub fn tick(&mut self) -> TickOutcome {
        // The watchdog is fed before anything that could stall.
        self.p.watchdog.feed();
        let now = self.p.clock.now();

        while let Some(event) = self.p.input.poll_event() {
            self.handle_input(event, now);
        }

        let world = WorldView {
            network_connected: self.p.net.is_connected(),
            time_synced: self.p.net.time_initialized(),
            app_active: self.p.apps.is_app_active(),
        };
        if let Some(signal) = self.behavior.advance(now, world) {
            if let Some(outcome) = self.apply_signal(signal) {
                return outcome;
            }
        }

        if let Some(command) = self.power.advance(now) {
            if let Some(outcome) = self.dispatch_power(command) {
                return outcome;
            }
        }

        self.sync_visual_mode();
        let snapshot = self.p.calendar.snapshot();
        let emotion = self.p.apps.emotion();
        if let Some(cue) =
            self.engine
                .advance(&mut self.buffer, now, snapshot.as_ref(), emotion)
        {
            let PatternCue::DropLanded { palette_index } = cue;
            self.pending_tone = Some(library::drop_tone(palette_index));
        }

        if self.p.tone.take_playback_finished() {
            log::debug!("clip playback finished");
        }
        if let Some(command) = self.player.advance(now) {
            self.sound(command, now);
        }
        if let Some(command) = self.pending_tone.take() {
            self.sound(command, now);
        }

        self.render(now);

        if self.restart_requested {
            return TickOutcome::Restart;
        }
        TickOutcome::Continue
    }

    fn handle_input(&mut self, event: InputEvent, now: ClockReading) {
        if let Some(PowerCommand::SetBrightness(level)) = self.power.record_activity(now) {
            self.p.sleep.set_brightness(level);
        }
        // Any input dismisses an active notification and is consumed by it.
        if self.overlay.is_active(now) {
            self.overlay.clear();
            return;
        }
        match event {
            InputEvent::RotaryPress => {
                self.behavior.toggle_menu();
            }
            InputEvent::RotaryTurn(delta) => match self.behavior.state() {
                BehaviorState::Home => {
                    self.engine.cycle_submode(delta, &mut self.buffer);
                    self.home_mode = self.engine.mode();
                }
                BehaviorState::Menu => {
                    self.behavior.adjust_menu_depth(delta);
                    self.engine.set_menu_depth(self.behavior.menu_depth());
                }
                _ => {}
            },
            InputEvent::SideButton => {
                if self.behavior.state() == BehaviorState::Home {
                    self.player.start(&library::FESTIVE);
                }
            }
            InputEvent::SideButtonLong => {
                // Manual restart escape hatch on a fatal error screen.
                if self.behavior.state() == BehaviorState::Error {
                    self.restart_requested = true;
                }
            }
        }
    }

    fn apply_signal(&mut self, signal: BehaviorSignal) -> Option<TickOutcome> {
        match signal {
            BehaviorSignal::BootStep(_) => {}
            BehaviorSignal::RequestConnect => self.p.net.connect(),
            BehaviorSignal::RequestTimeSync => {
                if !self.connect_chirped {
                    self.connect_chirped = true;
                    self.player.start(&library::CONNECT_CHIRP);
                }
                self.p.net.sync_time();
            }
            BehaviorSignal::ReachedHome { degraded } => {
                self.home_mode = VisualMode::Encoding(EncodingSubmode::Full);
                self.player.start(&library::POWER_ON);
                if degraded {
                    log::warn!("boot finished degraded");
                }
            }
            BehaviorSignal::WarningRaised { code } => {
                self.pending_tone = Some(library::error_tone(code));
            }
            BehaviorSignal::ErrorCleared => {}
            BehaviorSignal::AppOpened | BehaviorSignal::AppClosed => {}
            BehaviorSignal::RequestRestart => return Some(TickOutcome::Restart),
        }
        None
    }

    fn dispatch_power(&mut self, command: PowerCommand) -> Option<TickOutcome> {
        match command {
            PowerCommand::SetBrightness(level) => {
                self.p.sleep.set_brightness(level);
                None
            }
            PowerCommand::EnterDeepSleep => {
                // Quiesce outputs, then block until a wake source fires.
                let _ = self.p.tone.quiet();
                self.blank_strip();
                if let Err(err) = self.p.display.present(&ViewFrame::Blank) {
                    log::error!("display blank before sleep failed: {err:?}");
                }
                self.p.sleep.set_brightness(0);
                self.p.sleep.deep_sleep_until_wake();

                let woke = self.p.clock.now();
                let PowerCommand::SetBrightness(level) = self.power.wake_from_deep_sleep(woke)
                else {
                    return Some(TickOutcome::Halted);
                };
                self.p.sleep.set_brightness(level);
                Some(TickOutcome::Halted)
            }
        }
    }

    fn sync_visual_mode(&mut self) {
        match self.behavior.state() {
            BehaviorState::Loading(phase) => {
                self.engine.set_mode(VisualMode::Loading, &mut self.buffer);
                let stage = match phase {
                    LoadingPhase::Booting if self.behavior.boot_step() < 3 => {
                        BootStage::HardwareInit
                    }
                    LoadingPhase::Booting => BootStage::SystemStart,
                    LoadingPhase::ConnectingNetwork => BootStage::NetworkPrep,
                    LoadingPhase::SyncingClock => BootStage::FinalPrep,
                };
                self.engine.set_boot_stage(stage, &mut self.buffer);
            }
            BehaviorState::Home => {
                self.engine.set_mode(self.home_mode, &mut self.buffer);
            }
            BehaviorState::Menu => {
                self.engine
                    .set_mode(VisualMode::Encoding(EncodingSubmode::Menu), &mut self.buffer);
                self.engine.set_menu_depth(self.behavior.menu_depth());
            }
            BehaviorState::App => {
                self.engine.set_mode(
                    VisualMode::Encoding(EncodingSubmode::Custom),
                    &mut self.buffer,
                );
            }
            BehaviorState::Error => {
                self.engine.set_mode(VisualMode::Off, &mut self.buffer);
            }
        }
    }

    fn sound(&mut self, command: NoteCommand, now: ClockReading) {
        if let Err(err) = self.p.tone.tone(command.frequency_hz, command.duration_ms) {
            log::error!("tone output failed: {err:?}");
            self.raise_fault(HardwareFault::Audio, now);
            return;
        }
        self.active_note = Some((command, now));
    }

    fn render(&mut self, now: ClockReading) {
        let frame_src;
        let frame = if self.power.state() >= PowerState::DisplayOff {
            ViewFrame::Blank
        } else if let Some(record) = self.behavior.active_error() {
            ViewFrame::Error {
                code: record.code,
                short: record.short,
                detail: record.detail.as_str(),
                fatal: record.fatal,
                countdown_s: self.behavior.error_countdown_s(now),
            }
        } else if let Some(n) = self.overlay.current(now) {
            frame_src = (n.header.clone(), n.body.clone(), n.icon.clone());
            ViewFrame::Notification {
                header: frame_src.0.as_str(),
                body: frame_src.1.as_str(),
                icon: frame_src.2.as_str(),
            }
        } else {
            match self.behavior.state() {
                BehaviorState::Loading(_) => ViewFrame::Loading {
                    status: self.behavior.boot_message(),
                },
                BehaviorState::Menu => ViewFrame::Menu {
                    depth: self.behavior.menu_depth(),
                },
                BehaviorState::Home | BehaviorState::App => ViewFrame::Home,
                // Covered by the error branch above.
                BehaviorState::Error => ViewFrame::Blank,
            }
        };
        if let Err(err) = self.p.display.present(&frame) {
            log::error!("display present failed: {err:?}");
            self.raise_fault(HardwareFault::Display, now);
        }

        let mut pixels: [RGB8; STRIP_LEN] = [color::OFF; STRIP_LEN];
        pixels.copy_from_slice(self.buffer.as_slice());
        self.apply_accents(&mut pixels, now);
        let mut strip_err = false;
        for (i, &px) in pixels.iter().enumerate() {
            if self.p.strip.set(i, px).is_err() {
                strip_err = true;
            }
        }
        if self.p.strip.show().is_err() {
            strip_err = true;
        }
        if strip_err {
            log::error!("led strip flush failed");
            self.raise_fault(HardwareFault::Strip, now);
        }
    }

    /// Flash the accent pixels of the sounding note in its frequency color.
    fn apply_accents(&mut self, pixels: &mut [RGB8; STRIP_LEN], now: ClockReading) {
        let Some((note, started)) = self.active_note else {
            return;
        };
        if now.elapsed_since(started) >= note.duration_ms {
            self.active_note = None;
            return;
        }
        if note.accent_mask == 0 {
            return;
        }
        let accent = color::for_frequency(note.frequency_hz);
        for (i, px) in pixels.iter_mut().enumerate() {
            if note.accent_mask & (1 << i) != 0 {
                *px = accent;
            }
        }
    }

    fn blank_strip(&mut self) {
        for i in 0..STRIP_LEN {
            let _ = self.p.strip.set(i, color::OFF);
        }
        let _ = self.p.strip.show();
    }

    /// Convert a hardware fault into a visible record, unless an error is
    /// already on screen.
    fn raise_fault(&mut self, fault: HardwareFault, now: ClockReading) {
        if self.behavior.active_error().is_some() {
            return;
        }
        self.behavior
            .trigger_error(ErrorRecord::from_fault(fault, "see log for driver detail"), now);
    }
}
