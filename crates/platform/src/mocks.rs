//! Mock collaborators for testing.
//!
//! One mock per platform trait, each recording enough of what the core did
//! to assert on. Used by the unit tests here and by the runtime crate's
//! integration suites (via the `std` feature).

#![cfg(any(test, feature = "std"))]
#![allow(missing_docs)]

use core::cell::Cell;

use heapless::{Deque, String, Vec};
use smart_leds::RGB8;

use crate::apps::{AppHost, Emotion};
use crate::audio::ToneSink;
use crate::calendar::{CalendarClock, CalendarSnapshot};
use crate::clock::{ClockReading, ClockSource};
use crate::display::{DisplayLink, ViewFrame};
use crate::input::{InputEvent, InputSource};
use crate::led::{LedStrip, STRIP_LEN};
use crate::net::NetworkLink;
use crate::sleep::SleepControl;
use crate::watchdog::Watchdog;

/// Manually-advanced clock.
#[derive(Debug, Default)]
pub struct FakeClock {
    now_ms: Cell<u32>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: u32) -> Self {
        Self {
            now_ms: Cell::new(ms),
        }
    }

    /// Move time forward.
    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }
}

impl ClockSource for FakeClock {
    fn now(&self) -> ClockReading {
        ClockReading::from_millis(self.now_ms.get())
    }
}

/// Calendar pinned to a fixed snapshot (or unset).
#[derive(Debug, Default)]
pub struct FixedCalendar {
    pub snapshot: Option<CalendarSnapshot>,
}

impl FixedCalendar {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn at(snapshot: CalendarSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }
}

impl CalendarClock for FixedCalendar {
    fn snapshot(&self) -> Option<CalendarSnapshot> {
        self.snapshot
    }
}

/// Which kind of frame the mock display last presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Blank,
    Loading,
    Home,
    Menu,
    Notification,
    Error,
}

/// Display that records frame kinds instead of drawing.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub present_count: usize,
    pub last_frame: Option<FrameKind>,
    pub last_error_code: Option<u16>,
    pub fail_next: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayLink for MockDisplay {
    type Error = &'static str;

    fn present(&mut self, frame: &ViewFrame<'_>) -> Result<(), Self::Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err("display fault injected");
        }
        self.present_count += 1;
        self.last_frame = Some(match frame {
            ViewFrame::Blank => FrameKind::Blank,
            ViewFrame::Loading { .. } => FrameKind::Loading,
            ViewFrame::Home => FrameKind::Home,
            ViewFrame::Menu { .. } => FrameKind::Menu,
            ViewFrame::Notification { .. } => FrameKind::Notification,
            ViewFrame::Error { code, .. } => {
                self.last_error_code = Some(*code);
                FrameKind::Error
            }
        });
        Ok(())
    }
}

/// Strip that stages into an array and snapshots it on `show`.
#[derive(Debug)]
pub struct MockStrip {
    staged: [RGB8; STRIP_LEN],
    pub shown: [RGB8; STRIP_LEN],
    pub show_count: usize,
}

impl Default for MockStrip {
    fn default() -> Self {
        Self {
            staged: [RGB8::default(); STRIP_LEN],
            shown: [RGB8::default(); STRIP_LEN],
            show_count: 0,
        }
    }
}

impl MockStrip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedStrip for MockStrip {
    type Error = &'static str;

    fn set(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error> {
        match self.staged.get_mut(index) {
            Some(slot) => {
                *slot = color;
                Ok(())
            }
            None => Err("pixel index out of range"),
        }
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.shown = self.staged;
        self.show_count += 1;
        Ok(())
    }
}

/// Tone sink that records every request.
#[derive(Debug, Default)]
pub struct MockTone {
    pub tones: Vec<(u16, u32), 64>,
    pub clips: Vec<String<32>, 8>,
    pub playback_finished: bool,
    pub quiet_count: usize,
}

impl MockTone {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToneSink for MockTone {
    type Error = &'static str;

    fn tone(&mut self, frequency_hz: u16, duration_ms: u32) -> Result<(), Self::Error> {
        self.tones
            .push((frequency_hz, duration_ms))
            .map_err(|_| "tone log full")
    }

    fn play_clip(&mut self, name: &str) -> Result<(), Self::Error> {
        let mut entry = String::new();
        entry.push_str(name).map_err(|_| "clip name too long")?;
        self.clips.push(entry).map_err(|_| "clip log full")
    }

    fn take_playback_finished(&mut self) -> bool {
        core::mem::take(&mut self.playback_finished)
    }

    fn quiet(&mut self) -> Result<(), Self::Error> {
        self.quiet_count += 1;
        Ok(())
    }
}

/// Network with scriptable predicates.
#[derive(Debug, Default)]
pub struct MockNetwork {
    pub connected: bool,
    pub time_initialized: bool,
    pub connect_calls: usize,
    pub sync_calls: usize,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NetworkLink for MockNetwork {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) {
        self.connect_calls += 1;
    }

    fn time_initialized(&self) -> bool {
        self.time_initialized
    }

    fn sync_time(&mut self) {
        self.sync_calls += 1;
    }
}

/// App host with a settable active flag and emotion.
#[derive(Debug, Default)]
pub struct MockAppHost {
    pub active: bool,
    pub emotion: Emotion,
}

impl MockAppHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppHost for MockAppHost {
    fn is_app_active(&self) -> bool {
        self.active
    }

    fn emotion(&self) -> Emotion {
        self.emotion
    }
}

/// Input source fed from a bounded queue.
#[derive(Debug, Default)]
pub struct MockInput {
    events: Deque<InputEvent, 16>,
}

impl MockInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event; silently drops when full (bounded-buffer contract).
    pub fn push(&mut self, event: InputEvent) {
        let _ = self.events.push_back(event);
    }
}

impl InputSource for MockInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Watchdog that counts heartbeats.
#[derive(Debug, Default)]
pub struct MockWatchdog {
    pub feed_count: usize,
}

impl MockWatchdog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Watchdog for MockWatchdog {
    fn feed(&mut self) {
        self.feed_count += 1;
    }
}

/// Sleep control that records brightness writes and sleep entries.
#[derive(Debug, Default)]
pub struct MockSleep {
    pub brightness_writes: Vec<u8, 32>,
    pub deep_sleep_count: usize,
}

impl MockSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_brightness(&self) -> Option<u8> {
        self.brightness_writes.last().copied()
    }
}

impl SleepControl for MockSleep {
    fn set_brightness(&mut self, level: u8) {
        let _ = self.brightness_writes.push(level);
    }

    fn deep_sleep_until_wake(&mut self) {
        self.deep_sleep_count += 1;
    }
}
