//! Transient notification overlay.
//!
//! The overlay holds at most one notification. Expiry is evaluated by the
//! caller on every render, never by a timer callback, so the overlay has no
//! clock of its own.

use heapless::String;
use platform::ClockReading;

use crate::error::clipped;

/// A queued notification with its display deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Title line.
    pub header: String<32>,
    /// Body text.
    pub body: String<96>,
    /// Icon name understood by the display layer.
    pub icon: String<16>,
    shown_at: ClockReading,
    duration_ms: u32,
}

/// Single-slot notification state.
#[derive(Debug, Default)]
pub struct NotificationOverlay {
    current: Option<Notification>,
}

impl NotificationOverlay {
    /// Empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any active one unconditionally.
    /// Over-long fields are truncated to their bounds.
    pub fn show(&mut self, header: &str, body: &str, icon: &str, duration_ms: u32, now: ClockReading) {
        self.current = Some(Notification {
            header: clipped(header),
            body: clipped(body),
            icon: clipped(icon),
            shown_at: now,
            duration_ms,
        });
    }

    /// Whether a notification should render at this instant.
    pub fn is_active(&self, now: ClockReading) -> bool {
        match &self.current {
            Some(n) => now.elapsed_since(n.shown_at) < n.duration_ms,
            None => false,
        }
    }

    /// The active notification, if it has not expired.
    pub fn current(&self, now: ClockReading) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.elapsed_since(n.shown_at) < n.duration_ms)
    }

    /// Dismiss immediately, whatever time remains.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
