//! Monotonic millisecond clock primitives.
//!
//! Every timer in the workspace is a stored [`ClockReading`] compared against
//! "now", never a scheduled callback or a sleep. Readings wrap at
//! `u32::MAX` milliseconds (~49.7 days); all elapsed-time math goes through
//! [`ClockReading::elapsed_since`], which is wraparound-safe. Comparing raw
//! readings with `<` is a bug.

/// An opaque reading of the monotonic millisecond counter.
///
/// The epoch is arbitrary (typically boot). Only differences are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading(u32);

impl ClockReading {
    /// Construct a reading from a raw millisecond count.
    #[must_use]
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// The raw counter value. Useful for logging, meaningless in isolation.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, safe across counter wraparound.
    ///
    /// The result is correct as long as the real elapsed time is under
    /// `u32::MAX` ms, which the watchdog guarantees for any live tick loop.
    #[must_use]
    pub const fn elapsed_since(self, earlier: ClockReading) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// A reading `ms` milliseconds after this one. Test and fixture helper.
    #[must_use]
    pub const fn offset(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Source of [`ClockReading`]s. One per device; injected everywhere.
pub trait ClockSource {
    /// The current monotonic reading.
    fn now(&self) -> ClockReading;
}

/// Records the most recent user interaction.
///
/// Consumed by the power state machine: idle duration is
/// `now.elapsed_since(tracker.last())`.
#[derive(Debug, Clone, Copy)]
pub struct ActivityTracker {
    last: ClockReading,
}

impl ActivityTracker {
    /// Start tracking with `now` as the first activity.
    #[must_use]
    pub const fn new(now: ClockReading) -> Self {
        Self { last: now }
    }

    /// Unconditionally stamp an interaction at `now`.
    pub fn record(&mut self, now: ClockReading) {
        self.last = now;
    }

    /// The reading of the last recorded interaction.
    #[must_use]
    pub const fn last(&self) -> ClockReading {
        self.last
    }

    /// Idle milliseconds as of `now`.
    #[must_use]
    pub const fn idle_ms(&self, now: ClockReading) -> u32 {
        now.elapsed_since(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_simple() {
        let a = ClockReading::from_millis(1_000);
        let b = ClockReading::from_millis(4_500);
        assert_eq!(b.elapsed_since(a), 3_500);
    }

    #[test]
    fn elapsed_across_wraparound() {
        let before = ClockReading::from_millis(u32::MAX - 99);
        let after = before.offset(250);
        assert_eq!(after.elapsed_since(before), 250);
    }

    #[test]
    fn idle_resets_on_record() {
        let mut tracker = ActivityTracker::new(ClockReading::from_millis(0));
        let later = ClockReading::from_millis(30_000);
        assert_eq!(tracker.idle_ms(later), 30_000);
        tracker.record(later);
        assert_eq!(tracker.idle_ms(later), 0);
    }
}
