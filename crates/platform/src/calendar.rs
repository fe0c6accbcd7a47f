//! Injected wall-clock collaborator.
//!
//! The encoding and festive generators need calendar fields (weekday, month,
//! time of day). Reading the wall clock directly from generator code makes
//! them untestable, so the calendar is a collaborator queried once per tick
//! and handed down as a plain snapshot.

/// One reading of the wall clock, already broken into calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalendarSnapshot {
    /// Month of year, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Day of week, 0-6 with 0 = Sunday.
    pub weekday: u8,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl CalendarSnapshot {
    /// Week of the month, 1-5: days 1-7 are week 1, 8-14 week 2, and so on.
    #[must_use]
    pub const fn week_of_month(&self) -> u8 {
        (self.day + 6) / 7
    }

    /// Hour on a 12-hour dial, 1-12.
    #[must_use]
    pub const fn hour12(&self) -> u8 {
        let h = self.hour % 12;
        if h == 0 {
            12
        } else {
            h
        }
    }
}

/// Wall-clock collaborator. Valid only once the behavior machine has
/// completed clock sync; before that, implementations return `None`.
pub trait CalendarClock {
    /// The current calendar fields, or `None` if the clock is not yet set.
    fn snapshot(&self) -> Option<CalendarSnapshot>;
}
