//! Calendar-to-strip encodings: the dense full layout and the week strip.
//!
//! Both generators rewrite all eight pixels on every refresh, so they never
//! need to clear the buffer first. Two-color codes alternate on a
//! three-phase blink driven by the wall-clock second.

use platform::{CalendarSnapshot, ClockReading, RGB8};

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;

/// Pick from a two-color code on the three-phase blink cycle.
///
/// Degenerate pairs (both halves the same color) render steady instead of
/// blinking to off every third second.
fn blink_pair(pair: (RGB8, RGB8), second: u8) -> RGB8 {
    let (a, b) = pair;
    if a == b {
        return a;
    }
    match second % 3 {
        0 => a,
        1 => b,
        _ => color::OFF,
    }
}

#[derive(Debug)]
pub(crate) struct FullEncoding {
    last_update: Option<ClockReading>,
}

impl FullEncoding {
    pub(crate) fn new() -> Self {
        Self { last_update: None }
    }

    pub(crate) fn advance(
        &mut self,
        buf: &mut PixelBuffer,
        now: ClockReading,
        cal: Option<&CalendarSnapshot>,
    ) {
        if let Some(last) = self.last_update {
            if now.elapsed_since(last) < config::FULL_REFRESH_MS {
                return;
            }
        }
        self.last_update = Some(now);

        let Some(cal) = cal else {
            buf.clear();
            return;
        };

        buf.set(0, color::day(cal.weekday));
        buf.set(1, color::week_of_month(cal.week_of_month()));
        buf.set(2, blink_pair(color::month_pair(cal.month), cal.second));
        buf.set(3, blink_pair(color::hour_pair(cal.hour12()), cal.second));
        // Minutes in base 8, tens then ones.
        buf.set(4, color::base8(cal.minute / 8));
        buf.set(5, color::base8(cal.minute % 8));
        // Day of month in base 8, ones then tens, reading inward.
        buf.set(6, color::base8(cal.day % 8));
        buf.set(7, color::base8(cal.day / 8));
    }
}

#[derive(Debug)]
pub(crate) struct WeekStrip {
    last_update: Option<ClockReading>,
}

impl WeekStrip {
    pub(crate) fn new() -> Self {
        Self { last_update: None }
    }

    pub(crate) fn advance(
        &mut self,
        buf: &mut PixelBuffer,
        now: ClockReading,
        cal: Option<&CalendarSnapshot>,
    ) {
        if let Some(last) = self.last_update {
            if now.elapsed_since(last) < config::WEEK_REFRESH_MS {
                return;
            }
        }
        self.last_update = Some(now);

        let Some(cal) = cal else {
            buf.clear();
            return;
        };

        // Pixel 0 carries the month code, dimmed so the week dominates.
        // Degenerate pairs blink on/off at a two-phase rate here, unlike the
        // full layout where they hold steady.
        let (a, b) = color::month_pair(cal.month);
        let month = if a == b {
            if cal.second % 2 == 0 { a } else { color::OFF }
        } else {
            blink_pair((a, b), cal.second)
        };
        buf.set(0, color::scale(month, config::MONTH_DIM));

        // Pixels 1..=7 are Sunday through Saturday.
        for weekday in 0u8..7 {
            let px = usize::from(weekday) + 1;
            if weekday < cal.weekday {
                buf.set(px, color::OFF);
            } else if weekday == cal.weekday {
                // Today blinks at a two-phase rate so it stands out.
                let c = if cal.second % 2 == 0 {
                    color::scale(color::day(weekday), config::TODAY_DIM)
                } else {
                    color::OFF
                };
                buf.set(px, c);
            } else {
                buf.set(px, color::scale(color::day(weekday), config::FUTURE_DIM));
            }
        }
    }
}
