//! Seasonal twinkle themes keyed off the calendar month.

use platform::{CalendarSnapshot, ClockReading, RGB8};

use crate::buffer::PixelBuffer;
use crate::color;
use crate::config;

/// Primary and accent colors for each month's theme.
fn theme(month: u8) -> (RGB8, RGB8) {
    match month {
        1 => (color::WHITE, color::BLUE),
        2 => (color::RED, color::VIOLET),
        3 => (color::GREEN, color::WHITE),
        4 => (color::YELLOW, color::VIOLET),
        5 => (color::YELLOW, color::GREEN),
        6 => (color::YELLOW, color::BLUE),
        7 => (color::RED, color::WHITE),
        8 => (color::ORANGE, color::YELLOW),
        9 => (color::ORANGE, color::RED),
        10 => (color::ORANGE, color::VIOLET),
        11 => (color::ORANGE, color::WHITE),
        _ => (color::RED, color::GREEN),
    }
}

#[derive(Debug)]
pub(crate) struct FestiveTwinkle {
    last_update: Option<ClockReading>,
    phase: u8,
}

impl FestiveTwinkle {
    pub(crate) fn new() -> Self {
        Self {
            last_update: None,
            phase: 0,
        }
    }

    pub(crate) fn advance(
        &mut self,
        buf: &mut PixelBuffer,
        now: ClockReading,
        cal: Option<&CalendarSnapshot>,
    ) {
        if let Some(last) = self.last_update {
            if now.elapsed_since(last) < config::FESTIVE_REFRESH_MS {
                return;
            }
        }
        self.last_update = Some(now);

        let Some(cal) = cal else {
            buf.clear();
            return;
        };

        let (primary, accent) = theme(cal.month);
        for i in 0..platform::STRIP_LEN {
            let c = if (i + usize::from(self.phase)) % 2 == 0 {
                primary
            } else {
                color::scale(accent, config::MONTH_DIM)
            };
            buf.set(i, c);
        }
        self.phase = self.phase.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cal(month: u8) -> CalendarSnapshot {
        CalendarSnapshot {
            month,
            day: 1,
            weekday: 0,
            hour: 12,
            minute: 0,
            second: 0,
        }
    }

    #[test]
    fn december_alternates_red_and_dim_green() {
        let mut fx = FestiveTwinkle::new();
        let mut buf = PixelBuffer::new();
        let c = cal(12);
        fx.advance(&mut buf, ClockReading::from_millis(0), Some(&c));
        assert_eq!(buf.get(0), color::RED);
        assert_eq!(buf.get(1), color::scale(color::GREEN, config::MONTH_DIM));
    }

    #[test]
    fn phase_swaps_on_next_refresh() {
        let mut fx = FestiveTwinkle::new();
        let mut buf = PixelBuffer::new();
        let c = cal(10);
        fx.advance(&mut buf, ClockReading::from_millis(0), Some(&c));
        let first = buf.get(0);
        fx.advance(
            &mut buf,
            ClockReading::from_millis(config::FESTIVE_REFRESH_MS),
            Some(&c),
        );
        assert_ne!(buf.get(0), first);
    }
}
