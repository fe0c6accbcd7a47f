//! Color tables for the encoding, festive and accent generators.
//!
//! The palettes are the device's visual vocabulary: a base-8 digit palette,
//! a weekday rainbow, and two-color pairs for months (base 12) and hours
//! (chromatic). A pair with two identical entries is "degenerate" and drawn
//! solid; a non-degenerate pair is disambiguated by the 3-phase blink cycle.

use platform::RGB8;

/// Pixel off.
pub const OFF: RGB8 = RGB8::new(0, 0, 0);
/// Pure red.
pub const RED: RGB8 = RGB8::new(255, 0, 0);
/// Orange.
pub const ORANGE: RGB8 = RGB8::new(255, 140, 0);
/// Yellow.
pub const YELLOW: RGB8 = RGB8::new(255, 255, 0);
/// Green.
pub const GREEN: RGB8 = RGB8::new(0, 255, 0);
/// Blue.
pub const BLUE: RGB8 = RGB8::new(0, 0, 255);
/// Indigo.
pub const INDIGO: RGB8 = RGB8::new(75, 0, 130);
/// Violet.
pub const VIOLET: RGB8 = RGB8::new(148, 0, 211);
/// White.
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);

/// Digits 0-7: off, then the rainbow.
const BASE_8: [RGB8; 8] = [OFF, RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// Sunday through Saturday.
const DAYS: [RGB8; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// January through December: adjacent months share a band edge, giving a
/// non-degenerate pair for the months that straddle two bands.
const MONTHS: [(RGB8, RGB8); 12] = [
    (RED, RED),
    (RED, ORANGE),
    (ORANGE, ORANGE),
    (ORANGE, YELLOW),
    (YELLOW, YELLOW),
    (GREEN, GREEN),
    (GREEN, BLUE),
    (BLUE, BLUE),
    (BLUE, INDIGO),
    (INDIGO, INDIGO),
    (INDIGO, VIOLET),
    (VIOLET, VIOLET),
];

/// Hours 1-12, chromatic pairs (sharps blend their neighbors).
const HOURS: [(RGB8, RGB8); 12] = [
    (RED, RED),
    (RED, ORANGE),
    (ORANGE, YELLOW),
    (YELLOW, YELLOW),
    (YELLOW, GREEN),
    (GREEN, GREEN),
    (GREEN, BLUE),
    (BLUE, BLUE),
    (BLUE, INDIGO),
    (INDIGO, INDIGO),
    (INDIGO, VIOLET),
    (VIOLET, VIOLET),
];

/// Rainbow palette used by the timer-drop generator.
pub const RAINBOW: [RGB8; 7] = [RED, ORANGE, YELLOW, GREEN, BLUE, INDIGO, VIOLET];

/// Base-8 digit color; values fold modulo 8.
#[must_use]
pub fn base8(value: u8) -> RGB8 {
    BASE_8[usize::from(value % 8)]
}

/// Weekday color, 0 = Sunday.
#[must_use]
pub fn day(weekday: u8) -> RGB8 {
    DAYS[usize::from(weekday % 7)]
}

/// Month color pair, month 1-12.
#[must_use]
pub fn month_pair(month: u8) -> (RGB8, RGB8) {
    MONTHS[usize::from(month.wrapping_sub(1) % 12)]
}

/// Hour color pair, hour 1-12.
#[must_use]
pub fn hour_pair(hour12: u8) -> (RGB8, RGB8) {
    HOURS[usize::from(hour12.wrapping_sub(1) % 12)]
}

/// Week-of-month color, week 1-5 (5 and up read blue).
#[must_use]
pub fn week_of_month(week: u8) -> RGB8 {
    match week {
        1 => RED,
        2 => ORANGE,
        3 => YELLOW,
        4 => GREEN,
        _ => BLUE,
    }
}

/// Rainbow color by index; folds modulo the palette length.
#[must_use]
pub fn rainbow(index: usize) -> RGB8 {
    RAINBOW[index % RAINBOW.len()]
}

/// Accent color for a note frequency, by pitch band.
#[must_use]
pub fn for_frequency(frequency_hz: u16) -> RGB8 {
    match frequency_hz {
        f if f >= 523 => RED,    // C5 and above
        f if f >= 494 => VIOLET, // B4
        f if f >= 440 => INDIGO, // A4
        f if f >= 392 => BLUE,   // G4
        f if f >= 349 => GREEN,  // F4
        f if f >= 330 => YELLOW, // E4
        f if f >= 294 => ORANGE, // D4
        _ => RED,
    }
}

/// Scale a color's brightness by `level` / 255.
#[must_use]
pub fn scale(c: RGB8, level: u8) -> RGB8 {
    let mul = |v: u8| -> u8 {
        let scaled = (u16::from(v) * u16::from(level)) / 255;
        scaled as u8 // always <= 255
    };
    RGB8::new(mul(c.r), mul(c.g), mul(c.b))
}
