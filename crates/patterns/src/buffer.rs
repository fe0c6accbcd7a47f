//! Shared pixel buffer the active generator writes into.

use platform::{RGB8, STRIP_LEN};

use crate::color;

/// The strip-sized pixel staging buffer.
///
/// This is the single point where pixel indices are written, and the single
/// point where they are bounds-checked: an out-of-range index is a no-op,
/// not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: [RGB8; STRIP_LEN],
}

impl PixelBuffer {
    /// A fully dark buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pixels: [color::OFF; STRIP_LEN],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [color::OFF; STRIP_LEN];
    }

    /// Stage `c` at `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, c: RGB8) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = c;
        }
    }

    /// The color at `index`, or off for out-of-range indices.
    #[must_use]
    pub fn get(&self, index: usize) -> RGB8 {
        self.pixels.get(index).copied().unwrap_or(color::OFF)
    }

    /// Fill the whole strip with one color.
    pub fn fill(&mut self, c: RGB8) {
        self.pixels = [c; STRIP_LEN];
    }

    /// All pixels, in strip order.
    #[must_use]
    pub fn as_slice(&self) -> &[RGB8] {
        &self.pixels
    }

    /// True when every pixel equals `c`.
    #[must_use]
    pub fn all_eq(&self, c: RGB8) -> bool {
        self.pixels.iter().all(|p| *p == c)
    }

    /// True when no pixel equals `c`.
    #[must_use]
    pub fn none_eq(&self, c: RGB8) -> bool {
        self.pixels.iter().all(|p| *p != c)
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
