//! LED strip collaborator boundary.

use smart_leds::RGB8;

/// Number of pixels on the device strip.
///
/// The strip length is fixed hardware; generators and the coordinator size
/// their buffers from this constant.
pub const STRIP_LEN: usize = 8;

/// Addressable LED strip: indexed writes plus an explicit flush.
///
/// Index bounds are this driver's contract; the core performs its own
/// defensive bounds check before calling [`set`](LedStrip::set) and never
/// writes out of range.
pub trait LedStrip {
    /// Driver-side failure type.
    type Error: core::fmt::Debug;

    /// Stage a color for one pixel. Not visible until [`show`](LedStrip::show).
    fn set(&mut self, index: usize, color: RGB8) -> Result<(), Self::Error>;

    /// Push all staged colors to the hardware.
    fn show(&mut self) -> Result<(), Self::Error>;
}
