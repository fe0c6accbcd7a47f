//! LED pattern engine for the Glimmer pocket companion.
//!
//! Exactly one generator runs per tick, selected by the current
//! [`VisualMode`]. Each generator owns its private animation state and its
//! own refresh interval: the loading bar steps at 100 ms while festive
//! twinkle runs at 50 ms, and neither is forced onto the other's rate. A
//! generator whose interval has not elapsed returns without touching the
//! buffer.
//!
//! Mode switches clear the pixel buffer and discard all generator state
//! before the next generator runs, so no pixels or counters leak between
//! modes. The single deliberate exception is the timer-drop generator's
//! tracked background color, which survives across full fill cycles.
//!
//! No generator sleeps, draws to hardware, or reads the wall clock. The
//! calendar arrives as a snapshot and all output goes into the
//! [`PixelBuffer`] the caller owns.

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod color;
pub mod config;
pub mod engine;

mod clock_encoding;
mod emotion;
mod festive;
mod loading;
mod menu;
mod timer_drop;

pub use buffer::PixelBuffer;
pub use engine::{BootStage, EncodingSubmode, PatternCue, PatternEngine, VisualMode};
