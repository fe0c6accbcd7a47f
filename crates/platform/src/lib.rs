//! Collaborator boundary for the Glimmer pocket companion runtime core.
//!
//! Every piece of hardware and every externally-owned service the core talks
//! to is expressed here as a trait, so the coordination core stays pure and
//! host-testable. The crate also owns the monotonic clock primitives that all
//! timers in the workspace are built on.
//!
//! # Architecture Layers
//!
//! ```text
//! Coordination core (runtime crate)
//!         ↓
//! Feature layers (patterns, tunes)
//!         ↓
//! Collaborator boundary (this crate - trait abstractions)
//!         ↓
//! Hardware layer (vendor HAL, drivers)
//! ```
//!
//! # Collaborators
//!
//! - [`DisplayLink`] - high-level view frames, one present per tick
//! - [`LedStrip`] - indexed color writes plus a flush
//! - [`ToneSink`] - (frequency, duration) tone requests
//! - [`NetworkLink`] - connectivity and wall-clock sync predicates
//! - [`AppHost`] - active-app predicate and reported emotion
//! - [`InputSource`] - polled discrete input events
//! - [`Watchdog`] - one heartbeat per tick
//! - [`SleepControl`] - brightness and the deep-sleep blocking point
//!
//! # Features
//!
//! - `std`: expose the mock collaborators outside of `cfg(test)`
//! - `defmt`: enable `defmt::Format` derives on event and state types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod apps;
pub mod audio;
pub mod calendar;
pub mod clock;
pub mod display;
pub mod input;
pub mod led;
pub mod mocks;
pub mod net;
pub mod sleep;
pub mod watchdog;

pub use apps::{AppHost, Emotion};
pub use audio::ToneSink;
pub use calendar::{CalendarClock, CalendarSnapshot};
pub use clock::{ActivityTracker, ClockReading, ClockSource};
pub use display::{DisplayLink, ViewFrame};
pub use input::{InputEvent, InputSource};
pub use led::{LedStrip, STRIP_LEN};
pub use net::NetworkLink;
pub use sleep::SleepControl;
pub use watchdog::Watchdog;

// Re-export the LED color type so downstream crates name one source of truth.
pub use smart_leds::RGB8;
