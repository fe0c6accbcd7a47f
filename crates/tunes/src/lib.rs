//! Note model and cooperative tune playback.
//!
//! A [`TunePlayer`] never blocks: each call to [`TunePlayer::advance`]
//! compares the clock against the current note's duration and emits at most
//! one [`NoteCommand`] for the tone sink. All note timing is exact integer
//! math derived from a fixed whole-note length, so two players fed the same
//! clock produce identical schedules.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]

pub mod library;
pub mod notes;
pub mod player;
pub mod timing;

pub use notes::{NoteEvent, NoteLength, Pitch, PitchClass, TimeSignature, Tune};
pub use player::{NoteCommand, TunePlayer};
pub use timing::{note_duration_ms, WHOLE_NOTE_MS};
