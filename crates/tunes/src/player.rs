//! Cooperative tune playback driven by clock comparisons.

use platform::ClockReading;

use crate::notes::{frequency_hz, NoteEvent, Pitch, Tune};
use crate::timing::note_duration_ms;

/// A tone the caller should forward to the tone sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoteCommand {
    /// Tone frequency in hertz.
    pub frequency_hz: u16,
    /// How long the tone should sound, in milliseconds.
    pub duration_ms: u32,
    /// Strip pixels to flash while the tone sounds.
    pub accent_mask: u8,
}

/// Plays one tune at a time, one note per schedule boundary.
///
/// Starting a new tune supersedes whatever was playing. `advance` does the
/// actual work and must be called every tick while a tune is active.
#[derive(Debug, Default)]
pub struct TunePlayer {
    current: Option<&'static Tune>,
    index: usize,
    note_started: Option<ClockReading>,
}

impl TunePlayer {
    /// Idle player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tune is in progress.
    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Begin a tune from its first note, replacing any tune in progress.
    /// The first note is emitted by the next `advance` call.
    pub fn start(&mut self, tune: &'static Tune) {
        self.current = Some(tune);
        self.index = 0;
        self.note_started = None;
    }

    /// Abandon the current tune without sounding anything further.
    pub fn stop(&mut self) {
        self.current = None;
        self.note_started = None;
    }

    /// Move playback forward. Emits a command exactly when a sounding note
    /// begins; rests take up time but emit nothing.
    pub fn advance(&mut self, now: ClockReading) -> Option<NoteCommand> {
        let tune = self.current?;

        if let Some(started) = self.note_started {
            let playing = tune.notes.get(self.index)?;
            let duration = note_duration_ms(playing.length, tune.signature);
            if now.elapsed_since(started) < duration {
                return None;
            }
            self.index += 1;
        }

        let Some(note) = tune.notes.get(self.index) else {
            self.stop();
            return None;
        };
        self.note_started = Some(now);
        command_for(note, tune)
    }
}

fn command_for(note: &NoteEvent, tune: &Tune) -> Option<NoteCommand> {
    match note.pitch {
        Pitch::Rest => None,
        Pitch::Tone(class, octave) => Some(NoteCommand {
            frequency_hz: frequency_hz(class, octave),
            duration_ms: note_duration_ms(note.length, tune.signature),
            accent_mask: note.accent_mask,
        }),
    }
}
