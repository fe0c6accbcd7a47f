//! Built-in tunes and cue tones.

use crate::notes::{frequency_hz, NoteEvent, NoteLength, Pitch, PitchClass, TimeSignature, Tune};

use crate::player::NoteCommand;

const fn tone(class: PitchClass, octave: u8, length: NoteLength, accent_mask: u8) -> NoteEvent {
    NoteEvent {
        pitch: Pitch::Tone(class, octave),
        length,
        accent_mask,
    }
}

/// Rising arpeggio played once the device reaches the home screen.
pub static POWER_ON: Tune = Tune {
    name: "power-on",
    signature: TimeSignature::FourFour,
    notes: &[
        tone(PitchClass::C, 5, NoteLength::Eighth, 0b0000_0011),
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0000_1100),
        tone(PitchClass::G, 5, NoteLength::Eighth, 0b0011_0000),
        tone(PitchClass::C, 6, NoteLength::Quarter, 0b1100_0000),
    ],
};

/// Two-note chirp on network association.
pub static CONNECT_CHIRP: Tune = Tune {
    name: "connect",
    signature: TimeSignature::FourFour,
    notes: &[
        tone(PitchClass::G, 5, NoteLength::Sixteenth, 0),
        tone(PitchClass::C, 6, NoteLength::Eighth, 0),
    ],
};

/// Short seasonal melody in a lilting 6/8.
pub static FESTIVE: Tune = Tune {
    name: "festive",
    signature: TimeSignature::SixEight,
    notes: &[
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0000_0001),
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0000_0010),
        tone(PitchClass::E, 5, NoteLength::DottedQuarter, 0b0000_0100),
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0000_1000),
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0001_0000),
        tone(PitchClass::E, 5, NoteLength::DottedQuarter, 0b0010_0000),
        tone(PitchClass::E, 5, NoteLength::Eighth, 0b0100_0000),
        tone(PitchClass::G, 5, NoteLength::Eighth, 0b1000_0000),
        tone(PitchClass::C, 5, NoteLength::DottedEighth, 0b0000_1111),
        tone(PitchClass::D, 5, NoteLength::Sixteenth, 0b1111_0000),
        tone(PitchClass::E, 5, NoteLength::DottedHalf, 0b1111_1111),
    ],
};

/// Pentatonic landing tones for the falling-drop timer, one per palette
/// color. Indexes past the palette wrap around.
const DROP_SCALE: [(PitchClass, u8); 7] = [
    (PitchClass::C, 5),
    (PitchClass::D, 5),
    (PitchClass::E, 5),
    (PitchClass::G, 5),
    (PitchClass::A, 5),
    (PitchClass::C, 6),
    (PitchClass::D, 6),
];

/// Single tone to sound when a timer drop lands.
pub fn drop_tone(palette_index: usize) -> NoteCommand {
    let (class, octave) = DROP_SCALE[palette_index % DROP_SCALE.len()];
    NoteCommand {
        frequency_hz: frequency_hz(class, octave),
        duration_ms: 75,
        accent_mask: 0,
    }
}

/// Low buzz announcing an error record. The error code nudges the pitch so
/// distinct faults are audibly distinct.
pub fn error_tone(code: u16) -> NoteCommand {
    let base = frequency_hz(PitchClass::A, 3);
    NoteCommand {
        frequency_hz: base + (code % 8) * 10,
        duration_ms: 250,
        accent_mask: 0b1111_1111,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::TunePlayer;
    use platform::ClockReading;

    #[test]
    fn every_tune_terminates() {
        for tune in [&POWER_ON, &CONNECT_CHIRP, &FESTIVE] {
            let mut player = TunePlayer::new();
            player.start(tune);
            let mut ms = 0u32;
            let mut steps = 0;
            while player.is_playing() {
                player.advance(ClockReading::from_millis(ms));
                ms += 10;
                steps += 1;
                assert!(steps < 10_000, "{} never finished", tune.name);
            }
        }
    }

    #[test]
    fn drop_tones_rise_with_the_palette() {
        assert!(drop_tone(0).frequency_hz < drop_tone(6).frequency_hz);
    }

    #[test]
    fn drop_tone_index_wraps() {
        assert_eq!(drop_tone(7).frequency_hz, drop_tone(0).frequency_hz);
    }

    #[test]
    fn error_tones_distinguish_nearby_codes() {
        assert_ne!(
            error_tone(0x0101).frequency_hz,
            error_tone(0x0102).frequency_hz
        );
    }
}
