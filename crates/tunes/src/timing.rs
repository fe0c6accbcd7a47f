//! Duration math: note lengths to milliseconds.

use crate::notes::{NoteLength, TimeSignature};

/// Duration of a whole note in a quarter-beat meter at the fixed tempo
/// (120 beats per minute, quarter note = 500 ms).
pub const WHOLE_NOTE_MS: u32 = 2000;

/// Whole-note duration under a given meter.
///
/// The beat is always 500 ms; the meter's denominator decides which note
/// length takes the beat, so durations scale by powers of two around the
/// quarter-beat reference.
fn whole_ms(signature: TimeSignature) -> u32 {
    match signature {
        TimeSignature::TwoTwo => WHOLE_NOTE_MS / 2,
        TimeSignature::ThreeFour | TimeSignature::FourFour => WHOLE_NOTE_MS,
        TimeSignature::SixEight => WHOLE_NOTE_MS * 2,
        TimeSignature::TwelveSixteen => WHOLE_NOTE_MS * 4,
    }
}

/// Exact duration of a note length under a meter, in milliseconds.
///
/// Every length divides the whole-note duration without remainder, so
/// playback never accumulates rounding drift.
pub fn note_duration_ms(length: NoteLength, signature: TimeSignature) -> u32 {
    let (num, den) = length.fraction();
    whole_ms(signature) * num / den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_is_half_a_second_in_common_time() {
        assert_eq!(
            note_duration_ms(NoteLength::Quarter, TimeSignature::FourFour),
            500
        );
    }

    #[test]
    fn dotted_quarter_is_three_eighths() {
        assert_eq!(
            note_duration_ms(NoteLength::DottedQuarter, TimeSignature::FourFour),
            750
        );
    }

    #[test]
    fn the_beat_note_is_always_half_a_second() {
        for (sig, beat) in [
            (TimeSignature::TwoTwo, NoteLength::Half),
            (TimeSignature::ThreeFour, NoteLength::Quarter),
            (TimeSignature::FourFour, NoteLength::Quarter),
            (TimeSignature::SixEight, NoteLength::Eighth),
            (TimeSignature::TwelveSixteen, NoteLength::Sixteenth),
        ] {
            assert_eq!(note_duration_ms(beat, sig), 500, "{sig:?}");
        }
    }

    #[test]
    fn quarter_beat_meters_divide_every_length_exactly() {
        for len in [
            NoteLength::Whole,
            NoteLength::Half,
            NoteLength::Quarter,
            NoteLength::Eighth,
            NoteLength::Sixteenth,
            NoteLength::DottedHalf,
            NoteLength::DottedQuarter,
            NoteLength::DottedEighth,
        ] {
            let (num, den) = len.fraction();
            assert_eq!(whole_ms(TimeSignature::FourFour) * num % den, 0, "{len:?}");
        }
    }
}
