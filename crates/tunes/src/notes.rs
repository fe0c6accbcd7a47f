//! Pitch, duration, and tune data types.

/// The twelve pitch classes of the chromatic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum PitchClass {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

/// Equal-temperament frequencies for octave 4, in centihertz.
const OCTAVE4_CENTIHZ: [u32; 12] = [
    26_163, 27_718, 29_366, 31_113, 32_963, 34_923, 36_999, 39_200, 41_530, 44_000, 46_616,
    49_388,
];

impl PitchClass {
    fn semitone(self) -> usize {
        self as usize
    }
}

/// Frequency of a pitch in hertz, rounded to the nearest integer.
///
/// Octaves shift by powers of two from the octave-4 reference table, so the
/// math stays exact up to the final rounding.
pub fn frequency_hz(class: PitchClass, octave: u8) -> u16 {
    let base = OCTAVE4_CENTIHZ
        .get(class.semitone())
        .copied()
        .unwrap_or(44_000);
    let shifted = if octave >= 4 {
        base << (octave - 4).min(4)
    } else {
        base >> (4 - octave).min(4)
    };
    let hz = (shifted + 50) / 100;
    hz.min(u32::from(u16::MAX)) as u16
}

/// A sounding pitch or a silent rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pitch {
    /// Silence for the note's duration.
    Rest,
    /// Pitch class plus octave number.
    Tone(PitchClass, u8),
}

/// Note lengths, including the dotted variants at 3/2 of their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum NoteLength {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    DottedHalf,
    DottedQuarter,
    DottedEighth,
}

impl NoteLength {
    /// Fraction of a whole note, as (numerator, denominator).
    pub(crate) fn fraction(self) -> (u32, u32) {
        match self {
            NoteLength::Whole => (1, 1),
            NoteLength::Half => (1, 2),
            NoteLength::Quarter => (1, 4),
            NoteLength::Eighth => (1, 8),
            NoteLength::Sixteenth => (1, 16),
            NoteLength::DottedHalf => (3, 4),
            NoteLength::DottedQuarter => (3, 8),
            NoteLength::DottedEighth => (3, 16),
        }
    }
}

/// Meter of a tune. The denominator decides which note gets the beat:
/// 2/2 the half, 3/4 and 4/4 the quarter, 6/8 the eighth, 12/16 the
/// sixteenth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum TimeSignature {
    TwoTwo,
    ThreeFour,
    FourFour,
    SixEight,
    TwelveSixteen,
}

/// One entry in a tune: what to sound, for how long, and which strip pixels
/// accent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    /// Tone or rest.
    pub pitch: Pitch,
    /// Duration relative to the whole note.
    pub length: NoteLength,
    /// Bitmask of strip pixels to flash while the note sounds.
    pub accent_mask: u8,
}

/// A complete melody with its meter.
#[derive(Debug, Clone, Copy)]
pub struct Tune {
    /// Display name, for logs.
    pub name: &'static str,
    /// Meter used for duration scaling.
    pub signature: TimeSignature,
    /// Notes in playback order.
    pub notes: &'static [NoteEvent],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concert_a_is_440() {
        assert_eq!(frequency_hz(PitchClass::A, 4), 440);
    }

    #[test]
    fn octave_up_doubles() {
        assert_eq!(frequency_hz(PitchClass::A, 5), 880);
        assert_eq!(frequency_hz(PitchClass::A, 3), 220);
    }

    #[test]
    fn middle_c_rounds_to_262() {
        assert_eq!(frequency_hz(PitchClass::C, 4), 262);
    }

    #[test]
    fn dotted_lengths_are_three_halves() {
        let (n, d) = NoteLength::DottedQuarter.fraction();
        let (bn, bd) = NoteLength::Quarter.fraction();
        assert_eq!(n * bd * 2, bn * d * 3);
    }
}
