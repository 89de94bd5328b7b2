//! Symbolic pitches ("C4", "F#3", "Bb2") and Tone-style note values ("8n").

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteParseError {
    #[error("empty note name")]
    Empty,
    #[error("unknown pitch letter {0:?}")]
    BadLetter(char),
    #[error("missing or invalid octave in {0:?}")]
    BadOctave(String),
    #[error("invalid note value {0:?}, expected e.g. \"4n\" or \"8n\"")]
    BadValue(String),
}

/// A pitch identified by its MIDI note number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    midi: i32,
}

impl Note {
    pub const fn from_midi(midi: i32) -> Self {
        Self { midi }
    }

    /// Pitch from a name such as "C4", "F#3" or "Bb2" for static tables.
    ///
    /// Evaluated in a `const`/`static` initializer a bad name fails the build;
    /// runtime input goes through `FromStr` instead.
    pub const fn named(name: &str) -> Self {
        let b = name.as_bytes();
        assert!(!b.is_empty(), "empty note name");
        let pitch_class: i32 = match b[0] {
            b'C' => 0,
            b'D' => 2,
            b'E' => 4,
            b'F' => 5,
            b'G' => 7,
            b'A' => 9,
            b'B' => 11,
            _ => panic!("unknown pitch letter"),
        };
        let mut i = 1;
        let mut accidental = 0;
        if i < b.len() && b[i] == b'#' {
            accidental = 1;
            i += 1;
        } else if i < b.len() && b[i] == b'b' {
            accidental = -1;
            i += 1;
        }
        let negative = i < b.len() && b[i] == b'-';
        if negative {
            i += 1;
        }
        assert!(i < b.len(), "missing octave");
        let mut octave = 0;
        while i < b.len() {
            assert!(b[i].is_ascii_digit(), "invalid octave");
            octave = octave * 10 + (b[i] - b'0') as i32;
            i += 1;
        }
        if negative {
            octave = -octave;
        }
        Self::from_midi((octave + 1) * 12 + pitch_class + accidental)
    }

    pub fn midi(self) -> i32 {
        self.midi
    }

    pub fn frequency_hz(self) -> f32 {
        midi_to_hz(self.midi as f32)
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;
        let pitch_class = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            other => return Err(NoteParseError::BadLetter(other)),
        };
        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let octave: i32 = octave_str
            .parse()
            .map_err(|_| NoteParseError::BadOctave(s.to_string()))?;
        // MIDI 60 is C4
        Ok(Note::from_midi((octave + 1) * 12 + pitch_class + accidental))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        let pc = self.midi.rem_euclid(12) as usize;
        let octave = self.midi.div_euclid(12) - 1;
        write!(f, "{}{}", NAMES[pc], octave)
    }
}

pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}

/// A note length as a fraction of a whole note, written "4n" (quarter), "8n" (eighth), ...
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteValue {
    divisions: u32,
}

impl NoteValue {
    pub const WHOLE: NoteValue = NoteValue { divisions: 1 };
    pub const QUARTER: NoteValue = NoteValue { divisions: 4 };
    pub const EIGHTH: NoteValue = NoteValue { divisions: 8 };

    /// Length in seconds at `bpm` quarter notes per minute.
    pub fn seconds(self, bpm: f32) -> f64 {
        let quarter = 60.0 / bpm as f64;
        quarter * 4.0 / self.divisions as f64
    }
}

impl FromStr for NoteValue {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || NoteParseError::BadValue(s.to_string());
        let digits = s.trim().strip_suffix('n').ok_or_else(bad)?;
        let divisions: u32 = digits.parse().map_err(|_| bad())?;
        if divisions == 0 || !divisions.is_power_of_two() || divisions > 64 {
            return Err(bad());
        }
        Ok(NoteValue { divisions })
    }
}
