//! Note spelling
//!
//! Pitch classes, the two parallel spelling tables, and the canonical
//! twelve-root input set with its sharp/flat table-selection rule.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in the equal-tempered octave.
pub(crate) const SEMITONES: usize = 12;

/// A spelled note as shown to the user.
///
/// Ordinary spellings come from one of the two tables in this module;
/// enharmonic overrides substitute hand-authored strings such as "B#（C）",
/// which carry the notated name with the sounding pitch in parentheses.
pub type NoteName = &'static str;

/// Sharp spellings, indexed by pitch class.
pub(crate) const SHARP_NAMES: [NoteName; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings, indexed by pitch class.
pub(crate) const FLAT_NAMES: [NoteName; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Errors from parsing user-supplied root, chord, or scale names.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input matched none of the twelve canonical root spellings.
    #[error("unrecognized root note `{0}`; expected one of C, Db, D, Eb, E, F, F#, G, Ab, A, Bb, B")]
    UnknownRootNote(String),

    /// The input matched none of the chord quality names.
    #[error("unrecognized chord type `{0}`; expected major, minor, dim, or aug")]
    UnknownChordKind(String),

    /// The input matched none of the scale names.
    #[error("unrecognized scale type `{0}`; expected major, natural minor, harmonic minor, or melodic minor")]
    UnknownScaleKind(String),
}

/// The twelve canonical root notes offered as input.
///
/// One spelling per pitch class, in selector order: flats for the flat-key
/// roots Db, Eb, Ab, and Bb, but a sharp for F#.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RootNote {
    /// C
    C,
    /// D flat
    Db,
    /// D
    D,
    /// E flat
    Eb,
    /// E
    E,
    /// F
    F,
    /// F sharp
    Fs,
    /// G
    G,
    /// A flat
    Ab,
    /// A
    A,
    /// B flat
    Bb,
    /// B
    B,
}

impl RootNote {
    /// All twelve roots in selector order.
    pub const ALL: [RootNote; SEMITONES] = [
        RootNote::C,
        RootNote::Db,
        RootNote::D,
        RootNote::Eb,
        RootNote::E,
        RootNote::F,
        RootNote::Fs,
        RootNote::G,
        RootNote::Ab,
        RootNote::A,
        RootNote::Bb,
        RootNote::B,
    ];

    /// Position on the chromatic circle, 0 = C through 11 = B.
    pub const fn pitch_class(self) -> u8 {
        match self {
            RootNote::C => 0,
            RootNote::Db => 1,
            RootNote::D => 2,
            RootNote::Eb => 3,
            RootNote::E => 4,
            RootNote::F => 5,
            RootNote::Fs => 6,
            RootNote::G => 7,
            RootNote::Ab => 8,
            RootNote::A => 9,
            RootNote::Bb => 10,
            RootNote::B => 11,
        }
    }

    /// The canonical spelling of this root, e.g. "Eb" or "F#".
    pub const fn name(self) -> NoteName {
        match self {
            RootNote::C => "C",
            RootNote::Db => "Db",
            RootNote::D => "D",
            RootNote::Eb => "Eb",
            RootNote::E => "E",
            RootNote::F => "F",
            RootNote::Fs => "F#",
            RootNote::G => "G",
            RootNote::Ab => "Ab",
            RootNote::A => "A",
            RootNote::Bb => "Bb",
            RootNote::B => "B",
        }
    }

    /// Whether chords and scales on this root are spelled from the flat
    /// table.
    ///
    /// The traditional flat-key set is F, Bb, Eb, Ab, Db, and Gb; the
    /// canonical roots spell Gb's pitch class as F#, so five of the twelve
    /// take flats.
    pub const fn prefers_flats(self) -> bool {
        matches!(
            self,
            RootNote::Db | RootNote::Eb | RootNote::F | RootNote::Ab | RootNote::Bb
        )
    }

    /// The spelling table for this root: flats for flat-key roots, sharps
    /// for everything else.
    pub(crate) fn spelling_table(self) -> &'static [NoteName; SEMITONES] {
        if self.prefers_flats() {
            &FLAT_NAMES
        } else {
            &SHARP_NAMES
        }
    }
}

impl Display for RootNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RootNote {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        RootNote::ALL
            .iter()
            .copied()
            .find(|root| root.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseError::UnknownRootNote(s.to_string()))
    }
}
