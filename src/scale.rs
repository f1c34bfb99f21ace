//! Scale spelling and diatonic harmony
//!
//! Scale kinds with their fixed offset patterns (melodic minor carries a
//! distinct descending pattern), and triads stacked from scale degrees so
//! the displayed harmony always agrees with the displayed scale.

use std::fmt::Display;
use std::str::FromStr;

use crate::chord::ChordKind;
use crate::spelling::{NoteName, ParseError, RootNote, SEMITONES};

/// Number of degrees in the diatonic scales handled here.
const DEGREES: usize = 7;

/// Roman-numeral labels for the seven degrees, shared by every scale kind.
const DEGREE_LABELS: [&str; DEGREES] = ["I", "ii", "iii", "IV", "V", "vi", "vii"];

/// Offsets of the melodic-minor descent, from the root down through the
/// lowered seventh and sixth. A fixed list of its own, not the ascending
/// pattern reversed.
const MELODIC_MINOR_DESCENT: [u8; DEGREES] = [0, 10, 8, 7, 5, 3, 2];

/// Triad quality on each degree of the major scale.
const MAJOR_QUALITIES: [ChordKind; DEGREES] = [
    ChordKind::Major, ChordKind::Minor, ChordKind::Minor, ChordKind::Major,
    ChordKind::Major, ChordKind::Minor, ChordKind::Diminished,
];

/// Triad quality on each degree of the natural minor scale.
const NATURAL_MINOR_QUALITIES: [ChordKind; DEGREES] = [
    ChordKind::Minor, ChordKind::Diminished, ChordKind::Major, ChordKind::Minor,
    ChordKind::Minor, ChordKind::Major, ChordKind::Major,
];

/// Triad quality on each degree of the harmonic minor scale.
const HARMONIC_MINOR_QUALITIES: [ChordKind; DEGREES] = [
    ChordKind::Minor, ChordKind::Diminished, ChordKind::Augmented, ChordKind::Minor,
    ChordKind::Major, ChordKind::Major, ChordKind::Diminished,
];

/// Triad quality on each degree of the melodic minor scale (ascending form).
const MELODIC_MINOR_QUALITIES: [ChordKind; DEGREES] = [
    ChordKind::Minor, ChordKind::Minor, ChordKind::Augmented, ChordKind::Major,
    ChordKind::Major, ChordKind::Diminished, ChordKind::Diminished,
];

/// The four scale kinds offered by the key finder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Major scale.
    Major,
    /// Natural minor scale.
    NaturalMinor,
    /// Harmonic minor: natural minor with a raised seventh.
    HarmonicMinor,
    /// Melodic minor: raised sixth and seventh ascending, lowered again on
    /// the way down.
    MelodicMinor,
}

impl ScaleKind {
    /// All scale kinds in selector order.
    pub const ALL: [ScaleKind; 4] = [
        ScaleKind::Major,
        ScaleKind::NaturalMinor,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
    ];

    /// Semitone offsets from the root, ascending.
    const fn ascending_pattern(self) -> [u8; DEGREES] {
        match self {
            ScaleKind::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleKind::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            ScaleKind::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            ScaleKind::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// Triad quality on each scale degree.
    const fn degree_qualities(self) -> [ChordKind; DEGREES] {
        match self {
            ScaleKind::Major => MAJOR_QUALITIES,
            ScaleKind::NaturalMinor => NATURAL_MINOR_QUALITIES,
            ScaleKind::HarmonicMinor => HARMONIC_MINOR_QUALITIES,
            ScaleKind::MelodicMinor => MELODIC_MINOR_QUALITIES,
        }
    }
}

impl Display for ScaleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ScaleKind::Major => "major",
            ScaleKind::NaturalMinor => "natural minor",
            ScaleKind::HarmonicMinor => "harmonic minor",
            ScaleKind::MelodicMinor => "melodic minor",
        };
        write!(f, "{token}")
    }
}

impl FromStr for ScaleKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(ScaleKind::Major),
            "natural minor" => Ok(ScaleKind::NaturalMinor),
            "harmonic minor" => Ok(ScaleKind::HarmonicMinor),
            "melodic minor" => Ok(ScaleKind::MelodicMinor),
            _ => Err(ParseError::UnknownScaleKind(s.to_string())),
        }
    }
}

/// The spelled notes of one octave of a scale, starting on the root.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScaleNotes {
    /// Scales spelled identically in both directions.
    Uniform([NoteName; DEGREES]),
    /// Melodic minor: distinct spellings up and down.
    Directional {
        /// Notes going up, starting on the root.
        ascending: [NoteName; DEGREES],
        /// Notes coming down, starting on the root and falling through the
        /// lowered seventh and sixth.
        descending: [NoteName; DEGREES],
    },
}

impl ScaleNotes {
    /// The ascending form; for uniform scales this is the only form.
    pub fn ascending(&self) -> &[NoteName; DEGREES] {
        match self {
            ScaleNotes::Uniform(notes) => notes,
            ScaleNotes::Directional { ascending, .. } => ascending,
        }
    }

    /// The distinct descending form, present only for melodic minor.
    pub fn descending(&self) -> Option<&[NoteName; DEGREES]> {
        match self {
            ScaleNotes::Uniform(_) => None,
            ScaleNotes::Directional { descending, .. } => Some(descending),
        }
    }
}

/// Apply an offset pattern to the root against its spelling table.
fn spell_pattern(root: RootNote, pattern: [u8; DEGREES]) -> [NoteName; DEGREES] {
    let table = root.spelling_table();
    let root_pc = root.pitch_class() as usize;

    let mut notes = [""; DEGREES];
    for (degree, offset) in pattern.into_iter().enumerate() {
        notes[degree] = table[(root_pc + offset as usize) % SEMITONES];
    }
    notes
}

/// Spell one octave of a scale.
///
/// Major, natural minor, and harmonic minor come back as a single uniform
/// spelling; melodic minor carries separate ascending and descending forms.
///
/// # Examples
/// ```
/// use note_speller::{spell_scale, RootNote, ScaleKind};
///
/// let c_major = spell_scale(RootNote::C, ScaleKind::Major);
/// assert_eq!(c_major.ascending(), &["C", "D", "E", "F", "G", "A", "B"]);
/// assert!(c_major.descending().is_none());
/// ```
pub fn spell_scale(root: RootNote, kind: ScaleKind) -> ScaleNotes {
    let ascending = spell_pattern(root, kind.ascending_pattern());
    match kind {
        ScaleKind::Major | ScaleKind::NaturalMinor | ScaleKind::HarmonicMinor => {
            ScaleNotes::Uniform(ascending)
        }
        ScaleKind::MelodicMinor => ScaleNotes::Directional {
            ascending,
            descending: spell_pattern(root, MELODIC_MINOR_DESCENT),
        },
    }
}

/// One diatonic triad: degree label, chord symbol, and display notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicTriad {
    /// Roman-numeral degree label, "I" through "vii".
    pub degree: &'static str,
    /// Chord symbol: root name plus quality suffix, e.g. "Dm" or "Bdim".
    pub chord: String,
    /// The three member notes joined for display, e.g. "D - F - A".
    pub notes: String,
}

/// Derive the seven diatonic triads of a scale by stacking thirds on each
/// degree.
///
/// Member notes come straight from the spelled scale (degree d plus the
/// notes two and four degrees above it, wrapping within the octave), so the
/// triads always agree with [`spell_scale`] for the same root and kind.
/// Melodic minor builds from its ascending form.
///
/// # Examples
/// ```
/// use note_speller::{diatonic_triads, RootNote, ScaleKind};
///
/// let triads = diatonic_triads(RootNote::C, ScaleKind::Major);
/// assert_eq!(triads[0].degree, "I");
/// assert_eq!(triads[0].chord, "C");
/// assert_eq!(triads[0].notes, "C - E - G");
/// ```
pub fn diatonic_triads(root: RootNote, kind: ScaleKind) -> [DiatonicTriad; DEGREES] {
    let scale = spell_scale(root, kind);
    let notes = scale.ascending();
    let qualities = kind.degree_qualities();

    std::array::from_fn(|degree| {
        let members = [
            notes[degree],
            notes[(degree + 2) % DEGREES],
            notes[(degree + 4) % DEGREES],
        ];
        DiatonicTriad {
            degree: DEGREE_LABELS[degree],
            chord: format!("{}{}", notes[degree], qualities[degree].suffix()),
            notes: members.join(" - "),
        }
    })
}
