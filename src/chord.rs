//! Chord spelling
//!
//! The four triad qualities, their semitone triples, and the hand-authored
//! enharmonic corrections for spellings the tables cannot produce.

use std::fmt::Display;
use std::str::FromStr;

use crate::spelling::{NoteName, ParseError, RootNote, SEMITONES};

/// The four triad qualities offered by the chord finder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChordKind {
    /// Major triad (e.g., C-E-G).
    Major,
    /// Minor triad (e.g., A-C-E).
    Minor,
    /// Diminished triad (e.g., B-D-F).
    Diminished,
    /// Augmented triad (e.g., C-E-G#).
    Augmented,
}

impl ChordKind {
    /// All qualities in selector order.
    pub const ALL: [ChordKind; 4] = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Diminished,
        ChordKind::Augmented,
    ];

    /// Semitone offsets of root, third, and fifth.
    pub(crate) const fn intervals(self) -> [u8; 3] {
        match self {
            ChordKind::Major => [0, 4, 7],
            ChordKind::Minor => [0, 3, 7],
            ChordKind::Diminished => [0, 3, 6],
            ChordKind::Augmented => [0, 4, 8],
        }
    }

    /// Chord-symbol suffix, as in "Dm" or "Bdim".
    pub(crate) const fn suffix(self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "aug",
        }
    }
}

impl Display for ChordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ChordKind::Major => "major",
            ChordKind::Minor => "minor",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "aug",
        };
        write!(f, "{token}")
    }
}

impl FromStr for ChordKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(ChordKind::Major),
            "minor" => Ok(ChordKind::Minor),
            "dim" | "diminished" => Ok(ChordKind::Diminished),
            "aug" | "augmented" => Ok(ChordKind::Augmented),
            _ => Err(ParseError::UnknownChordKind(s.to_string())),
        }
    }
}

/// Hand-authored enharmonic corrections, keyed by (root, quality, member).
///
/// Each value carries the notated spelling with the sounding pitch in
/// parentheses; all five correct a fifth whose conventional notation is a
/// double sharp or an otherwise unusual accidental the tables cannot emit.
const SPELLING_OVERRIDES: [(RootNote, ChordKind, usize, NoteName); 5] = [
    (RootNote::E,  ChordKind::Augmented,  2, "B#（C）"),  // E - G# - B#, sounds as C
    (RootNote::Fs, ChordKind::Augmented,  2, "C##（D）"), // F# - A# - C##, sounds as D
    (RootNote::A,  ChordKind::Augmented,  2, "E#（F）"),  // A - C# - E#, sounds as F
    (RootNote::Bb, ChordKind::Diminished, 2, "Fb（E）"),  // Bb - Db - Fb, sounds as E
    (RootNote::B,  ChordKind::Augmented,  2, "Fx（G）"),  // B - D# - Fx, sounds as G
];

/// Look up the override for one chord member, if any.
fn override_for(root: RootNote, kind: ChordKind, member: usize) -> Option<NoteName> {
    SPELLING_OVERRIDES
        .iter()
        .find(|(r, k, m, _)| *r == root && *k == kind && *m == member)
        .map(|(_, _, _, name)| *name)
}

/// Spell the three notes of a chord, root first.
///
/// The spelling table follows the root's key signature (flats for Db, Eb, F,
/// Ab, and Bb; sharps otherwise), and the enharmonic overrides win over the
/// table for their exact (root, quality, member) key.
///
/// # Examples
/// ```
/// use note_speller::{spell_chord, ChordKind, RootNote};
///
/// assert_eq!(spell_chord(RootNote::C, ChordKind::Major), ["C", "E", "G"]);
/// assert_eq!(spell_chord(RootNote::F, ChordKind::Major), ["F", "A", "C"]);
/// assert_eq!(spell_chord(RootNote::E, ChordKind::Augmented)[2], "B#（C）");
/// ```
pub fn spell_chord(root: RootNote, kind: ChordKind) -> [NoteName; 3] {
    let table = root.spelling_table();
    let root_pc = root.pitch_class() as usize;

    let mut notes = [""; 3];
    for (member, offset) in kind.intervals().into_iter().enumerate() {
        notes[member] = override_for(root, kind, member)
            .unwrap_or_else(|| table[(root_pc + offset as usize) % SEMITONES]);
    }
    notes
}
