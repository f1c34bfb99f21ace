//! # note_speller
//!
//! Key-signature-aware spelling of chords, scales, and diatonic triads:
//! every root note carries a preferred accidental table, so derived notes
//! come out the way a chart for that key would print them.
//!
//! ## Example
//! ```rust
//! use note_speller::{diatonic_triads, spell_chord, spell_scale};
//! use note_speller::{ChordKind, RootNote, ScaleKind};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Parse the user's selection
//!     let root: RootNote = "Eb".parse()?;
//!     let kind: ChordKind = "minor".parse()?;
//!
//!     // 2) Spell the chord in the root's preferred accidentals
//!     assert_eq!(spell_chord(root, kind), ["Eb", "Gb", "Bb"]);
//!
//!     // 3) Scales and the harmony built on them agree note for note
//!     let scale = spell_scale(RootNote::A, ScaleKind::NaturalMinor);
//!     assert_eq!(scale.ascending(), &["A", "B", "C", "D", "E", "F", "G"]);
//!
//!     let triads = diatonic_triads(RootNote::A, ScaleKind::NaturalMinor);
//!     assert_eq!(triads[0].chord, "Am");
//!     assert_eq!(triads[0].notes, "A - C - E");
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Root notes, note names, and parse errors.
pub use spelling::{NoteName, ParseError, RootNote};

/// Chord spelling API.
pub use chord::{spell_chord, ChordKind};

/// Scale spelling and diatonic harmony API.
pub use scale::{diatonic_triads, spell_scale, DiatonicTriad, ScaleKind, ScaleNotes};

/// Note naming and accidental tables.
pub mod spelling;

/// Chord spelling module.
pub mod chord;

/// Scale and triad derivation module.
pub mod scale;
