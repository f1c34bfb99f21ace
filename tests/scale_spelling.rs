//! Integration tests for scale spelling and the diatonic triads built on it.

use note_speller::{
    diatonic_triads, spell_scale, ParseError, RootNote, ScaleKind, ScaleNotes,
};
use pretty_assertions::assert_eq;

/// Hand-checked scale spellings across both accidental tables.
const EXPECTED_SCALES: [(RootNote, ScaleKind, [&str; 7]); 8] = [
    (RootNote::C, ScaleKind::Major, ["C", "D", "E", "F", "G", "A", "B"]),
    (RootNote::C, ScaleKind::NaturalMinor, ["C", "D", "D#", "F", "G", "G#", "A#"]),
    (RootNote::C, ScaleKind::HarmonicMinor, ["C", "D", "D#", "F", "G", "G#", "B"]),
    (RootNote::Eb, ScaleKind::Major, ["Eb", "F", "G", "Ab", "Bb", "C", "D"]),
    (RootNote::F, ScaleKind::Major, ["F", "G", "A", "Bb", "C", "D", "E"]),
    (RootNote::Fs, ScaleKind::Major, ["F#", "G#", "A#", "B", "C#", "D#", "F"]),
    (RootNote::Bb, ScaleKind::NaturalMinor, ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"]),
    (RootNote::A, ScaleKind::HarmonicMinor, ["A", "B", "C", "D", "E", "F", "G#"]),
];

/// Degree label, chord symbol, and member notes for every triad of C major.
const C_MAJOR_TRIADS: [(&str, &str, &str); 7] = [
    ("I", "C", "C - E - G"),
    ("ii", "Dm", "D - F - A"),
    ("iii", "Em", "E - G - B"),
    ("IV", "F", "F - A - C"),
    ("V", "G", "G - B - D"),
    ("vi", "Am", "A - C - E"),
    ("vii", "Bdim", "B - D - F"),
];

/// Every triad of A natural minor.
const A_NATURAL_MINOR_TRIADS: [(&str, &str, &str); 7] = [
    ("I", "Am", "A - C - E"),
    ("ii", "Bdim", "B - D - F"),
    ("iii", "C", "C - E - G"),
    ("IV", "Dm", "D - F - A"),
    ("V", "Em", "E - G - B"),
    ("vi", "F", "F - A - C"),
    ("vii", "G", "G - B - D"),
];

#[test]
fn test_fixed_scale_spellings() {
    for (root, kind, expected) in EXPECTED_SCALES {
        assert_eq!(spell_scale(root, kind).ascending(), &expected, "{root} {kind}");
    }
}

#[test]
fn test_melodic_minor_directions() {
    let c = spell_scale(RootNote::C, ScaleKind::MelodicMinor);
    assert_eq!(c.ascending(), &["C", "D", "D#", "F", "G", "A", "B"]);
    assert_eq!(
        c.descending().expect("melodic minor carries a descending form"),
        &["C", "A#", "G#", "G", "F", "D#", "D"]
    );

    let a = spell_scale(RootNote::A, ScaleKind::MelodicMinor);
    assert_eq!(a.ascending(), &["A", "B", "C", "D", "E", "F#", "G#"]);
    assert_eq!(
        a.descending().expect("melodic minor carries a descending form"),
        &["A", "G", "F", "E", "D", "C", "B"]
    );
}

#[test]
fn test_melodic_minor_lowers_seventh_and_sixth() {
    let mut failures = Vec::new();

    for root in RootNote::ALL {
        let scale = spell_scale(root, ScaleKind::MelodicMinor);
        let ascending = scale.ascending();
        let descending = scale
            .descending()
            .expect("melodic minor carries a descending form");

        if descending[0] != root.name() {
            failures.push(format!("{root}: descent starts on `{}`", descending[0]));
        }
        // The raised degrees must fall on the way down.
        if descending[1] == ascending[6] {
            failures.push(format!("{root}: seventh `{}` was not lowered", descending[1]));
        }
        if descending[2] == ascending[5] {
            failures.push(format!("{root}: sixth `{}` was not lowered", descending[2]));
        }
        // Below the sixth the two directions share their notes.
        for (down, up) in [(3, 4), (4, 3), (5, 2), (6, 1)] {
            if descending[down] != ascending[up] {
                failures.push(format!(
                    "{root}: descent note {down} is `{}`, expected `{}`",
                    descending[down], ascending[up]
                ));
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} melodic minor descents were wrong:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_uniform_scales_have_no_descent() {
    let uniform = [ScaleKind::Major, ScaleKind::NaturalMinor, ScaleKind::HarmonicMinor];
    for root in RootNote::ALL {
        for kind in uniform {
            let scale = spell_scale(root, kind);
            assert!(matches!(scale, ScaleNotes::Uniform(_)), "{root} {kind}");
            assert!(scale.descending().is_none(), "{root} {kind}");
        }
        assert!(matches!(
            spell_scale(root, ScaleKind::MelodicMinor),
            ScaleNotes::Directional { .. }
        ));
    }
}

#[test]
fn test_scales_start_on_the_root() {
    for root in RootNote::ALL {
        for kind in ScaleKind::ALL {
            let scale = spell_scale(root, kind);
            assert_eq!(scale.ascending()[0], root.name(), "{root} {kind}");
        }
    }
}

#[test]
fn test_c_major_triads() {
    let triads = diatonic_triads(RootNote::C, ScaleKind::Major);
    for (triad, (degree, chord, notes)) in triads.iter().zip(C_MAJOR_TRIADS) {
        assert_eq!(triad.degree, degree);
        assert_eq!(triad.chord, chord, "degree {degree}");
        assert_eq!(triad.notes, notes, "degree {degree}");
    }
}

#[test]
fn test_a_natural_minor_triads() {
    let triads = diatonic_triads(RootNote::A, ScaleKind::NaturalMinor);
    for (triad, (degree, chord, notes)) in triads.iter().zip(A_NATURAL_MINOR_TRIADS) {
        assert_eq!(triad.degree, degree);
        assert_eq!(triad.chord, chord, "degree {degree}");
        assert_eq!(triad.notes, notes, "degree {degree}");
    }
}

#[test]
fn test_minor_variant_triads() {
    // Harmonic minor raises the seventh, turning degree iii augmented and
    // degree vii diminished.
    let harmonic = diatonic_triads(RootNote::A, ScaleKind::HarmonicMinor);
    assert_eq!(harmonic[2].chord, "Caug");
    assert_eq!(harmonic[2].notes, "C - E - G#");
    assert_eq!(harmonic[6].chord, "G#dim");
    assert_eq!(harmonic[6].notes, "G# - B - D");

    // Melodic minor (ascending form) also raises the sixth.
    let melodic = diatonic_triads(RootNote::A, ScaleKind::MelodicMinor);
    assert_eq!(melodic[5].chord, "F#dim");
    assert_eq!(melodic[5].notes, "F# - A - C");
    assert_eq!(melodic[6].chord, "G#dim");
    assert_eq!(melodic[6].notes, "G# - B - D");
}

#[test]
fn test_triads_agree_with_scale() {
    let mut failures = Vec::new();

    for root in RootNote::ALL {
        for kind in ScaleKind::ALL {
            let scale = spell_scale(root, kind);
            let notes = scale.ascending();
            for (degree, triad) in diatonic_triads(root, kind).iter().enumerate() {
                if !triad.chord.starts_with(notes[degree]) {
                    failures.push(format!(
                        "{root} {kind}: triad {degree} is `{}`, scale degree is `{}`",
                        triad.chord, notes[degree]
                    ));
                }
                if !triad.notes.starts_with(notes[degree]) {
                    failures.push(format!(
                        "{root} {kind}: triad {degree} notes `{}` do not start on `{}`",
                        triad.notes, notes[degree]
                    ));
                }
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "{} triads disagreed with their scale:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_scale_kind_parsing() {
    for kind in ScaleKind::ALL {
        let parsed: ScaleKind = kind.to_string().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert_eq!(
        " Harmonic Minor ".parse::<ScaleKind>().unwrap(),
        ScaleKind::HarmonicMinor
    );
    assert!(matches!(
        "minor".parse::<ScaleKind>(),
        Err(ParseError::UnknownScaleKind(_))
    ));
    assert!(matches!(
        "dorian".parse::<ScaleKind>(),
        Err(ParseError::UnknownScaleKind(_))
    ));
}

#[test]
fn test_derivation_is_deterministic() {
    for root in RootNote::ALL {
        for kind in ScaleKind::ALL {
            assert_eq!(spell_scale(root, kind), spell_scale(root, kind), "{root} {kind}");
            assert_eq!(diatonic_triads(root, kind), diatonic_triads(root, kind), "{root} {kind}");
        }
    }
}
