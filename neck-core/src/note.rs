//! # Pitch-Class Module
//!
//! The 12-tone pitch-class circle that every other table in this crate is
//! derived from. Notes are canonically flat-spelled; sharp input is
//! normalized on the way in, so equality is always by canonical form.
//!
//! ## Features
//! - The fixed 12-note circle in circle order, starting at A
//! - Sharp-to-flat alias normalization (A# parses as Bb, etc.)
//! - ASCII and Unicode spellings for GUI/terminal labels
//! - Modular transposition around the circle

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::NeckError;

/// One of the 12 pitch classes, octave-independent.
///
/// Declared in the circle order used throughout the engine, so the
/// discriminant of each variant is its semitone offset from A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Note {
    A,
    #[serde(rename = "Bb")]
    BFlat,
    B,
    C,
    #[serde(rename = "Db")]
    DFlat,
    D,
    #[serde(rename = "Eb")]
    EFlat,
    E,
    F,
    #[serde(rename = "Gb")]
    GFlat,
    G,
    #[serde(rename = "Ab")]
    AFlat,
}

/// Sharp-to-flat spelling aliases. Only these five sharps are legal input;
/// B#, Cb, E#, and Fb are rejected by the parser.
pub static SHARP_TO_FLAT: Lazy<BTreeMap<&'static str, Note>> = Lazy::new(|| {
    BTreeMap::from([
        ("A#", Note::BFlat),
        ("C#", Note::DFlat),
        ("D#", Note::EFlat),
        ("F#", Note::GFlat),
        ("G#", Note::AFlat),
    ])
});

/// ASCII spelling to Unicode label for every legal spelling, sharps
/// included. Front ends draw these; the parser accepts them back, so the
/// reverse mapping is `Note::parse`.
pub static NOTE_LABELS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("A#", "A\u{266f}"),
        ("A", "A"),
        ("Ab", "A\u{266d}"),
        ("B", "B"),
        ("Bb", "B\u{266d}"),
        ("C#", "C\u{266f}"),
        ("C", "C"),
        ("D#", "D\u{266f}"),
        ("D", "D"),
        ("Db", "D\u{266d}"),
        ("E", "E"),
        ("Eb", "E\u{266d}"),
        ("F#", "F\u{266f}"),
        ("F", "F"),
        ("G#", "G\u{266f}"),
        ("G", "G"),
        ("Gb", "G\u{266d}"),
    ])
});

impl Note {
    /// The 12-note circle in circle order. Index equals `semitone()`.
    pub const CHROMATIC: [Note; 12] = [
        Note::A,
        Note::BFlat,
        Note::B,
        Note::C,
        Note::DFlat,
        Note::D,
        Note::EFlat,
        Note::E,
        Note::F,
        Note::GFlat,
        Note::G,
        Note::AFlat,
    ];

    /// Semitone offset from A (0..=11).
    pub fn semitone(self) -> u8 {
        self as u8
    }

    /// The note `semitones` steps up the circle, wrapping past Ab back
    /// to A.
    pub fn transposed(self, semitones: u8) -> Note {
        Self::CHROMATIC[(self as usize + semitones as usize) % 12]
    }

    /// Parse a note name in any legal spelling.
    ///
    /// Accepts the canonical flat names ("A", "Bb"), the five sharp
    /// aliases ("A#"), and the Unicode forms of both ("B\u{266d}",
    /// "A\u{266f}"). Everything else, including B#/Cb/E#/Fb, is an
    /// `InvalidNote` error.
    pub fn parse(name: &str) -> Result<Note, NeckError> {
        let trimmed = name.trim();
        // Unicode accidentals fold onto their ASCII spellings first.
        let folded: String = trimmed
            .chars()
            .map(|c| match c {
                '\u{266d}' => 'b',
                '\u{266f}' => '#',
                other => other,
            })
            .collect();
        for note in Self::CHROMATIC {
            if note.name() == folded {
                return Ok(note);
            }
        }
        SHARP_TO_FLAT
            .get(folded.as_str())
            .copied()
            .ok_or_else(|| NeckError::InvalidNote(name.to_string()))
    }

    /// Canonical ASCII spelling (flats only).
    pub fn name(self) -> &'static str {
        match self {
            Note::A => "A",
            Note::BFlat => "Bb",
            Note::B => "B",
            Note::C => "C",
            Note::DFlat => "Db",
            Note::D => "D",
            Note::EFlat => "Eb",
            Note::E => "E",
            Note::F => "F",
            Note::GFlat => "Gb",
            Note::G => "G",
            Note::AFlat => "Ab",
        }
    }

    /// Canonical Unicode label (flats only).
    pub fn unicode(self) -> &'static str {
        NOTE_LABELS[self.name()]
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = NeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s)
    }
}
