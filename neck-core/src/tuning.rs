//! # Tuning Module
//!
//! Ordered open-string notes for the neck, heaviest string first, plus
//! the built-in preset table the tuning picker offers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NeckError;
use crate::note::Note;

/// Fewest strings a tuning may have.
pub const MIN_STRINGS: usize = 2;
/// Most strings a tuning may have.
pub const MAX_STRINGS: usize = 7;

/// An ordered sequence of open-string notes. Index 0 is the lowest,
/// heaviest string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct Tuning {
    notes: Vec<Note>,
}

impl Tuning {
    /// Build a tuning from open-string notes, heaviest first.
    ///
    /// # Arguments
    /// * `notes` - 2 to 7 open-string notes
    pub fn new(notes: Vec<Note>) -> Result<Self, NeckError> {
        if !(MIN_STRINGS..=MAX_STRINGS).contains(&notes.len()) {
            return Err(NeckError::InvalidTuningLength(notes.len()));
        }
        Ok(Self { notes })
    }

    /// Parse a compact tuning spec like `"EADGBE"` or `"AC#EAE"`.
    ///
    /// Each string is a note letter followed by an optional `#` or `b`;
    /// sharp spellings normalize to their flat canonical form.
    pub fn parse(spec: &str) -> Result<Self, NeckError> {
        let trimmed = spec.trim();
        if !trimmed.is_ascii() {
            return Err(NeckError::InvalidNote(trimmed.to_string()));
        }
        let bytes = trimmed.as_bytes();
        let mut notes = Vec::new();
        let mut i = 0;
        while i < bytes.len() {
            let mut end = i + 1;
            if end < bytes.len() && matches!(bytes[end], b'#' | b'b') {
                end += 1;
            }
            notes.push(Note::parse(&trimmed[i..end])?);
            i = end;
        }
        Self::new(notes)
    }

    /// Number of strings.
    pub fn strings(&self) -> usize {
        self.notes.len()
    }

    /// Open-string notes, heaviest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            f.write_str(note.name())?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Note>> for Tuning {
    type Error = NeckError;

    fn try_from(notes: Vec<Note>) -> Result<Self, Self::Error> {
        Tuning::new(notes)
    }
}

impl From<Tuning> for Vec<Note> {
    fn from(tuning: Tuning) -> Self {
        tuning.notes
    }
}

/// A built-in tuning offered by the tuning picker.
#[derive(Debug, Clone, Copy)]
pub struct TuningPreset {
    /// Compact tuning spec, shown in the picker list.
    pub spec: &'static str,
    /// Human description, shown as help text.
    pub description: &'static str,
}

/// All built-in tunings.
pub const TUNING_PRESETS: &[TuningPreset] = &[
    TuningPreset { spec: "EADG", description: "Std 4 string" },
    TuningPreset { spec: "DADG", description: "Drop D 4 string" },
    TuningPreset { spec: "BEADG", description: "Std 5 string" },
    TuningPreset { spec: "EADGC", description: "Std 5 string, high C" },
    TuningPreset { spec: "AC#EAE", description: "Open A 5 string" },
    TuningPreset { spec: "FCFAF", description: "Open F 5 string" },
    TuningPreset { spec: "GDGBD", description: "Open G 5 string" },
    TuningPreset { spec: "EADGBE", description: "Std 6 string" },
    TuningPreset { spec: "DADGBE", description: "Drop D 6 string" },
    TuningPreset { spec: "DADGAD", description: "6 string" },
    TuningPreset { spec: "EAC#EAE", description: "Open A 6 string" },
    TuningPreset { spec: "BF#BF#BD#", description: "Open B 6 string" },
    TuningPreset { spec: "CGCGCE", description: "Open C 6 string" },
    TuningPreset { spec: "DADF#AD", description: "Open D 6 string" },
    TuningPreset { spec: "EBEG#BE", description: "Open E 6 string" },
    TuningPreset { spec: "CFCFAF", description: "Open F 6 string" },
    TuningPreset { spec: "DGDGBD", description: "Open G 6 string" },
    TuningPreset { spec: "BEADGBE", description: "Std 7 string" },
];
