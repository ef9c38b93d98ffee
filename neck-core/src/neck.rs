//! # Neck Model Module
//!
//! The note table for a configured neck: which pitch class sounds at
//! every (string, fret) position. The table is derived eagerly and in
//! full when the neck is built; changing the configuration means building
//! a new neck, never patching an old one.

use serde::{Deserialize, Serialize};

use crate::error::NeckError;
use crate::note::Note;
use crate::tuning::Tuning;

/// Fewest frets a neck may have.
pub const MIN_FRETS: u8 = 2;
/// Most frets a neck may have.
pub const MAX_FRETS: u8 = 24;

/// Which way the neck faces. Geometry is always computed right-handed;
/// a left-handed neck is mirrored by the renderer with `x_sign`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    /// Multiplier for x coordinates at render time.
    pub fn x_sign(self) -> f32 {
        match self {
            Handedness::Right => 1.0,
            Handedness::Left => -1.0,
        }
    }
}

/// Neck configuration: tuning, fret count, and handedness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeckConfig {
    pub tuning: Tuning,
    pub frets: u8,
    #[serde(default)]
    pub handedness: Handedness,
}

impl NeckConfig {
    /// Build a right-handed configuration, validating the fret count.
    pub fn new(tuning: Tuning, frets: u8) -> Result<Self, NeckError> {
        let config = Self {
            tuning,
            frets,
            handedness: Handedness::Right,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the fret count range. The tuning length is enforced by the
    /// `Tuning` type itself, but deserialized configs re-check here.
    pub fn validate(&self) -> Result<(), NeckError> {
        if !(MIN_FRETS..=MAX_FRETS).contains(&self.frets) {
            return Err(NeckError::InvalidFretCount(self.frets));
        }
        Ok(())
    }
}

/// A configured neck with its full note table.
///
/// String index 0 is the lightest (top) string, the reverse of tuning
/// order; fret index 0 is the open string.
#[derive(Debug, Clone)]
pub struct Neck {
    config: NeckConfig,
    notes: Vec<Vec<Note>>,
}

impl Neck {
    /// Derive the note table for `config`.
    ///
    /// Each string's row is the chromatic circle rotated to start at the
    /// string's open note, cycled out to the last fret.
    pub fn new(config: NeckConfig) -> Result<Self, NeckError> {
        config.validate()?;
        let notes = config
            .tuning
            .notes()
            .iter()
            .rev()
            .map(|open| {
                (0..=config.frets)
                    .map(|fret| open.transposed(fret))
                    .collect()
            })
            .collect();
        Ok(Self { config, notes })
    }

    pub fn config(&self) -> &NeckConfig {
        &self.config
    }

    /// Number of strings.
    pub fn strings(&self) -> usize {
        self.notes.len()
    }

    /// Number of frets (not counting the open string).
    pub fn frets(&self) -> u8 {
        self.config.frets
    }

    /// The note at a position, or `None` when out of range.
    pub fn note_at(&self, string: usize, fret: usize) -> Option<Note> {
        self.notes.get(string)?.get(fret).copied()
    }

    /// All notes on one string, open note first.
    pub fn string_notes(&self, string: usize) -> &[Note] {
        &self.notes[string]
    }

    /// The full note table, lightest string first.
    pub fn note_table(&self) -> &[Vec<Note>] {
        &self.notes
    }

    /// Open-string notes in table order (lightest first).
    pub fn open_notes(&self) -> Vec<Note> {
        self.notes.iter().map(|row| row[0]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use pretty_assertions::assert_eq;

    fn standard_neck(frets: u8) -> Neck {
        let tuning = Tuning::parse("EADGBE").unwrap();
        Neck::new(NeckConfig::new(tuning, frets).unwrap()).unwrap()
    }

    #[test]
    fn table_dimensions_match_config() {
        let neck = standard_neck(22);
        assert_eq!(neck.strings(), 6);
        for string in 0..neck.strings() {
            assert_eq!(neck.string_notes(string).len(), 23);
        }
    }

    #[test]
    fn string_order_is_reversed_tuning() {
        let neck = standard_neck(12);
        assert_eq!(
            neck.open_notes(),
            vec![Note::E, Note::B, Note::G, Note::D, Note::A, Note::E]
        );
    }

    #[test]
    fn fret_twelve_repeats_the_open_note() {
        let neck = standard_neck(22);
        for string in 0..neck.strings() {
            assert_eq!(
                neck.note_at(string, 12),
                neck.note_at(string, 0),
                "string {string}"
            );
        }
    }

    #[test]
    fn known_positions_on_a_standard_neck() {
        let neck = standard_neck(22);
        // High E string walks up from E.
        assert_eq!(neck.note_at(0, 1), Some(Note::F));
        assert_eq!(neck.note_at(0, 3), Some(Note::G));
        // Low E string, 5th fret meets the open A string.
        assert_eq!(neck.note_at(5, 5), Some(Note::A));
        // B string, 1st fret.
        assert_eq!(neck.note_at(1, 1), Some(Note::C));
    }

    #[test]
    fn out_of_range_positions_are_none() {
        let neck = standard_neck(12);
        assert_eq!(neck.note_at(6, 0), None);
        assert_eq!(neck.note_at(0, 13), None);
    }

    #[test]
    fn fret_count_is_validated() {
        let tuning = Tuning::parse("EADGBE").unwrap();
        assert_eq!(
            NeckConfig::new(tuning.clone(), 1),
            Err(NeckError::InvalidFretCount(1))
        );
        assert_eq!(
            NeckConfig::new(tuning, 25),
            Err(NeckError::InvalidFretCount(25))
        );
    }

    #[test]
    fn config_json_round_trip() {
        let config = NeckConfig::new(Tuning::parse("DADGAD").unwrap(), 20).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: NeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn deserialized_fret_count_is_rechecked() {
        let json = r#"{"tuning":["E","A","D","G","B","E"],"frets":40}"#;
        let config: NeckConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            Neck::new(config).err(),
            Some(NeckError::InvalidFretCount(40))
        );
    }
}
