//! # Marking Module
//!
//! The query side of the neck model: which positions to highlight for a
//! note, a scale in a key, or a random drill target. Markings are plain
//! position lists, recomputed wholesale on every query; nothing here is
//! updated incrementally.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::NeckError;
use crate::neck::Neck;
use crate::note::Note;
use crate::scale;

/// A single highlighted position. `is_root` picks the root-note color in
/// scale mode and is always false otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedNote {
    pub string: usize,
    pub fret: usize,
    pub is_root: bool,
}

/// A set of highlighted positions.
pub type Marking = Vec<MarkedNote>;

impl Neck {
    /// Every (string, fret) position holding `note`, in table order.
    pub fn positions_of(&self, note: Note) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (string, row) in self.note_table().iter().enumerate() {
            for (fret, &candidate) in row.iter().enumerate() {
                if candidate == note {
                    positions.push((string, fret));
                }
            }
        }
        positions
    }

    /// Mark every position of `note`.
    pub fn mark_all(&self, note: Note) -> Marking {
        self.positions_of(note)
            .into_iter()
            .map(|(string, fret)| MarkedNote {
                string,
                fret,
                is_root: false,
            })
            .collect()
    }

    /// Mark every position of every note of the scale, root positions
    /// flagged.
    ///
    /// # Arguments
    /// * `scale_name` - a key of the scale interval registry
    /// * `key` - the root note of the scale
    pub fn mark_scale(&self, scale_name: &str, key: Note) -> Result<Marking, NeckError> {
        let notes = scale::scale_notes(scale_name, key)?;
        let mut marking = Vec::new();
        for note in notes {
            for (string, fret) in self.positions_of(note) {
                marking.push(MarkedNote {
                    string,
                    fret,
                    is_root: note == key,
                });
            }
        }
        Ok(marking)
    }

    /// Mark one randomly chosen position of `note`.
    ///
    /// Half the picks search from the open string and the rest from a
    /// random start fret, so low positions show up about as often as
    /// high ones. Fails if the note occurs nowhere on the neck, which
    /// can only happen below 11 frets.
    pub fn mark_random<R: Rng>(&self, note: Note, rng: &mut R) -> Result<MarkedNote, NeckError> {
        if self.positions_of(note).is_empty() {
            return Err(NeckError::NoteNotOnNeck(note));
        }
        loop {
            let string = rng.gen_range(0..self.strings());
            let start_fret = if rng.gen_range(0..10) % 2 == 0 {
                0
            } else {
                rng.gen_range(0..self.frets() as usize)
            };
            let found = self.string_notes(string)[start_fret..]
                .iter()
                .position(|&candidate| candidate == note);
            if let Some(offset) = found {
                return Ok(MarkedNote {
                    string,
                    fret: start_fret + offset,
                    is_root: false,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neck::NeckConfig;
    use crate::tuning::Tuning;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn standard_neck(frets: u8) -> Neck {
        let tuning = Tuning::parse("EADGBE").unwrap();
        Neck::new(NeckConfig::new(tuning, frets).unwrap()).unwrap()
    }

    #[test]
    fn mark_all_finds_every_occurrence() {
        let neck = standard_neck(22);
        let marking = neck.mark_all(Note::E);
        // E appears twice on each of the six strings within 22 frets.
        assert_eq!(marking.len(), 12);
        for mark in &marking {
            assert_eq!(neck.note_at(mark.string, mark.fret), Some(Note::E));
            assert!(!mark.is_root);
        }
    }

    #[test]
    fn mark_all_covers_open_strings() {
        let neck = standard_neck(22);
        let marking = neck.mark_all(Note::A);
        assert!(marking.iter().any(|m| m.string == 4 && m.fret == 0));
    }

    #[test]
    fn mark_scale_flags_exactly_the_roots() {
        let neck = standard_neck(22);
        let marking = neck.mark_scale("Major", Note::C).unwrap();
        let scale_notes = scale::scale_notes("Major", Note::C).unwrap();
        assert!(!marking.is_empty());
        for mark in &marking {
            let note = neck.note_at(mark.string, mark.fret).unwrap();
            assert!(scale_notes.contains(&note));
            assert_eq!(mark.is_root, note == Note::C);
        }
        let roots = marking.iter().filter(|m| m.is_root).count();
        assert_eq!(roots, neck.positions_of(Note::C).len());
    }

    #[test]
    fn mark_scale_covers_all_scale_positions() {
        let neck = standard_neck(12);
        let marking = neck.mark_scale("Minor Pentatonic", Note::A).unwrap();
        let expected: usize = scale::scale_notes("Minor Pentatonic", Note::A)
            .unwrap()
            .iter()
            .map(|&n| neck.positions_of(n).len())
            .sum();
        assert_eq!(marking.len(), expected);
    }

    #[test]
    fn mark_scale_rejects_unknown_names() {
        let neck = standard_neck(12);
        assert_eq!(
            neck.mark_scale("Whole Tone", Note::C),
            Err(NeckError::UnknownScale("Whole Tone".to_string()))
        );
    }

    #[test]
    fn mark_random_lands_on_the_note() {
        let neck = standard_neck(22);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mark = neck.mark_random(Note::G, &mut rng).unwrap();
            assert_eq!(neck.note_at(mark.string, mark.fret), Some(Note::G));
            assert!(!mark.is_root);
        }
    }

    #[test]
    fn mark_random_is_reproducible_for_a_seed() {
        let neck = standard_neck(22);
        let a = neck
            .mark_random(Note::D, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = neck
            .mark_random(Note::D, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mark_random_fails_when_the_note_is_absent() {
        // Two strings, two frets: only C, Db, and D exist.
        let neck = Neck::new(
            NeckConfig::new(Tuning::parse("CC").unwrap(), 2).unwrap(),
        )
        .unwrap();
        assert!(neck.positions_of(Note::E).is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            neck.mark_random(Note::E, &mut rng),
            Err(NeckError::NoteNotOnNeck(Note::E))
        );
    }
}
