//! # Scale Interval Module
//!
//! Named scales as ordered semitone step patterns over the 12-tone
//! circle. The seven church modes are rotations of the single major-scale
//! pattern, and the minor pentatonic/blues scales are rotations of their
//! major counterparts, so only three base patterns are written out.
//!
//! Every registered pattern sums to 12: walking the whole pattern from a
//! key lands back on the key an octave up.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::NeckError;
use crate::note::Note;

/// Major scale intervals.
pub const MAJ_INTERVALS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];
/// Major pentatonic intervals.
pub const MAJ_PENT_INTERVALS: [u8; 5] = [2, 2, 3, 2, 3];
/// Major blues intervals.
pub const MAJ_BLUES_INTERVALS: [u8; 6] = [2, 1, 1, 3, 2, 3];

/// All available scales, keyed by display name. A `BTreeMap` keeps the
/// listing sorted the way the scale picker shows it.
pub static INTERVALS: Lazy<BTreeMap<&'static str, Vec<u8>>> = Lazy::new(|| {
    BTreeMap::from([
        ("Major", rotated(&MAJ_INTERVALS, 0)),
        ("Ionian", rotated(&MAJ_INTERVALS, 0)),
        ("Dorian", rotated(&MAJ_INTERVALS, -1)),
        ("Phrygian", rotated(&MAJ_INTERVALS, -2)),
        ("Lydian", rotated(&MAJ_INTERVALS, -3)),
        ("Mixolydian", rotated(&MAJ_INTERVALS, -4)),
        ("Aeolian", rotated(&MAJ_INTERVALS, -5)),
        ("Locrian", rotated(&MAJ_INTERVALS, -6)),
        ("Major Pentatonic", rotated(&MAJ_PENT_INTERVALS, 0)),
        ("Minor Pentatonic", rotated(&MAJ_PENT_INTERVALS, 1)),
        ("Harmonic Minor", vec![2, 1, 2, 2, 1, 3, 1]),
        ("Major Blues", rotated(&MAJ_BLUES_INTERVALS, 0)),
        ("Minor Blues", rotated(&MAJ_BLUES_INTERVALS, 1)),
    ])
});

/// Return a copy of `pattern` rotated `n` places, rotating right for
/// positive `n`.
pub fn rotated(pattern: &[u8], n: i32) -> Vec<u8> {
    let shift = n.rem_euclid(pattern.len() as i32) as usize;
    let split = pattern.len() - shift;
    let mut out = Vec::with_capacity(pattern.len());
    out.extend_from_slice(&pattern[split..]);
    out.extend_from_slice(&pattern[..split]);
    out
}

/// All scale names in listing order.
pub fn scale_names() -> Vec<&'static str> {
    INTERVALS.keys().copied().collect()
}

/// Look up the interval pattern for a scale name.
pub fn intervals(name: &str) -> Option<&'static [u8]> {
    INTERVALS.get(name).map(|v| v.as_slice())
}

/// The notes of `name` in the key of `key`, root first.
///
/// Walks the cumulative steps of every interval but the last; the final
/// step only closes the octave and selects no new note.
pub fn scale_notes(name: &str, key: Note) -> Result<Vec<Note>, NeckError> {
    let pattern = INTERVALS
        .get(name)
        .ok_or_else(|| NeckError::UnknownScale(name.to_string()))?;
    let mut notes = vec![key];
    let mut step = 0;
    for &interval in &pattern[..pattern.len() - 1] {
        step += interval;
        notes.push(key.transposed(step));
    }
    Ok(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_pattern_sums_to_an_octave() {
        for (name, pattern) in INTERVALS.iter() {
            let sum: u8 = pattern.iter().sum();
            assert_eq!(sum, 12, "{name} does not close the octave");
        }
    }

    #[test]
    fn modes_are_rotations_of_major() {
        assert_eq!(intervals("Ionian"), intervals("Major"));
        assert_eq!(intervals("Dorian").unwrap(), &[2, 1, 2, 2, 2, 1, 2]);
        assert_eq!(intervals("Phrygian").unwrap(), &[1, 2, 2, 2, 1, 2, 2]);
        assert_eq!(intervals("Lydian").unwrap(), &[2, 2, 2, 1, 2, 2, 1]);
        assert_eq!(intervals("Mixolydian").unwrap(), &[2, 2, 1, 2, 2, 1, 2]);
        assert_eq!(intervals("Aeolian").unwrap(), &[2, 1, 2, 2, 1, 2, 2]);
        assert_eq!(intervals("Locrian").unwrap(), &[1, 2, 2, 1, 2, 2, 2]);
    }

    #[test]
    fn minor_scales_are_rotations_of_their_major_forms() {
        assert_eq!(intervals("Minor Pentatonic").unwrap(), &[3, 2, 2, 3, 2]);
        assert_eq!(intervals("Minor Blues").unwrap(), &[3, 2, 1, 1, 3, 2]);
    }

    #[test]
    fn rotation_matches_both_directions() {
        assert_eq!(rotated(&[1, 2, 3, 4], 1), vec![4, 1, 2, 3]);
        assert_eq!(rotated(&[1, 2, 3, 4], -1), vec![2, 3, 4, 1]);
        assert_eq!(rotated(&[1, 2, 3, 4], 0), vec![1, 2, 3, 4]);
        assert_eq!(rotated(&[1, 2, 3, 4], 4), vec![1, 2, 3, 4]);
    }

    #[test]
    fn c_major_selects_the_natural_notes() {
        let notes = scale_notes("Major", Note::C).unwrap();
        assert_eq!(
            notes,
            vec![Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B]
        );
    }

    #[test]
    fn a_aeolian_is_the_relative_minor_of_c() {
        let notes = scale_notes("Aeolian", Note::A).unwrap();
        assert_eq!(
            notes,
            vec![Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G]
        );
    }

    #[test]
    fn a_minor_pentatonic_notes() {
        let notes = scale_notes("Minor Pentatonic", Note::A).unwrap();
        assert_eq!(notes, vec![Note::A, Note::C, Note::D, Note::E, Note::G]);
    }

    #[test]
    fn scale_note_count_matches_pattern_length() {
        for name in scale_names() {
            let notes = scale_notes(name, Note::E).unwrap();
            assert_eq!(notes.len(), intervals(name).unwrap().len());
            assert_eq!(notes[0], Note::E);
        }
    }

    #[test]
    fn unknown_scale_is_rejected() {
        assert_eq!(
            scale_notes("Chromatic", Note::C),
            Err(NeckError::UnknownScale("Chromatic".to_string()))
        );
    }
}
