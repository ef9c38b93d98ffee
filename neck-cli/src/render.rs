//! Text rendering of the neck for the terminal.
//!
//! The neck prints as a grid: one row per string, open notes left of the
//! nut (`||`), marked positions showing their note name and everything
//! else as bare string. A ruler row on top and a marker-dot row at the
//! bottom mirror the decorations of the drawn neck.

use std::collections::HashMap;

use colored::Colorize;
use neck_core::geometry::MARKER_FRETS;
use neck_core::marking::MarkedNote;
use neck_core::neck::Neck;

/// Width of one fret cell, separator excluded.
const CELL: usize = 5;

/// Render the neck as text, highlighting `marking`.
///
/// With `conceal` set, marked cells print `?` instead of the note name;
/// the drill uses this so the grid never gives the answer away.
pub fn neck_text(neck: &Neck, marking: &[MarkedNote], conceal: bool) -> String {
    let marked: HashMap<(usize, usize), bool> = marking
        .iter()
        .map(|m| ((m.string, m.fret), m.is_root))
        .collect();

    let mut out = String::new();

    // Fret-number ruler.
    out.push_str("     ");
    for fret in 1..=neck.frets() as usize {
        out.push_str(&format!("{fret:^CELL$} "));
    }
    out.push('\n');

    for string in 0..neck.strings() {
        let open = match marked.get(&(string, 0)) {
            Some(&is_root) => {
                let label = if conceal {
                    "?".to_string()
                } else {
                    neck.string_notes(string)[0].to_string()
                };
                paint(&format!("{label:<3}"), is_root)
            }
            None => format!("{:<3}", neck.string_notes(string)[0]),
        };
        out.push_str(&open);
        out.push_str("||");
        for fret in 1..=neck.frets() as usize {
            let cell = match marked.get(&(string, fret)) {
                Some(&is_root) => {
                    let label = if conceal {
                        "?".to_string()
                    } else {
                        neck.string_notes(string)[fret].to_string()
                    };
                    paint(&format!("{label:-^CELL$}"), is_root)
                }
                None => "-".repeat(CELL),
            };
            out.push_str(&cell);
            out.push('|');
        }
        out.push('\n');
    }

    // Marker dots, doubled at the octave frets.
    out.push_str("     ");
    for fret in 1..=neck.frets() as usize {
        let dots = if MARKER_FRETS.contains(&fret) {
            if fret % 12 == 0 { "::" } else { ":" }
        } else {
            ""
        };
        out.push_str(&format!("{dots:^CELL$} "));
    }
    out.push('\n');

    out
}

fn paint(cell: &str, is_root: bool) -> String {
    if is_root {
        cell.red().to_string()
    } else {
        cell.reversed().to_string()
    }
}
