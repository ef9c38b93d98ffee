//! Error types for the neck engine.
//!
//! Every failure in this crate is an input-validation rejection. There is
//! no recovery logic behind any of these variants; callers either fix the
//! input or report the message.

use thiserror::Error;

/// Errors produced while building or querying a neck model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeckError {
    /// A note name outside the 12-tone circle and its sharp/Unicode
    /// aliases (B#, Cb, E#, Fb are illegal spellings).
    #[error("illegal note name: {0:?}")]
    InvalidNote(String),

    /// Fret count outside the supported 2..=24 range.
    #[error("number of frets must be an integer from 2 to 24, not {0}")]
    InvalidFretCount(u8),

    /// Tuning with too few or too many strings.
    #[error("tuning must have 2 to 7 notes, not {0}")]
    InvalidTuningLength(usize),

    /// Scale name not present in the interval registry.
    #[error("unknown scale name: {0:?}")]
    UnknownScale(String),

    /// The requested note does not occur anywhere on the configured neck.
    /// Only possible below 11 frets, where a string no longer cycles
    /// through the full chromatic circle.
    #[error("note {0} does not occur on this neck")]
    NoteNotOnNeck(crate::note::Note),
}
