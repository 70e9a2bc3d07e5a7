//! Error type for strict figure parsing.

use thiserror::Error;

/// Reasons a figure is refused by the strict entry points.
///
/// The lenient decomposition never fails; a malformed figure there simply
/// yields fewer rectangles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureError {
    /// The figure holds a character outside `+`, `-`, `|` and space.
    #[error("unexpected character {ch:?} at row {row}, column {column}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Zero-based row of the character.
        row: usize,
        /// Zero-based column of the character.
        column: usize,
    },
}
