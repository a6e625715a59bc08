//! Error types for the tictacq crate

use thiserror::Error;

/// Main error type for the tictacq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no valid moves available")]
    NoValidMoves,

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid board string length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid outcome label '{label}' (expected \"X\", \"O\", or \"Draw\")")]
    InvalidOutcomeLabel { label: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
