//! Error types for the grid search crate

use thiserror::Error;

/// Main error type for the grid search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no move possible: every cell on the board is already marked")]
    ExhaustedBoard,

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    InvalidStrategy { input: String, expected: String },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    InvalidMark { input: String },

    #[error("cell cost table must have exactly 9 entries, got {len}")]
    InvalidCostTable { len: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
