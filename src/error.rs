//! Error types for the eight-puzzle crate

use thiserror::Error;

/// Main error type for the eight-puzzle crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("malformed grid: {reason}")]
    MalformedInput { reason: String },

    #[error("tile {value} not found on board (corrupted state)")]
    ValueNotFound { value: u8 },

    #[error("no solution: frontier exhausted after exploring {explored} states")]
    Unsolvable { explored: usize },

    #[error("expansion budget exhausted after {expanded} expansions")]
    Exhausted { expanded: usize },

    #[error("search timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },

    #[error("broken path: predecessor missing from closed set")]
    BrokenPath,
}

impl PuzzleError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PuzzleError::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Short machine-readable tag, used in CLI reports
    pub fn kind(&self) -> &'static str {
        match self {
            PuzzleError::MalformedInput { .. } => "malformed_input",
            PuzzleError::ValueNotFound { .. } => "value_not_found",
            PuzzleError::Unsolvable { .. } => "unsolvable",
            PuzzleError::Exhausted { .. } => "exhausted",
            PuzzleError::Timeout { .. } => "timeout",
            PuzzleError::BrokenPath => "broken_path",
        }
    }
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, PuzzleError>;
