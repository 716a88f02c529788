//! Error types for grid primitives.

use std::fmt;

/// Errors arising from pattern-text parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern text contains no placed cells.
    Empty,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern contains no placed cells"),
        }
    }
}

impl std::error::Error for PatternError {}
