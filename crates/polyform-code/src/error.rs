//! Error types for shape encoding and decoding.

use polyform_core::GridPoint;
use std::fmt;

/// Errors arising from [`ShapeCode`](crate::ShapeCode) construction or parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeError {
    /// The input cell set (or parsed grid) contains no cells.
    EmptyShape,
    /// An input cell has a negative row or column.
    NegativeCoordinate {
        /// The offending cell.
        point: GridPoint,
    },
    /// The cell set is wider than the 4-bit width field can express.
    ///
    /// The historical encoding silently corrupted the width field in
    /// this case; here it is rejected before any packing happens.
    WidthOverflow {
        /// Required width in columns (> 16).
        width: u32,
    },
    /// The cell mask does not fit the code's 124 mask bits.
    MaskOverflow {
        /// Required mask length in bits (> 124).
        bits: u64,
    },
    /// The canonical string is not a `_`-separated grid of `0`/`1` rows
    /// of consistent width.
    Malformed {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "shape must have at least one cell"),
            Self::NegativeCoordinate { point } => {
                write!(f, "cell {point} has a negative coordinate")
            }
            Self::WidthOverflow { width } => {
                write!(f, "shape width {width} exceeds the 16-column limit")
            }
            Self::MaskOverflow { bits } => {
                write!(f, "cell mask needs {bits} bits, more than the 124 available")
            }
            Self::Malformed { reason } => write!(f, "malformed shape string: {reason}"),
        }
    }
}

impl std::error::Error for CodeError {}
