//! Error types for boundary tracing.

use std::fmt;

/// Errors arising from boundary tracing preconditions.
///
/// Boundary tracing is only defined for edge-connected, hole-free
/// (simply connected) cell sets. Violations are detected and reported
/// before a malformed boundary can escape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// The point set has no cells.
    EmptyShape,
    /// The point set is not edge-connected.
    Disconnected {
        /// Cells reachable from the start cell.
        visited: usize,
        /// Total cells in the set.
        total: usize,
    },
    /// The point set encloses one or more interior holes: the traced
    /// outer boundary is shorter than the shape's full perimeter.
    Holed {
        /// Unit edges in the traced outer boundary.
        traced: usize,
        /// Full perimeter in unit edges.
        perimeter: usize,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyShape => write!(f, "cannot trace the boundary of an empty cell set"),
            Self::Disconnected { visited, total } => {
                write!(f, "cell set is disconnected: reached {visited} of {total} cells")
            }
            Self::Holed { traced, perimeter } => {
                write!(
                    f,
                    "cell set has interior holes: outer boundary {traced} edges, perimeter {perimeter}"
                )
            }
        }
    }
}

impl std::error::Error for BoundaryError {}
