//! Shared wall-follower state: vertex/cell geometry and input validation.
//!
//! Vertex convention: vertex `(r, c)` is the top-left corner of cell
//! `(r, c)`. The walker keeps the interior on its left, so the start
//! cell (the lexicographically smallest member) is first traversed
//! along its left side, heading down.

use crate::error::BoundaryError;
use polyform_core::{Direction, GridPoint, PointSet};
use std::collections::VecDeque;

/// The cell on the walker's left just ahead of vertex `v` when facing
/// `heading`. Occupied means the interior is still alongside; empty
/// means the boundary turns left here.
pub(crate) fn left_ahead(v: GridPoint, heading: Direction) -> GridPoint {
    match heading {
        Direction::Down => v,
        Direction::Right => v.translate(-1, 0),
        Direction::Up => v.translate(-1, -1),
        Direction::Left => v.translate(0, -1),
    }
}

/// The cell on the walker's right just ahead of vertex `v`. Occupied
/// (together with an occupied left-ahead) means the path is blocked and
/// the boundary turns right.
pub(crate) fn right_ahead(v: GridPoint, heading: Direction) -> GridPoint {
    left_ahead(v, heading.turn_right())
}

/// Validate that `set` is non-empty and edge-connected, returning the
/// start cell (its top-left vertex is the trace start).
///
/// BFS over member-to-member 4-adjacency from the lexicographically
/// smallest cell must reach every member.
pub(crate) fn validate_connected(set: &PointSet) -> Result<GridPoint, BoundaryError> {
    let start = set.min_point().ok_or(BoundaryError::EmptyShape)?;
    let mut visited = PointSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        for n in set.neighbours(cell) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    if visited.len() != set.len() {
        return Err(BoundaryError::Disconnected {
            visited: visited.len(),
            total: set.len(),
        });
    }
    Ok(start)
}

/// Full perimeter of the cell set in unit edges: `4n - shared sides`,
/// counting hole boundaries too. A trace shorter than this means the
/// shape encloses a hole.
pub(crate) fn perimeter(set: &PointSet) -> usize {
    let shared: usize = set.iter().map(|cell| set.neighbours(cell).len()).sum();
    4 * set.len() - shared
}

/// Check a finished trace against the full perimeter.
pub(crate) fn check_hole_free(traced: usize, set: &PointSet) -> Result<(), BoundaryError> {
    let perimeter = perimeter(set);
    if traced != perimeter {
        return Err(BoundaryError::Holed { traced, perimeter });
    }
    Ok(())
}
