//! Corner walker: the outer boundary as a closed corner sequence.

use crate::error::BoundaryError;
use crate::trace::{check_hole_free, left_ahead, right_ahead, validate_connected};
use polyform_core::{Direction, GridPoint, PointSet};

/// Trace the outer rectilinear boundary of `set`, returning its corner
/// vertices in traversal order.
///
/// The trace starts at the top-left vertex of the lexicographically
/// smallest occupied cell, heading down, and keeps the interior on its
/// left. Each step, in order:
///
/// 1. left turn available (cell ahead-left unoccupied) — record the
///    current vertex and rotate left;
/// 2. blocked ahead (cells ahead-left and ahead-right both occupied) —
///    record the current vertex and rotate right, without moving;
/// 3. otherwise move one unit forward.
///
/// The start vertex is always a genuine corner (the incoming edge is
/// leftward, the outgoing edge downward) and leads the returned list.
/// O(perimeter) time given the point set's O(1) membership.
///
/// # Errors
///
/// [`BoundaryError::EmptyShape`], [`BoundaryError::Disconnected`] or
/// [`BoundaryError::Holed`] when the input is not a simply connected
/// polyomino.
///
/// # Examples
///
/// ```
/// use polyform_boundary::trace_outline;
/// use polyform_core::{GridPoint, PointSet};
///
/// let monomino: PointSet = [GridPoint::new(0, 0)].into_iter().collect();
/// assert_eq!(
///     trace_outline(&monomino).unwrap(),
///     vec![
///         GridPoint::new(0, 0),
///         GridPoint::new(1, 0),
///         GridPoint::new(1, 1),
///         GridPoint::new(0, 1),
///     ]
/// );
/// ```
pub fn trace_outline(set: &PointSet) -> Result<Vec<GridPoint>, BoundaryError> {
    // The start cell's top-left vertex shares its coordinates.
    let start = validate_connected(set)?;
    let mut corners = vec![start];
    let mut pos = start;
    let mut heading = Direction::Down;
    let mut moves = 0usize;
    loop {
        if !set.contains(left_ahead(pos, heading)) {
            corners.push(pos);
            heading = heading.turn_left();
        } else if set.contains(right_ahead(pos, heading)) {
            corners.push(pos);
            heading = heading.turn_right();
        } else {
            pos = heading.step(pos);
            moves += 1;
            if pos == start {
                break;
            }
        }
    }
    check_hole_free(moves, set)?;
    Ok(corners)
}
