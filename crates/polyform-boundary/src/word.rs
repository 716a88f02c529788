//! The unit-edge boundary word and its symmetry predicates.

use crate::error::BoundaryError;
use crate::trace::{check_hole_free, left_ahead, right_ahead, validate_connected};
use polyform_core::{Direction, GridPoint, PointSet};

/// One unit segment of a traced boundary: its starting grid vertex and
/// travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryEdge {
    /// The vertex the segment starts from.
    pub start: GridPoint,
    /// The cardinal direction travelled.
    pub dir: Direction,
}

impl BoundaryEdge {
    /// Create an edge.
    pub const fn new(start: GridPoint, dir: Direction) -> Self {
        Self { start, dir }
    }
}

/// A shape's boundary at unit-edge granularity.
///
/// One entry per unit boundary segment, so the length equals the
/// shape's perimeter. Representing the boundary this way turns
/// geometric symmetry comparisons into O(perimeter) sequence
/// comparisons over direction labels. Immutable once built.
///
/// Traced words are never empty; words built from raw edge lists (for
/// symmetry consumers) may be.
///
/// # Examples
///
/// ```
/// use polyform_boundary::BoundaryWord;
/// use polyform_core::{GridPoint, PointSet};
///
/// let domino: PointSet = [GridPoint::new(0, 0), GridPoint::new(0, 1)]
///     .into_iter()
///     .collect();
/// let word = BoundaryWord::trace(&domino).unwrap();
/// assert_eq!(word.len(), 6); // perimeter in unit edges
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BoundaryWord {
    edges: Vec<BoundaryEdge>,
}

impl BoundaryWord {
    /// Trace the outer boundary of `set` as a unit-edge word.
    ///
    /// Same wall-follower as [`trace_outline`](crate::trace_outline) —
    /// start at the top-left vertex of the lexicographically smallest
    /// cell, heading down, interior on the left — but recording every
    /// unit move rather than only the turns.
    ///
    /// # Errors
    ///
    /// [`BoundaryError::EmptyShape`], [`BoundaryError::Disconnected`]
    /// or [`BoundaryError::Holed`] when the input is not a simply
    /// connected polyomino.
    pub fn trace(set: &PointSet) -> Result<Self, BoundaryError> {
        let start = validate_connected(set)?;
        let mut edges = Vec::new();
        let mut pos = start;
        let mut heading = Direction::Down;
        loop {
            if !set.contains(left_ahead(pos, heading)) {
                heading = heading.turn_left();
            } else if set.contains(right_ahead(pos, heading)) {
                heading = heading.turn_right();
            } else {
                edges.push(BoundaryEdge::new(pos, heading));
                pos = heading.step(pos);
                if pos == start {
                    break;
                }
            }
        }
        check_hole_free(edges.len(), set)?;
        Ok(Self { edges })
    }

    /// Number of unit edges (the shape's perimeter, for traced words).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the word has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edges in traversal order.
    pub fn edges(&self) -> &[BoundaryEdge] {
        &self.edges
    }

    /// Whether the direction labels read the same forward and backward.
    ///
    /// Directions are compared as labels, not flipped; an odd length
    /// tolerates the unmatched middle edge. True for the empty word.
    /// A palindromic word indicates a reflective symmetry axis anchored
    /// at the word's start point.
    pub fn is_palindrome(&self) -> bool {
        let dirs: Vec<Direction> = self.edges.iter().map(|e| e.dir).collect();
        dirs.iter().eq(dirs.iter().rev())
    }

    /// Whether `other` reversed, with every direction flipped to its
    /// opposite, equals `self` position by position.
    ///
    /// False immediately on length mismatch (including against an empty
    /// word). An inverse pair indicates point (180°-rotational) or
    /// direction-reversing symmetry between the two traces.
    pub fn is_inverse(&self, other: &BoundaryWord) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.edges
            .iter()
            .zip(other.edges.iter().rev())
            .all(|(a, b)| a.dir == b.dir.opposite())
    }

    /// Collapse runs of equal direction into the corner sequence.
    ///
    /// Keeps the first edge's start vertex and every vertex at which
    /// the direction changes. For a traced word this is identical to
    /// [`trace_outline`](crate::trace_outline) on the same shape.
    pub fn outline(&self) -> Vec<GridPoint> {
        let mut corners = Vec::new();
        if let Some(first) = self.edges.first() {
            corners.push(first.start);
        }
        for pair in self.edges.windows(2) {
            if pair[1].dir != pair[0].dir {
                corners.push(pair[1].start);
            }
        }
        corners
    }
}

impl From<Vec<BoundaryEdge>> for BoundaryWord {
    fn from(edges: Vec<BoundaryEdge>) -> Self {
        Self { edges }
    }
}
