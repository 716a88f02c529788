//! The [`GridPoint`] integer coordinate type.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// An immutable integer 2D coordinate.
///
/// Interpreted as `(row, col)` throughout Polyform: rows grow downward,
/// columns grow rightward. The same type doubles as a grid *vertex* in
/// boundary tracing, where `(r, c)` names the top-left corner of cell
/// `(r, c)`.
///
/// Ordering is row-major lexicographic (row first, then column), which
/// is the canonical cell ordering used to pick boundary start cells.
///
/// # Examples
///
/// ```
/// use polyform_core::GridPoint;
///
/// let p = GridPoint::new(1, 2);
/// assert_eq!(p + GridPoint::new(0, 1), GridPoint::new(1, 3));
/// assert_eq!(p * 2, GridPoint::new(2, 4));
/// assert!(GridPoint::new(0, 9) < GridPoint::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Row index (grows downward).
    pub row: i32,
    /// Column index (grows rightward).
    pub col: i32,
}

impl GridPoint {
    /// Create a point from row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The point shifted by `(dr, dc)`.
    pub const fn translate(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl Add for GridPoint {
    type Output = GridPoint;

    fn add(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for GridPoint {
    type Output = GridPoint;

    fn sub(self, rhs: GridPoint) -> GridPoint {
        GridPoint::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for GridPoint {
    type Output = GridPoint;

    fn mul(self, k: i32) -> GridPoint {
        GridPoint::new(self.row * k, self.col * k)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
