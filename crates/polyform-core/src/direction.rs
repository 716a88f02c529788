//! Cardinal directions on the grid.

use crate::point::GridPoint;
use std::fmt;

/// One of the four cardinal directions.
///
/// Screen convention: rows grow downward, so [`Down`](Self::Down) steps
/// to `(row + 1, col)` and [`Right`](Self::Right) to `(row, col + 1)`.
///
/// The enum is closed and every operation matches exhaustively, so an
/// out-of-range direction token cannot reach a turn or move operation.
///
/// # Examples
///
/// ```
/// use polyform_core::{Direction, GridPoint};
///
/// assert_eq!(Direction::Down.turn_left(), Direction::Right);
/// assert_eq!(Direction::Down.opposite(), Direction::Up);
/// assert_eq!(Direction::Right.step(GridPoint::new(0, 0)), GridPoint::new(0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller rows.
    Up,
    /// Toward larger rows.
    Down,
    /// Toward smaller columns.
    Left,
    /// Toward larger columns.
    Right,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction after a 90° left turn.
    ///
    /// "Left" is the walker's left when facing this direction on screen:
    /// facing `Down` (south), the walker's left hand points `Right` (east).
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// The direction after a 90° right turn.
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// The reverse direction.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The unit step as a `(dr, dc)` offset.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Move a point (cell or vertex) one unit in this direction.
    pub const fn step(self, p: GridPoint) -> GridPoint {
        let (dr, dc) = self.offset();
        p.translate(dr, dc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(s)
    }
}
