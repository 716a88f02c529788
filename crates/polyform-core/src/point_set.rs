//! Sparse membership set over grid points.

use crate::direction::Direction;
use crate::point::GridPoint;
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// A mutable sparse set of [`GridPoint`]s.
///
/// Storage is two-level: an outer map keyed by row holding a column set
/// per row, so membership tests and inserts are O(1) amortized
/// regardless of coordinate magnitudes. Points are only ever added;
/// there is no removal, matching its role as a per-shape scratch
/// structure built once and queried during boundary tracing.
///
/// `len` tracks true distinct cardinality: re-inserting a member is a
/// no-op and does not inflate the count.
///
/// # Examples
///
/// ```
/// use polyform_core::{GridPoint, PointSet};
///
/// let mut set = PointSet::new();
/// assert!(set.insert(GridPoint::new(0, 0)));
/// assert!(!set.insert(GridPoint::new(0, 0)));
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(GridPoint::new(0, 0)));
/// assert!(!set.contains(GridPoint::new(1, 0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    rows: IndexMap<i32, IndexSet<i32>>,
    len: usize,
}

impl PointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns `true` if it was not already a member.
    pub fn insert(&mut self, p: GridPoint) -> bool {
        let novel = self.rows.entry(p.row).or_default().insert(p.col);
        if novel {
            self.len += 1;
        }
        novel
    }

    /// Membership test.
    pub fn contains(&self, p: GridPoint) -> bool {
        self.rows.get(&p.row).is_some_and(|cols| cols.contains(&p.col))
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| GridPoint::new(row, col)))
    }

    /// The lexicographically smallest member (row first, then column),
    /// or `None` for an empty set. This is the boundary start cell.
    pub fn min_point(&self) -> Option<GridPoint> {
        self.iter().min()
    }

    /// The 4-connected neighbours of `p` that are members, in
    /// [`Direction::ALL`] order.
    pub fn neighbours(&self, p: GridPoint) -> SmallVec<[GridPoint; 4]> {
        let mut out = SmallVec::new();
        for d in Direction::ALL {
            let n = d.step(p);
            if self.contains(n) {
                out.push(n);
            }
        }
        out
    }
}

impl FromIterator<GridPoint> for PointSet {
    fn from_iter<I: IntoIterator<Item = GridPoint>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<GridPoint> for PointSet {
    fn extend<I: IntoIterator<Item = GridPoint>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}
