//! Pattern-text parsing.
//!
//! A pattern block is a piece of text where each line is a grid row and
//! each non-background character marks a placed shape (or color index)
//! at that cell. Background cells are `.` or a space. This is the text
//! interchange format between catalog data files and the geometric
//! core: each key's cell list is fed into a [`PointSet`](crate::PointSet)
//! for boundary and encoding work.

use crate::error::PatternError;
use crate::point::GridPoint;
use indexmap::IndexMap;

/// Background characters that do not denote a placed cell.
const BACKGROUND: [char; 2] = ['.', ' '];

/// Parse a pattern block into per-key cell lists.
///
/// Keys appear in first-appearance order; each key's cells are in
/// row-major order. Rows may have differing lengths — short rows simply
/// contribute fewer cells. Blank leading/trailing lines are ignored.
///
/// # Errors
///
/// [`PatternError::Empty`] if no line contains a placed cell.
///
/// # Examples
///
/// ```
/// use polyform_core::{parse_pattern, GridPoint};
///
/// let placements = parse_pattern("aab\n.ab").unwrap();
/// assert_eq!(placements.len(), 2);
/// assert_eq!(
///     placements[&'a'],
///     vec![GridPoint::new(0, 0), GridPoint::new(0, 1), GridPoint::new(1, 1)]
/// );
/// assert_eq!(placements[&'b'], vec![GridPoint::new(0, 2), GridPoint::new(1, 2)]);
/// ```
pub fn parse_pattern(text: &str) -> Result<IndexMap<char, Vec<GridPoint>>, PatternError> {
    let mut placements: IndexMap<char, Vec<GridPoint>> = IndexMap::new();
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();
    let lines = match lines.iter().rposition(|l| !l.trim().is_empty()) {
        Some(last) => &lines[..=last],
        None => return Err(PatternError::Empty),
    };
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if BACKGROUND.contains(&ch) {
                continue;
            }
            placements
                .entry(ch)
                .or_default()
                .push(GridPoint::new(row as i32, col as i32));
        }
    }
    if placements.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(placements)
}
