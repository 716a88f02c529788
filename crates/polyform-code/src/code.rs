//! The bit-packed [`ShapeCode`] representation.

use crate::error::CodeError;
use polyform_core::GridPoint;
use std::fmt;
use std::str::FromStr;

/// Canonical bit-packed encoding of a polyomino cell layout.
///
/// Layout of the backing `u128`:
///
/// - low 4 bits: bounding-box width. Values 1–15 are stored directly;
///   width 16 is stored as 0. This asymmetric encoding is preserved
///   bit-for-bit for compatibility with existing canonical codes.
/// - remaining 124 bits: occupied-cell mask in row-major order within
///   the bounding box, bit `k = row * width + col`.
///
/// At least one mask bit is always set: a polyomino has at least one
/// cell, and all constructors enforce this. Edge-connectivity of the
/// cells is **not** checked here — that is the caller's contract.
///
/// # Examples
///
/// ```
/// use polyform_code::ShapeCode;
/// use polyform_core::GridPoint;
///
/// let l_tromino = ShapeCode::encode([
///     GridPoint::new(0, 0),
///     GridPoint::new(1, 0),
///     GridPoint::new(1, 1),
/// ])
/// .unwrap();
/// assert_eq!(l_tromino.size(), 3);
/// assert_eq!(l_tromino.width(), 2);
/// assert_eq!(l_tromino.height(), 2);
/// assert_eq!(l_tromino.to_string(), "10_11");
/// assert_eq!("10_11".parse::<ShapeCode>().unwrap(), l_tromino);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeCode(u128);

impl ShapeCode {
    /// Number of bits available for the cell mask.
    pub const MASK_BITS: u32 = 128 - Self::WIDTH_BITS;

    /// Number of low bits holding the width field.
    const WIDTH_BITS: u32 = 4;

    /// Widest bounding box the 4-bit width field can express.
    pub const MAX_WIDTH: u32 = 16;

    /// Encode a finite cell set.
    ///
    /// The width is taken as the maximum column plus one. Rows and
    /// columns must be non-negative; duplicates are tolerated.
    ///
    /// # Errors
    ///
    /// - [`CodeError::EmptyShape`] for an empty input;
    /// - [`CodeError::NegativeCoordinate`] for a negative row or column;
    /// - [`CodeError::WidthOverflow`] when the width exceeds
    ///   [`MAX_WIDTH`](Self::MAX_WIDTH);
    /// - [`CodeError::MaskOverflow`] when a cell's bit index falls
    ///   outside the 124 mask bits.
    pub fn encode<I>(points: I) -> Result<Self, CodeError>
    where
        I: IntoIterator<Item = GridPoint>,
    {
        let points: Vec<GridPoint> = points.into_iter().collect();
        let mut max_col: i32 = -1;
        for &p in &points {
            if p.row < 0 || p.col < 0 {
                return Err(CodeError::NegativeCoordinate { point: p });
            }
            max_col = max_col.max(p.col);
        }
        if points.is_empty() {
            return Err(CodeError::EmptyShape);
        }
        Self::encode_with_width(&points, max_col as u32 + 1)
    }

    /// Pack validated non-negative cells at an explicit width.
    fn encode_with_width(points: &[GridPoint], width: u32) -> Result<Self, CodeError> {
        if width > Self::MAX_WIDTH {
            return Err(CodeError::WidthOverflow { width });
        }
        let mut mask: u128 = 0;
        for &p in points {
            let k = p.row as u64 * width as u64 + p.col as u64;
            if k >= Self::MASK_BITS as u64 {
                return Err(CodeError::MaskOverflow { bits: k + 1 });
            }
            mask |= 1u128 << k;
        }
        // width 16 is stored as 0 in the 4-bit field
        Ok(Self(mask << Self::WIDTH_BITS | (width as u128 & 0xF)))
    }

    /// Reconstruct a code from its raw integer value.
    ///
    /// # Errors
    ///
    /// [`CodeError::EmptyShape`] if the cell mask is all zeros.
    pub fn from_value(value: u128) -> Result<Self, CodeError> {
        if value >> Self::WIDTH_BITS == 0 {
            return Err(CodeError::EmptyShape);
        }
        Ok(Self(value))
    }

    /// The raw packed integer value.
    pub fn value(self) -> u128 {
        self.0
    }

    /// Bounding-box width in columns. A stored field of 0 reads as 16.
    pub fn width(self) -> u32 {
        match (self.0 & 0xF) as u32 {
            0 => Self::MAX_WIDTH,
            w => w,
        }
    }

    /// Bounding-box height in rows, from the highest set mask bit.
    ///
    /// Computed with exact integer bit-length arithmetic; a float
    /// logarithm would lose precision for large masks.
    pub fn height(self) -> u32 {
        let bit_len = 128 - self.mask().leading_zeros();
        bit_len.div_ceil(self.width())
    }

    /// Number of cells in the shape (the shape's order).
    pub fn size(self) -> u32 {
        self.mask().count_ones()
    }

    /// Decode into the shape's cells, lazily, in row-major order.
    ///
    /// The iterator is re-derivable: every call scans the same mask and
    /// yields the identical sequence.
    pub fn cells(self) -> impl Iterator<Item = GridPoint> {
        let mask = self.mask();
        let width = self.width();
        let bit_len = 128 - mask.leading_zeros();
        (0..bit_len)
            .filter(move |k| mask >> k & 1 == 1)
            .map(move |k| GridPoint::new((k / width) as i32, (k % width) as i32))
    }

    fn mask(self) -> u128 {
        self.0 >> Self::WIDTH_BITS
    }
}

impl fmt::Display for ShapeCode {
    /// Canonical text form: rows joined by `_`, top-to-bottom, one
    /// `0`/`1` character per column with column 0 leftmost.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = self.mask();
        let width = self.width();
        for row in 0..self.height() {
            if row > 0 {
                f.write_str("_")?;
            }
            for col in 0..width {
                // The row-major scan range (width × height cells) can pass
                // the 124 mask bits; bits beyond them are never set.
                let k = row * width + col;
                let occupied = k < Self::MASK_BITS && mask >> k & 1 == 1;
                write!(f, "{}", if occupied { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

impl FromStr for ShapeCode {
    type Err = CodeError;

    /// Parse the canonical text form. The declared row width (row string
    /// length) becomes the code's width even when the rightmost column
    /// is unoccupied.
    fn from_str(s: &str) -> Result<Self, CodeError> {
        let rows: Vec<&str> = s.split('_').collect();
        let width = rows[0].chars().count();
        if width == 0 {
            return Err(CodeError::Malformed {
                reason: "empty row".into(),
            });
        }
        let mut points = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(CodeError::Malformed {
                    reason: format!(
                        "row {r} has {} columns, expected {width}",
                        row.chars().count()
                    ),
                });
            }
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    '1' => points.push(GridPoint::new(r as i32, c as i32)),
                    '0' => {}
                    other => {
                        return Err(CodeError::Malformed {
                            reason: format!("invalid character {other:?} in row {r}"),
                        })
                    }
                }
            }
        }
        if points.is_empty() {
            return Err(CodeError::EmptyShape);
        }
        Self::encode_with_width(&points, width as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn p(row: i32, col: i32) -> GridPoint {
        GridPoint::new(row, col)
    }

    fn encode(points: &[GridPoint]) -> ShapeCode {
        ShapeCode::encode(points.iter().copied()).unwrap()
    }

    // ── Encoding ────────────────────────────────────────────────

    #[test]
    fn monomino() {
        let code = encode(&[p(0, 0)]);
        assert_eq!(code.size(), 1);
        assert_eq!(code.width(), 1);
        assert_eq!(code.height(), 1);
        assert_eq!(code.value(), 0b1_0001);
    }

    #[test]
    fn size_grows_cell_by_cell() {
        // monomino → domino → tromino → tetromino → pentomino
        let cells = [p(0, 0), p(0, 1), p(1, 1), p(1, 2), p(2, 2)];
        for k in 1..=cells.len() {
            assert_eq!(encode(&cells[..k]).size(), k as u32);
        }
    }

    #[test]
    fn duplicates_are_tolerated() {
        let code = encode(&[p(0, 0), p(0, 1), p(0, 0)]);
        assert_eq!(code.size(), 2);
    }

    #[test]
    fn width_sixteen_stored_as_zero() {
        let row: Vec<GridPoint> = (0..16).map(|c| p(0, c)).collect();
        let code = encode(&row);
        assert_eq!(code.value() & 0xF, 0);
        assert_eq!(code.width(), 16);
        assert_eq!(code.height(), 1);
        assert_eq!(code.size(), 16);
    }

    #[test]
    fn tall_bar_height() {
        let bar: Vec<GridPoint> = (0..5).map(|r| p(r, 0)).collect();
        let code = encode(&bar);
        assert_eq!(code.width(), 1);
        assert_eq!(code.height(), 5);
    }

    // ── Encoding errors ─────────────────────────────────────────

    #[test]
    fn empty_input_rejected() {
        assert_eq!(
            ShapeCode::encode(Vec::<GridPoint>::new()),
            Err(CodeError::EmptyShape)
        );
    }

    #[test]
    fn negative_coordinates_rejected() {
        assert_eq!(
            ShapeCode::encode([p(-1, 0)]),
            Err(CodeError::NegativeCoordinate { point: p(-1, 0) })
        );
        assert_eq!(
            ShapeCode::encode([p(0, 0), p(0, -3)]),
            Err(CodeError::NegativeCoordinate { point: p(0, -3) })
        );
    }

    #[test]
    fn width_overflow_rejected() {
        let wide: Vec<GridPoint> = (0..17).map(|c| p(0, c)).collect();
        assert_eq!(
            ShapeCode::encode(wide),
            Err(CodeError::WidthOverflow { width: 17 })
        );
    }

    #[test]
    fn mask_overflow_rejected() {
        // Width 1, row 124 would need bit 124 — one past the last mask bit.
        assert_eq!(
            ShapeCode::encode([p(124, 0)]),
            Err(CodeError::MaskOverflow { bits: 125 })
        );
        assert!(ShapeCode::encode([p(123, 0)]).is_ok());
    }

    #[test]
    fn from_value_rejects_empty_mask() {
        assert_eq!(ShapeCode::from_value(0x5), Err(CodeError::EmptyShape));
        let code = encode(&[p(0, 0)]);
        assert_eq!(ShapeCode::from_value(code.value()), Ok(code));
    }

    // ── Decoding ────────────────────────────────────────────────

    #[test]
    fn decode_is_the_inverse_of_encode() {
        let cells = [p(0, 0), p(0, 2), p(1, 0), p(1, 1), p(1, 2), p(2, 0), p(2, 2)];
        let code = encode(&cells);
        let decoded: BTreeSet<GridPoint> = code.cells().collect();
        assert_eq!(decoded, cells.iter().copied().collect());
    }

    #[test]
    fn cells_is_restartable() {
        let code = encode(&[p(0, 1), p(1, 0), p(1, 1)]);
        let first: Vec<GridPoint> = code.cells().collect();
        let second: Vec<GridPoint> = code.cells().collect();
        assert_eq!(first, second);
    }

    // ── String form ─────────────────────────────────────────────

    #[test]
    fn string_round_trips() {
        for s in ["1", "11", "111_100_111", "1010_1111_0101"] {
            let code: ShapeCode = s.parse().unwrap();
            assert_eq!(code.to_string(), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn display_matches_layout() {
        let code = encode(&[p(0, 0), p(0, 1), p(0, 2), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]);
        assert_eq!(code.to_string(), "111_100_111");
    }

    #[test]
    fn parse_keeps_declared_width() {
        // Rightmost column unoccupied: width still comes from the row length.
        let code: ShapeCode = "0110".parse().unwrap();
        assert_eq!(code.width(), 4);
        assert_eq!(code.to_string(), "0110");
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert!(matches!(
            "11_1".parse::<ShapeCode>(),
            Err(CodeError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_bad_characters() {
        assert!(matches!(
            "1a1".parse::<ShapeCode>(),
            Err(CodeError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_and_all_zero() {
        assert!(matches!(
            "".parse::<ShapeCode>(),
            Err(CodeError::Malformed { .. })
        ));
        assert_eq!("000".parse::<ShapeCode>(), Err(CodeError::EmptyShape));
    }

    #[test]
    fn display_handles_masks_near_the_bit_limit() {
        // Width 15, height 9: the row-major scan covers 135 cells, past
        // the 124 mask bits, while the highest set bit (row 8, col 0 →
        // bit 120) is comfortably inside them.
        let mut cells: Vec<GridPoint> = (0..15).map(|c| p(0, c)).collect();
        cells.extend((1..9).map(|r| p(r, 0)));
        let code = encode(&cells);
        assert_eq!(code.width(), 15);
        assert_eq!(code.height(), 9);

        let mut rows = vec!["111111111111111"];
        rows.extend(std::iter::repeat_n("100000000000000", 8));
        let expected = rows.join("_");
        assert_eq!(code.to_string(), expected);
        assert_eq!(expected.parse::<ShapeCode>().unwrap(), code);
    }

    #[test]
    fn tallest_width_one_code_round_trips() {
        // Every one of the 124 mask bits set: a 1×124 bar.
        let bar: Vec<GridPoint> = (0..124).map(|r| p(r, 0)).collect();
        let code = encode(&bar);
        assert_eq!(code.height(), 124);
        let s = code.to_string();
        assert_eq!(s.len(), 124 * 2 - 1);
        assert_eq!(s.parse::<ShapeCode>().unwrap(), code);
    }

    #[test]
    fn parse_rejects_wide_rows() {
        let row = "1".repeat(17);
        assert_eq!(
            row.parse::<ShapeCode>(),
            Err(CodeError::WidthOverflow { width: 17 })
        );
    }

    // ── Property tests ──────────────────────────────────────────

    /// Cell sets spanning the full code range: every width 1–16, rows
    /// reaching down to the last of the 124 mask bits.
    fn arb_cells() -> impl Strategy<Value = Vec<GridPoint>> {
        (1u32..=16).prop_flat_map(|width| {
            let max_row = ((ShapeCode::MASK_BITS - 1) / width) as i32;
            prop::collection::btree_set((0i32..=max_row, 0i32..width as i32), 1..32).prop_map(
                move |cells| {
                    let mut points: Vec<GridPoint> = cells
                        .into_iter()
                        .filter(|&(r, c)| r as u32 * width + (c as u32) < ShapeCode::MASK_BITS)
                        .map(|(r, c)| p(r, c))
                        .collect();
                    if points.is_empty() {
                        points.push(p(0, 0));
                    }
                    points
                },
            )
        })
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary_cell_sets(points in arb_cells()) {
            let code = ShapeCode::encode(points.iter().copied()).unwrap();
            let decoded: BTreeSet<GridPoint> = code.cells().collect();
            let expected: BTreeSet<GridPoint> = points.iter().copied().collect();
            prop_assert_eq!(&decoded, &expected);
            prop_assert_eq!(code.size() as usize, expected.len());

            let max_col = points.iter().map(|q| q.col).max().unwrap();
            let max_row = points.iter().map(|q| q.row).max().unwrap();
            prop_assert_eq!(code.width() as i32, max_col + 1);
            prop_assert_eq!(code.height() as i32, max_row + 1);
        }

        #[test]
        fn string_form_round_trips_every_code(points in arb_cells()) {
            let code = ShapeCode::encode(points.iter().copied()).unwrap();
            let reparsed: ShapeCode = code.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, code);
        }
    }
}
