//! Directional-convexity taxonomy for polyomino classification.
//!
//! A shape's orthogonal (row/column) and diagonal convexity are each
//! graded on a six-level ordinal scale; the pair maps through a fixed,
//! hand-authored table to one of 13 named classes, with every unmatched
//! pair falling back to `"other"`. The levels themselves are computed
//! by an external geometric classifier — this crate only names the
//! pairs.
//!
//! The table is process-wide constant data: built into the binary,
//! never mutated, safe to read from any number of threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::fmt;

/// One level on the ordinal convexity scale.
///
/// Ordered weakest to strongest; the two `Two` variants are
/// incomparable in geometric strength but ordered here for a total
/// order: `Zero < One < TwoMeta < TwoPara < Three < Four`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Convexity {
    /// No directional convexity.
    Zero,
    /// Convex in one direction.
    One,
    /// Convex in two meta (perpendicular) directions.
    TwoMeta,
    /// Convex in two para (parallel/opposite) directions.
    TwoPara,
    /// Convex in three directions.
    Three,
    /// Convex in all four directions.
    Four,
}

impl fmt::Display for Convexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::TwoMeta => "2m",
            Self::TwoPara => "2p",
            Self::Three => "3",
            Self::Four => "4",
        };
        f.write_str(s)
    }
}

/// A pair of convexity levels: orthogonal (row/column) and diagonal.
///
/// Structural equality on both levels. Instances either come from the
/// fixed table ([`DirectionClass::from_name`], [`DirectionClass::all`])
/// or are built ad hoc from computed levels by an external classifier
/// and then named via [`DirectionClass::name`].
///
/// # Examples
///
/// ```
/// use polyform_class::{Convexity, DirectionClass};
///
/// let rect = DirectionClass::from_name("rectangle");
/// assert_eq!(rect, DirectionClass::new(Convexity::Four, Convexity::Four));
/// assert_eq!(rect.name(), "rectangle");
/// assert_eq!(rect.code(), "RE");
///
/// // Unlisted pairs classify as "other".
/// let odd = DirectionClass::new(Convexity::TwoMeta, Convexity::TwoMeta);
/// assert_eq!(odd.name(), "other");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionClass {
    /// Orthogonal (row/column) convexity level.
    pub ortho: Convexity,
    /// Diagonal convexity level.
    pub diag: Convexity,
}

/// One row of the fixed taxonomy table.
struct ClassEntry {
    name: &'static str,
    code: &'static str,
    class: DirectionClass,
}

const fn entry(name: &'static str, code: &'static str, ortho: Convexity, diag: Convexity) -> ClassEntry {
    ClassEntry {
        name,
        code,
        class: DirectionClass::new(ortho, diag),
    }
}

/// The 13 named classes plus the `"other"` fallback, strongest first.
/// `"other"` is last so that [`DirectionClass::all`] enumerates the
/// named classes before the catch-all.
static CLASSES: [ClassEntry; 14] = {
    use Convexity::{Four, One, Three, TwoMeta, TwoPara, Zero};
    [
        entry("rectangle", "RE", Four, Four),
        entry("Ferrers diagram", "FD", Four, Three),
        entry("staircase", "SC", Four, TwoPara),
        entry("stack", "ST", Four, TwoMeta),
        entry("fork", "FK", Four, One),
        entry("bar chart", "BC", Three, TwoMeta),
        entry("cross", "CR", Four, Zero),
        entry("wing", "WG", Three, One),
        entry("crescent", "CE", Three, Zero),
        entry("antler", "AN", TwoMeta, One),
        entry("range chart", "RC", TwoPara, Zero),
        entry("bent tree", "BT", TwoMeta, Zero),
        entry("tree", "TR", One, Zero),
        entry("other", "OT", Zero, Zero),
    ]
};

impl DirectionClass {
    /// Create a class from explicit levels.
    pub const fn new(ortho: Convexity, diag: Convexity) -> Self {
        Self { ortho, diag }
    }

    /// The `"other"` fallback class, `(0, 0)`.
    pub const OTHER: DirectionClass = DirectionClass::new(Convexity::Zero, Convexity::Zero);

    /// Look up a class by name. Unknown names yield [`Self::OTHER`].
    pub fn from_name(name: &str) -> DirectionClass {
        CLASSES
            .iter()
            .find(|e| e.name == name)
            .map_or(Self::OTHER, |e| e.class)
    }

    /// The class name, or `"other"` for any pair not in the table.
    pub fn name(self) -> &'static str {
        self.lookup().name
    }

    /// The short symbolic abbreviation, or `"other"`'s code for any
    /// pair not in the table.
    pub fn code(self) -> &'static str {
        self.lookup().code
    }

    /// The 14 canonical classes in table order, `"other"` last.
    pub fn all() -> [DirectionClass; 14] {
        let mut out = [Self::OTHER; 14];
        for (slot, entry) in out.iter_mut().zip(CLASSES.iter()) {
            *slot = entry.class;
        }
        out
    }

    fn lookup(self) -> &'static ClassEntry {
        CLASSES
            .iter()
            .find(|e| e.class == self)
            .unwrap_or(&CLASSES[13])
    }
}

impl fmt::Display for DirectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name(), self.ortho, self.diag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Convexity::{Four, One, Three, TwoMeta, TwoPara, Zero};

    #[test]
    fn rectangle_round_trips() {
        let rect = DirectionClass::from_name("rectangle");
        assert_eq!(rect, DirectionClass::new(Four, Four));
        assert_eq!(rect.name(), "rectangle");
        assert_eq!(DirectionClass::new(Four, Four).name(), "rectangle");
    }

    #[test]
    fn every_entry_round_trips_through_name() {
        for class in DirectionClass::all() {
            assert_eq!(DirectionClass::from_name(class.name()), class);
        }
    }

    #[test]
    fn unknown_name_is_other() {
        assert_eq!(DirectionClass::from_name("pretzel"), DirectionClass::OTHER);
        assert_eq!(DirectionClass::from_name(""), DirectionClass::OTHER);
    }

    #[test]
    fn unlisted_pair_is_other() {
        let odd = DirectionClass::new(TwoMeta, TwoMeta);
        assert_eq!(odd.name(), "other");
        assert_eq!(odd.code(), "OT");
        // but structural equality still distinguishes it from OTHER
        assert_ne!(odd, DirectionClass::OTHER);
    }

    #[test]
    fn codes_are_distinct() {
        let mut codes: Vec<&str> = DirectionClass::all().iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 14);
    }

    #[test]
    fn all_enumerates_named_classes_then_other() {
        let all = DirectionClass::all();
        assert_eq!(all.len(), 14);
        assert_eq!(all[0].name(), "rectangle");
        assert_eq!(all[13], DirectionClass::OTHER);
        // every pair in the table is unique
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn convexity_scale_is_ordered() {
        assert!(Zero < One);
        assert!(One < TwoMeta);
        assert!(TwoMeta < TwoPara);
        assert!(TwoPara < Three);
        assert!(Three < Four);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Convexity::TwoPara.to_string(), "2p");
        assert_eq!(
            DirectionClass::new(Four, TwoPara).to_string(),
            "staircase (4, 2p)"
        );
    }

    #[test]
    fn expected_pairs() {
        assert_eq!(DirectionClass::from_name("tree"), DirectionClass::new(One, Zero));
        assert_eq!(
            DirectionClass::from_name("bar chart"),
            DirectionClass::new(Three, TwoMeta)
        );
        assert_eq!(
            DirectionClass::from_name("range chart"),
            DirectionClass::new(TwoPara, Zero)
        );
    }
}
