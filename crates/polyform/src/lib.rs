//! Polyform: a combinatorial-geometry engine for polyomino catalogs.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Polyform sub-crates. For most users, adding `polyform` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use polyform::prelude::*;
//!
//! // Decode a canonical shape code into cells.
//! let code: ShapeCode = "11_11".parse().unwrap();
//! assert_eq!(code.size(), 4);
//!
//! // Build a point set and trace its boundary.
//! let cells: PointSet = code.cells().collect();
//! let word = BoundaryWord::trace(&cells).unwrap();
//! assert_eq!(word.len(), 8); // perimeter of the 2×2 square
//!
//! // Corner outline and collapsed word agree.
//! assert_eq!(word.outline(), trace_outline(&cells).unwrap());
//!
//! // Classify by directional convexity (levels come from an external
//! // classifier; a square is convex in every direction).
//! let class = DirectionClass::new(Convexity::Four, Convexity::Four);
//! assert_eq!(class.name(), "rectangle");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `polyform-core` | `GridPoint`, `Direction`, `PointSet`, pattern parsing |
//! | [`code`] | `polyform-code` | `ShapeCode` bit-packed encoding |
//! | [`boundary`] | `polyform-boundary` | corner walker, `BoundaryWord` |
//! | [`class`] | `polyform-class` | `Convexity`, `DirectionClass` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid primitives (`polyform-core`).
pub mod grid {
    pub use polyform_core::*;
}

/// Shape codes (`polyform-code`).
pub mod code {
    pub use polyform_code::*;
}

/// Boundary tracing and symmetry words (`polyform-boundary`).
pub mod boundary {
    pub use polyform_boundary::*;
}

/// The directional-convexity taxonomy (`polyform-class`).
pub mod class {
    pub use polyform_class::*;
}

/// The most common imports in one place.
pub mod prelude {
    pub use polyform_boundary::{trace_outline, BoundaryEdge, BoundaryError, BoundaryWord};
    pub use polyform_class::{Convexity, DirectionClass};
    pub use polyform_code::{CodeError, ShapeCode};
    pub use polyform_core::{parse_pattern, Direction, GridPoint, PatternError, PointSet};
}
