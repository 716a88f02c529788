//! Grid primitives for the Polyform polyomino engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental types used throughout the Polyform workspace:
//! integer grid coordinates, cardinal directions, sparse point sets,
//! and pattern-text parsing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod pattern;
pub mod point;
pub mod point_set;

pub use direction::Direction;
pub use error::PatternError;
pub use pattern::parse_pattern;
pub use point::GridPoint;
pub use point_set::PointSet;
