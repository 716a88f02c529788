//! Rectilinear boundary tracing and symmetry words for polyominoes.
//!
//! Two views of the same closed boundary, both produced by a grid
//! wall-follower that keeps the shape's interior on its left:
//!
//! - [`trace_outline`]: the corner vertices of the outer boundary, for
//!   rendering and geometric consumers.
//! - [`BoundaryWord`]: one entry per unit boundary segment, turning
//!   symmetry detection into O(perimeter) sequence comparison
//!   ([`BoundaryWord::is_palindrome`], [`BoundaryWord::is_inverse`]).
//!
//! Inputs must be edge-connected and hole-free; both entry points
//! validate this and fail fast instead of producing a malformed
//! boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod trace;
mod walker;
mod word;

pub use error::BoundaryError;
pub use walker::trace_outline;
pub use word::{BoundaryEdge, BoundaryWord};
