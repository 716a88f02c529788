//! Canonical bit-packed polyomino shape codes.
//!
//! A [`ShapeCode`] packs a shape's bounding-box width and a row-major
//! cell mask into a single unsigned integer, giving every cell layout a
//! compact, comparable, hashable canonical value with an exact textual
//! form (`"111_100_111"`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod code;
mod error;

pub use code::ShapeCode;
pub use error::CodeError;
