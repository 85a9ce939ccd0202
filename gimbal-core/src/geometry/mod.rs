//! Simple planar and spatial shapes built on the vector types.

mod triangle;

pub use triangle::{Triangle2, Triangle3};
