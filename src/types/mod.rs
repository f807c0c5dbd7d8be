//! Geometric value types.

mod vector;

pub use vector::{Vec3, DEGENERATE_NORM};
