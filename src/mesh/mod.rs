//! Boundary patch geometry.
//!
//! The solver's mesh is not part of this crate. Boundary conditions only see
//! a [`Patch`]: the face centres of one boundary patch, supplied fresh on
//! every update because they change under mesh motion and refinement.

mod patch;

pub use patch::{MappingError, Patch, PatchMapper};
