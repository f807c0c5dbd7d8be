//! # parabolic-velocity
//!
//! Parabolic inflow velocity boundary condition for finite-volume flow
//! solvers.
//!
//! This crate provides:
//! - The `parabolicVelocity` inlet condition: a fully developed laminar
//!   profile across a planar patch, zero at the walls, peak on the centreline
//! - A small capability trait for vector patch conditions and a fixed-value
//!   patch field that owns the per-face values
//! - Dictionary-format configuration records for reading and writing
//!   conditions
//! - Patch face-centre snapshots and face mapping for remeshing
//!
//! # Example
//!
//! ```
//! use parabolic_velocity::{ParabolicVelocity, Vec3};
//!
//! let bc = ParabolicVelocity::new(2.0, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
//! let faces = [Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
//!
//! let u = bc.evaluate(&faces).unwrap();
//! assert_eq!(u[1], Vec3::new(2.0, 0.0, 0.0));
//! assert_eq!(u[0], Vec3::ZERO);
//! ```

pub mod boundary;
pub mod io;
pub mod mesh;
pub mod types;

pub use boundary::{
    condition_from_dictionary, BoundaryError, DegenerateDirectionError, Direction,
    FixedValuePatchField, FixedVelocity, ParabolicVelocity, ProfileExtent, VectorPatchCondition,
};
pub use io::{
    parse_dictionary, read_dictionary_file, write_dictionary_file, ConfigurationError, Dictionary,
    DictionaryError, Entry, FieldValue,
};
pub use mesh::{MappingError, Patch, PatchMapper};
pub use types::Vec3;
