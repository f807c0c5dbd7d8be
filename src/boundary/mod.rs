//! Vector boundary conditions for velocity inlet patches.
//!
//! A boundary condition turns the face centres of a patch into one
//! prescribed vector per face. The host solver holds conditions as
//! `Box<dyn VectorPatchCondition>` inside a [`FixedValuePatchField`], which
//! owns the per-face value buffer and drives the update cycle.
//!
//! # Available Boundary Conditions
//!
//! | Type name | Struct | Description |
//! |-----------|--------|-------------|
//! | `parabolicVelocity` | [`ParabolicVelocity`] | Parabolic profile, zero at the walls |
//! | `uniformFixedValue` | [`FixedVelocity`] | Same vector on every face |
//!
//! # Example
//!
//! ```
//! use parabolic_velocity::boundary::FixedValuePatchField;
//! use parabolic_velocity::io::parse_dictionary;
//! use parabolic_velocity::mesh::Patch;
//! use parabolic_velocity::types::Vec3;
//!
//! let dict = parse_dictionary(
//!     "type parabolicVelocity;
//!      peakMagnitude 2;
//!      flowDirection (1 0 0);
//!      transverseDirection (0 1 0);",
//! )
//! .unwrap();
//!
//! let (start, end) = (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
//! let patch = Patch::uniform_strip("inlet", start, end, 8);
//! let mut field = FixedValuePatchField::from_dictionary(&dict, patch.size()).unwrap();
//! field.evaluate(&patch).unwrap();
//!
//! assert!(field.values().iter().all(|u| u.x >= 0.0 && u.x <= 2.0));
//! ```

mod fixed_velocity;
mod parabolic_velocity;
mod patch_field;

pub use fixed_velocity::FixedVelocity;
pub use parabolic_velocity::{ParabolicVelocity, ProfileExtent};
pub use patch_field::FixedValuePatchField;

use std::fmt;

use thiserror::Error;

use crate::io::{ConfigurationError, Dictionary};
use crate::mesh::MappingError;
use crate::types::Vec3;

/// Which direction parameter of a condition is meant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Flow,
    Transverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Flow => write!(f, "flow direction"),
            Direction::Transverse => write!(f, "transverse direction"),
        }
    }
}

/// A direction vector has zero or non-finite length.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Degenerate {direction}: norm {norm:e} cannot be normalized")]
pub struct DegenerateDirectionError {
    pub direction: Direction,
    pub norm: f64,
}

impl DegenerateDirectionError {
    /// Normalize `v`, reporting it as `direction` if it is degenerate.
    pub fn check(direction: Direction, v: Vec3) -> Result<Vec3, Self> {
        v.try_normalize().ok_or(Self {
            direction,
            norm: v.norm(),
        })
    }
}

/// Error type for boundary condition construction and evaluation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BoundaryError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    DegenerateDirection(#[from] DegenerateDirectionError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// Face count and value buffer length differ
    #[error("Patch has {found} faces, but the field holds {expected} values")]
    SizeMismatch { expected: usize, found: usize },
}

/// Trait for vector-valued patch boundary conditions.
///
/// Implementations hold only global parameters; the per-face values are
/// recomputed from the face centres on every call.
pub trait VectorPatchCondition: Send + Sync + fmt::Debug {
    /// Type name used in the `type` entry of a configuration record.
    fn type_name(&self) -> &'static str;

    /// Compute one value per face into `values`.
    ///
    /// `values` must have the same length as `face_centres`. On error
    /// nothing is written.
    fn evaluate_into(&self, face_centres: &[Vec3], values: &mut [Vec3])
    -> Result<(), BoundaryError>;

    /// Compute one value per face.
    fn evaluate(&self, face_centres: &[Vec3]) -> Result<Vec<Vec3>, BoundaryError> {
        let mut values = vec![Vec3::ZERO; face_centres.len()];
        self.evaluate_into(face_centres, &mut values)?;
        Ok(values)
    }

    /// Parameters as a configuration record (without the `type` entry).
    fn describe(&self) -> Dictionary;

    /// Copy of this condition for a patch of `new_face_count` faces.
    fn remap_onto(&self, new_face_count: usize) -> Box<dyn VectorPatchCondition>;

    /// Boxed value copy.
    fn clone_boxed(&self) -> Box<dyn VectorPatchCondition>;
}

impl Clone for Box<dyn VectorPatchCondition> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

pub(crate) fn check_sizes(face_centres: &[Vec3], values: &[Vec3]) -> Result<(), BoundaryError> {
    if face_centres.len() != values.len() {
        return Err(BoundaryError::SizeMismatch {
            expected: values.len(),
            found: face_centres.len(),
        });
    }
    Ok(())
}

/// Construct the condition named by the `type` entry of `dict`.
pub fn condition_from_dictionary(
    dict: &Dictionary,
) -> Result<Box<dyn VectorPatchCondition>, ConfigurationError> {
    match dict.lookup_word("type")? {
        ParabolicVelocity::TYPE_NAME => Ok(Box::new(ParabolicVelocity::from_dictionary(dict)?)),
        FixedVelocity::TYPE_NAME => Ok(Box::new(FixedVelocity::from_dictionary(dict)?)),
        other => Err(ConfigurationError::UnknownType(other.to_string())),
    }
}
