//! Uniform fixed velocity.
//!
//! ```text
//! wall
//! {
//!     type            uniformFixedValue;
//!     uniformValue    (0 0 0);
//! }
//! ```

use crate::io::{ConfigurationError, Dictionary};
use crate::types::Vec3;

use super::{check_sizes, BoundaryError, VectorPatchCondition};

/// Same velocity on every face of the patch.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedVelocity {
    value: Vec3,
}

impl FixedVelocity {
    pub const TYPE_NAME: &'static str = "uniformFixedValue";
    pub const VALUE_KEY: &'static str = "uniformValue";

    pub fn new(value: Vec3) -> Self {
        Self { value }
    }

    /// No-slip wall.
    pub fn no_slip() -> Self {
        Self::new(Vec3::ZERO)
    }

    pub fn from_dictionary(dict: &Dictionary) -> Result<Self, ConfigurationError> {
        Ok(Self::new(dict.lookup_vector(Self::VALUE_KEY)?))
    }

    pub fn value(&self) -> Vec3 {
        self.value
    }
}

impl VectorPatchCondition for FixedVelocity {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn evaluate_into(
        &self,
        face_centres: &[Vec3],
        values: &mut [Vec3],
    ) -> Result<(), BoundaryError> {
        check_sizes(face_centres, values)?;
        values.fill(self.value);
        Ok(())
    }

    fn describe(&self) -> Dictionary {
        Dictionary::new().with(Self::VALUE_KEY, self.value)
    }

    fn remap_onto(&self, _new_face_count: usize) -> Box<dyn VectorPatchCondition> {
        Box::new(self.clone())
    }

    fn clone_boxed(&self) -> Box<dyn VectorPatchCondition> {
        Box::new(self.clone())
    }
}
