//! Fixed-value patch field owning a boundary condition.
//!
//! The patch field holds the per-face values the solver reads, and
//! refreshes them from its condition once per update cycle:
//!
//! ```text
//! update_coeffs(patch)   recompute values unless already updated
//! evaluate(patch)        update, then mark stale for the next cycle
//! auto_map(mapper)       remap values after a mesh change
//! ```

use crate::io::{ConfigurationError, Dictionary, Entry, FieldValue};
use crate::mesh::{MappingError, Patch, PatchMapper};
use crate::types::Vec3;

use super::{condition_from_dictionary, BoundaryError, VectorPatchCondition};

/// Key of the optional seed values.
pub const INITIAL_VALUE_KEY: &str = "initialValue";
/// Key the current values are written under.
pub const VALUE_KEY: &str = "value";

/// Per-face vector values prescribed by a boundary condition.
#[derive(Clone, Debug)]
pub struct FixedValuePatchField {
    condition: Box<dyn VectorPatchCondition>,
    values: Vec<Vec3>,
    updated: bool,
}

impl FixedValuePatchField {
    /// Create with zero values on `n_faces` faces.
    pub fn new(condition: Box<dyn VectorPatchCondition>, n_faces: usize) -> Self {
        Self {
            condition,
            values: vec![Vec3::ZERO; n_faces],
            updated: false,
        }
    }

    /// Create from a patch entry of a configuration record.
    ///
    /// The `type` entry selects the condition. Values are seeded from
    /// `initialValue` (or `value`) when present, otherwise zero.
    pub fn from_dictionary(dict: &Dictionary, n_faces: usize) -> Result<Self, ConfigurationError> {
        let condition = condition_from_dictionary(dict)?;

        let values = match dict.find_any(&[INITIAL_VALUE_KEY, VALUE_KEY]) {
            Some((key, Entry::Field(field))) => field.expand(key, n_faces)?,
            Some((key, other)) => {
                return Err(ConfigurationError::TypeMismatch {
                    key: key.to_string(),
                    expected: "field",
                    found: other.kind(),
                })
            }
            None => vec![Vec3::ZERO; n_faces],
        };

        Ok(Self {
            condition,
            values,
            updated: false,
        })
    }

    pub fn condition(&self) -> &dyn VectorPatchCondition {
        self.condition.as_ref()
    }

    /// Current per-face values.
    pub fn values(&self) -> &[Vec3] {
        &self.values
    }

    /// Number of faces.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// True if the values are current for this cycle.
    pub fn is_updated(&self) -> bool {
        self.updated
    }

    /// Recompute the values from the patch geometry.
    ///
    /// Does nothing if already updated in this cycle. On error the
    /// previous values are kept.
    pub fn update_coeffs(&mut self, patch: &Patch) -> Result<(), BoundaryError> {
        if self.updated {
            return Ok(());
        }
        if patch.size() != self.values.len() {
            return Err(BoundaryError::SizeMismatch {
                expected: self.values.len(),
                found: patch.size(),
            });
        }

        self.values = self.condition.evaluate(patch.face_centres())?;
        self.updated = true;

        log::debug!(
            "Updated {} on patch '{}' ({} faces)",
            self.condition.type_name(),
            patch.name(),
            patch.size()
        );
        Ok(())
    }

    /// Update if needed and reset for the next cycle.
    pub fn evaluate(&mut self, patch: &Patch) -> Result<(), BoundaryError> {
        self.update_coeffs(patch)?;
        self.updated = false;
        Ok(())
    }

    /// Remap onto a changed patch.
    ///
    /// Values are carried over face by face; the condition parameters are
    /// copied unchanged.
    pub fn auto_map(&mut self, mapper: &PatchMapper) -> Result<(), MappingError> {
        self.values = mapper.map(&self.values)?;
        self.condition = self.condition.remap_onto(mapper.size());
        self.updated = false;
        Ok(())
    }

    /// Patch entry with type, parameters and current values.
    pub fn write(&self) -> Dictionary {
        let mut dict = Dictionary::new().with("type", self.condition.type_name());
        for (key, entry) in self.condition.describe().iter() {
            dict.insert(key, entry.clone());
        }
        dict.insert(VALUE_KEY, FieldValue::NonUniform(self.values.clone()));
        dict
    }
}
