//! Boundary patch geometry and face mapping.
//!
//! A [`Patch`] is a snapshot of the face centres of one boundary patch.
//! When the mesh is refined or redistributed the patch faces change; a
//! [`PatchMapper`] records, for every new face, which old face it takes its
//! value from.

use thiserror::Error;

use crate::types::Vec3;

/// Error type for patch mapping.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MappingError {
    /// A new face refers to an old face that does not exist
    #[error("Face {face} maps from index {index}, but the source has {source_size} faces")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        source_size: usize,
    },
}

/// Named set of boundary face centres.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    name: String,
    face_centres: Vec<Vec3>,
}

impl Patch {
    /// Create a patch from its face centres.
    pub fn new(name: impl Into<String>, face_centres: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            face_centres,
        }
    }

    /// Straight inlet of `n_faces` equal faces between `start` and `end`.
    ///
    /// Face centres sit at the segment midpoints, so the outermost centres
    /// are half a face width inside the end points.
    ///
    /// # Example
    ///
    /// ```
    /// use parabolic_velocity::mesh::Patch;
    /// use parabolic_velocity::types::Vec3;
    ///
    /// let inlet = Patch::uniform_strip(
    ///     "inlet",
    ///     Vec3::new(0.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    ///     4,
    /// );
    /// assert_eq!(inlet.size(), 4);
    /// assert_eq!(inlet.face_centres()[0], Vec3::new(0.0, 0.125, 0.0));
    /// ```
    pub fn uniform_strip(name: impl Into<String>, start: Vec3, end: Vec3, n_faces: usize) -> Self {
        let face_centres = (0..n_faces)
            .map(|i| start.lerp(&end, (i as f64 + 0.5) / n_faces as f64))
            .collect();
        Self::new(name, face_centres)
    }

    /// Patch name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of faces.
    pub fn size(&self) -> usize {
        self.face_centres.len()
    }

    /// Check if the patch has no faces.
    pub fn is_empty(&self) -> bool {
        self.face_centres.is_empty()
    }

    /// Face centre positions, in face order.
    pub fn face_centres(&self) -> &[Vec3] {
        &self.face_centres
    }

    /// Replace the face centres (mesh motion, refinement).
    pub fn set_face_centres(&mut self, face_centres: Vec<Vec3>) {
        self.face_centres = face_centres;
    }
}

/// Direct face addressing from a new patch onto an old one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchMapper {
    addressing: Vec<usize>,
}

impl PatchMapper {
    /// Mapper where new face `i` takes the value of old face `addressing[i]`.
    pub fn direct(addressing: Vec<usize>) -> Self {
        Self { addressing }
    }

    /// Mapper that keeps all `n_faces` faces in place.
    pub fn identity(n_faces: usize) -> Self {
        Self::direct((0..n_faces).collect())
    }

    /// Number of faces after mapping.
    pub fn size(&self) -> usize {
        self.addressing.len()
    }

    /// Source face index of every new face.
    pub fn addressing(&self) -> &[usize] {
        &self.addressing
    }

    /// Map a per-face field onto the new faces.
    pub fn map<T: Clone>(&self, source: &[T]) -> Result<Vec<T>, MappingError> {
        self.addressing
            .iter()
            .enumerate()
            .map(|(face, &index)| {
                source
                    .get(index)
                    .cloned()
                    .ok_or(MappingError::IndexOutOfRange {
                        face,
                        index,
                        source_size: source.len(),
                    })
            })
            .collect()
    }
}
