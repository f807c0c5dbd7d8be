//! Parabolic inflow velocity profile.
//!
//! Prescribes a fully developed laminar (Poiseuille) inlet profile across a
//! planar patch of a 2D or 2D-extruded channel.
//!
//! # Mathematical Formulation
//!
//! With unit flow direction n̂, unit transverse direction ŷ and peak speed U:
//!
//! ```text
//! t     = p · ŷ                          transverse coordinate of face centre p
//! y_min = min t,  y_max = max t          over all faces of the patch
//! c     = (y_min + y_max) / 2            centreline
//! w     = (y_max - y_min) / 2            half-width
//! u     = (t - c) / w
//! U(p)  = U · max(0, 1 - u²) · n̂
//! ```
//!
//! The channel walls are taken from the patch itself: the outermost face
//! centres get zero velocity and the centreline gets the full peak.
//!
//! # Configuration
//!
//! ```text
//! inlet
//! {
//!     type                parabolicVelocity;
//!     peakMagnitude       2;
//!     flowDirection       (1 0 0);
//!     transverseDirection (0 1 0);
//!     initialValue        uniform (0 0 0);   // optional
//! }
//! ```
//!
//! The keys `maxValue`, `n` and `y` are accepted in place of the three
//! parameter keys.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::io::{ConfigurationError, Dictionary};
use crate::types::Vec3;

use super::{
    check_sizes, BoundaryError, DegenerateDirectionError, Direction, VectorPatchCondition,
};

/// Relative half-width below which the patch is treated as a single row.
const FLAT_TOLERANCE: f64 = 1e-12;

static FLAT_PROFILE_WARNED: AtomicBool = AtomicBool::new(false);

/// Extent of a patch along the transverse direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileExtent {
    /// Smallest transverse coordinate (first wall)
    pub min: f64,
    /// Largest transverse coordinate (second wall)
    pub max: f64,
}

impl ProfileExtent {
    /// Extent of a single coordinate.
    pub fn point(t: f64) -> Self {
        Self { min: t, max: t }
    }

    /// Smallest extent covering both.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Extent of `face_centres` projected onto `unit_transverse`.
    ///
    /// Returns `None` for an empty patch.
    pub fn across(face_centres: &[Vec3], unit_transverse: &Vec3) -> Option<Self> {
        face_centres
            .iter()
            .map(|p| Self::point(p.dot(unit_transverse)))
            .reduce(Self::merge)
    }

    /// Centreline coordinate.
    pub fn centre(&self) -> f64 {
        0.5 * self.min + 0.5 * self.max
    }

    /// Half the distance between the walls.
    pub fn half_width(&self) -> f64 {
        0.5 * self.max - 0.5 * self.min
    }

    /// True if all faces lie on one transverse coordinate.
    pub fn is_flat(&self) -> bool {
        self.half_width() <= FLAT_TOLERANCE * self.min.abs().max(self.max.abs())
    }

    /// Centred coordinate `u`, -1 at `min` and +1 at `max`; 0 for a flat extent.
    pub fn normalized_coordinate(&self, t: f64) -> f64 {
        if self.is_flat() {
            0.0
        } else {
            (t - self.centre()) / self.half_width()
        }
    }

    /// Parabolic scale factor `max(0, 1 - u²)`.
    ///
    /// Exactly 1 on the centreline and exactly 0 on and beyond the walls;
    /// 1 everywhere for a flat extent.
    pub fn shape_factor(&self, t: f64) -> f64 {
        if self.is_flat() {
            return 1.0;
        }
        if t <= self.min || t >= self.max {
            return 0.0;
        }
        let u = self.normalized_coordinate(t);
        (1.0 - u * u).clamp(0.0, 1.0)
    }
}

fn warn_flat_once(extent: &ProfileExtent) {
    if !FLAT_PROFILE_WARNED.swap(true, Ordering::Relaxed) {
        log::warn!(
            "parabolicVelocity: all faces lie at transverse coordinate {}; \
             applying a flat profile. Check transverseDirection.",
            extent.centre()
        );
    }
}

/// Parabolic velocity inlet.
///
/// Stores the three parameters exactly as configured; directions are
/// normalized only when evaluating, so [`describe`](Self::describe)
/// returns what was given.
///
/// # Example
///
/// ```
/// use parabolic_velocity::boundary::ParabolicVelocity;
/// use parabolic_velocity::types::Vec3;
///
/// let bc = ParabolicVelocity::new(2.0, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
/// let faces: Vec<Vec3> = [-1.0, -0.5, 0.0, 0.5, 1.0]
///     .iter()
///     .map(|&y| Vec3::new(0.0, y, 0.0))
///     .collect();
///
/// let u = bc.evaluate(&faces).unwrap();
/// let ux: Vec<f64> = u.iter().map(|v| v.x).collect();
/// assert_eq!(ux, vec![0.0, 1.5, 2.0, 1.5, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParabolicVelocity {
    peak_magnitude: f64,
    flow_direction: Vec3,
    transverse_direction: Vec3,
}

impl ParabolicVelocity {
    /// Type name in configuration records.
    pub const TYPE_NAME: &'static str = "parabolicVelocity";

    /// Key of the peak speed.
    pub const PEAK_MAGNITUDE_KEY: &'static str = "peakMagnitude";
    /// Key of the flow direction.
    pub const FLOW_DIRECTION_KEY: &'static str = "flowDirection";
    /// Key of the transverse direction.
    pub const TRANSVERSE_DIRECTION_KEY: &'static str = "transverseDirection";

    const LEGACY_KEYS: [(&'static str, &'static str); 3] = [
        (Self::PEAK_MAGNITUDE_KEY, "maxValue"),
        (Self::FLOW_DIRECTION_KEY, "n"),
        (Self::TRANSVERSE_DIRECTION_KEY, "y"),
    ];

    /// Create from explicit parameters, stored as given.
    pub fn new(peak_magnitude: f64, flow_direction: Vec3, transverse_direction: Vec3) -> Self {
        Self {
            peak_magnitude,
            flow_direction,
            transverse_direction,
        }
    }

    /// Create from a configuration record.
    ///
    /// All three parameters are required. An `initialValue` entry is left
    /// for the owning patch field.
    pub fn from_dictionary(dict: &Dictionary) -> Result<Self, ConfigurationError> {
        let [peak_key, flow_key, transverse_key] = Self::LEGACY_KEYS.map(|(key, legacy)| {
            if !dict.contains(key) && dict.contains(legacy) {
                log::warn!(
                    "{}: entry '{legacy}' is deprecated, use '{key}'",
                    Self::TYPE_NAME
                );
                legacy
            } else {
                key
            }
        });

        Ok(Self {
            peak_magnitude: dict.lookup_scalar(peak_key)?,
            flow_direction: dict.lookup_vector(flow_key)?,
            transverse_direction: dict.lookup_vector(transverse_key)?,
        })
    }

    /// Copy for a remapped patch.
    ///
    /// The parameters do not depend on the faces, so the face count is
    /// ignored.
    pub fn remap_onto(&self, _new_face_count: usize) -> Self {
        self.clone()
    }

    /// Peak speed on the centreline.
    pub fn peak_magnitude(&self) -> f64 {
        self.peak_magnitude
    }

    /// Flow direction as configured (not normalized).
    pub fn flow_direction(&self) -> Vec3 {
        self.flow_direction
    }

    /// Transverse direction as configured (not normalized).
    pub fn transverse_direction(&self) -> Vec3 {
        self.transverse_direction
    }

    /// Set the peak speed; a negative value reverses the flow.
    pub fn set_peak_magnitude(&mut self, peak_magnitude: f64) {
        self.peak_magnitude = peak_magnitude;
    }

    /// Set the flow direction; a degenerate vector is rejected and the
    /// current direction kept.
    pub fn set_flow_direction(
        &mut self,
        flow_direction: Vec3,
    ) -> Result<(), DegenerateDirectionError> {
        DegenerateDirectionError::check(Direction::Flow, flow_direction)?;
        self.flow_direction = flow_direction;
        Ok(())
    }

    /// Set the transverse direction; a degenerate vector is rejected and
    /// the current direction kept.
    pub fn set_transverse_direction(
        &mut self,
        transverse_direction: Vec3,
    ) -> Result<(), DegenerateDirectionError> {
        DegenerateDirectionError::check(Direction::Transverse, transverse_direction)?;
        self.transverse_direction = transverse_direction;
        Ok(())
    }

    /// Unit flow and transverse directions.
    pub fn unit_directions(&self) -> Result<(Vec3, Vec3), DegenerateDirectionError> {
        let flow = DegenerateDirectionError::check(Direction::Flow, self.flow_direction)?;
        let transverse =
            DegenerateDirectionError::check(Direction::Transverse, self.transverse_direction)?;
        Ok((flow, transverse))
    }

    /// Transverse extent of a set of face centres.
    pub fn extent(
        &self,
        face_centres: &[Vec3],
    ) -> Result<Option<ProfileExtent>, DegenerateDirectionError> {
        let (_, transverse) = self.unit_directions()?;
        Ok(ProfileExtent::across(face_centres, &transverse))
    }

    #[inline]
    fn velocity_at(&self, t: f64, extent: &ProfileExtent, unit_flow: Vec3) -> Vec3 {
        unit_flow.scale(self.peak_magnitude * extent.shape_factor(t))
    }

    /// Velocity at every face centre, in face order.
    pub fn evaluate(
        &self,
        face_centres: &[Vec3],
    ) -> Result<Vec<Vec3>, DegenerateDirectionError> {
        let (flow, transverse) = self.unit_directions()?;
        let Some(extent) = ProfileExtent::across(face_centres, &transverse) else {
            return Ok(Vec::new());
        };
        if extent.is_flat() {
            warn_flat_once(&extent);
        }

        Ok(face_centres
            .iter()
            .map(|p| self.velocity_at(p.dot(&transverse), &extent, flow))
            .collect())
    }

    /// Velocity at every face centre, written into `values`.
    pub fn evaluate_into(
        &self,
        face_centres: &[Vec3],
        values: &mut [Vec3],
    ) -> Result<(), BoundaryError> {
        check_sizes(face_centres, values)?;
        let (flow, transverse) = self.unit_directions()?;
        let Some(extent) = ProfileExtent::across(face_centres, &transverse) else {
            return Ok(());
        };
        if extent.is_flat() {
            warn_flat_once(&extent);
        }

        for (value, p) in values.iter_mut().zip(face_centres) {
            *value = self.velocity_at(p.dot(&transverse), &extent, flow);
        }
        Ok(())
    }

    /// Parallel version of [`evaluate`](Self::evaluate).
    ///
    /// The extent reduction completes before any face is scaled.
    #[cfg(feature = "parallel")]
    pub fn evaluate_parallel(
        &self,
        face_centres: &[Vec3],
    ) -> Result<Vec<Vec3>, DegenerateDirectionError> {
        use rayon::prelude::*;

        let (flow, transverse) = self.unit_directions()?;
        let Some(extent) = face_centres
            .par_iter()
            .map(|p| ProfileExtent::point(p.dot(&transverse)))
            .reduce_with(ProfileExtent::merge)
        else {
            return Ok(Vec::new());
        };
        if extent.is_flat() {
            warn_flat_once(&extent);
        }

        Ok(face_centres
            .par_iter()
            .map(|p| self.velocity_at(p.dot(&transverse), &extent, flow))
            .collect())
    }

    /// Parameters under their stable keys.
    pub fn describe(&self) -> Dictionary {
        Dictionary::new()
            .with(Self::PEAK_MAGNITUDE_KEY, self.peak_magnitude)
            .with(Self::FLOW_DIRECTION_KEY, self.flow_direction)
            .with(Self::TRANSVERSE_DIRECTION_KEY, self.transverse_direction)
    }
}

impl VectorPatchCondition for ParabolicVelocity {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn evaluate_into(
        &self,
        face_centres: &[Vec3],
        values: &mut [Vec3],
    ) -> Result<(), BoundaryError> {
        ParabolicVelocity::evaluate_into(self, face_centres, values)
    }

    fn describe(&self) -> Dictionary {
        ParabolicVelocity::describe(self)
    }

    fn remap_onto(&self, new_face_count: usize) -> Box<dyn VectorPatchCondition> {
        Box::new(ParabolicVelocity::remap_onto(self, new_face_count))
    }

    fn clone_boxed(&self) -> Box<dyn VectorPatchCondition> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parse_dictionary;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    fn channel_faces(ys: &[f64]) -> Vec<Vec3> {
        ys.iter().map(|&y| Vec3::new(0.3, y, -0.1)).collect()
    }

    fn channel_bc(peak: f64) -> ParabolicVelocity {
        ParabolicVelocity::new(peak, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_extent_geometry() {
        let faces = channel_faces(&[0.5, -1.0, 2.0]);
        let extent = ProfileExtent::across(&faces, &Vec3::new(0.0, 1.0, 0.0)).unwrap();

        assert_eq!(extent, ProfileExtent { min: -1.0, max: 2.0 });
        assert_relative_eq!(extent.centre(), 0.5);
        assert_relative_eq!(extent.half_width(), 1.5);
        assert_relative_eq!(extent.normalized_coordinate(2.0), 1.0);
        assert_relative_eq!(extent.normalized_coordinate(-1.0), -1.0);
        assert!(!extent.is_flat());
    }

    #[test]
    fn test_extent_empty() {
        assert!(ProfileExtent::across(&[], &Vec3::new(0.0, 1.0, 0.0)).is_none());
    }

    #[test]
    fn test_shape_factor_clamped() {
        let extent = ProfileExtent { min: -1.0, max: 1.0 };

        assert_eq!(extent.shape_factor(0.0), 1.0);
        assert_eq!(extent.shape_factor(-1.0), 0.0);
        assert_eq!(extent.shape_factor(1.0), 0.0);
        assert_eq!(extent.shape_factor(1.5), 0.0);
        assert_eq!(extent.shape_factor(-3.0), 0.0);
    }

    #[test]
    fn test_flat_extent() {
        let extent = ProfileExtent::point(4.0);
        assert!(extent.is_flat());
        assert_eq!(extent.normalized_coordinate(4.0), 0.0);
        assert_eq!(extent.shape_factor(4.0), 1.0);

        assert!(ProfileExtent::point(0.0).is_flat());
    }

    #[test]
    fn test_peak_exact_on_asymmetric_centreline() {
        let extent = ProfileExtent {
            min: -3.3835716280918837,
            max: -0.8952412308369453,
        };
        assert_eq!(extent.shape_factor(extent.centre()), 1.0);
        assert_eq!(extent.shape_factor(extent.min), 0.0);
        assert_eq!(extent.shape_factor(extent.max), 0.0);

        let bc = channel_bc(2.0);
        for i in 0..500 {
            let s = i as f64;
            let a = -7.3 + 0.0731 * s + 1e-3 * (1.7 * s).sin();
            let b = a + 0.013 + 0.219 * (0.37 * s).cos().abs() * s;
            let u = bc.evaluate(&channel_faces(&[a, 0.5 * (a + b), b])).unwrap();

            assert_eq!(u[1].x, 2.0, "walls ({a}, {b})");
            assert_eq!(u[0].x, 0.0);
            assert_eq!(u[2].x, 0.0);
        }
    }

    #[test]
    fn test_extreme_coordinate_scales() {
        let bc = channel_bc(2.0);

        for scale in [1e200, 1e-200, 1e300, 1e-300] {
            let u = bc.evaluate(&channel_faces(&[-scale, 0.0, scale])).unwrap();
            let ux: Vec<f64> = u.iter().map(|v| v.x).collect();
            assert_eq!(ux, vec![0.0, 2.0, 0.0], "scale {scale}");

            let u = bc
                .evaluate(&channel_faces(&[-scale, -0.5 * scale, scale]))
                .unwrap();
            assert_relative_eq!(u[1].x, 1.5, epsilon = TOL);
        }

        let u = bc
            .evaluate(&channel_faces(&[-f64::MAX, 0.0, f64::MAX]))
            .unwrap();
        assert!(u.iter().all(|v| v.is_finite() && v.norm() <= 2.0));
        assert_eq!(u[1].x, 2.0);
    }

    #[test]
    fn test_five_face_channel() {
        let bc = channel_bc(2.0);
        let u = bc.evaluate(&channel_faces(&[-1.0, -0.5, 0.0, 0.5, 1.0])).unwrap();

        let expected = [0.0, 1.5, 2.0, 1.5, 0.0];
        for (v, e) in u.iter().zip(expected) {
            assert_relative_eq!(v.x, e, epsilon = TOL);
            assert_eq!(v.y, 0.0);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_output_order_follows_input() {
        let bc = channel_bc(1.0);
        let u = bc.evaluate(&channel_faces(&[1.0, 0.0, -1.0, 0.5])).unwrap();

        assert_eq!(u[0].x, 0.0);
        assert_eq!(u[1].x, 1.0);
        assert_eq!(u[2].x, 0.0);
        assert_relative_eq!(u[3].x, 0.75, epsilon = TOL);
    }

    #[test]
    fn test_offset_channel() {
        // Walls at y = 2 and y = 6, centreline at y = 4
        let bc = channel_bc(3.0);
        let u = bc.evaluate(&channel_faces(&[2.0, 3.0, 4.0, 6.0])).unwrap();

        assert_eq!(u[0].x, 0.0);
        assert_relative_eq!(u[1].x, 2.25, epsilon = TOL);
        assert_relative_eq!(u[2].x, 3.0, epsilon = TOL);
        assert_eq!(u[3].x, 0.0);
    }

    #[test]
    fn test_directions_are_normalized() {
        let scaled =
            ParabolicVelocity::new(2.0, Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.1, 0.0));
        let unit = channel_bc(2.0);
        let faces = channel_faces(&[-1.0, -0.25, 0.0, 0.6, 1.0]);

        let a = scaled.evaluate(&faces).unwrap();
        let b = unit.evaluate(&faces).unwrap();
        for (va, vb) in a.iter().zip(&b) {
            assert_relative_eq!(va.x, vb.x, epsilon = TOL);
        }
    }

    #[test]
    fn test_oblique_flow_direction() {
        let bc = ParabolicVelocity::new(2.0, Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let faces: Vec<Vec3> = [0.0, 0.5, 1.0]
            .iter()
            .map(|&z| Vec3::new(0.0, 0.0, z))
            .collect();
        let u = bc.evaluate(&faces).unwrap();

        let s = 2.0 / 2.0_f64.sqrt();
        assert_relative_eq!(u[1].x, s, epsilon = TOL);
        assert_relative_eq!(u[1].y, s, epsilon = TOL);
        assert_relative_eq!(u[1].norm(), 2.0, epsilon = TOL);
        assert_eq!(u[0].norm(), 0.0);
        assert_eq!(u[2].norm(), 0.0);
    }

    #[test]
    fn test_negative_peak_reverses_flow() {
        let bc = channel_bc(-2.0);
        let u = bc.evaluate(&channel_faces(&[-1.0, 0.0, 1.0])).unwrap();
        assert_relative_eq!(u[1].x, -2.0, epsilon = TOL);
        assert_eq!(u[0].norm(), 0.0);
    }

    #[test]
    fn test_single_row_patch_is_flat() {
        let bc = channel_bc(2.0);
        let u = bc.evaluate(&channel_faces(&[0.7, 0.7, 0.7])).unwrap();
        for v in &u {
            assert_eq!(*v, Vec3::new(2.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_empty_patch() {
        let bc = channel_bc(2.0);
        assert!(bc.evaluate(&[]).unwrap().is_empty());

        let degenerate = ParabolicVelocity::new(2.0, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(degenerate.evaluate(&[]).is_err());
    }

    #[test]
    fn test_degenerate_directions() {
        let faces = channel_faces(&[0.0, 1.0]);

        let bc = ParabolicVelocity::new(1.0, Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        let err = bc.evaluate(&faces).unwrap_err();
        assert_eq!(err.direction, Direction::Transverse);

        let bc =
            ParabolicVelocity::new(1.0, Vec3::new(0.0, 1e-20, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let err = bc.evaluate(&faces).unwrap_err();
        assert_eq!(err.direction, Direction::Flow);

        let bc = ParabolicVelocity::new(
            1.0,
            Vec3::new(f64::NAN, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert!(bc.evaluate(&faces).is_err());
    }

    #[test]
    fn test_evaluate_into_leaves_buffer_on_error() {
        let faces = channel_faces(&[0.0, 1.0]);
        let sentinel = Vec3::new(9.0, 9.0, 9.0);
        let mut values = vec![sentinel; 2];

        let bc = ParabolicVelocity::new(1.0, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(matches!(
            bc.evaluate_into(&faces, &mut values),
            Err(BoundaryError::DegenerateDirection(_))
        ));
        assert_eq!(values, vec![sentinel; 2]);

        let mut short = vec![sentinel; 1];
        assert_eq!(
            channel_bc(1.0).evaluate_into(&faces, &mut short),
            Err(BoundaryError::SizeMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_evaluate_into_matches_evaluate() {
        let bc = channel_bc(1.3);
        let faces = channel_faces(&[-0.3, 0.1, 0.8, 0.2]);
        let mut values = vec![Vec3::ZERO; faces.len()];

        bc.evaluate_into(&faces, &mut values).unwrap();
        assert_eq!(values, bc.evaluate(&faces).unwrap());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let bc = channel_bc(1.0);
        let before = bc.clone();
        let faces = channel_faces(&[-1.0, 0.2, 1.0]);

        let first = bc.evaluate(&faces).unwrap();
        let second = bc.evaluate(&faces).unwrap();
        assert_eq!(first, second);
        assert_eq!(bc, before);
    }

    #[test]
    fn test_setters_validate() {
        let mut bc = channel_bc(1.0);

        assert!(bc.set_flow_direction(Vec3::ZERO).is_err());
        assert!(bc.set_transverse_direction(Vec3::new(0.0, 0.0, 1e-30)).is_err());
        assert_eq!(bc, channel_bc(1.0));

        bc.set_flow_direction(Vec3::new(0.0, 0.0, 2.0)).unwrap();
        bc.set_transverse_direction(Vec3::new(1.0, 0.0, 0.0)).unwrap();
        bc.set_peak_magnitude(4.0);
        assert_eq!(bc.flow_direction(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(bc.transverse_direction(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(bc.peak_magnitude(), 4.0);
    }

    #[test]
    fn test_from_dictionary() {
        let dict = parse_dictionary(
            "peakMagnitude 2; flowDirection (2 0 0); transverseDirection (0 1 0); \
             initialValue uniform (0 0 0);",
        )
        .unwrap();
        let bc = ParabolicVelocity::from_dictionary(&dict).unwrap();

        assert_eq!(bc.peak_magnitude(), 2.0);
        assert_eq!(bc.flow_direction(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(bc.transverse_direction(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_from_dictionary_legacy_keys() {
        let dict = parse_dictionary("maxValue 1.5; n (1 0 0); y (0 1 0);").unwrap();
        let bc = ParabolicVelocity::from_dictionary(&dict).unwrap();

        assert_eq!(
            bc,
            ParabolicVelocity::new(1.5, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn test_from_dictionary_missing_or_malformed() {
        let dict = parse_dictionary("peakMagnitude 2; transverseDirection (0 1 0);").unwrap();
        assert_eq!(
            ParabolicVelocity::from_dictionary(&dict),
            Err(ConfigurationError::MissingEntry {
                key: "flowDirection".into()
            })
        );

        let dict = parse_dictionary(
            "peakMagnitude fast; flowDirection (1 0 0); transverseDirection (0 1 0);",
        )
        .unwrap();
        assert!(matches!(
            ParabolicVelocity::from_dictionary(&dict),
            Err(ConfigurationError::TypeMismatch { expected: "scalar", .. })
        ));

        let dict =
            parse_dictionary("peakMagnitude 1; flowDirection (1 0); transverseDirection (0 1 0);")
                .unwrap();
        assert!(matches!(
            ParabolicVelocity::from_dictionary(&dict),
            Err(ConfigurationError::TypeMismatch { expected: "vector", .. })
        ));
    }

    #[test]
    fn test_describe_round_trip_is_exact() {
        let bc = ParabolicVelocity::new(
            0.1 + 0.2,
            Vec3::new(1.0 / 3.0, 2.0 / 7.0, 0.0),
            Vec3::new(-1e-3, 1.0, 1e-17),
        );

        let text = bc.describe().to_string();
        let reloaded =
            ParabolicVelocity::from_dictionary(&parse_dictionary(&text).unwrap()).unwrap();
        assert_eq!(reloaded, bc);
    }

    #[test]
    fn test_remap_keeps_parameters() {
        let bc = ParabolicVelocity::new(2.0, Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));

        for n in [0, 1, 7, 1000] {
            assert_eq!(bc.remap_onto(n).describe(), bc.describe());
        }
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_matches_serial() {
        let bc =
            ParabolicVelocity::new(1.7, Vec3::new(1.0, 0.2, 0.0), Vec3::new(0.0, 1.0, 0.3));
        let faces: Vec<Vec3> = (0..2000)
            .map(|i| {
                let s = i as f64 / 1999.0;
                Vec3::new(0.1 * (7.0 * s).sin(), -0.4 + s, 0.2 * s)
            })
            .collect();

        assert_eq!(
            bc.evaluate_parallel(&faces).unwrap(),
            bc.evaluate(&faces).unwrap()
        );
        assert!(bc.evaluate_parallel(&[]).unwrap().is_empty());
    }
}
