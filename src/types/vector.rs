//! Three-component vector used for face centres, directions and velocities.
//!
//! Patch geometry is always handled in 3D, even for 2D-extruded cases,
//! so a single fixed-size type covers positions and velocities alike.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub};

/// Norm below which a direction is treated as zero.
pub const DEGENERATE_NORM: f64 = 1e-14;

/// A 3D vector `(x, y, z)`.
///
/// # Example
///
/// ```
/// use parabolic_velocity::types::Vec3;
///
/// let a = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(a.norm(), 5.0);
/// assert_eq!(a.dot(&Vec3::new(1.0, 0.0, 0.0)), 3.0);
/// assert_eq!(a.to_string(), "(3 4 0)");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a vector from an array `[x, y, z]`.
    #[inline]
    pub const fn from_array(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Components as an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale by a scalar.
    #[inline]
    pub fn scale(&self, c: f64) -> Self {
        Self::new(c * self.x, c * self.y, c * self.z)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` if the norm is not finite or below [`DEGENERATE_NORM`].
    pub fn try_normalize(&self) -> Option<Self> {
        let n = self.norm();
        if !n.is_finite() || n < DEGENERATE_NORM {
            None
        } else {
            Some(self.scale(1.0 / n))
        }
    }

    /// True if all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Point on the segment `self -> other` at parameter `t`.
    #[inline]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self).scale(t)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(c: [f64; 3]) -> Self {
        Self::from_array(c)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, idx: usize) -> &f64 {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {idx}"),
        }
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

/// Written as `(x y z)` with shortest round-trip float formatting.
impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}
