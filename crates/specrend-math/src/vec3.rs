//! 3D vector type for tristimulus triplets.
//!
//! [`Vec3`] carries both CIE XYZ and device RGB values. The type does not
//! record which; x/y/z read as X/Y/Z or R/G/B depending on the stage.

use std::ops::{Add, Div, Mul, Sub};

/// Three `f64` components, read as (X, Y, Z) or (R, G, B).
///
/// # Example
///
/// ```rust
/// use specrend_math::Vec3;
///
/// let rgb = Vec3::new(0.5, -0.25, 1.0);
/// assert_eq!(rgb.min_element(), -0.25);
/// assert_eq!(rgb.max_element(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X or R
    pub x: f64,
    /// Y or G
    pub y: f64,
    /// Z or B
    pub z: f64,
}

impl Vec3 {
    /// (0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// (1, 1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value in every component.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// As `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product, evaluated left to right as `x*x' + y*y' + z*z'`.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Sum of the three components.
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Minimum component.
    #[inline]
    pub fn min_element(self) -> f64 {
        self.x.min(self.y).min(self.z)
    }

    /// Maximum component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Any component NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// No component NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Into glam.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// From glam.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<glam::DVec3> for Vec3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3) -> glam::DVec3 {
        v.to_glam()
    }
}
