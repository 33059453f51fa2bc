//! 3x3 matrix for XYZ <-> RGB transforms.
//!
//! Storage is row-major, `m[row][col]`, and a matrix acts on a column vector
//! from the left:
//!
//! ```text
//! [ r ]   [ m[0][0] m[0][1] m[0][2] ]   [ X ]
//! [ g ] = [ m[1][0] m[1][1] m[1][2] ] * [ Y ]
//! [ b ]   [ m[2][0] m[2][1] m[2][2] ]   [ Z ]
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 `f64` matrix.
///
/// # Example
///
/// ```rust
/// use specrend_math::{Mat3, Vec3};
///
/// let xyz = Vec3::new(0.3, 0.4, 0.3);
/// assert_eq!(Mat3::IDENTITY * xyz, xyz);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Elements, `m[row][col]`
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// All elements zero.
    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    /// Identity.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Builds from rows.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Builds from columns.
    #[inline]
    pub const fn from_cols(c: [[f64; 3]; 3]) -> Self {
        Self::from_rows([
            [c[0][0], c[1][0], c[2][0]],
            [c[0][1], c[1][1], c[2][1]],
            [c[0][2], c[1][2], c[2][2]],
        ])
    }

    /// Builds from three row vectors.
    #[inline]
    pub fn from_row_vecs(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Builds from three column vectors.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Column `j`.
    #[inline]
    pub fn col(&self, j: usize) -> Vec3 {
        Vec3::new(self.m[0][j], self.m[1][j], self.m[2][j])
    }

    /// Determinant, expanded along the first row.
    pub fn determinant(&self) -> f64 {
        self.row(0).dot(self.adjugate().col(0))
    }

    /// Adjugate: the transposed cofactor matrix.
    ///
    /// `self * self.adjugate() == det * I`, and it exists for singular
    /// matrices too.
    pub fn adjugate(&self) -> Self {
        let m = &self.m;
        Self::from_rows([
            [
                (m[1][1] * m[2][2]) - (m[1][2] * m[2][1]),
                (m[0][2] * m[2][1]) - (m[0][1] * m[2][2]),
                (m[0][1] * m[1][2]) - (m[0][2] * m[1][1]),
            ],
            [
                (m[1][2] * m[2][0]) - (m[1][0] * m[2][2]),
                (m[0][0] * m[2][2]) - (m[0][2] * m[2][0]),
                (m[0][2] * m[1][0]) - (m[0][0] * m[1][2]),
            ],
            [
                (m[1][0] * m[2][1]) - (m[1][1] * m[2][0]),
                (m[0][1] * m[2][0]) - (m[0][0] * m[2][1]),
                (m[0][0] * m[1][1]) - (m[0][1] * m[1][0]),
            ],
        ])
    }

    /// Inverse, or `None` when the determinant is near zero or not finite.
    ///
    /// ```rust
    /// use specrend_math::Mat3;
    ///
    /// let scale = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    /// assert_eq!(scale.inverse().unwrap().m[2][2], 0.125);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        Some(Self::from_glam(self.to_glam().inverse()))
    }

    /// `self * v`, each component a row dot product summed left to right.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Column-major glam copy.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols(
            self.col(0).to_glam(),
            self.col(1).to_glam(),
            self.col(2).to_glam(),
        )
    }

    /// From a column-major glam matrix.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        Self::from_cols(m.to_cols_array_2d())
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = [0, 1, 2].map(|j| self.transform(rhs.col(j)));
        Self::from_col_vecs(cols[0], cols[1], cols[2])
    }
}
