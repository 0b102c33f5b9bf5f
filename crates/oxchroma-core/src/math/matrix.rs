//! 3x3 Matrix operations for color space transforms
//!
//! Used for RGB↔XYZ conversions. Generic over [`Real`] so the same code serves
//! single and double precision color spaces.

use super::Real;
use std::ops::{Index, Mul};

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<T> {
    /// Matrix elements in row-major order
    pub m: [[T; 3]; 3],
}

impl<T: Real> Matrix3<T> {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub fn identity() -> Self {
        let (o, l) = (T::zero(), T::one());
        Self {
            m: [[l, o, o], [o, l, o], [o, o, l]],
        }
    }

    /// Row-major elements as a flat array of 9
    #[inline]
    pub fn to_flat(&self) -> [T; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        ]
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [T; 3]) -> [T; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[T::zero(); 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m: result }
    }

    /// Calculate the determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// True when no element is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: T) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl<T: Real> Default for Matrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Index<usize> for Matrix3<T> {
    type Output = [T; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl<T: Real> Mul for Matrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Real> Mul<[T; 3]> for Matrix3<T> {
    type Output = [T; 3];

    fn mul(self, rhs: [T; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let id = Matrix3::<f64>::identity();
        let v = [1.0, 2.0, 3.0];
        let result = id.multiply_vec(v);
        assert!((result[0] - v[0]).abs() < EPSILON);
        assert!((result[1] - v[1]).abs() < EPSILON);
        assert!((result[2] - v[2]).abs() < EPSILON);
    }

    #[test]
    fn test_multiply_matrices() {
        let a = Matrix3::new([[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let id = Matrix3::identity();

        assert!(a.multiply(&id).approx_eq(&a, EPSILON));
        assert!(id.multiply(&a).approx_eq(&a, EPSILON));

        let squared = a * a;
        assert_eq!(squared.m[0], [30.0, 36.0, 42.0]);
    }

    #[test]
    fn test_determinant() {
        assert!((Matrix3::<f64>::identity().determinant() - 1.0).abs() < EPSILON);

        let a = Matrix3::new([[1.0f64, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((a.determinant() - 1.0).abs() < EPSILON);

        let singular = Matrix3::new([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(singular.determinant().abs() < 1e-5);
    }

    #[test]
    fn test_flat_and_index() {
        let a = Matrix3::new([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(a.to_flat(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(a[1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_is_finite() {
        let mut a = Matrix3::<f64>::identity();
        assert!(a.is_finite());
        a.m[2][1] = f64::NAN;
        assert!(!a.is_finite());
    }

    #[test]
    fn test_operator_overloads() {
        let a = Matrix3::<f64>::identity();
        assert!((a * a).is_identity(EPSILON));

        let result = a * [1.0, 2.0, 3.0];
        assert_eq!(result, [1.0, 2.0, 3.0]);
    }
}
