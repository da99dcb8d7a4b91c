use glam::{DVec3, Mat3, Mat4, Quat};
use std::ops::Mul;

/// A direction or position in a local frame (x, y, z).
pub type Vector3 = DVec3;

/// 3x3 matrix stored row-major.
///
/// Matrices produced by [`crate::rotation`] are rotations: orthonormal rows and
/// columns with determinant +1. Arbitrary matrices can still be built with
/// [`Matrix3x3::from_rows`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    rows: [DVec3; 3],
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self {
        rows: [DVec3::X, DVec3::Y, DVec3::Z],
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn from_rows(r0: DVec3, r1: DVec3, r2: DVec3) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Build from a row-major nested array.
    pub fn from_array(m: [[f64; 3]; 3]) -> Self {
        Self::from_rows(
            DVec3::from_array(m[0]),
            DVec3::from_array(m[1]),
            DVec3::from_array(m[2]),
        )
    }

    pub fn to_array(&self) -> [[f64; 3]; 3] {
        [
            self.rows[0].to_array(),
            self.rows[1].to_array(),
            self.rows[2].to_array(),
        ]
    }

    /// Row `i` (0-based). Panics if `i > 2`.
    pub fn row(&self, i: usize) -> DVec3 {
        self.rows[i]
    }

    /// Column `j` (0-based). Panics if `j > 2`.
    pub fn column(&self, j: usize) -> DVec3 {
        DVec3::new(self.rows[0][j], self.rows[1][j], self.rows[2][j])
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2))
    }

    /// Scalar triple product of the rows.
    pub fn determinant(&self) -> f64 {
        self.rows[0].dot(self.rows[1].cross(self.rows[2]))
    }

    /// Each output component is the dot product of a row with `v`.
    pub fn mul_vector(&self, v: DVec3) -> DVec3 {
        DVec3::new(
            dot(self.rows[0], v),
            dot(self.rows[1], v),
            dot(self.rows[2], v),
        )
    }

    /// Largest absolute element-wise difference between two matrices.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| (*a - *b).abs().max_element())
            .fold(0.0, f64::max)
    }

    /// Whether rows are unit length, mutually orthogonal and the determinant is +1,
    /// all within `tolerance`.
    pub fn is_orthonormal(&self, tolerance: f64) -> bool {
        let units = self
            .rows
            .iter()
            .all(|r| (r.length() - 1.0).abs() < tolerance);
        let orthogonal = dot(self.rows[0], self.rows[1]).abs() < tolerance
            && dot(self.rows[0], self.rows[2]).abs() < tolerance
            && dot(self.rows[1], self.rows[2]).abs() < tolerance;
        units && orthogonal && (self.determinant() - 1.0).abs() < tolerance
    }

    /// Single-precision, column-major copy for a renderer.
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_cols(
            self.column(0).as_vec3(),
            self.column(1).as_vec3(),
            self.column(2).as_vec3(),
        )
    }

    /// Homogeneous model matrix (rotation only, no translation).
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_mat3(self.to_mat3())
    }

    /// Unit quaternion for scene-graph orientation. Only meaningful for rotations.
    pub fn to_quat(&self) -> Quat {
        Quat::from_mat3(&self.to_mat3()).normalize()
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3x3 {
    type Output = Matrix3x3;

    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        let cols = [rhs.column(0), rhs.column(1), rhs.column(2)];
        let row = |r: DVec3| DVec3::new(dot(r, cols[0]), dot(r, cols[1]), dot(r, cols[2]));
        Matrix3x3::from_rows(row(self.rows[0]), row(self.rows[1]), row(self.rows[2]))
    }
}

impl Mul<DVec3> for Matrix3x3 {
    type Output = DVec3;

    fn mul(self, rhs: DVec3) -> DVec3 {
        self.mul_vector(rhs)
    }
}

pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Matrix times column vector.
pub fn multiply_matrix_vector(matrix: &Matrix3x3, vector: DVec3) -> DVec3 {
    matrix.mul_vector(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix3x3 {
        Matrix3x3::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]])
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn matrix_vector_uses_rows() {
        let v = multiply_matrix_vector(&sample(), DVec3::new(1.0, 0.0, -1.0));
        assert_eq!(v, DVec3::new(-2.0, -2.0, -3.0));
    }

    #[test]
    fn matrix_product_against_hand_computed() {
        let a = Matrix3x3::from_array([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let p = a * sample();
        assert_eq!(
            p.to_array(),
            [[-4.0, -5.0, -6.0], [1.0, 2.0, 3.0], [7.0, 8.0, 10.0]]
        );
        assert_eq!(Matrix3x3::identity() * sample(), sample());
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let t = sample().transpose();
        assert_eq!(t.row(0), DVec3::new(1.0, 4.0, 7.0));
        assert_eq!(t.column(2), DVec3::new(7.0, 8.0, 10.0));
    }

    #[test]
    fn determinant_of_sample() {
        assert!((sample().determinant() - (-3.0)).abs() < 1e-12);
        assert!((Matrix3x3::identity().determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthonormal_check_rejects_reflection() {
        let reflection =
            Matrix3x3::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]]);
        assert!(!reflection.is_orthonormal(1e-6));
        assert!(Matrix3x3::identity().is_orthonormal(1e-6));
        assert!(!sample().is_orthonormal(1e-6));
    }

    #[test]
    fn renderer_conversion_is_column_major() {
        // Quarter turn about Z: x -> y.
        let m = Matrix3x3::from_array([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = m.to_mat3() * glam::Vec3::X;
        assert!((v - glam::Vec3::Y).length() < 1e-6);

        let q = m.to_quat();
        let expected = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        assert!(q.dot(expected).abs() > 1.0 - 1e-6);

        let p = m.to_mat4().transform_point3(glam::Vec3::X);
        assert!((p - glam::Vec3::Y).length() < 1e-6);
    }
}
