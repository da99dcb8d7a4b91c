use crate::matrix::{multiply_matrix_vector, Matrix3x3, Vector3};
use glam::DVec3;

/// Device-frame camera axis, out of the back of the device.
pub const NORTH_REFERENCE: Vector3 = DVec3::new(0.0, 0.0, -1.0);
/// Device-frame right edge.
pub const EAST_REFERENCE: Vector3 = DVec3::new(1.0, 0.0, 0.0);

/// The two reference vectors after rotation into the world frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceVectors {
    pub north: Vector3,
    pub east: Vector3,
}

impl ReferenceVectors {
    /// Largest component-wise difference across both vectors.
    pub fn max_deviation(&self, other: &ReferenceVectors) -> f64 {
        let north = (self.north - other.north).abs().max_element();
        let east = (self.east - other.east).abs().max_element();
        north.max(east)
    }
}

pub fn transform_reference_vectors(matrix: &Matrix3x3) -> ReferenceVectors {
    ReferenceVectors {
        north: multiply_matrix_vector(matrix, NORTH_REFERENCE),
        east: multiply_matrix_vector(matrix, EAST_REFERENCE),
    }
}
