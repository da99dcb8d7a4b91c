use crate::matrix::Matrix3x3;
use crate::rotation::build_rotation_matrix_from_angles;
use crate::transform::{transform_reference_vectors, ReferenceVectors};
use crate::types::ExtractedAngles;

/// Default tolerance on the reference-vector deviation.
pub const DEFAULT_TOLERANCE: f64 = 1e-3;

/// Outcome of rebuilding a rotation from its extracted angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTrip {
    /// Matrix rebuilt from heading, elevation and roll.
    pub reconstructed: Matrix3x3,
    /// Reference vectors transformed by `reconstructed`.
    pub vectors: ReferenceVectors,
    /// Largest component difference from the original reference vectors.
    pub max_deviation: f64,
    pub faithful: bool,
}

/// Rebuild `original` from `angles` and compare the reference vectors.
///
/// Returns `None` for indeterminate angles, which carry no heading to rebuild from.
pub fn verify_round_trip(
    original: &Matrix3x3,
    angles: &ExtractedAngles,
    tolerance: f64,
) -> Option<RoundTrip> {
    if angles.is_indeterminate() {
        return None;
    }

    let reconstructed =
        build_rotation_matrix_from_angles(angles.heading, angles.elevation, angles.roll);
    let expected = transform_reference_vectors(original);
    let vectors = transform_reference_vectors(&reconstructed);
    let max_deviation = expected.max_deviation(&vectors);

    Some(RoundTrip {
        reconstructed,
        vectors,
        max_deviation,
        faithful: max_deviation <= tolerance,
    })
}
