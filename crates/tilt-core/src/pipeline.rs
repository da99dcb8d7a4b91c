use crate::angles::calculate_orientation_angles;
use crate::display::{DisplayOptions, Reading};
use crate::matrix::Matrix3x3;
use crate::rotation::build_rotation_matrix;
use crate::transform::{transform_reference_vectors, ReferenceVectors};
use crate::types::{EulerAngles, ExtractedAngles};
use crate::verify::{verify_round_trip, RoundTrip};

/// Per-call switches. Everything that changes the output is passed in here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProcessOptions {
    /// Produce a formatted [`Reading`].
    pub display: Option<DisplayOptions>,
    /// Rebuild the matrix from the extracted angles and compare within this tolerance.
    pub verify_tolerance: Option<f64>,
}

/// Every intermediate of one sample's trip through the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationReport {
    pub input: EulerAngles,
    pub matrix: Matrix3x3,
    pub vectors: ReferenceVectors,
    pub angles: ExtractedAngles,
    pub reading: Option<Reading>,
    pub round_trip: Option<RoundTrip>,
}

impl OrientationReport {
    pub fn is_indeterminate(&self) -> bool {
        self.angles.is_indeterminate()
    }
}

/// Run one complete sample through the engine.
pub fn process(input: EulerAngles, options: &ProcessOptions) -> OrientationReport {
    let matrix = build_rotation_matrix(input.alpha, input.beta, input.gamma);
    let vectors = transform_reference_vectors(&matrix);
    let angles = calculate_orientation_angles(vectors.north, vectors.east);

    let reading = options
        .display
        .as_ref()
        .map(|display| Reading::new(&angles, display));
    let round_trip = options
        .verify_tolerance
        .and_then(|tolerance| verify_round_trip(&matrix, &angles, tolerance));

    OrientationReport {
        input,
        matrix,
        vectors,
        angles,
        reading,
        round_trip,
    }
}
