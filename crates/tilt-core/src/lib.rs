//! Orientation math: device Euler angles to compass heading, elevation and roll,
//! and back to a rotation matrix for verification.
//!
//! Every function here is pure. Samples can be processed from any thread in any
//! order.

pub mod angles;
pub mod display;
pub mod error;
pub mod matrix;
pub mod pipeline;
pub mod rotation;
pub mod transform;
pub mod types;
pub mod verify;

pub use angles::{calculate_orientation_angles, normalize_heading_range};
pub use display::{format_degrees, CompassPoint, DisplayOptions, HeadingRange, Reading};
pub use error::SampleError;
pub use matrix::{dot, multiply_matrix_vector, Matrix3x3, Vector3};
pub use pipeline::{process, OrientationReport, ProcessOptions};
pub use rotation::{build_rotation_matrix, build_rotation_matrix_from_angles};
pub use transform::{transform_reference_vectors, ReferenceVectors, EAST_REFERENCE, NORTH_REFERENCE};
pub use types::{Axis, EulerAngles, ExtractedAngles, OrientationSample};
pub use verify::{verify_round_trip, RoundTrip, DEFAULT_TOLERANCE};

/// Horizontal radius below which a direction counts as vertical.
pub const GIMBAL_LOCK_EPSILON: f64 = 1e-9;
