//! Rotation matrices from device Euler angles and from extracted angles.
//!
//! World frame: X east, Y north, Z up. Device frame at rest: X to the right
//! edge of the screen, Y to the top edge, Z out of the screen. All matrices
//! here map device-frame vectors into the world frame.

use crate::matrix::Matrix3x3;
use crate::GIMBAL_LOCK_EPSILON;

/// Device orientation (alpha, beta, gamma in degrees) to rotation matrix.
///
/// Intrinsic Z-X'-Y'' composition `Rz(alpha) * Rx(beta) * Ry(gamma)`, the
/// convention used by device-orientation sensors. Total over all real inputs.
pub fn build_rotation_matrix(alpha_deg: f64, beta_deg: f64, gamma_deg: f64) -> Matrix3x3 {
    let (s_a, c_a) = alpha_deg.to_radians().sin_cos();
    let (s_b, c_b) = beta_deg.to_radians().sin_cos();
    let (s_g, c_g) = gamma_deg.to_radians().sin_cos();

    Matrix3x3::from_array([
        [
            c_a * c_g - s_a * s_b * s_g,
            -c_b * s_a,
            c_a * s_g + c_g * s_a * s_b,
        ],
        [
            c_g * s_a + c_a * s_b * s_g,
            c_a * c_b,
            s_a * s_g - c_a * c_g * s_b,
        ],
        [-c_b * s_g, s_b, c_b * c_g],
    ])
}

/// Rebuild a rotation from heading, elevation and roll (degrees).
///
/// The three elementary matrices are frame rotations and compose as
/// `C = R(roll) * R(elevation) * R(heading)`, the world-to-device direction
/// cosine matrix. The returned matrix is `C` transposed, so it maps device
/// vectors to world vectors like [`build_rotation_matrix`].
///
/// Axis assignment:
/// - heading: about -Z (clockwise seen from above), 0 = north.
/// - elevation: about X, offset by 90 degrees so that the camera axis
///   (0, 0, -1) is horizontal at zero elevation (device upright).
/// - roll: about the device Z (camera) axis. The extracted roll is the tilt of
///   the device's right edge out of the horizontal plane, so the bank angle
///   used here is `asin(-sin(roll) / cos(elevation))`.
///
/// The reconstruction matches the original rotation whenever the device is
/// banked less than 90 degrees; beyond that the extracted angles cannot tell
/// the two solutions apart. NaN inputs produce a NaN matrix.
pub fn build_rotation_matrix_from_angles(heading: f64, elevation: f64, roll: f64) -> Matrix3x3 {
    let (s_e, c_e) = elevation.to_radians().sin_cos();

    // Camera axis vertical: heading already carries the turn about Z.
    let s_bank = if c_e.abs() < GIMBAL_LOCK_EPSILON {
        0.0
    } else {
        (-roll.to_radians().sin() / c_e).clamp(-1.0, 1.0)
    };
    let bank = s_bank.asin();

    let frame = roll_frame(bank) * elevation_frame(s_e, c_e) * heading_frame(heading.to_radians());
    frame.transpose()
}

fn heading_frame(heading: f64) -> Matrix3x3 {
    let (s, c) = heading.sin_cos();
    Matrix3x3::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Frame rotation about X by `90 + elevation`, given sin/cos of the elevation.
fn elevation_frame(s_e: f64, c_e: f64) -> Matrix3x3 {
    Matrix3x3::from_array([[1.0, 0.0, 0.0], [0.0, -s_e, c_e], [0.0, -c_e, -s_e]])
}

fn roll_frame(bank: f64) -> Matrix3x3 {
    let (s, c) = bank.sin_cos();
    Matrix3x3::from_array([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
}
