use crate::matrix::Vector3;
use crate::types::ExtractedAngles;
use crate::GIMBAL_LOCK_EPSILON;

/// Heading, elevation and roll from the transformed north and east vectors.
///
/// Heading is the compass bearing of the north vector's horizontal projection,
/// clockwise from +Y, in [0, 360). Elevation is the north vector's angle above
/// the horizontal plane. Roll is the east vector's angle below it.
///
/// Both elevation and roll use the horizontal radius `sqrt(x² + y²)` as the
/// adjacent side so they do not depend on the direction the device faces.
///
/// Beta = ±90 is not degenerate here: the device is upright and heading is
/// -(alpha + gamma). If the north vector is vertical its bearing is undefined and the rotation
/// about it cannot be separated from heading: `heading` and `roll` are NaN,
/// `elevation` is still reported.
pub fn calculate_orientation_angles(north: Vector3, east: Vector3) -> ExtractedAngles {
    let north_radius = north.x.hypot(north.y);
    let elevation = north.z.atan2(north_radius).to_degrees();

    if north_radius < GIMBAL_LOCK_EPSILON {
        tracing::trace!(elevation, "Camera axis vertical, heading undefined");
        return ExtractedAngles {
            heading: f64::NAN,
            elevation,
            roll: f64::NAN,
        };
    }

    let mut heading = north.x.atan2(north.y).to_degrees();
    if heading < 0.0 {
        heading += 360.0;
    }
    // Tiny negative bearings round up to exactly 360.
    if heading >= 360.0 {
        heading -= 360.0;
    }

    let east_radius = east.x.hypot(east.y);
    let roll = (-east.z).atan2(east_radius).to_degrees();

    ExtractedAngles {
        heading: heading + 0.0,
        elevation,
        roll: roll + 0.0,
    }
}

/// Map a canonical heading in [0, 360) to (-180, 180].
///
/// Apply once, to the output of [`calculate_orientation_angles`]. It is a range
/// shift, not a modulo: feeding it an already-signed heading is a caller bug.
pub fn normalize_heading_range(heading: f64) -> f64 {
    if heading > 180.0 {
        heading - 360.0
    } else {
        heading
    }
}
