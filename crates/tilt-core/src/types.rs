use crate::error::SampleError;
use std::fmt;

/// One of the three device-orientation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Rotation about the device Z axis (0..360).
    Alpha,
    /// Front-to-back tilt about X (-180..180).
    Beta,
    /// Left-to-right tilt about Y (-90..90).
    Gamma,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Alpha => "alpha",
            Axis::Beta => "beta",
            Axis::Gamma => "gamma",
        })
    }
}

/// Complete Euler angles in degrees, ready for the math engine.
///
/// Any real values are accepted; the sensor ranges are conventions, not limits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerAngles {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }
}

/// Raw reading from an orientation sensor. `None` marks an axis the device
/// did not report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationSample {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl OrientationSample {
    pub fn new(alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Sample with every axis present.
    pub fn from_degrees(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::new(Some(alpha), Some(beta), Some(gamma))
    }

    /// Returns the angles if all three axes are present and finite.
    pub fn complete(&self) -> Result<EulerAngles, SampleError> {
        let check = |value: Option<f64>, axis: Axis| match value {
            None => Err(SampleError::AxisUnavailable(axis)),
            Some(v) if !v.is_finite() => Err(SampleError::NonFinite(axis)),
            Some(v) => Ok(v),
        };
        Ok(EulerAngles {
            alpha: check(self.alpha, Axis::Alpha)?,
            beta: check(self.beta, Axis::Beta)?,
            gamma: check(self.gamma, Axis::Gamma)?,
        })
    }
}

impl From<EulerAngles> for OrientationSample {
    fn from(angles: EulerAngles) -> Self {
        Self::from_degrees(angles.alpha, angles.beta, angles.gamma)
    }
}

/// Heading, elevation and roll in degrees.
///
/// `heading` is in [0, 360), `elevation` in [-90, 90], `roll` in [-90, 90].
/// When the camera axis is vertical (gimbal lock) `heading` and `roll` are NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractedAngles {
    pub heading: f64,
    pub elevation: f64,
    pub roll: f64,
}

impl ExtractedAngles {
    /// True when heading and roll are undefined for this orientation.
    pub fn is_indeterminate(&self) -> bool {
        self.heading.is_nan() || self.roll.is_nan()
    }
}
