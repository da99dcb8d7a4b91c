use crate::angles::normalize_heading_range;
use crate::types::ExtractedAngles;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Range used when presenting the heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingRange {
    /// [0, 360), as extracted.
    #[default]
    Compass,
    /// (-180, 180].
    Signed,
}

impl HeadingRange {
    /// Apply to a canonical [0, 360) heading.
    pub fn apply(self, heading: f64) -> f64 {
        match self {
            HeadingRange::Compass => heading,
            HeadingRange::Signed => normalize_heading_range(heading),
        }
    }
}

/// Eight-point compass rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Nearest point: `round(heading / 45) mod 8`. `None` for a NaN heading.
    pub fn from_heading(heading: f64) -> Option<Self> {
        if !heading.is_finite() {
            return None;
        }
        let index = ((heading / 45.0).round() as i64).rem_euclid(8);
        Some(Self::ALL[index as usize])
    }

    pub fn label(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W => "W",
            CompassPoint::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `123.4°` style. Never prints a negative zero.
pub fn format_degrees(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale + 0.0;
    format!("{rounded:.decimals$}°")
}

/// Presentation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    pub heading_range: HeadingRange,
    pub decimals: usize,
    pub show_compass_label: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            heading_range: HeadingRange::Compass,
            decimals: 1,
            show_compass_label: true,
        }
    }
}

/// Formatted orientation ready for a user-facing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Oriented {
        heading: String,
        compass: Option<CompassPoint>,
        elevation: String,
        roll: String,
    },
    /// Gimbal lock: only the elevation is meaningful.
    Indeterminate { elevation: String },
}

impl Reading {
    pub fn new(angles: &ExtractedAngles, options: &DisplayOptions) -> Self {
        let elevation = format_degrees(angles.elevation, options.decimals);
        if angles.is_indeterminate() {
            return Reading::Indeterminate { elevation };
        }

        let compass = options
            .show_compass_label
            .then(|| CompassPoint::from_heading(angles.heading))
            .flatten();

        Reading::Oriented {
            heading: format_degrees(options.heading_range.apply(angles.heading), options.decimals),
            compass,
            elevation,
            roll: format_degrees(angles.roll, options.decimals),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Oriented {
                heading,
                compass,
                elevation,
                roll,
            } => {
                write!(f, "heading {heading}")?;
                if let Some(point) = compass {
                    write!(f, " {point}")?;
                }
                write!(f, "  elevation {elevation}  roll {roll}")
            }
            Reading::Indeterminate { elevation } => {
                write!(f, "tilt device  elevation {elevation}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(heading: f64) -> &'static str {
        CompassPoint::from_heading(heading).map_or("-", CompassPoint::label)
    }

    #[test]
    fn compass_points() {
        assert_eq!(label(0.0), "N");
        assert_eq!(label(22.4), "N");
        assert_eq!(label(46.0), "NE");
        assert_eq!(label(90.0), "E");
        assert_eq!(label(135.0), "SE");
        assert_eq!(label(180.0), "S");
        assert_eq!(label(225.0), "SW");
        assert_eq!(label(270.0), "W");
        assert_eq!(label(315.0), "NW");
        assert_eq!(label(360.0 - 1e-9), "N");
    }

    #[test]
    fn compass_rounds_to_nearest_point() {
        assert_eq!(label(22.6), "NE");
        assert_eq!(label(44.0), "NE");
        assert_eq!(label(337.6), "N");
    }

    #[test]
    fn compass_accepts_signed_headings() {
        assert_eq!(label(-90.0), "W");
        assert_eq!(label(-10.0), "N");
        assert_eq!(label(f64::NAN), "-");
    }

    #[test]
    fn degrees_formatting() {
        assert_eq!(format_degrees(123.456, 1), "123.5°");
        assert_eq!(format_degrees(-0.04, 1), "0.0°");
        assert_eq!(format_degrees(-12.0, 1), "-12.0°");
        assert_eq!(format_degrees(7.0, 0), "7°");
        assert_eq!(format_degrees(1.23456, 3), "1.235°");
    }

    #[test]
    fn signed_range_reading() {
        let angles = ExtractedAngles {
            heading: 270.0,
            elevation: 10.0,
            roll: -5.25,
        };
        let options = DisplayOptions {
            heading_range: HeadingRange::Signed,
            ..DisplayOptions::default()
        };
        let reading = Reading::new(&angles, &options);
        assert_eq!(
            reading.to_string(),
            "heading -90.0° W  elevation 10.0°  roll -5.3°"
        );
    }

    #[test]
    fn compass_label_can_be_hidden() {
        let angles = ExtractedAngles {
            heading: 45.0,
            elevation: 0.0,
            roll: 0.0,
        };
        let options = DisplayOptions {
            show_compass_label: false,
            ..DisplayOptions::default()
        };
        assert_eq!(
            Reading::new(&angles, &options).to_string(),
            "heading 45.0°  elevation 0.0°  roll 0.0°"
        );
    }

    #[test]
    fn indeterminate_reading() {
        let angles = ExtractedAngles {
            heading: f64::NAN,
            elevation: -90.0,
            roll: f64::NAN,
        };
        let reading = Reading::new(&angles, &DisplayOptions::default());
        assert!(matches!(reading, Reading::Indeterminate { .. }));
        assert_eq!(reading.to_string(), "tilt device  elevation -90.0°");
    }
}
