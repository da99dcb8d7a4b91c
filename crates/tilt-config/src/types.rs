use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tilt_core::{DisplayOptions, HeadingRange, ProcessOptions};

/// Slowest accepted pacing rate, in Hz.
pub const MIN_SAMPLE_RATE_HZ: f32 = 1e-3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How readings are presented.
    pub display: DisplayConfig,
    /// Where orientation samples come from.
    pub sensor: SensorConfig,
    /// Round-trip verification of every extracted orientation.
    pub verify: VerifyConfig,
}

impl AppConfig {
    /// Reject values the engine cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.display.decimals > 6 {
            bail!("display.decimals must be at most 6, got {}", self.display.decimals);
        }
        let rate = self.sensor.sample_rate_hz;
        if !rate.is_finite() || rate < 0.0 || (rate > 0.0 && rate < MIN_SAMPLE_RATE_HZ) {
            bail!(
                "sensor.sample_rate_hz must be 0 or at least {MIN_SAMPLE_RATE_HZ}, got {}",
                rate
            );
        }
        if self.verify.tolerance.is_nan() || self.verify.tolerance <= 0.0 {
            bail!("verify.tolerance must be positive, got {}", self.verify.tolerance);
        }
        Ok(())
    }

    /// Engine options derived from this config.
    pub fn process_options(&self) -> ProcessOptions {
        ProcessOptions {
            display: Some(DisplayOptions {
                heading_range: self.display.heading_range,
                decimals: self.display.decimals,
                show_compass_label: self.display.show_compass_label,
            }),
            verify_tolerance: self.verify.enabled.then_some(self.verify.tolerance),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `compass` for [0, 360), `signed` for (-180, 180].
    pub heading_range: HeadingRange,
    /// Digits after the decimal point.
    pub decimals: usize,
    /// Append the eight-point compass label to the heading.
    pub show_compass_label: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            heading_range: HeadingRange::Compass,
            decimals: 1,
            show_compass_label: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Simulated device turning in a circle.
    Sweep,
    /// `alpha beta gamma` lines on standard input.
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    pub source: SourceKind,
    /// Samples per second delivered by the simulated device. 0 = as fast as it produces.
    /// Piped stdin input is never paced.
    pub sample_rate_hz: f32,
    /// Gate the simulated device behind a permission grant.
    pub require_permission: bool,
    /// Simulated device settings.
    pub sweep: SweepConfig,
}

impl SensorConfig {
    /// Rate handed to the sensor client for the configured source.
    pub fn pacing_hz(&self) -> f32 {
        match self.source {
            SourceKind::Sweep => self.sample_rate_hz,
            SourceKind::Stdin => 0.0,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Sweep,
            sample_rate_hz: 20.0,
            require_permission: false,
            sweep: SweepConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Fixed front-to-back tilt in degrees. 90 = held upright.
    pub beta: f64,
    /// Fixed left-to-right tilt in degrees.
    pub gamma: f64,
    /// Alpha increment per sample in degrees.
    pub step_deg: f64,
    /// Number of samples before the sweep ends.
    pub samples: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            beta: 80.0,
            gamma: 5.0,
            step_deg: 15.0,
            samples: 24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub enabled: bool,
    /// Largest accepted reference-vector deviation.
    pub tolerance: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tolerance: tilt_core::DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("heading_range = \"compass\""));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn verification_can_be_disabled() {
        let mut config = AppConfig::default();
        assert_eq!(config.process_options().verify_tolerance, Some(1e-3));
        config.verify.enabled = false;
        assert_eq!(config.process_options().verify_tolerance, None);
    }

    #[test]
    fn nan_rate_is_invalid() {
        let mut config = AppConfig::default();
        config.sensor.sample_rate_hz = f32::NAN;
        assert!(config.validate().is_err());
        config.sensor.sample_rate_hz = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tiny_rate_is_invalid() {
        let mut config = AppConfig::default();
        config.sensor.sample_rate_hz = 1e-20;
        assert!(config.validate().is_err());
        config.sensor.sample_rate_hz = MIN_SAMPLE_RATE_HZ;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stdin_input_is_not_paced() {
        let mut sensor = SensorConfig::default();
        assert_eq!(sensor.pacing_hz(), 20.0);
        sensor.source = SourceKind::Stdin;
        assert_eq!(sensor.pacing_hz(), 0.0);
    }
}
