mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Returns the config directory: <user config dir>/tilt-compass/
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("tilt-compass");
    Ok(dir)
}

/// Returns the config file path: <user config dir>/tilt-compass/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from the default location, or return defaults if not found.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path()?)
}

/// Load config from `path`, or return defaults if the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        info!(?path, "Loaded config");
        Ok(config)
    } else {
        info!(?path, "No config found, using defaults");
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tilt_core::HeadingRange;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.display.decimals, 1);
        assert_eq!(config.sensor.source, SourceKind::Sweep);
        assert!(config.verify.enabled);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[display]\nheading_range = \"signed\"\n\n[sensor]\nsource = \"stdin\"\n"
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.display.heading_range, HeadingRange::Signed);
        assert!(config.display.show_compass_label);
        assert_eq!(config.sensor.source, SourceKind::Stdin);
        assert_eq!(config.sensor.sweep, SweepConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ndecimals = \"one\"").unwrap();
        assert!(load_config_from(file.path()).is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[verify]\ntolerance = -1.0").unwrap();
        assert!(load_config_from(file.path()).is_err());
    }
}
