//! Settings persistence - presentation settings as TOML under the platform
//! config directory. Zone selections and the slider are deliberately not
//! persisted; the widget resets to its defaults on relaunch.

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "planner.toml";

/// Error type for settings operations
#[derive(Debug)]
pub enum ConfigError {
    /// No platform config directory could be determined
    NoConfigDir,
    /// IO failure while reading or writing the settings file
    Io(io::Error),
    /// Settings file exists but is not valid TOML
    Decode(toml::de::Error),
    /// Settings could not be serialized
    Encode(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Decode(e) => write!(f, "Settings parse error: {}", e),
            ConfigError::Encode(e) => write!(f, "Settings serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Decode(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Encode(e)
    }
}

/// Path of the settings file
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "meeting-planner", "planner")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Load the persisted settings.
///
/// Returns `None` when no settings file exists yet; an error only when the
/// file exists but cannot be read or parsed.
pub fn load_config<T: DeserializeOwned>() -> Result<Option<T>, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Save settings, creating the config directory if needed
pub fn save_config<T: Serialize>(config: &T) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestSettings {
        reduced_motion: bool,
    }

    #[test]
    fn test_config_path() {
        let path = config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("planner.toml"));
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let settings = TestSettings {
            reduced_motion: true,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        let back: TestSettings = toml::from_str(&text).unwrap();
        assert_eq!(back, settings);
    }
}
