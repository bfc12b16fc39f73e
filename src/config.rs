//! Application configuration loaded from environment variables.
//!
//! Loaded once at startup by whichever layer hosts the core; everything
//! has a local-friendly default so a bare environment still works.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted workout slot
    pub storage_dir: PathBuf,
    /// Key the workout collection is stored under
    pub storage_key: String,
    /// Initial map zoom level, consumed by the map layer
    pub map_zoom: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("."),
            storage_key: "workouts".to_string(),
            map_zoom: 13,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            storage_dir: env::var("WAYMARK_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            storage_key: env::var("WAYMARK_STORAGE_KEY")
                .unwrap_or_else(|_| "workouts".to_string()),
            map_zoom: env::var("WAYMARK_MAP_ZOOM")
                .unwrap_or_else(|_| "13".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("WAYMARK_MAP_ZOOM"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("WAYMARK_STORAGE_DIR", "/tmp/waymark-test");
        env::set_var("WAYMARK_STORAGE_KEY", "test_workouts");
        env::set_var("WAYMARK_MAP_ZOOM", "15");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/waymark-test"));
        assert_eq!(config.storage_key, "test_workouts");
        assert_eq!(config.map_zoom, 15);

        // An unparsable zoom is the one env value we refuse
        env::set_var("WAYMARK_MAP_ZOOM", "high");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("WAYMARK_MAP_ZOOM")));

        env::remove_var("WAYMARK_STORAGE_DIR");
        env::remove_var("WAYMARK_STORAGE_KEY");
        env::remove_var("WAYMARK_MAP_ZOOM");
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.storage_key, "workouts");
        assert_eq!(config.map_zoom, 13);
    }
}
