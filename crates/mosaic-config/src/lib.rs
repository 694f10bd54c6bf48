//! Mosaic configuration system.
//!
//! Provides TOML-based layout options with validation. All sections use
//! defaults so partial configs, or no config at all, work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mosaic_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    Alignment, LayoutOptions, LogLevel, LoggingConfig, MosaicConfig, RatioBounds,
    CONFIG_SCHEMA_VERSION,
};

use mosaic_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `layout.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<MosaicConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MosaicConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = MosaicConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"OT_big\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = MosaicConfig::default();
        let json = config_to_json(&config);
        let parsed: MosaicConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.layout, config.layout);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "[layout]\nmin_ratio = 2.0\nmax_ratio = 1.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
