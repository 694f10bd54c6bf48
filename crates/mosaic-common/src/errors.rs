use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised by a layout pass.
///
/// Only caller mistakes surface here. Degenerate containers and empty
/// tile sets are valid input and produce an empty layout instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid {group} ratio bounds: min {min} is greater than max {max}")]
    InvalidRatioBounds {
        group: &'static str,
        min: f64,
        max: f64,
    },

    #[error("option {name} must be finite, got {value}")]
    NonFiniteOption { name: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum MosaicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("scene error: {0}")]
    Scene(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
