//! Error types for loading and validating grading configuration.
//!
//! The parameter model itself is infallible: out-of-range input is clamped
//! or passed through. Only configuration can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("slider `{name}` has minimum {min} above maximum {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("slider `{name}` bound is not finite")]
    NonFiniteBound { name: &'static str },

    #[error("initial temperature {0} is outside 0..=1")]
    InvalidTemperature(f64),
}
