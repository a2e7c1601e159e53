//! Grading panel configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! [`GradingConfig::from_env`] reads the file named by `TONEWHEEL_CONFIG`
//! and falls back to defaults when it is unset or unreadable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grading::gain::GainFactors;
use crate::grading::wheels::DragBehavior;

/// Environment variable holding the path of a JSON config file.
pub const CONFIG_ENV_VAR: &str = "TONEWHEEL_CONFIG";

/// Bounds and initial value of one slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBound { name });
        }
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Ranges of the five scalar sliders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRanges {
    pub contrast: SliderRange,
    pub pivot: SliderRange,
    pub saturation: SliderRange,
    pub hue: SliderRange,
    pub unsharp_mask: SliderRange,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            contrast: SliderRange::new(0.0, 2.0, 1.0),
            pivot: SliderRange::new(0.0, 1.0, 0.435),
            saturation: SliderRange::new(0.0, 2.0, 1.0),
            hue: SliderRange::new(-6.0, 6.0, 0.0),
            unsharp_mask: SliderRange::new(-1.0, 1.0, 0.0),
        }
    }
}

/// Temperature slider settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    /// Initial normalized slider position in `[0, 1]`.
    pub initial_normalized: f64,
}

/// Everything a [`GradingPanel`](crate::GradingPanel) is built from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub drag: DragBehavior,
    pub gain: GainFactors,
    pub sliders: SliderRanges,
    pub temperature: TemperatureConfig,
}

impl GradingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::info!("loaded grading config from {}", path.display());
        Ok(config)
    }

    /// Load from `TONEWHEEL_CONFIG`, or defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default grading config");
                Self::default()
            }
        }
    }

    /// Check slider ranges and the temperature start position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.sliders;
        s.contrast.validate("contrast")?;
        s.pivot.validate("pivot")?;
        s.saturation.validate("saturation")?;
        s.hue.validate("hue")?;
        s.unsharp_mask.validate("unsharp_mask")?;

        let t = self.temperature.initial_normalized;
        if !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::InvalidTemperature(t));
        }
        Ok(())
    }
}
