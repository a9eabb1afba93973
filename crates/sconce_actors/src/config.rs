//! Light switch configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default light intensity in lumens
pub const DEFAULT_INTENSITY: f32 = 3000.0;

/// Default detection sphere radius in world units
pub const DEFAULT_DETECTION_RADIUS: f32 = 250.0;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Intensity out of range
    #[error("desired intensity must be finite and non-negative, got {0}")]
    InvalidIntensity(f32),

    /// Radius out of range
    #[error("detection radius must be finite and positive, got {0}")]
    InvalidRadius(f32),

    /// JSON parse failure
    #[error("failed to parse light switch config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The two exposed numeric fields of a light switch
///
/// Both are consulted once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSwitchConfig {
    /// Initial intensity of the light element, in lumens
    pub desired_intensity: f32,
    /// Radius of the detection sphere, in world units
    pub detection_radius: f32,
}

impl Default for LightSwitchConfig {
    fn default() -> Self {
        Self {
            desired_intensity: DEFAULT_INTENSITY,
            detection_radius: DEFAULT_DETECTION_RADIUS,
        }
    }
}

impl LightSwitchConfig {
    /// Create a config with the given intensity and the default radius
    pub fn new(desired_intensity: f32) -> Self {
        Self {
            desired_intensity,
            ..Default::default()
        }
    }

    /// Set the detection radius
    pub fn with_detection_radius(mut self, radius: f32) -> Self {
        self.detection_radius = radius;
        self
    }

    /// Load and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check both fields are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.desired_intensity.is_finite() || self.desired_intensity < 0.0 {
            return Err(ConfigError::InvalidIntensity(self.desired_intensity));
        }
        if !self.detection_radius.is_finite() || self.detection_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.detection_radius));
        }
        Ok(())
    }
}
