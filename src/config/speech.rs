//! Speech narration configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Narration defaults and availability
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Rate used when a call does not set one
    pub default_rate: f32,

    /// Pitch used when a call does not set one
    pub default_pitch: f32,

    /// Voice name (substring) preferred over automatic selection
    pub preferred_voice: Option<String>,

    /// Set to false to run without narration
    pub enabled: bool,
}

impl SpeechConfig {
    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.1..=10.0).contains(&self.default_rate) {
            return Err(ValidationError::RateOutOfRange(self.default_rate));
        }
        if !(0.0..=2.0).contains(&self.default_pitch) {
            return Err(ValidationError::PitchOutOfRange(self.default_pitch));
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_rate: 1.0,
            default_pitch: 1.0,
            preferred_voice: None,
            enabled: true,
        }
    }
}
