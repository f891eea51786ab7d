//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SCENE_SYNERGY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use scene_synergy::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod features;
mod speech;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// offline configuration (no AI suggestions, narration on).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Narration defaults
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SCENE_SYNERGY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SCENE_SYNERGY__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `SCENE_SYNERGY__SPEECH__DEFAULT_RATE=1.2` -> `speech.default_rate = 1.2`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCENE_SYNERGY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate(self.features.enable_ai_suggestions)?;
        self.speech.validate()?;
        Ok(())
    }

    /// True when AI suggestions are switched on and a key is present
    pub fn ai_suggestions_enabled(&self) -> bool {
        self.features.enable_ai_suggestions && self.ai.has_gemini()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SCENE_SYNERGY__AI__GEMINI_API_KEY",
        "SCENE_SYNERGY__AI__MODEL",
        "SCENE_SYNERGY__AI__TIMEOUT_SECS",
        "SCENE_SYNERGY__SPEECH__DEFAULT_RATE",
        "SCENE_SYNERGY__SPEECH__ENABLED",
        "SCENE_SYNERGY__FEATURES__ENABLE_AI_SUGGESTIONS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert!(config.speech.enabled);
        assert!(!config.features.enable_ai_suggestions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCENE_SYNERGY__AI__GEMINI_API_KEY", "AIza-test-key");
        env::set_var("SCENE_SYNERGY__AI__MODEL", "gemini-1.5-pro");
        env::set_var("SCENE_SYNERGY__AI__TIMEOUT_SECS", "45");
        env::set_var("SCENE_SYNERGY__SPEECH__DEFAULT_RATE", "1.5");
        env::set_var("SCENE_SYNERGY__SPEECH__ENABLED", "false");
        env::set_var("SCENE_SYNERGY__FEATURES__ENABLE_AI_SUGGESTIONS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.ai.gemini_api_key.as_deref(), Some("AIza-test-key"));
        assert_eq!(config.ai.model, "gemini-1.5-pro");
        assert_eq!(config.ai.timeout_secs, 45);
        assert_eq!(config.speech.default_rate, 1.5);
        assert!(!config.speech.enabled);
        assert!(config.ai_suggestions_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_key_for_suggestions() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCENE_SYNERGY__FEATURES__ENABLE_AI_SUGGESTIONS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.ai_suggestions_enabled());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCENE_SYNERGY__AI__TIMEOUT_SECS", "soon");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
