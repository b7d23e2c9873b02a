//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FUTURE_SELF` prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use future_self::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod conversation;
mod error;
mod server;

pub use ai::{AiConfig, ProviderKind};
pub use conversation::ConversationConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::application::handlers::interview::TurnSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults; only the OpenAI key is required, and only
/// when the OpenAI provider is selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Interview tunables
    #[serde(default)]
    pub conversation: ConversationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FUTURE_SELF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FUTURE_SELF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FUTURE_SELF__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `FUTURE_SELF__CONVERSATION__PERSONA_TONE=supportive`
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
                    .prefix("FUTURE_SELF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Besides per-section checks, the model timeout must be shorter than
    /// the HTTP request timeout so a slow model surfaces as an upstream
    /// error instead of a dropped request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.conversation.validate()?;

        if self.ai.timeout() >= self.server.request_timeout() {
            return Err(ValidationError::ModelTimeoutTooLong);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Settings for the turn handler.
    pub fn turn_settings(&self) -> TurnSettings {
        TurnSettings {
            prompt: self.conversation.prompt_builder(),
            chunker: self.conversation.chunker(),
            checkpoint: self.conversation.checkpoint_trigger(),
            model_timeout: self.ai.timeout(),
            temperature: self.ai.temperature,
            max_tokens: self.ai.max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::{CheckpointPolicy, PersonaTone};
    use std::env;
    use std::sync::Mutex;
    use std::time::Duration;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "FUTURE_SELF__AI__OPENAI_API_KEY",
        "FUTURE_SELF__AI__PROVIDER",
        "FUTURE_SELF__SERVER__PORT",
        "FUTURE_SELF__SERVER__ENVIRONMENT",
        "FUTURE_SELF__CONVERSATION__PERSONA_TONE",
        "FUTURE_SELF__CONVERSATION__CHECKPOINT_POLICY",
    ];

    fn set_minimal_env() {
        env::set_var("FUTURE_SELF__AI__OPENAI_API_KEY", "sk-xxx");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let config = load_with(&[]).unwrap();
        assert!(config.ai.has_openai());
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let config = load_with(&[("FUTURE_SELF__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let config = load_with(&[("FUTURE_SELF__SERVER__PORT", "3000")]).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_conversation_settings_from_env() {
        let config = load_with(&[
            ("FUTURE_SELF__CONVERSATION__PERSONA_TONE", "supportive"),
            (
                "FUTURE_SELF__CONVERSATION__CHECKPOINT_POLICY",
                "every_turn_after_threshold",
            ),
        ])
        .unwrap();

        assert_eq!(config.conversation.persona_tone, PersonaTone::Supportive);
        assert_eq!(
            config.conversation.checkpoint_policy,
            CheckpointPolicy::EveryTurnAfterThreshold
        );
    }

    #[test]
    fn test_mock_provider_from_env() {
        let config = load_with(&[("FUTURE_SELF__AI__PROVIDER", "mock")]).unwrap();
        assert_eq!(config.ai.provider, ProviderKind::Mock);
    }

    #[test]
    fn test_model_timeout_must_fit_request_timeout() {
        let mut config = AppConfig {
            ai: AiConfig {
                provider: ProviderKind::Mock,
                ..Default::default()
            },
            ..Default::default()
        };
        config.server.request_timeout_secs = 30;
        config.ai.timeout_secs = 30;

        assert_eq!(config.validate(), Err(ValidationError::ModelTimeoutTooLong));
    }

    #[test]
    fn test_turn_settings_follow_config() {
        let mut config = AppConfig::default();
        config.ai.timeout_secs = 5;
        config.ai.max_tokens = 200;
        config.conversation.max_chunk_len = 80;
        config.conversation.checkpoint_threshold = 3;

        let settings = config.turn_settings();

        assert_eq!(settings.model_timeout, Duration::from_secs(5));
        assert_eq!(settings.max_tokens, 200);
        assert_eq!(settings.chunker.max_len(), 80);
        assert_eq!(settings.checkpoint.threshold(), 3);
    }
}
