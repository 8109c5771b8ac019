//! Configuration for model backends
//!
//! API keys and model settings are read from the environment once at startup
//! and threaded through backend classification.

use serde::{Deserialize, Serialize};
use std::env;

use crate::openai::INFRA_MODEL;

/// Error types for configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Unknown backend family: {0}")]
    UnknownFamily(String),
}

/// Backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI API key (env: OPENAI_API_KEY)
    pub openai_api_key: Option<String>,
    /// Gemini API key (env: GEMINI_API_KEY)
    pub gemini_api_key: Option<String>,
    /// Model for the generator and judge roles (env: ARENA_INFRA_MODEL)
    pub infra_model: String,
    /// OpenAI base URL override (env: OPENAI_BASE_URL)
    pub openai_base_url: Option<String>,
    /// Gemini base URL override (env: GEMINI_BASE_URL)
    pub gemini_base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            gemini_api_key: None,
            infra_model: INFRA_MODEL.to_string(),
            openai_base_url: None,
            gemini_base_url: None,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            infra_model: env::var("ARENA_INFRA_MODEL").unwrap_or_else(|_| INFRA_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            gemini_base_url: env::var("GEMINI_BASE_URL").ok(),
        }
    }

    /// Get the API key for a backend family
    pub fn api_key(&self, family: &str) -> Option<&str> {
        match family {
            "openai" => self.openai_api_key.as_deref(),
            "gemini" => self.gemini_api_key.as_deref(),
            _ => None,
        }
    }

    /// Get the API key for a backend family, or the env var it is missing from
    pub fn require_key(&self, family: &str) -> Result<&str, ConfigError> {
        match family {
            "openai" => self
                .openai_api_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string())),
            "gemini" => self
                .gemini_api_key
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string())),
            other => Err(ConfigError::UnknownFamily(other.to_string())),
        }
    }

    /// Check if a backend family has its key configured
    pub fn is_configured(&self, family: &str) -> bool {
        match family {
            "openai" => self.openai_api_key.is_some(),
            "gemini" => self.gemini_api_key.is_some(),
            "mock" => true,
            _ => false,
        }
    }

    /// List backend families usable with the current configuration
    pub fn available_backends(&self) -> Vec<&str> {
        let mut backends = vec!["mock"];
        if self.openai_api_key.is_some() {
            backends.push("openai");
        }
        if self.gemini_api_key.is_some() {
            backends.push("gemini");
        }
        backends
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.infra_model, INFRA_MODEL);
        assert!(config.is_configured("mock"));
        assert!(!config.is_configured("openai"));
    }

    #[test]
    fn test_require_key_missing() {
        let config = LlmConfig::default();
        let err = config.require_key("gemini").unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_available_backends() {
        let config = LlmConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..LlmConfig::default()
        };
        let backends = config.available_backends();
        assert!(backends.contains(&"mock"));
        assert!(backends.contains(&"openai"));
        assert!(!backends.contains(&"gemini"));
    }
}
