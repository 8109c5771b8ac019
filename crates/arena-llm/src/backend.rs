//! Backend classification
//!
//! A model identifier is classified exactly once into a closed set of
//! backend variants; call sites never inspect the identifier again.

use tracing::debug;

use crate::config::LlmConfig;
use crate::gemini::GeminiProvider;
use crate::mock::MockProvider;
use crate::openai::OpenAiProvider;
use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// Canned reply for `mock` model identifiers, shaped like a solver response
const MOCK_REPLY: &str = "Reasoning:\nThis is a canned mock response.\n\nFinal Answer:\n42";

/// The closed set of backends a model identifier can resolve to
#[derive(Debug)]
pub enum Backend {
    OpenAi(OpenAiProvider),
    Gemini(GeminiProvider),
    Mock(MockProvider),
    Unsupported(String),
}

/// Backend family implied by a model identifier's naming convention.
/// `None` means the identifier matches no known family.
pub fn required_family(model: &str) -> Option<&'static str> {
    if model.starts_with("gpt-") || model.starts_with("o1-") {
        Some("openai")
    } else if model.contains("gemini") {
        Some("gemini")
    } else if model.starts_with("mock") {
        Some("mock")
    } else {
        None
    }
}

impl Backend {
    /// Classify a model identifier into its backend.
    ///
    /// A missing API key is not rejected here: the provider is built with an
    /// empty key and the first call surfaces the backend's own auth failure,
    /// which the agent layer degrades to diagnostic text.
    pub fn classify(model: &str, config: &LlmConfig) -> Self {
        let backend = match required_family(model) {
            Some("openai") => {
                let key = config.openai_api_key.clone().unwrap_or_default();
                let mut provider = OpenAiProvider::new(&key, model);
                if let Some(base_url) = &config.openai_base_url {
                    provider = provider.with_base_url(base_url);
                }
                Self::OpenAi(provider)
            }
            Some("gemini") => {
                let key = config.gemini_api_key.clone().unwrap_or_default();
                let mut provider = GeminiProvider::new(&key, model);
                if let Some(base_url) = &config.gemini_base_url {
                    provider = provider.with_base_url(base_url);
                }
                Self::Gemini(provider)
            }
            Some("mock") => Self::Mock(MockProvider::constant(MOCK_REPLY).with_name(model)),
            _ => Self::Unsupported(model.to_string()),
        };
        debug!(model, family = backend.family(), "classified model backend");
        backend
    }

    /// The family name of this backend
    pub fn family(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai",
            Self::Gemini(_) => "gemini",
            Self::Mock(_) => "mock",
            Self::Unsupported(_) => "unsupported",
        }
    }

    /// Generate a completion through the classified provider
    pub async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        match self {
            Self::OpenAi(provider) => provider.complete(request).await,
            Self::Gemini(provider) => provider.complete(request).await,
            Self::Mock(provider) => provider.complete(request).await,
            Self::Unsupported(model) => Err(LlmError::UnsupportedModel(model.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_families() {
        let config = LlmConfig::default();
        assert_eq!(Backend::classify("gpt-5.1", &config).family(), "openai");
        assert_eq!(Backend::classify("o1-preview", &config).family(), "openai");
        assert_eq!(
            Backend::classify("gemini-3-pro-preview", &config).family(),
            "gemini"
        );
        assert_eq!(Backend::classify("mock-solver", &config).family(), "mock");
        assert_eq!(
            Backend::classify("llama-70b", &config).family(),
            "unsupported"
        );
    }

    #[tokio::test]
    async fn test_unsupported_fails_at_call_time() {
        let config = LlmConfig::default();
        let backend = Backend::classify("llama-70b", &config);
        let err = backend
            .complete(LlmRequest::simple("hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::UnsupportedModel(_)));
        assert_eq!(err.to_string(), "Model 'llama-70b' is not supported");
    }

    #[tokio::test]
    async fn test_mock_backend_replies() {
        let config = LlmConfig::default();
        let backend = Backend::classify("mock", &config);
        let response = backend.complete(LlmRequest::simple("solve")).await.unwrap();
        assert!(response.content.contains("Final Answer:"));
    }
}
