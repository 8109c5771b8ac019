//! Arena agents
//!
//! An agent binds a display name, a classified model backend, and a fixed
//! instruction template into a text-in/text-out call. Every failure mode of
//! the underlying backend is degraded to diagnostic text so a single bad
//! agent response never aborts a round.

use arena_llm::{Backend, LlmConfig, LlmError, LlmRequest};
use tracing::debug;

/// A named, model-bound agent
#[derive(Debug)]
pub struct Agent {
    /// Display name (also the scoreboard key for solver agents)
    pub name: String,
    /// Model identifier the backend was classified from
    pub model: String,
    backend: Backend,
    instructions: String,
}

impl Agent {
    /// Create an agent, classifying the model identifier into its backend
    pub fn new(
        name: impl Into<String>,
        model: &str,
        instructions: impl Into<String>,
        config: &LlmConfig,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.to_string(),
            backend: Backend::classify(model, config),
            instructions: instructions.into(),
        }
    }

    /// Create an agent over an already-built backend (test seam)
    pub fn with_backend(
        name: impl Into<String>,
        model: &str,
        backend: Backend,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.to_string(),
            backend,
            instructions: instructions.into(),
        }
    }

    /// Run the agent on the given input text.
    ///
    /// Never fails: an unsupported model or a backend error is returned as
    /// diagnostic text in place of the model's answer, so callers must be
    /// prepared for "successful" calls carrying error-shaped text.
    pub async fn run(&self, input_text: &str) -> String {
        let request = LlmRequest::with_role(&self.instructions, input_text);
        match self.backend.complete(request).await {
            Ok(response) => response.content.trim().to_string(),
            Err(LlmError::UnsupportedModel(model)) => {
                debug!(agent = %self.name, %model, "unsupported model");
                format!("Error: Model '{}' is not supported.", model)
            }
            Err(e) => {
                debug!(agent = %self.name, error = %e, "agent call degraded");
                format!("Error running agent {}: {}", self.name, e)
            }
        }
    }
}

/// Derive a contestant display name from a model identifier.
///
/// Separators become spaces, each word is title-cased, then spaces become
/// hyphens: `gpt-5.1` → `Gpt-5.1`, `gemini-3-pro-preview` →
/// `Gemini-3-Pro-Preview`. The result doubles as a scoreboard key and as the
/// literal token the judge is instructed to echo back.
pub fn display_name(model_id: &str) -> String {
    let spaced = model_id.replace(['-', '_'], " ");
    let mut titled = String::with_capacity(spaced.len());
    let mut prev_alphabetic = false;
    for ch in spaced.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                titled.extend(ch.to_lowercase());
            } else {
                titled.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            titled.push(ch);
            prev_alphabetic = false;
        }
    }
    titled.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_llm::MockProvider;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("gpt-5.1"), "Gpt-5.1");
        assert_eq!(display_name("gemini-3-pro-preview"), "Gemini-3-Pro-Preview");
        assert_eq!(display_name("o1-preview"), "O1-Preview");
        assert_eq!(display_name("MOCK-solver"), "Mock-Solver");
    }

    #[tokio::test]
    async fn test_run_trims_output() {
        let agent = Agent::with_backend(
            "Echo",
            "mock",
            Backend::Mock(MockProvider::constant("  padded  ")),
            "You echo.",
        );
        assert_eq!(agent.run("hi").await, "padded");
    }

    #[tokio::test]
    async fn test_unsupported_model_degrades() {
        let config = LlmConfig::default();
        let agent = Agent::new("Mystery", "llama-70b", "instructions", &config);
        let output = agent.run("hello").await;
        assert_eq!(output, "Error: Model 'llama-70b' is not supported.");
    }

    #[tokio::test]
    async fn test_backend_error_degrades() {
        let agent = Agent::with_backend(
            "Flaky",
            "mock",
            Backend::Mock(MockProvider::failing("connection reset")),
            "instructions",
        );
        let output = agent.run("hello").await;
        assert!(output.starts_with("Error running agent Flaky:"));
        assert!(output.contains("connection reset"));
    }
}
