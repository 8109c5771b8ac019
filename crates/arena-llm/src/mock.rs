//! Mock LLM provider for offline matches and testing

use async_trait::async_trait;
use std::time::Instant;

use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// A mock provider that replays predefined responses.
/// Lets a full duel run without network access to any real backend.
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock
    name: String,
    /// Canned responses (cycles through them)
    responses: Vec<String>,
    /// Current response index
    index: std::sync::atomic::AtomicUsize,
    /// Simulated latency in ms
    latency_ms: u64,
    /// When set, every call fails with this message
    failure: Option<String>,
}

impl MockProvider {
    /// Create a mock that cycles through the given responses
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            index: std::sync::atomic::AtomicUsize::new(0),
            latency_ms: 0,
            failure: None,
        }
    }

    /// Create a mock that always returns the same response
    pub fn constant(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Create a mock whose every call fails with the given message
    pub fn failing(message: &str) -> Self {
        Self {
            name: "failing-mock".to_string(),
            responses: Vec::new(),
            index: std::sync::atomic::AtomicUsize::new(0),
            latency_ms: 0,
            failure: Some(message.to_string()),
        }
    }

    /// Set a simulated latency per call
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set the reported provider name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = Instant::now();

        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }

        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        let content = if self.responses.is_empty() {
            String::new()
        } else {
            let idx = self
                .index
                .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            self.responses[idx % self.responses.len()].clone()
        };

        Ok(LlmResponse {
            content,
            model: self.name.clone(),
            tokens_used: Some((request.prompt.len() / 4) as u32),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
