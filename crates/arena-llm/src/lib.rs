//! # Arena LLM
//!
//! Model-backend integrations for arena agents.
//!
//! ## Supported Backends
//!
//! | Backend | Identifiers | Key Required |
//! |---------|-------------|--------------|
//! | OpenAI | `gpt-*`, `o1-*` | `OPENAI_API_KEY` |
//! | Gemini | `*gemini*` | `GEMINI_API_KEY` |
//! | Mock | `mock*` | None |
//!
//! A model identifier is classified once, via [`Backend::classify`], into a
//! closed set of backend variants. Identifiers outside the table resolve to
//! [`Backend::Unsupported`], which fails at call time rather than at
//! construction so a misconfigured contestant degrades instead of aborting
//! the match.
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_llm::{LlmProvider, MockProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let llm = MockProvider::constant("Final Answer: 4");
//!     let response = llm.ask("What is 2+2?").await.unwrap();
//!     assert_eq!(response, "Final Answer: 4");
//! }
//! ```

pub mod backend;
pub mod config;
pub mod gemini;
pub mod mock;
pub mod openai;
pub mod provider;

pub use backend::{required_family, Backend};
pub use config::{ConfigError, LlmConfig};
pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use openai::{OpenAiProvider, INFRA_MODEL};
pub use provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};
