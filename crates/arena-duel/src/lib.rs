//! # Arena Duel
//!
//! Scored, multi-round duels between two LLM-backed solver agents on
//! auto-generated math problems, adjudicated by a third model acting as
//! judge.
//!
//! ## Key Types
//!
//! - [`Agent`] — a named wrapper binding a model backend and an instruction
//!   template to a text-in/text-out call
//! - [`Duel`] — one configured match: generator, two solvers, judge,
//!   scoreboard
//! - [`Winner`] — the outcome extracted from a judge verdict
//! - [`Scoreboard`] — per-contestant win tally plus a tie bucket
//!
//! ## Quick Start
//!
//! ```rust
//! use arena_duel::prompts::{judge_instructions, GENERATOR_INSTRUCTIONS, SOLVER_INSTRUCTIONS};
//! use arena_duel::{Agent, Duel, MatchConfig, Winner};
//! use arena_llm::{Backend, MockProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Mock backends let a full round run offline.
//!     let generator = Agent::with_backend(
//!         "Generator",
//!         "mock",
//!         Backend::Mock(MockProvider::constant(
//!             "Problem Statement: What is 2+2?\nFinal Answer: 4",
//!         )),
//!         GENERATOR_INSTRUCTIONS,
//!     );
//!     let solver_1 = Agent::with_backend(
//!         "Alpha",
//!         "mock-alpha",
//!         Backend::Mock(MockProvider::constant("Reasoning: add.\nFinal Answer: 4")),
//!         SOLVER_INSTRUCTIONS,
//!     );
//!     let solver_2 = Agent::with_backend(
//!         "Beta",
//!         "mock-beta",
//!         Backend::Mock(MockProvider::constant("Reasoning: count.\nFinal Answer: 5")),
//!         SOLVER_INSTRUCTIONS,
//!     );
//!     let judge = Agent::with_backend(
//!         "Judge",
//!         "mock-judge",
//!         Backend::Mock(MockProvider::constant("The winner of the match is: Alpha")),
//!         judge_instructions("Alpha", "Beta"),
//!     );
//!
//!     let config = MatchConfig::new(1, "mock-alpha", "mock-beta").unwrap();
//!     let mut duel = Duel::from_agents(config, generator, solver_1, solver_2, judge);
//!     let report = duel.play_round(1).await;
//!
//!     assert_eq!(report.winner, Winner::Contestant("Alpha".to_string()));
//!     assert_eq!(duel.scoreboard().wins("Alpha"), 1);
//! }
//! ```

pub mod agent;
pub mod duel;
pub mod parse;
pub mod prompts;
pub mod scoreboard;
pub mod verdict;

pub use agent::{display_name, Agent};
pub use duel::{Duel, MatchConfig, MatchConfigError, RoundReport, ROUND_PAUSE};
pub use parse::{parse_problem, parse_solver, ProblemRecord, SolverOutput, NO_REASONING};
pub use scoreboard::{Scoreboard, TIE_BUCKET};
pub use verdict::{extract_winner, Winner};
