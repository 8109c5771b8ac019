//! Tolerant parsers for free-form model output
//!
//! Model output is unreliable prose; these extractors always return
//! best-effort structured values and never fail a round. Fallbacks when a
//! section marker is absent are part of the contract, not error handling.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Sentinel reasoning when a solver omits the "Reasoning:" section
pub const NO_REASONING: &str = "No reasoning provided.";

/// Reference answer when the generator's output cannot be parsed
pub const UNKNOWN_ANSWER: &str = "Unknown";

/// A generated problem with its reference answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// The problem text handed to both solvers
    pub statement: String,
    /// The generator's proposed answer, shown to the judge
    pub reference_answer: String,
}

/// One solver's parsed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOutput {
    /// The "Reasoning:" section, or [`NO_REASONING`]
    pub reasoning: String,
    /// The "Final Answer:" section, or the whole raw response
    pub final_answer: String,
}

fn statement_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)problem statement:(.*?)(?:final answer:|$)")
            .expect("statement pattern compiles")
    })
}

fn reasoning_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)reasoning:(.*?)(?:final answer:|$)").expect("reasoning pattern compiles")
    })
}

fn answer_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)final answer:(.*)").expect("answer pattern compiles"))
}

/// Parse the generator's output into a problem record.
///
/// If either section is missing the whole raw text becomes the statement and
/// the reference answer degrades to [`UNKNOWN_ANSWER`]; the round proceeds on
/// the malformed problem rather than aborting.
pub fn parse_problem(text: &str) -> ProblemRecord {
    let statement = statement_re()
        .captures(text)
        .map(|c| c[1].trim().to_string());
    let reference_answer = answer_re().captures(text).map(|c| c[1].trim().to_string());

    match (statement, reference_answer) {
        (Some(statement), Some(reference_answer)) => ProblemRecord {
            statement,
            reference_answer,
        },
        _ => ProblemRecord {
            statement: text.to_string(),
            reference_answer: UNKNOWN_ANSWER.to_string(),
        },
    }
}

/// Parse a solver's raw response.
///
/// Each section degrades independently: missing reasoning becomes the
/// sentinel, a missing answer marker makes the entire raw response the final
/// answer so the judge always receives some answer text.
pub fn parse_solver(text: &str) -> SolverOutput {
    let reasoning = reasoning_re()
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| NO_REASONING.to_string());
    let final_answer = answer_re()
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| text.to_string());

    SolverOutput {
        reasoning,
        final_answer,
    }
}
