//! Duel orchestration and the match loop
//!
//! One round: generate a problem, fan the statement out to both solvers
//! concurrently, join on both results, assemble the judge transcript, extract
//! the winner, update the scoreboard. A failure anywhere degrades to
//! diagnostic text inside the round; the loop always advances.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use arena_llm::LlmConfig;

use crate::agent::{display_name, Agent};
use crate::parse::{parse_problem, parse_solver, ProblemRecord, SolverOutput};
use crate::prompts::{
    judge_instructions, judge_transcript, GENERATOR_DIRECTIVE, GENERATOR_INSTRUCTIONS,
    SOLVER_INSTRUCTIONS,
};
use crate::scoreboard::Scoreboard;
use crate::verdict::{extract_winner, Winner};

/// Pause between rounds; pacing for human-observed display only
pub const ROUND_PAUSE: Duration = Duration::from_secs(2);

/// Errors that prevent a match from starting
#[derive(Debug, Error)]
pub enum MatchConfigError {
    #[error("round count must be at least 1")]
    NoRounds,
}

/// Match parameters supplied by the driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of rounds to play
    pub rounds: u32,
    /// Model identifier for the first contestant
    pub model_1: String,
    /// Model identifier for the second contestant
    pub model_2: String,
}

impl MatchConfig {
    /// Create a validated match configuration
    pub fn new(rounds: u32, model_1: &str, model_2: &str) -> Result<Self, MatchConfigError> {
        if rounds == 0 {
            return Err(MatchConfigError::NoRounds);
        }
        Ok(Self {
            rounds,
            model_1: model_1.to_string(),
            model_2: model_2.to_string(),
        })
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            model_1: "gpt-5.1".to_string(),
            model_2: "gemini-3-pro-preview".to_string(),
        }
    }
}

/// Everything the driver needs to display one completed round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number
    pub round: u32,
    /// The generated problem
    pub problem: ProblemRecord,
    /// First contestant's parsed output
    pub output_1: SolverOutput,
    /// Second contestant's parsed output
    pub output_2: SolverOutput,
    /// Raw judge verdict text
    pub verdict: String,
    /// Extracted outcome
    pub winner: Winner,
    /// Running scoreboard after this round was credited
    pub scoreboard: Scoreboard,
}

/// A configured match: four agents plus the scoreboard
#[derive(Debug)]
pub struct Duel {
    config: MatchConfig,
    generator: Agent,
    judge: Agent,
    solver_1: Agent,
    solver_2: Agent,
    scoreboard: Scoreboard,
}

impl Duel {
    /// Build a duel from a match configuration.
    ///
    /// The judge is bound once to both contestant display names; the names
    /// double as scoreboard keys.
    pub fn new(config: MatchConfig, llm: &LlmConfig) -> Self {
        let name_1 = display_name(&config.model_1);
        let name_2 = display_name(&config.model_2);

        let generator = Agent::new("Generator", &llm.infra_model, GENERATOR_INSTRUCTIONS, llm);
        let judge = Agent::new(
            "Judge",
            &llm.infra_model,
            judge_instructions(&name_1, &name_2),
            llm,
        );
        let solver_1 = Agent::new(name_1, &config.model_1, SOLVER_INSTRUCTIONS, llm);
        let solver_2 = Agent::new(name_2, &config.model_2, SOLVER_INSTRUCTIONS, llm);

        let scoreboard = Scoreboard::new(&solver_1.name, &solver_2.name);
        Self {
            config,
            generator,
            judge,
            solver_1,
            solver_2,
            scoreboard,
        }
    }

    /// Build a duel from pre-constructed agents (test seam)
    pub fn from_agents(
        config: MatchConfig,
        generator: Agent,
        solver_1: Agent,
        solver_2: Agent,
        judge: Agent,
    ) -> Self {
        let scoreboard = Scoreboard::new(&solver_1.name, &solver_2.name);
        Self {
            config,
            generator,
            judge,
            solver_1,
            solver_2,
            scoreboard,
        }
    }

    /// The two contestant display names, in slot order
    pub fn contestants(&self) -> (&str, &str) {
        (&self.solver_1.name, &self.solver_2.name)
    }

    /// The running scoreboard
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Play one round. Always completes; every failure inside the round is
    /// carried as diagnostic text in the report.
    pub async fn play_round(&mut self, round: u32) -> RoundReport {
        info!(round, "generating problem");
        let raw_problem = self.generator.run(GENERATOR_DIRECTIVE).await;
        let problem = parse_problem(&raw_problem);
        debug!(statement = %problem.statement, "problem parsed");

        info!(round, "solvers are thinking");
        let (raw_1, raw_2) = tokio::join!(
            self.solver_1.run(&problem.statement),
            self.solver_2.run(&problem.statement),
        );
        let output_1 = parse_solver(&raw_1);
        let output_2 = parse_solver(&raw_2);

        info!(round, "judging");
        let transcript = judge_transcript(
            &problem,
            &self.solver_1.name,
            &output_1,
            &self.solver_2.name,
            &output_2,
        );
        let verdict = self.judge.run(&transcript).await;
        let winner = extract_winner(&verdict, &self.solver_1.name, &self.solver_2.name);

        match &winner {
            Winner::Contestant(name) => info!(round, winner = %name, "round decided"),
            Winner::Tie => info!(round, "round drawn"),
            Winner::Unknown => warn!(round, "could not determine winner from verdict"),
        }
        self.scoreboard.record(&winner);

        RoundReport {
            round,
            problem,
            output_1,
            output_2,
            verdict,
            winner,
            scoreboard: self.scoreboard.clone(),
        }
    }

    /// Run the full match, invoking `on_round` after each completed round,
    /// with a fixed pause between rounds (not after the last). Returns the
    /// final scoreboard.
    pub async fn run<F>(&mut self, mut on_round: F) -> &Scoreboard
    where
        F: FnMut(&RoundReport),
    {
        for round in 1..=self.config.rounds {
            let report = self.play_round(round).await;
            on_round(&report);
            if round < self.config.rounds {
                tokio::time::sleep(ROUND_PAUSE).await;
            }
        }
        &self.scoreboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_rejects_zero_rounds() {
        let err = MatchConfig::new(0, "gpt-5.1", "gemini-3-pro-preview").unwrap_err();
        assert!(matches!(err, MatchConfigError::NoRounds));
    }

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.rounds, 1);
        assert_eq!(config.model_1, "gpt-5.1");
        assert_eq!(config.model_2, "gemini-3-pro-preview");
    }

    #[test]
    fn test_contestant_names_derived_from_models() {
        let llm = LlmConfig::default();
        let duel = Duel::new(MatchConfig::default(), &llm);
        assert_eq!(duel.contestants(), ("Gpt-5.1", "Gemini-3-Pro-Preview"));
    }
}
