//! Arena CLI - scored duels between two solver models
//!
//! # Usage
//!
//! ```bash
//! # One round with the default fighters
//! arena
//!
//! # Five rounds between two specific models
//! arena --rounds 5 --fighter-1 gpt-5.1 --fighter-2 gemini-3-pro-preview
//!
//! # Offline demo round over mock backends
//! arena --fighter-1 mock-alpha --fighter-2 mock-beta
//! ```

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use arena_duel::{Duel, MatchConfig, RoundReport, Winner};
use arena_llm::{required_family, LlmConfig};

/// Dynamic AI Arena
///
/// Two solver models fight over auto-generated math problems; a judge model
/// names a winner each round.
#[derive(Parser)]
#[command(
    name = "arena",
    version,
    about = "Dynamic AI Arena - LLM vs LLM math duels",
    long_about = "Runs a scored, multi-round duel between two language models.\n\n\
                  Each round a generator model produces a math problem, both\n\
                  fighters solve it concurrently, and a judge model delivers\n\
                  the verdict."
)]
struct Cli {
    /// Number of rounds to play
    #[arg(short = 'n', long, default_value_t = 1)]
    rounds: u32,

    /// Model identifier for the first fighter
    #[arg(long, default_value = "gpt-5.1")]
    fighter_1: String,

    /// Model identifier for the second fighter
    #[arg(long, default_value = "gemini-3-pro-preview")]
    fighter_2: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let llm = LlmConfig::from_env();
    warn_missing_keys(&llm, &cli);

    let config = MatchConfig::new(cli.rounds, &cli.fighter_1, &cli.fighter_2)?;
    let total_rounds = config.rounds;
    let mut duel = Duel::new(config, &llm);
    let (name_1, name_2) = duel.contestants();
    let (name_1, name_2) = (name_1.to_string(), name_2.to_string());

    println!(
        "{}",
        "--- ⚔️  WELCOME TO THE DYNAMIC AI ARENA ⚔️  ---"
            .magenta()
            .bold()
    );
    println!(
        "{} vs {} over {} round(s)",
        name_1.cyan(),
        name_2.green(),
        total_rounds
    );

    let board = duel
        .run(|report| print_round(report, &name_1, &name_2, total_rounds))
        .await;

    println!("\n{}", "=== FINAL RESULTS ===".magenta().bold());
    println!("{}: {}", name_1, board.wins(&name_1));
    println!("{}: {}", name_2, board.wins(&name_2));
    println!("Ties: {}", board.ties());

    Ok(())
}

/// Print one completed round the way the scoreboard audience expects it
fn print_round(report: &RoundReport, name_1: &str, name_2: &str, total_rounds: u32) {
    let banner = format!("===== ROUND {} of {} =====", report.round, total_rounds);
    println!("\n{}", banner.magenta().bold());
    println!("Problem: {}", report.problem.statement.bold());
    println!("{}: {}", name_1.cyan(), report.output_1.final_answer);
    println!("{}: {}", name_2.green(), report.output_2.final_answer);
    println!("{}", format!("Judge's Verdict:\n{}", report.verdict).yellow());

    match &report.winner {
        Winner::Tie => println!("🤝 Result: {}", "IT'S A TIE!".bold()),
        Winner::Contestant(name) => println!("🏆 Round Winner: {}", name.bold()),
        Winner::Unknown => println!("{}", "Error: Could not determine winner.".red()),
    }

    println!(
        "Score: {}: {} | {}: {} | Ties: {}",
        name_1,
        report.scoreboard.wins(name_1),
        name_2,
        report.scoreboard.wins(name_2),
        report.scoreboard.ties()
    );
}

/// Warn up front about API keys the configured models will need but lack
fn warn_missing_keys(llm: &LlmConfig, cli: &Cli) {
    let mut families: Vec<&str> = [
        llm.infra_model.as_str(),
        cli.fighter_1.as_str(),
        cli.fighter_2.as_str(),
    ]
    .iter()
    .filter_map(|model| required_family(model))
    .filter(|family| *family != "mock")
    .collect();
    families.sort_unstable();
    families.dedup();

    for family in families {
        if let Err(e) = llm.require_key(family) {
            println!(
                "{} {}",
                "⚠".yellow().bold(),
                format!("{} - calls to {} models will fail", e, family).yellow()
            );
        }
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}
