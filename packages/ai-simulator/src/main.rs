//! Match simulator CLI - fast in-memory play for strategy evaluation.
//!
//! Runs seeded human-versus-bot matches with a strategy on each seat and
//! reports win rates, with optional per-match JSONL records.

mod output;
mod simulator;

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use engine::{create_ai, AiPlayer};
use output::OutputWriter;
use rand::Rng;
use simulator::{run_match, MatchRecord};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory match simulator for strategy evaluation")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Strategy driving the human seat
    #[arg(long, default_value = "random")]
    human: StrategyKind,

    /// Strategy driving the bot seat
    #[arg(long, default_value = "heuristic")]
    bot: StrategyKind,

    /// Base seed for deterministic matches; match n uses base + n
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write per-match JSONL records into this directory
    #[arg(long)]
    output_dir: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Heuristic,
    Random,
}

impl StrategyKind {
    fn name(self) -> &'static str {
        match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Random => "random",
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base_seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(base_seed, games = args.games, "starting simulation");

    let mut writer = match &args.output_dir {
        Some(dir) => Some(OutputWriter::new(dir)?),
        None => None,
    };

    let start = Instant::now();
    let mut records = Vec::new();
    let mut errors = 0u32;

    for game_num in 0..args.games {
        let seed = base_seed.wrapping_add(game_num as u64);
        // Distinct derived seeds so seeded random seats do not mirror each
        // other's choices.
        let human = make_strategy(args.human, seed.rotate_left(17))?;
        let bot = make_strategy(args.bot, seed.rotate_left(31))?;

        match run_match(game_num, seed, human.as_ref(), bot) {
            Ok(record) => {
                if let Some(w) = writer.as_mut() {
                    if let Err(e) = w.write_record(&record) {
                        warn!("failed to write record for match {game_num}: {e}");
                    }
                }
                records.push(record);
            }
            Err(e) => {
                errors += 1;
                warn!("match {game_num} failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    if let Some(w) = writer {
        let path = w.path().to_path_buf();
        w.finish()?;
        println!("Records written to: {}", path.display());
    }

    print_summary(&records, errors, elapsed, args.games);
    Ok(())
}

fn make_strategy(
    kind: StrategyKind,
    seed: u64,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    create_ai(kind.name(), Some(seed))
        .ok_or_else(|| format!("unknown strategy: {}", kind.name()).into())
}

fn print_summary(records: &[MatchRecord], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", records.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");

    if records.is_empty() {
        return;
    }

    let mut human_wins = 0u32;
    let mut bot_wins = 0u32;
    let mut draws = 0u32;
    let mut plays = 0u64;
    let mut passes = 0u64;
    for record in records {
        match record.outcome {
            engine::MatchOutcome::HumanWin => human_wins += 1,
            engine::MatchOutcome::BotWin => bot_wins += 1,
            engine::MatchOutcome::Draw => draws += 1,
        }
        plays += record.plays as u64;
        passes += record.passes as u64;
    }

    let n = records.len() as f64;
    println!("\n=== Results ===");
    println!(
        "Human seat: {human_wins} wins ({:.1}%)",
        human_wins as f64 / n * 100.0
    );
    println!(
        "Bot seat:   {bot_wins} wins ({:.1}%)",
        bot_wins as f64 / n * 100.0
    );
    if draws > 0 {
        println!("Draws:      {draws}");
    }
    println!(
        "Average actions per match: {:.1} plays, {:.1} passes",
        plays as f64 / n,
        passes as f64 / n
    );
}
