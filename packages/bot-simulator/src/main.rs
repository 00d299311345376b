//! Bot simulator CLI - plays all-bot rounds in memory to compare bots.
//!
//! Each game deals one round from its seed, lets the chosen bot play every
//! seat and records the outcome, finish order and per-seat tallies.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::{build_game_metrics, outcome_label};
use output::OutputWriter;
use simulator::{RoundResult, Simulator};
use sixhand_engine::ai::{create_ai, AiConfig, AiPlayer};
use sixhand_engine::domain::rules::SEATS;
use sixhand_engine::domain::{derive_bot_seed, RoundOutcome, Team};
use sixhand_engine::telemetry;
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "bot-simulator")]
#[command(about = "In-memory round simulator for comparing bots")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Bot for every seat (shortcut for setting all six seats)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3", "seat4", "seat5"])]
    seats: Option<AiType>,

    #[arg(long, default_value = "heuristic")]
    seat0: AiType,
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,
    #[arg(long, default_value = "heuristic")]
    seat4: AiType,
    #[arg(long, default_value = "heuristic")]
    seat5: AiType,

    /// Seed of the first game; game `n` uses `seed + n - 1`
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Gzip the detailed output
    #[arg(long)]
    compress: bool,

    /// Emit engine logs as JSON lines filtered by RUST_LOG
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        telemetry::init_tracing();
    } else {
        // Silent by default, only warnings and errors
        let filter = if args.verbose {
            "debug"
        } else if args.show_output {
            "info"
        } else {
            "warn"
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let seat_types: [AiType; SEATS] = match args.seats {
        Some(ai) => [ai; SEATS],
        None => [
            args.seat0, args.seat1, args.seat2, args.seat3, args.seat4, args.seat5,
        ],
    };
    let ai_names: [String; SEATS] =
        std::array::from_fn(|seat| seat_types[seat].name().to_string());
    if args.show_output {
        info!(games = args.games, ais = ?ai_names, "starting bot simulator");
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let base_seed = args.seed.unwrap_or_else(rand::random::<u64>);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let seed = base_seed.wrapping_add(u64::from(game_num - 1));
        let game_start = Instant::now();

        let outcome = create_bots(&seat_types, seed)
            .and_then(|ais| Simulator::new(seed).simulate_round(&ais).map_err(Into::into));
        match outcome {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    seed,
                    ai_names.clone(),
                    args.games,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {game_num}: {e}");
                }
                if args.verbose {
                    info!(
                        game = game_num,
                        outcome = outcome_label(result.outcome),
                        finish_order = ?result.finish_order,
                        "game completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {game_num} (seed {seed}) failed: {e}");
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

/// One bot per seat, each seeded from the game seed and its seat.
fn create_bots(
    seat_types: &[AiType; SEATS],
    seed: u64,
) -> Result<[Box<dyn AiPlayer>; SEATS], Box<dyn std::error::Error>> {
    let mut bots = Vec::with_capacity(SEATS);
    for (seat, ai) in seat_types.iter().enumerate() {
        let config = AiConfig::with_seed(derive_bot_seed(seed, 1, seat as u8));
        let bot = create_ai(ai.name(), &config)
            .ok_or_else(|| format!("Unknown AI type: {}", ai.name()))?;
        bots.push(bot);
    }
    bots.try_into().map_err(|_| "wrong number of bots".into())
}

fn print_summary(results: &[RoundResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let count = |wanted: RoundOutcome| results.iter().filter(|r| r.outcome == wanted).count();
    let pct = |n: usize| n as f64 * 100.0 / results.len() as f64;
    let a_wins = count(RoundOutcome::TeamWin(Team::A));
    let b_wins = count(RoundOutcome::TeamWin(Team::B));
    let draws = count(RoundOutcome::Draw);

    println!("\n=== Outcomes ===");
    println!("Team A wins: {a_wins} ({:.1}%)", pct(a_wins));
    println!("Team B wins: {b_wins} ({:.1}%)", pct(b_wins));
    println!("Draws:       {draws} ({:.1}%)", pct(draws));

    let moves: usize = results.iter().map(|r| r.moves).sum();
    let resets: u32 = results.iter().map(|r| r.trick_resets).sum();
    println!(
        "Average moves per round: {:.1}, trick resets: {:.1}",
        moves as f64 / results.len() as f64,
        resets as f64 / results.len() as f64
    );

    println!("\n=== First Finisher by Seat ===");
    for seat in 0..SEATS {
        let firsts = results
            .iter()
            .filter(|r| r.finish_order.first() == Some(&(seat as u8)))
            .count();
        println!("Seat {seat}: {firsts} ({:.1}%)", pct(firsts));
    }
}
