//! Headless Match Runner
//!
//! Plays complete matches with a seeded RNG standing in for the player's
//! picks, and prints one result per match as JSON or text. Opponents never
//! act on their own: the RNG only chooses which fighter to pick next.

use clap::Parser;
use jedi_arena::core::error::Result;
use jedi_arena::game::{GameEvent, MatchController, MatchState};
use jedi_arena::roster::Roster;
use jedi_arena::ui::state::describe;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

/// Headless Match Runner - random picks, full matches
#[derive(Parser, Debug)]
#[command(name = "match_runner")]
#[command(about = "Play matches with random picks and report the outcomes")]
struct Args {
    /// Number of matches to play (replay between them)
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Roster file (TOML); built-in fighters when omitted
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every exchange to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct MatchResult {
    outcome: String,
    player: String,
    /// Opponents in the order they were picked
    opponents: Vec<String>,
    defeated: u32,
    exchanges: u32,
    final_attack: i32,
    final_health: i32,
}

#[derive(Serialize)]
struct RunReport {
    seed: u64,
    wins: u32,
    losses: u32,
    matches: Vec<MatchResult>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let roster = match &args.roster {
        Some(path) => Roster::load(path)?,
        None => Roster::builtin(),
    };
    let mut controller = MatchController::new(roster);

    let mut matches = Vec::with_capacity(args.matches as usize);
    for round in 0..args.matches {
        if round > 0 {
            controller.handle(&GameEvent::Replay);
        }
        matches.push(play_match(&mut controller, &mut rng, args.verbose));
    }

    let wins = matches.iter().filter(|m| m.outcome == "Won").count() as u32;
    let report = RunReport {
        seed,
        wins,
        losses: matches.len() as u32 - wins,
        matches,
    };

    match args.format.as_str() {
        "text" => print_text(&report),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Drive one match from player selection to a terminal state
fn play_match(controller: &mut MatchController, rng: &mut ChaCha8Rng, verbose: bool) -> MatchResult {
    let mut opponents = Vec::new();
    let mut defeated = 0;
    let mut player = String::new();

    while !controller.state().is_terminal() {
        let event = match controller.state() {
            MatchState::SelectingPlayer | MatchState::SelectingOpponent => {
                let on_offer = controller.pool().ids();
                let Some(pick) = on_offer.choose(rng).cloned() else {
                    break;
                };
                if controller.state() == MatchState::SelectingPlayer {
                    player = pick.to_string();
                } else {
                    opponents.push(pick.to_string());
                }
                GameEvent::SelectCharacter(pick)
            }
            _ => GameEvent::Fight,
        };

        if !controller.handle(&event) {
            break;
        }

        if event == GameEvent::Fight {
            if let Some(report) = controller.last_exchange() {
                if verbose {
                    eprintln!("  [{}] {}", controller.exchanges(), describe(report));
                }
                if report.opponent_hit.defeated {
                    defeated += 1;
                }
            }
        }
    }

    let (final_attack, final_health) = controller
        .player()
        .map(|p| (p.current_attack(), p.health()))
        .unwrap_or_default();

    MatchResult {
        outcome: controller.state().to_string(),
        player,
        opponents,
        defeated,
        exchanges: controller.exchanges(),
        final_attack,
        final_health,
    }
}

fn print_text(report: &RunReport) {
    println!("Match Results");
    println!("=============");
    for (index, result) in report.matches.iter().enumerate() {
        println!(
            "#{:<3} {:<5} {} vs {} ({} defeated, {} exchanges, final ATK {}, HP {})",
            index + 1,
            result.outcome,
            result.player,
            result.opponents.join(", "),
            result.defeated,
            result.exchanges,
            result.final_attack,
            result.final_health
        );
    }
    println!();
    println!("Wins: {}  Losses: {}", report.wins, report.losses);
    println!("Seed: {}", report.seed);
}
