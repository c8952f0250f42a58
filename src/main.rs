//! Jedi Arena - Entry Point
//!
//! Terminal front end: reads commands from stdin, forwards them to the match
//! controller and prints each new screen.

use clap::Parser;
use jedi_arena::core::error::Result;
use jedi_arena::core::GameConfig;
use jedi_arena::game::MatchController;
use jedi_arena::roster::Roster;
use jedi_arena::ui::{parse_command, Command, TerminalRenderer, HELP};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Pick a fighter, then beat every remaining opponent
#[derive(Parser, Debug)]
#[command(name = "jedi-arena")]
#[command(about = "Turn-taking duel game in the terminal")]
struct Args {
    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster file (TOML), overrides the config's roster_path
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Hide the exchange log
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.roster.is_some() {
        config.roster_path = args.roster.clone();
    }
    if args.no_log {
        config.show_exchange_log = false;
    }

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let roster = match &config.roster_path {
        Some(path) => Roster::load(path)?,
        None => Roster::builtin(),
    };
    tracing::info!("Jedi Arena starting with {} fighters", roster.len());

    let mut controller = MatchController::new(roster);
    let mut renderer = TerminalRenderer::new(
        io::stdout(),
        config.show_exchange_log,
        config.max_log_entries,
    );

    println!("\n=== JEDI ARENA ===");
    println!("{HELP}");
    controller.render(&mut renderer)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line, &controller) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Event(event)) => {
                if !controller.dispatch(&event, &mut renderer)? {
                    println!("Nothing happens. ({} screen)", controller.state());
                }
            }
            Err(message) => println!("{message}"),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}
