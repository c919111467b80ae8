//! Single-line Scrabble - CLI
//!
//! One row of 15 bonus squares, seven tiles on the rack, one word at a time.
//! TUI and plain-terminal modes over the same headless engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rackline::{
    commands::run_simple,
    engine::Game,
    interactive::{App, run_tui},
    resources::{Dictionary, Distribution},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rackline",
    about = "Single-line Scrabble: tile placement, bonus scoring and dictionary lookup",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letter distribution JSON (built-in table when missing)
    #[arg(short = 'p', long, global = true, default_value = "data/pieces.json")]
    pieces: PathBuf,

    /// Dictionary word list, one word per line (built-in list when missing)
    #[arg(short = 'd', long, global = true, default_value = "data/dictionary.txt")]
    dictionary: PathBuf,

    /// Seed the shuffle for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-oriented mode without the TUI
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut game = build_game(&cli);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(game)),
        Commands::Simple => run_simple(&mut game).map_err(|e| anyhow::anyhow!(e)),
    }
}

/// Resolve both resources with degrade-to-default semantics
///
/// A missing or unreadable file warns and falls back; startup never blocks
/// on resources.
fn build_game(cli: &Cli) -> Game {
    let distribution = match Distribution::load_json(&cli.pieces) {
        Ok(distribution) => distribution,
        Err(err) => {
            eprintln!(
                "{}",
                format!(
                    "{}: {err}; using the built-in distribution",
                    cli.pieces.display()
                )
                .dimmed()
            );
            Distribution::standard()
        }
    };

    let dictionary = match Dictionary::load(&cli.dictionary) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!(
                "{}",
                format!(
                    "{}: {err}; using the built-in word list",
                    cli.dictionary.display()
                )
                .dimmed()
            );
            Dictionary::fallback()
        }
    };

    match cli.seed {
        Some(seed) => Game::with_seed(distribution, dictionary, seed),
        None => Game::new(distribution, dictionary),
    }
}
