//! Display functions for the simple CLI mode

use super::formatters::{rack_entry, tile_text, word_line};
use crate::core::{BOARD_LEN, Bonus};
use crate::engine::{Commit, Game, PlayError};
use colored::Colorize;

/// Print the board with bonus labels, 1-based square numbers, and tiles
pub fn print_board(game: &Game) {
    let mut numbers = String::new();
    let mut cells = String::new();

    for idx in 0..BOARD_LEN {
        numbers.push_str(&format!("{:>3}", idx + 1));

        // Pad before coloring so the escape codes don't skew the columns
        let cell = match game.board().get(idx) {
            Some(placement) => {
                let text = tile_text(game.tile(placement.tile), placement.assigned);
                format!("{text:>3}").bright_white().bold()
            }
            None => {
                let bonus = game.board().bonus(idx);
                match bonus {
                    Bonus::Normal => format!("{:>3}", ".").normal(),
                    Bonus::DoubleLetter | Bonus::TripleLetter => {
                        format!("{:>3}", bonus.label()).cyan()
                    }
                    Bonus::DoubleWord | Bonus::TripleWord => {
                        format!("{:>3}", bonus.label()).red()
                    }
                }
            }
        };
        cells.push_str(&cell.to_string());
    }

    println!("\n{}", numbers.bright_black());
    println!("{cells}");
}

/// Print the rack with slot numbers for the command grammar
pub fn print_rack(game: &Game) {
    let entries: Vec<String> = game
        .rack()
        .iter()
        .enumerate()
        .map(|(i, &id)| rack_entry(i + 1, game.tile(id)))
        .collect();
    println!("\nRack:  {}", entries.join("  ").bright_yellow());
}

/// Print the current word, its score, the running total and the bag level
pub fn print_status(game: &Game) {
    println!(
        "Word:  {}   Score: {}   Total: {}   Bag: {}",
        word_line(&game.current_word()).bright_white().bold(),
        game.current_score().to_string().bright_cyan(),
        game.total_score().to_string().bright_green(),
        game.bag_remaining()
    );
}

/// Celebrate a submitted word
pub fn print_commit(commit: &Commit) {
    println!(
        "\n{}",
        format!(
            "Word \"{}\" submitted for {} points!",
            commit.word, commit.points
        )
        .green()
        .bold()
    );
}

/// Print a rejected move the way the game surfaces every rule error
pub fn print_error(err: &PlayError) {
    println!("{}", err.to_string().red());
}
