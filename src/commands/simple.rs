//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: a small command grammar over stdin,
//! board and rack reprinted after every engine call.

use crate::core::BOARD_LEN;
use crate::engine::{Game, PlayError};
use crate::output::{print_board, print_commit, print_error, print_rack, print_status};
use colored::Colorize;
use std::io::{self, Write};

/// A parsed player command
///
/// Slots and squares are 1-based as typed; execution converts them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cmd {
    Place {
        slot: usize,
        square: usize,
        letter: Option<char>,
    },
    Insert {
        slot: usize,
        square: usize,
        letter: Option<char>,
    },
    Pickup {
        square: usize,
    },
    Submit,
    Recall,
    Swap,
    Reset,
    Show,
    Help,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(game: &mut Game) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Single-line Scrabble - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    print_help();

    loop {
        print_board(game);
        print_rack(game);
        print_status(game);

        let input = get_user_input("\nCommand")?;
        if input.is_empty() {
            continue;
        }

        let cmd = match parse_command(&input) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{}", msg.red());
                continue;
            }
        };

        match cmd {
            Cmd::Place {
                slot,
                square,
                letter,
            } => {
                let Some(&tile) = game.rack().get(slot - 1) else {
                    println!("{}", format!("No tile in rack slot {slot}").red());
                    continue;
                };
                let result = match letter {
                    Some(letter) => game.place_wildcard(tile, square - 1, letter),
                    None => game.place(tile, square - 1),
                };
                report(result);
            }
            Cmd::Insert {
                slot,
                square,
                letter,
            } => {
                let Some(&tile) = game.rack().get(slot - 1) else {
                    println!("{}", format!("No tile in rack slot {slot}").red());
                    continue;
                };
                let result = match letter {
                    Some(letter) => game.insert_wildcard(tile, square - 1, letter),
                    None => game.insert(tile, square - 1),
                };
                report(result);
            }
            Cmd::Pickup { square } => {
                if square > BOARD_LEN {
                    print_error(&PlayError::SquareOutOfRange(square - 1));
                    continue;
                }
                match game.board().get(square - 1) {
                    Some(placement) => game.remove(placement.tile),
                    None => println!("{}", format!("Square {square} is empty").red()),
                }
            }
            Cmd::Submit => match game.commit() {
                Ok(commit) => print_commit(&commit),
                Err(err) => print_error(&err),
            },
            Cmd::Recall => {
                game.recall();
                println!("{}", "Tiles recalled to rack".green());
            }
            Cmd::Swap => match game.new_tiles() {
                Ok(()) => println!("{}", "New tiles dealt!".green()),
                Err(err) => print_error(&err),
            },
            Cmd::Reset => {
                game.reset();
                println!("{}", "Game reset!".green());
            }
            Cmd::Show => {}
            Cmd::Help => print_help(),
            Cmd::Quit => {
                println!("\nThanks for playing! Final score: {}\n", game.total_score());
                return Ok(());
            }
        }
    }
}

fn report(result: Result<(), PlayError>) {
    if let Err(err) = result {
        print_error(&err);
        if err == PlayError::WildcardNeedsLetter {
            println!(
                "{}",
                "Add the letter to the command, e.g. 'place 3 7 S'".bright_black()
            );
        }
    }
}

fn print_help() {
    println!("\nCommands (slots and squares are the printed numbers):");
    println!("  place <slot> <square> [letter]   put a rack tile on a square");
    println!("  insert <slot> <square> [letter]  shift tiles right and squeeze one in");
    println!("  pickup <square>                  return a placed tile to the rack");
    println!("  submit                           play the current word");
    println!("  recall                           take back every placed tile");
    println!("  swap                             exchange the whole rack");
    println!("  reset                            start a fresh game");
    println!("  board, help, quit");
}

fn parse_command(input: &str) -> Result<Cmd, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Err("Empty command (try 'help')".to_string());
    };
    let verb = first.to_lowercase();

    match verb.as_str() {
        "place" | "p" => {
            let (slot, square, letter) = parse_move_args(&tokens)?;
            Ok(Cmd::Place {
                slot,
                square,
                letter,
            })
        }
        "insert" | "i" => {
            let (slot, square, letter) = parse_move_args(&tokens)?;
            Ok(Cmd::Insert {
                slot,
                square,
                letter,
            })
        }
        "pickup" | "take" => {
            let square = parse_number(tokens.get(1), "pickup <square>")?;
            Ok(Cmd::Pickup { square })
        }
        "submit" | "s" => Ok(Cmd::Submit),
        "recall" | "r" => Ok(Cmd::Recall),
        "swap" | "new" | "n" => Ok(Cmd::Swap),
        "reset" => Ok(Cmd::Reset),
        "board" | "show" => Ok(Cmd::Show),
        "help" | "h" | "?" => Ok(Cmd::Help),
        "quit" | "q" | "exit" => Ok(Cmd::Quit),
        other => Err(format!("Unknown command '{other}' (try 'help')")),
    }
}

fn parse_move_args(tokens: &[&str]) -> Result<(usize, usize, Option<char>), String> {
    let usage = "place/insert <slot> <square> [letter]";
    let slot = parse_number(tokens.get(1), usage)?;
    let square = parse_number(tokens.get(2), usage)?;
    let letter = match tokens.get(3) {
        None => None,
        Some(tok) => {
            let mut chars = tok.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => return Err(format!("Letter must be a single character: {usage}")),
            }
        }
    };
    Ok((slot, square, letter))
}

fn parse_number(token: Option<&&str>, usage: &str) -> Result<usize, String> {
    let token = token.ok_or_else(|| format!("Missing argument: {usage}"))?;
    let n: usize = token
        .parse()
        .map_err(|_| format!("'{token}' is not a number: {usage}"))?;
    if n == 0 {
        return Err(format!("Numbers start at 1: {usage}"));
    }
    Ok(n)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
