//! Single-line Scrabble
//!
//! A one-row Scrabble variant: draw seven tiles, build a contiguous word
//! across 15 bonus squares, and submit it against a dictionary. The engine
//! is headless; the TUI and CLI front-ends only translate gestures into
//! engine calls and re-render from the resulting state.
//!
//! # Quick Start
//!
//! ```rust
//! use rackline::engine::Game;
//! use rackline::resources::{Dictionary, Distribution};
//!
//! let mut game = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 7);
//!
//! // Tiles are addressed by id; the rack holds up to seven of them.
//! let tile = game.rack()[0];
//! if game.place(tile, 7).is_ok() {
//!     println!("word so far: {:?}", game.current_word());
//! }
//! ```

// Core domain types
pub mod core;

// The tile-rack engine
pub mod engine;

// Distribution and dictionary resources
pub mod resources;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
