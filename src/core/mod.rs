//! Core domain types for the tile game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear invariants.

mod square;
mod tile;

pub use square::{BOARD_LEN, Bonus, STANDARD_LAYOUT};
pub use tile::{Face, Tile, TileError, TileId};
