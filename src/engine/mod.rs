//! The tile-rack engine
//!
//! Owns every game rule: bag construction and draws, the placement line with
//! its occupancy/adjacency checks, live word and score computation, and the
//! commit/recall state machine. Front-ends translate gestures into calls on
//! [`Game`] and re-render from its state; no rule lives outside this module.

mod bag;
mod board;
mod game;

pub use bag::Bag;
pub use board::{Board, Placement, WordState};
pub use game::{Commit, Game, RACK_CAPACITY};

use std::fmt;

/// A rejected move or submission
///
/// Every variant is a locally recoverable, player-facing condition. The
/// attempted mutation is rejected atomically: engine state after an error is
/// exactly what it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// Square index past the end of the board
    SquareOutOfRange(usize),
    /// Target square already holds a tile
    OccupiedSquare(usize),
    /// Placement is not adjacent to any tile already on the board
    AdjacencyViolation(usize),
    /// Insertion would shift a tile past the last square
    NoRoom,
    /// A blank tile needs a chosen letter before it can leave the rack
    WildcardNeedsLetter,
    /// Wildcard operation applied to a regular letter tile
    NotAWildcard,
    /// Chosen wildcard letter is not A-Z
    InvalidLetter(char),
    /// Tile is not on the rack or board (still bagged, or already played)
    TileUnavailable,
    /// Submission with nothing on the board
    EmptyPlay,
    /// Placed tiles do not form one contiguous word
    GappedWord,
    /// Word is not in the dictionary
    InvalidWord(String),
    /// Rack exchange attempted while tiles are on the board
    TilesInPlay,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SquareOutOfRange(idx) => write!(f, "Square {idx} is off the board"),
            Self::OccupiedSquare(idx) => write!(f, "Square {idx} is already occupied"),
            Self::AdjacencyViolation(_) => {
                write!(f, "Tiles must be placed adjacent to each other")
            }
            Self::NoRoom => write!(f, "No room to shift tiles to the right"),
            Self::WildcardNeedsLetter => {
                write!(f, "Choose a letter for the blank tile first")
            }
            Self::NotAWildcard => write!(f, "That tile is not a blank"),
            Self::InvalidLetter(c) => {
                write!(f, "Blank tiles take a letter A-Z, got {c:?}")
            }
            Self::TileUnavailable => write!(f, "That tile is not available to play"),
            Self::EmptyPlay => write!(f, "No word to submit"),
            Self::GappedWord => write!(f, "Tiles must form a single word with no gaps"),
            Self::InvalidWord(word) => write!(f, "\"{word}\" is not a valid word"),
            Self::TilesInPlay => {
                write!(f, "Submit or recall the tiles on the board first")
            }
        }
    }
}

impl std::error::Error for PlayError {}
