//! Letter distribution: how many of each tile the bag holds, and at what value
//!
//! The on-disk shape matches the original `pieces.json` resource:
//! `{"pieces": [{"letter": "A", "value": 1, "amount": 9}, ...]}` with `"_"`
//! for the blank. [`Distribution::standard`] is the built-in English table
//! used when no file can be loaded.

use crate::core::Face;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One distribution entry: a face, its point value, and how many copies exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub face: Face,
    pub value: u32,
    pub amount: u32,
}

/// A validated letter distribution
///
/// Entries are kept in a fixed order (letters A-Z, blank last) so bag
/// construction is deterministic for a seeded game.
#[derive(Debug, Clone)]
pub struct Distribution {
    pieces: Vec<Piece>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    pieces: Vec<RawPiece>,
}

#[derive(Debug, Deserialize)]
struct RawPiece {
    letter: String,
    value: u32,
    amount: u32,
}

/// The standard English table: 98 letter tiles plus 2 blanks
const STANDARD: &[(char, u32, u32)] = &[
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
];

impl Distribution {
    /// The built-in English distribution (the original's fallback table)
    #[must_use]
    pub fn standard() -> Self {
        let mut pieces: Vec<Piece> = STANDARD
            .iter()
            .map(|&(letter, value, amount)| Piece {
                face: Face::Letter(letter),
                value,
                amount,
            })
            .collect();
        pieces.push(Piece {
            face: Face::Blank,
            value: 0,
            amount: 2,
        });
        Self { pieces }
    }

    /// Build a distribution from explicit entries, validating them
    ///
    /// # Errors
    /// Returns a message if an entry's letter code is invalid or duplicated.
    pub fn from_pieces(entries: Vec<Piece>) -> Result<Self, String> {
        let mut pieces = entries;
        pieces.sort_by_key(|p| sort_key(p.face));
        for pair in pieces.windows(2) {
            if pair[0].face == pair[1].face {
                return Err(format!("Duplicate distribution entry for '{}'", pair[0].face));
            }
        }
        Ok(Self { pieces })
    }

    /// Load a distribution from a `pieces.json`-shaped file
    ///
    /// # Errors
    /// Returns a message if the file cannot be read, is not valid JSON, or
    /// contains an invalid or duplicated letter code.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let data =
            fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
        let raw: RawFile =
            serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;

        if raw.pieces.is_empty() {
            return Err("No pieces in JSON".to_string());
        }

        let mut entries = Vec::with_capacity(raw.pieces.len());
        for p in raw.pieces {
            let face = Face::from_code(&p.letter).map_err(|e| e.to_string())?;
            entries.push(Piece {
                face,
                value: p.value,
                amount: p.amount,
            });
        }
        Self::from_pieces(entries)
    }

    /// Entries in deterministic order
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Total number of tiles the full bag holds
    #[must_use]
    pub fn total_tiles(&self) -> u32 {
        self.pieces.iter().map(|p| p.amount).sum()
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::standard()
    }
}

#[inline]
fn sort_key(face: Face) -> u32 {
    match face {
        Face::Letter(c) => c as u32,
        // Blank sorts after every letter
        Face::Blank => u32::MAX,
    }
}
