//! Letter tile representation
//!
//! A Tile pairs a face (a fixed letter or the blank) with a point value.
//! Faces are immutable once drawn; a blank's chosen letter lives on its
//! board placement, not on the tile itself.

use std::fmt;

/// The printed face of a tile: a fixed letter or the blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// A fixed letter, always `'A'..='Z'`
    Letter(char),
    /// The blank (wildcard) tile, written `_` in distribution data
    Blank,
}

/// Error type for invalid tile data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    InvalidCode(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(code) => {
                write!(f, "Tile code must be a single letter A-Z or '_', got {code:?}")
            }
        }
    }
}

impl std::error::Error for TileError {}

impl Face {
    /// Parse a face from a distribution-table code
    ///
    /// Accepts a single ASCII letter (normalized to uppercase) or `_` for
    /// the blank.
    ///
    /// # Errors
    /// Returns `TileError::InvalidCode` for anything else.
    ///
    /// # Examples
    /// ```
    /// use rackline::core::Face;
    ///
    /// assert_eq!(Face::from_code("a").unwrap(), Face::Letter('A'));
    /// assert_eq!(Face::from_code("_").unwrap(), Face::Blank);
    /// assert!(Face::from_code("AB").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, TileError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some('_'), None) => Ok(Self::Blank),
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Self::Letter(c.to_ascii_uppercase()))
            }
            _ => Err(TileError::InvalidCode(code.to_string())),
        }
    }

    /// The fixed letter, or None for the blank
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            Self::Blank => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Blank => write!(f, "_"),
        }
    }
}

/// Stable identity of a tile within one game
///
/// Ids index the game's tile store; the bag, the rack, the board and the
/// committed pile all refer to tiles by id, so a tile is in exactly one
/// place at a time and none is ever created or destroyed mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub(crate) usize);

impl TileId {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// A letter tile: face plus point value
///
/// Immutable once drawn. Blanks carry value 0 regardless of the letter
/// they are later assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    face: Face,
    value: u32,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn new(face: Face, value: u32) -> Self {
        Self { face, value }
    }

    #[inline]
    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// Base point value before any square bonus
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.face.is_blank()
    }
}
