//! Bonus squares and the board layout
//!
//! The board is a single row of [`BOARD_LEN`] squares. Each square carries a
//! bonus kind fixed at construction; the shipped layout uses only normal,
//! double-letter and double-word squares, but the model supports all four
//! bonus kinds.

/// Number of squares on the board
pub const BOARD_LEN: usize = 15;

/// Bonus kind of a board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bonus {
    #[default]
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Bonus {
    /// Multiplier applied to a single tile's value on this square
    #[inline]
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Self::DoubleLetter => 2,
            Self::TripleLetter => 3,
            Self::Normal | Self::DoubleWord | Self::TripleWord => 1,
        }
    }

    /// Multiplier this square contributes to the whole word
    #[inline]
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Self::DoubleWord => 2,
            Self::TripleWord => 3,
            Self::Normal | Self::DoubleLetter | Self::TripleLetter => 1,
        }
    }

    /// Two-character label for rendering empty squares
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "  ",
            Self::DoubleLetter => "DL",
            Self::TripleLetter => "TL",
            Self::DoubleWord => "DW",
            Self::TripleWord => "TW",
        }
    }
}

/// The shipped board layout: double-word at 2 and 12, double-letter at 6 and 8
pub const STANDARD_LAYOUT: [Bonus; BOARD_LEN] = [
    Bonus::Normal,
    Bonus::Normal,
    Bonus::DoubleWord,
    Bonus::Normal,
    Bonus::Normal,
    Bonus::Normal,
    Bonus::DoubleLetter,
    Bonus::Normal,
    Bonus::DoubleLetter,
    Bonus::Normal,
    Bonus::Normal,
    Bonus::Normal,
    Bonus::DoubleWord,
    Bonus::Normal,
    Bonus::Normal,
];
