//! Formatting utilities for terminal output

use crate::core::Tile;
use crate::engine::WordState;

/// Text for a tile's face as it reads on the board
///
/// Blanks render their assigned letter in lowercase (the usual notation for
/// a played blank), or `_` while unassigned.
#[must_use]
pub fn tile_text(tile: Tile, assigned: Option<char>) -> String {
    match (tile.face().letter(), assigned) {
        (Some(letter), _) => letter.to_string(),
        (None, Some(letter)) => letter.to_ascii_lowercase().to_string(),
        (None, None) => "_".to_string(),
    }
}

/// One rack entry, slot-numbered for the command grammar
#[must_use]
pub fn rack_entry(slot: usize, tile: Tile) -> String {
    format!("{slot}:{}({})", tile.face(), tile.value())
}

/// The word line shown under the board
#[must_use]
pub fn word_line(state: &WordState) -> String {
    match state {
        WordState::Empty => "---".to_string(),
        WordState::Gapped => "Invalid - gap in word!".to_string(),
        WordState::Word(word) => word.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Face;

    #[test]
    fn tile_text_regular_letter() {
        let tile = Tile::new(Face::Letter('K'), 5);
        assert_eq!(tile_text(tile, None), "K");
    }

    #[test]
    fn tile_text_blank_reads_lowercase() {
        let blank = Tile::new(Face::Blank, 0);
        assert_eq!(tile_text(blank, Some('Q')), "q");
        assert_eq!(tile_text(blank, None), "_");
    }

    #[test]
    fn rack_entry_includes_slot_and_value() {
        assert_eq!(rack_entry(1, Tile::new(Face::Letter('Q'), 10)), "1:Q(10)");
        assert_eq!(rack_entry(7, Tile::new(Face::Blank, 0)), "7:_(0)");
    }

    #[test]
    fn word_line_states() {
        assert_eq!(word_line(&WordState::Empty), "---");
        assert_eq!(word_line(&WordState::Gapped), "Invalid - gap in word!");
        assert_eq!(
            word_line(&WordState::Word("CAT".to_string())),
            "CAT"
        );
    }
}
