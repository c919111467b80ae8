//! Game state machine: rack, bag, board, scores
//!
//! A [`Game`] owns every tile for its lifetime. Tiles move between the bag,
//! the rack, the board and the committed pile, and nothing else; the sum of
//! those four pools is constant, so no tile is ever created or destroyed
//! mid-game.

use crate::core::{STANDARD_LAYOUT, Tile, TileId};
use crate::engine::{Bag, Board, PlayError, WordState};
use crate::resources::{Dictionary, Distribution};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Maximum number of tiles on the rack
pub const RACK_CAPACITY: usize = 7;

/// A successfully submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub word: String,
    pub points: u32,
}

/// The single-line Scrabble engine
pub struct Game {
    tiles: Vec<Tile>,
    bag: Bag,
    rack: Vec<TileId>,
    board: Board,
    committed: Vec<TileId>,
    total_score: u32,
    dictionary: Dictionary,
    distribution: Distribution,
    rng: StdRng,
}

impl Game {
    /// Start a game with a random shuffle
    #[must_use]
    pub fn new(distribution: Distribution, dictionary: Dictionary) -> Self {
        Self::with_seed(distribution, dictionary, rand::random())
    }

    /// Start a reproducible game from a seed
    #[must_use]
    pub fn with_seed(distribution: Distribution, dictionary: Dictionary, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let (tiles, mut bag) = Bag::build(&distribution, &mut rng);
        let rack = bag.draw(RACK_CAPACITY);
        Self {
            tiles,
            bag,
            rack,
            board: Board::new(STANDARD_LAYOUT),
            committed: Vec::new(),
            total_score: 0,
            dictionary,
            distribution,
            rng,
        }
    }

    /// Place a rack tile, or move a tile already on the board
    ///
    /// # Errors
    /// `WildcardNeedsLetter` when the tile is a blank still on the rack;
    /// use [`Game::place_wildcard`] for those. Otherwise the occupancy and
    /// adjacency errors from the board, or `TileUnavailable` if the tile is
    /// neither on the rack nor on the board.
    pub fn place(&mut self, tile: TileId, square: usize) -> Result<(), PlayError> {
        let on_board = self.board.position_of(tile).is_some();
        if !on_board && !self.rack.contains(&tile) {
            return Err(PlayError::TileUnavailable);
        }
        if !on_board && self.tile(tile).is_blank() {
            return Err(PlayError::WildcardNeedsLetter);
        }
        self.board.place(tile, None, square)?;
        self.take_from_rack(tile);
        Ok(())
    }

    /// Place a blank from the rack with its chosen letter
    ///
    /// The letter is assigned only if the placement succeeds.
    ///
    /// # Errors
    /// `NotAWildcard` for a regular tile, `InvalidLetter` for a letter
    /// outside A-Z, `TileUnavailable` for a tile not on the rack, plus the
    /// board's occupancy and adjacency errors.
    pub fn place_wildcard(
        &mut self,
        tile: TileId,
        square: usize,
        letter: char,
    ) -> Result<(), PlayError> {
        if !self.rack.contains(&tile) {
            return Err(PlayError::TileUnavailable);
        }
        let letter = self.check_wildcard(tile, letter)?;
        self.board.place(tile, Some(letter), square)?;
        self.take_from_rack(tile);
        Ok(())
    }

    /// Insert a rack tile at `square`, shifting the tiles to its right
    ///
    /// A failed insertion leaves the line untouched and the tile on the rack.
    ///
    /// # Errors
    /// `NoRoom` when the shift would run off the board, `TileUnavailable`
    /// for a tile that is not on the rack, `WildcardNeedsLetter` for an
    /// unassigned blank, plus the board's range/adjacency errors.
    pub fn insert(&mut self, tile: TileId, square: usize) -> Result<(), PlayError> {
        if !self.rack.contains(&tile) {
            return Err(PlayError::TileUnavailable);
        }
        if self.tile(tile).is_blank() {
            return Err(PlayError::WildcardNeedsLetter);
        }
        self.board.insert(tile, None, square)?;
        self.take_from_rack(tile);
        Ok(())
    }

    /// Insert a blank from the rack with its chosen letter
    ///
    /// # Errors
    /// As [`Game::insert`], plus `NotAWildcard` and `InvalidLetter`.
    pub fn insert_wildcard(
        &mut self,
        tile: TileId,
        square: usize,
        letter: char,
    ) -> Result<(), PlayError> {
        if !self.rack.contains(&tile) {
            return Err(PlayError::TileUnavailable);
        }
        let letter = self.check_wildcard(tile, letter)?;
        self.board.insert(tile, Some(letter), square)?;
        self.take_from_rack(tile);
        Ok(())
    }

    /// Return a placed tile to the rack; no-op if it is not on the board
    ///
    /// A blank loses its assigned letter here.
    pub fn remove(&mut self, tile: TileId) {
        if self.board.remove(tile).is_some() {
            self.rack.push(tile);
        }
    }

    /// Submit the current word
    ///
    /// On success the points join the total, the board empties into the
    /// committed pile, and the rack refills up to [`RACK_CAPACITY`] (fewer
    /// when the bag is short).
    ///
    /// # Errors
    /// `EmptyPlay`, `GappedWord`, or `InvalidWord`; the board keeps its
    /// tiles and no score changes on any of them.
    pub fn commit(&mut self) -> Result<Commit, PlayError> {
        let word = match self.board.word(&self.tiles) {
            WordState::Empty => return Err(PlayError::EmptyPlay),
            WordState::Gapped => return Err(PlayError::GappedWord),
            WordState::Word(word) => word,
        };
        if !self.dictionary.contains(&word) {
            return Err(PlayError::InvalidWord(word));
        }

        let points = self.board.score(&self.tiles);
        self.total_score += points;
        self.committed.extend(self.board.clear());

        let need = RACK_CAPACITY - self.rack.len();
        self.rack.extend(self.bag.draw(need));

        Ok(Commit { word, points })
    }

    /// Return every placed tile to the rack
    ///
    /// Always succeeds; calling it on an empty board is a no-op.
    pub fn recall(&mut self) {
        let recalled = self.board.clear();
        self.rack.extend(recalled);
    }

    /// Exchange the whole rack for fresh tiles
    ///
    /// Draws the new rack first, then returns the old tiles to the bag and
    /// reshuffles, topping up if the bag ran short mid-exchange. Every tile
    /// stays accounted for.
    ///
    /// # Errors
    /// `TilesInPlay` while anything is on the board.
    pub fn new_tiles(&mut self) -> Result<(), PlayError> {
        if !self.board.is_empty() {
            return Err(PlayError::TilesInPlay);
        }

        let old = std::mem::take(&mut self.rack);
        self.rack = self.bag.draw(RACK_CAPACITY);
        self.bag.return_tiles(old, &mut self.rng);
        if self.rack.len() < RACK_CAPACITY {
            let need = RACK_CAPACITY - self.rack.len();
            self.rack.extend(self.bag.draw(need));
        }
        Ok(())
    }

    /// Discard everything and start over from the distribution
    pub fn reset(&mut self) {
        let (tiles, mut bag) = Bag::build(&self.distribution, &mut self.rng);
        self.tiles = tiles;
        self.rack = bag.draw(RACK_CAPACITY);
        self.bag = bag;
        self.board = Board::new(STANDARD_LAYOUT);
        self.committed.clear();
        self.total_score = 0;
    }

    /// Look up a tile by id
    ///
    /// Ids are only ever issued by this game, so the lookup cannot miss.
    #[inline]
    #[must_use]
    pub fn tile(&self, id: TileId) -> Tile {
        self.tiles[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn rack(&self) -> &[TileId] {
        &self.rack
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The word currently on the board
    #[must_use]
    pub fn current_word(&self) -> WordState {
        self.board.word(&self.tiles)
    }

    /// Score of the current placements, bonuses included
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.board.score(&self.tiles)
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[inline]
    #[must_use]
    pub fn bag_remaining(&self) -> usize {
        self.bag.len()
    }

    #[inline]
    #[must_use]
    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Total tiles the game was built with
    #[inline]
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    fn take_from_rack(&mut self, tile: TileId) {
        if let Some(pos) = self.rack.iter().position(|&t| t == tile) {
            self.rack.remove(pos);
        }
    }

    fn check_wildcard(&self, tile: TileId, letter: char) -> Result<char, PlayError> {
        if !self.tile(tile).is_blank() {
            return Err(PlayError::NotAWildcard);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(PlayError::InvalidLetter(letter));
        }
        Ok(letter.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Face;
    use crate::resources::Piece;

    fn small_game(letters: &[(char, u32, u32)], words: &[&str]) -> Game {
        let pieces = letters
            .iter()
            .map(|&(c, value, amount)| Piece {
                face: if c == '_' { Face::Blank } else { Face::Letter(c) },
                value,
                amount,
            })
            .collect();
        let distribution = Distribution::from_pieces(pieces).unwrap();
        Game::with_seed(distribution, Dictionary::from_words(words.iter()), 1)
    }

    /// Rack tile with the given face letter
    fn rack_tile(game: &Game, letter: char) -> TileId {
        *game
            .rack()
            .iter()
            .find(|&&id| game.tile(id).face() == Face::Letter(letter))
            .unwrap()
    }

    fn rack_blank(game: &Game) -> TileId {
        *game
            .rack()
            .iter()
            .find(|&&id| game.tile(id).is_blank())
            .unwrap()
    }

    fn conserved(game: &Game) -> bool {
        game.bag_remaining()
            + game.rack().len()
            + game.board().placed_count()
            + game.committed_count()
            == game.tile_count()
    }

    #[test]
    fn new_game_deals_a_full_rack() {
        let game = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 1);
        assert_eq!(game.rack().len(), RACK_CAPACITY);
        assert_eq!(game.bag_remaining(), 100 - RACK_CAPACITY);
        assert!(conserved(&game));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 17);
        let b = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 17);
        let faces = |g: &Game| {
            g.rack()
                .iter()
                .map(|&id| g.tile(id).face())
                .collect::<Vec<_>>()
        };
        assert_eq!(faces(&a), faces(&b));
    }

    #[test]
    fn place_and_read_a_word() {
        let mut game = small_game(&[('C', 3, 1), ('A', 1, 1), ('T', 1, 1)], &["CAT"]);
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();

        assert_eq!(game.current_word(), WordState::Word("CAT".to_string()));
        // A sits on the double-letter square at 6: 3 + 2 + 1
        assert_eq!(game.current_score(), 6);
        assert!(conserved(&game));
    }

    #[test]
    fn commit_accumulates_and_refills() {
        let mut game = small_game(
            &[('C', 3, 1), ('A', 1, 1), ('T', 1, 1), ('E', 1, 4)],
            &["CAT"],
        );
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();

        let commit = game.commit().unwrap();
        assert_eq!(commit.word, "CAT");
        assert_eq!(commit.points, 6);
        assert_eq!(game.total_score(), 6);
        assert!(game.board().is_empty());
        assert_eq!(game.committed_count(), 3);
        // All 7 tiles started on the rack, so the refill has nothing to draw
        assert_eq!(game.rack().len(), 4);
        assert_eq!(game.bag_remaining(), 0);
        assert!(conserved(&game));
    }

    #[test]
    fn commit_rejects_unknown_word_and_keeps_the_board() {
        let mut game = small_game(&[('C', 3, 1), ('A', 1, 1), ('T', 1, 1)], &["DOG"]);
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();

        assert_eq!(
            game.commit(),
            Err(PlayError::InvalidWord("CAT".to_string()))
        );
        assert_eq!(game.total_score(), 0);
        assert_eq!(game.board().placed_count(), 3);
        assert!(conserved(&game));
    }

    #[test]
    fn commit_rejects_empty_and_gapped_plays() {
        let mut game = small_game(&[('C', 3, 1), ('A', 1, 1), ('T', 1, 1)], &["CAT", "CT"]);
        assert_eq!(game.commit(), Err(PlayError::EmptyPlay));

        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();
        let a = game.board().get(6).unwrap().tile;
        game.remove(a);

        // {5: C, 7: T} never reads as "CT"
        assert_eq!(game.commit(), Err(PlayError::GappedWord));
    }

    #[test]
    fn recall_is_idempotent() {
        let mut game = small_game(&[('C', 3, 1), ('A', 1, 1), ('T', 1, 1)], &["CAT"]);
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();

        game.recall();
        assert!(game.board().is_empty());
        assert_eq!(game.rack().len(), 3);
        assert_eq!(game.current_score(), 0);

        game.recall();
        assert!(game.board().is_empty());
        assert_eq!(game.rack().len(), 3);
        assert!(conserved(&game));
    }

    #[test]
    fn wildcard_needs_a_letter_to_leave_the_rack() {
        let mut game = small_game(&[('C', 3, 1), ('_', 0, 1)], &["CO"]);
        let blank = rack_blank(&game);

        assert_eq!(game.place(blank, 5), Err(PlayError::WildcardNeedsLetter));
        assert!(game.rack().contains(&blank));

        game.place_wildcard(blank, 5, 'o').unwrap();
        assert_eq!(game.board().get(5).unwrap().assigned, Some('O'));
        assert_eq!(game.current_word(), WordState::Word("O".to_string()));
    }

    #[test]
    fn wildcard_letter_clears_on_recall() {
        let mut game = small_game(&[('_', 0, 1)], &[]);
        let blank = rack_blank(&game);
        game.place_wildcard(blank, 5, 'Q').unwrap();

        game.recall();
        assert!(game.rack().contains(&blank));
        // Back on the board it needs a fresh letter
        assert_eq!(game.place(blank, 5), Err(PlayError::WildcardNeedsLetter));
    }

    #[test]
    fn wildcard_guards() {
        let mut game = small_game(&[('C', 3, 1), ('_', 0, 1)], &[]);
        let c = rack_tile(&game, 'C');
        let blank = rack_blank(&game);

        assert_eq!(
            game.place_wildcard(c, 5, 'A'),
            Err(PlayError::NotAWildcard)
        );
        assert_eq!(
            game.place_wildcard(blank, 5, '3'),
            Err(PlayError::InvalidLetter('3'))
        );
        assert!(game.board().is_empty());
    }

    #[test]
    fn insert_builds_a_longer_word() {
        let mut game = small_game(
            &[('C', 3, 1), ('A', 1, 1), ('T', 1, 1), ('O', 1, 1)],
            &["CAT", "COAT"],
        );
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();

        game.insert(rack_tile(&game, 'O'), 6).unwrap();
        assert_eq!(game.current_word(), WordState::Word("COAT".to_string()));
        assert!(conserved(&game));
    }

    #[test]
    fn failed_insert_leaves_the_tile_on_the_rack() {
        let mut game = small_game(&[('A', 1, 2), ('B', 3, 1)], &[]);
        game.place(rack_tile(&game, 'B'), 13).unwrap();
        let a = rack_tile(&game, 'A');
        game.place(a, 14).unwrap();

        let other = rack_tile(&game, 'A');
        assert_eq!(game.insert(other, 13), Err(PlayError::NoRoom));
        assert!(game.rack().contains(&other));
        assert_eq!(game.board().placed_count(), 2);
        assert!(conserved(&game));
    }

    #[test]
    fn insert_rejects_tiles_not_on_the_rack() {
        let mut game = small_game(&[('C', 3, 1), ('A', 1, 1)], &[]);
        let c = rack_tile(&game, 'C');
        game.place(c, 5).unwrap();

        assert_eq!(game.insert(c, 6), Err(PlayError::TileUnavailable));
    }

    #[test]
    fn new_tiles_requires_an_empty_board() {
        let mut game = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 5);
        let first = game.rack()[0];
        game.place(first, 5).unwrap_or_else(|_| {
            // First rack tile happened to be a blank
            game.place_wildcard(first, 5, 'A').unwrap();
        });

        assert_eq!(game.new_tiles(), Err(PlayError::TilesInPlay));
        game.recall();
        assert!(game.new_tiles().is_ok());
        assert_eq!(game.rack().len(), RACK_CAPACITY);
        assert!(conserved(&game));
    }

    #[test]
    fn new_tiles_with_a_short_bag_still_fills_from_the_exchange() {
        // 8 tiles: rack holds 7, bag holds 1
        let mut game = small_game(&[('A', 1, 8)], &[]);
        assert_eq!(game.bag_remaining(), 1);

        game.new_tiles().unwrap();
        assert_eq!(game.rack().len(), RACK_CAPACITY);
        assert_eq!(game.bag_remaining(), 1);
        assert!(conserved(&game));
    }

    #[test]
    fn reset_rebuilds_everything() {
        let mut game = small_game(
            &[('C', 3, 1), ('A', 1, 1), ('T', 1, 1), ('E', 1, 4)],
            &["CAT"],
        );
        game.place(rack_tile(&game, 'C'), 5).unwrap();
        game.place(rack_tile(&game, 'A'), 6).unwrap();
        game.place(rack_tile(&game, 'T'), 7).unwrap();
        game.commit().unwrap();
        assert_eq!(game.total_score(), 6);

        game.reset();
        assert_eq!(game.total_score(), 0);
        assert!(game.board().is_empty());
        assert_eq!(game.committed_count(), 0);
        assert_eq!(game.rack().len(), RACK_CAPACITY);
        assert_eq!(game.bag_remaining(), 0);
        assert!(conserved(&game));
    }

    #[test]
    fn conservation_holds_across_a_whole_exchange_heavy_session() {
        let mut game = Game::with_seed(Distribution::standard(), Dictionary::fallback(), 11);
        for _ in 0..5 {
            game.new_tiles().unwrap();
            assert!(conserved(&game));
        }
        assert_eq!(game.rack().len(), RACK_CAPACITY);
    }
}
