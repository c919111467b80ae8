//! Tile bag: distribution expansion, shuffle, draws
//!
//! [`Bag::build`] also creates the game's tile store, a dense `Vec<Tile>`
//! addressed by [`TileId`]; the bag itself only holds ids. Draws come off the
//! end and never error: an exhausted bag just yields fewer tiles.

use crate::core::{Tile, TileId};
use crate::resources::Distribution;
use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled multiset of undrawn tiles
#[derive(Debug, Clone, Default)]
pub struct Bag {
    tiles: Vec<TileId>,
}

impl Bag {
    /// Expand a distribution into the tile store and a full shuffled bag
    ///
    /// Every `(face, value)` entry appears exactly `amount` times. The
    /// shuffle is `rand`'s Fisher-Yates, so a seeded rng gives a
    /// reproducible bag order.
    pub fn build<R: Rng>(distribution: &Distribution, rng: &mut R) -> (Vec<Tile>, Self) {
        let mut store = Vec::with_capacity(distribution.total_tiles() as usize);
        for piece in distribution.pieces() {
            for _ in 0..piece.amount {
                store.push(Tile::new(piece.face, piece.value));
            }
        }

        let mut tiles: Vec<TileId> = (0..store.len()).map(TileId).collect();
        tiles.shuffle(rng);

        (store, Self { tiles })
    }

    /// Remove and return up to `n` tiles from the end of the bag
    ///
    /// Returns fewer when the bag runs dry; never errors.
    pub fn draw(&mut self, n: usize) -> Vec<TileId> {
        let take = n.min(self.tiles.len());
        self.tiles.split_off(self.tiles.len() - take)
    }

    /// Put exchanged tiles back and reshuffle
    pub fn return_tiles<R, I>(&mut self, tiles: I, rng: &mut R)
    where
        R: Rng,
        I: IntoIterator<Item = TileId>,
    {
        self.tiles.extend(tiles);
        self.tiles.shuffle(rng);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Face;
    use crate::resources::Piece;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashMap;

    fn counts(store: &[Tile], ids: &[TileId]) -> FxHashMap<(Face, u32), u32> {
        let mut map = FxHashMap::default();
        for id in ids {
            let tile = store[id.index()];
            *map.entry((tile.face(), tile.value())).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn build_expands_the_full_distribution() {
        let dist = Distribution::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let (store, bag) = Bag::build(&dist, &mut rng);

        assert_eq!(store.len(), 100);
        assert_eq!(bag.len(), 100);
    }

    #[test]
    fn build_multiset_matches_distribution_regardless_of_order() {
        let dist = Distribution::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let (store, mut bag) = Bag::build(&dist, &mut rng);

        let drawn = bag.draw(100);
        let seen = counts(&store, &drawn);

        for piece in dist.pieces() {
            assert_eq!(
                seen.get(&(piece.face, piece.value)).copied(),
                Some(piece.amount),
                "wrong count for {:?}",
                piece.face
            );
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let dist = Distribution::standard();
        let (_, mut a) = Bag::build(&dist, &mut StdRng::seed_from_u64(9));
        let (_, mut b) = Bag::build(&dist, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.draw(100), b.draw(100));
    }

    #[test]
    fn draw_returns_fewer_when_exhausted() {
        let dist = Distribution::from_pieces(vec![Piece {
            face: Face::Letter('A'),
            value: 1,
            amount: 3,
        }])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let (_, mut bag) = Bag::build(&dist, &mut rng);

        assert_eq!(bag.draw(2).len(), 2);
        assert_eq!(bag.draw(5).len(), 1);
        assert!(bag.is_empty());
        assert!(bag.draw(5).is_empty());
    }

    #[test]
    fn return_tiles_restores_the_pool() {
        let dist = Distribution::standard();
        let mut rng = StdRng::seed_from_u64(3);
        let (_, mut bag) = Bag::build(&dist, &mut rng);

        let drawn = bag.draw(7);
        assert_eq!(bag.len(), 93);
        bag.return_tiles(drawn, &mut rng);
        assert_eq!(bag.len(), 100);
    }
}
