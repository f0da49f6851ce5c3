use rand::seq::SliceRandom;
use rand::RngCore;

use crate::grid::LetterBag;

/// Scrabble tile bag that empties as tiles are drawn
#[derive(Debug, Clone)]
pub struct Bag {
    random: bool,
    pub distribution: Vec<char>,
}

impl Bag {
    /// Full set of lettered tiles in random order
    pub fn shuffled(rng: &mut dyn RngCore) -> Bag {
        let mut distribution = LetterBag::scrabble().letters().to_vec();
        distribution.shuffle(rng);
        Bag {
            random: true,
            distribution,
        }
    }

    /// Bag whose tiles come out in exactly the given order
    pub fn with_order(order: &[char]) -> Bag {
        Bag {
            random: false,
            distribution: order.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }

    pub fn len(&self) -> usize {
        self.distribution.len()
    }

    /// Draws up to `n` tiles. Fewer come back when the bag runs low
    pub fn draw_tiles(&mut self, n: usize, rng: &mut dyn RngCore) -> Vec<char> {
        let n = n.min(self.distribution.len());
        if self.random {
            self.distribution.shuffle(rng);
        }
        self.distribution.drain(..n).collect()
    }

    /// Returns tiles to the top of the bag, so an ordered bag hands them out next
    pub fn put_back(&mut self, tiles: &[char]) {
        self.distribution.splice(0..0, tiles.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_draw_depletes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut bag = Bag::shuffled(&mut rng);
        assert_eq!(bag.len(), 98);
        let tiles = bag.draw_tiles(7, &mut rng);
        assert_eq!(tiles.len(), 7);
        assert_eq!(bag.len(), 91);

        let rest = bag.draw_tiles(200, &mut rng);
        assert_eq!(rest.len(), 91);
        assert!(bag.is_empty());
        assert!(bag.draw_tiles(7, &mut rng).is_empty());
    }

    #[test]
    fn test_fixed_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut bag = Bag::with_order(&['c', 'a', 't', 'z']);
        assert_eq!(bag.draw_tiles(3, &mut rng), vec!['c', 'a', 't']);
        assert_eq!(bag.draw_tiles(3, &mut rng), vec!['z']);

        bag.put_back(&['a', 't']);
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.draw_tiles(1, &mut rng), vec!['a']);
    }
}
