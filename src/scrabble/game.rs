use log::{info, trace};
use rand::RngCore;

use super::bag::Bag;
use super::rack::Rack;
use super::search::find_best_word;
use crate::error::Result;
use crate::trie::Trie;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrabbleResult {
    /// Words in the order they were played
    pub words: Vec<String>,
    pub score: u32,
}

/// Single player "best word from hand" game over a depleting bag
pub struct ScrabbleGame<'a> {
    vocab: &'a Trie,
    bag: Bag,
    rack: Rack,
}

impl<'a> ScrabbleGame<'a> {
    pub fn new(vocab: &'a Trie, bag: Bag) -> Self {
        Self {
            vocab,
            bag,
            rack: Rack::empty(),
        }
    }

    /// Starts from a rack that was already dealt
    pub fn with_rack(vocab: &'a Trie, bag: Bag, rack: Rack) -> Self {
        Self { vocab, bag, rack }
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Tops the rack back up to seven tiles, as far as the bag allows. Tiles the
    /// rack refuses go back into the bag along with the rest of the draw
    fn refill(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        let tiles = self.bag.draw_tiles(self.rack.space(), rng);
        for (i, &tile) in tiles.iter().enumerate() {
            if let Err(e) = self.rack.add(tile) {
                self.bag.put_back(&tiles[i..]);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Plays rounds until the current rack can no longer form a word. A round that
    /// fails ends the game, there is no passing or exchanging tiles
    pub fn play(&mut self, rng: &mut dyn RngCore) -> Result<ScrabbleResult> {
        let mut result = ScrabbleResult::default();
        loop {
            self.refill(rng)?;
            let best = find_best_word(&self.rack, self.vocab, "");
            if best.is_empty() {
                break;
            }

            for c in best.word.chars() {
                self.rack.remove(c);
            }
            trace!(
                "played {:?} for {}, rack now {}",
                best.word,
                best.score,
                self.rack
            );
            result.score += best.score;
            result.words.push(best.word);
        }

        info!(
            "game over after {} words, score {} ({} tiles left in the bag, rack {})",
            result.words.len(),
            result.score,
            self.bag.len(),
            self.rack
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_no_word_possible() {
        let trie = Trie::from_words(["cat"]);
        let mut rng = StdRng::seed_from_u64(1);
        let bag = Bag::with_order(&['x', 'y', 'z', 'q', 'x', 'y', 'z', 'q', 'v']);
        let mut game = ScrabbleGame::new(&trie, bag);
        let result = game.play(&mut rng).unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.score, 0);
        assert_eq!(game.rack().len(), 7);
        assert_eq!(game.bag().len(), 2);
    }

    #[test]
    fn test_depletion_stops_after_last_word() {
        let trie = Trie::from_words(["cat", "at"]);
        let mut rng = StdRng::seed_from_u64(1);
        let order: Vec<char> = "catxxxxat".chars().collect();
        let mut game = ScrabbleGame::new(&trie, Bag::with_order(&order));
        let result = game.play(&mut rng).unwrap();

        // cat from the first seven tiles, then the refill brings "at"
        assert_eq!(result.words, vec!["cat".to_string(), "at".to_string()]);
        assert_eq!(result.score, 5 + 2);
        assert!(game.bag().is_empty());
        assert_eq!(game.rack().to_string(), "xxxx");
    }

    #[test]
    fn test_dealt_rack_plays_first() {
        let trie = Trie::from_words(["zoo", "to"]);
        let mut rng = StdRng::seed_from_u64(1);
        let rack = Rack::from_letters("zoo".chars()).unwrap();
        let mut game = ScrabbleGame::with_rack(&trie, Bag::with_order(&['t', 'o', 'q']), rack);
        let result = game.play(&mut rng).unwrap();

        assert_eq!(result.words, vec!["zoo".to_string(), "to".to_string()]);
        assert_eq!(result.score, 12 + 2);
        assert!(game.bag().is_empty());
        assert_eq!(game.rack().to_string(), "q");
    }

    #[test]
    fn test_bad_tile_goes_back_to_bag() {
        let trie = Trie::from_words(["cat"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = ScrabbleGame::new(&trie, Bag::with_order(&['c', 'a', '?', 't', 's']));
        assert!(matches!(
            game.play(&mut rng),
            Err(crate::error::Error::InvalidLetter('?'))
        ));
        assert_eq!(game.rack().to_string(), "ac");
        assert_eq!(game.bag().distribution, vec!['?', 't', 's']);
    }

    #[test]
    fn test_full_random_game() {
        let trie = Trie::from_words([
            "a", "at", "it", "in", "on", "no", "to", "tea", "eat", "ten", "net", "one", "tone",
            "note", "rate", "tire", "rites", "stone", "notes", "onset",
        ]);
        let mut rng = StdRng::seed_from_u64(9);
        let bag = Bag::shuffled(&mut rng);
        let mut game = ScrabbleGame::new(&trie, bag);
        let result = game.play(&mut rng).unwrap();

        let total: u32 = result
            .words
            .iter()
            .map(|w| crate::scoring::word_points(w))
            .sum();
        assert_eq!(total, result.score);
        assert!(result.words.iter().all(|w| trie.contains(w)));
    }
}
