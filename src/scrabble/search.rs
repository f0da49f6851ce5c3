use log::debug;

use super::rack::Rack;
use crate::scoring;
use crate::trie::{Trie, TrieCursor};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestWord {
    pub word: String,
    pub score: u32,
}

impl BestWord {
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

pub fn find_best_word(rack: &Rack, trie: &Trie, anchor: &str) -> BestWord {
    find_best_word_up_to(rack, trie, anchor, Rack::MAX_TILES)
}

/// Finds the highest scoring word made of `anchor` followed by at most `max`
/// letters of the rack. The first word found wins ties
pub fn find_best_word_up_to(rack: &Rack, trie: &Trie, anchor: &str, max: usize) -> BestWord {
    let mut best = BestWord::default();
    let prefix = match trie.find(anchor) {
        Some(p) => p,
        None => return best,
    };

    let mut letters = rack.histogram();
    let mut word = String::from(anchor);
    for k in 0..=rack.len().min(max) {
        permute(prefix, &mut letters, &mut word, k, &mut best);
    }

    debug!(
        "best word for rack {} after {:?}: {:?} ({})",
        rack, anchor, best.word, best.score
    );
    best
}

/// Places exactly `k` more rack letters on top of `word`
fn permute(
    prefix: TrieCursor,
    letters: &mut [u8; 26],
    word: &mut String,
    k: usize,
    best: &mut BestWord,
) {
    if k == 0 {
        if prefix.is_terminal() {
            let score = scoring::word_points(word.as_str());
            if score > best.score {
                best.word = word.clone();
                best.score = score;
            }
        }
        return;
    }

    for i in 0..letters.len() {
        if letters[i] == 0 {
            continue;
        }
        let letter = (b'a' + i as u8) as char;
        if let Some(next) = prefix.next(letter) {
            letters[i] -= 1;
            word.push(letter);

            permute(next, letters, word, k - 1, best);

            word.pop();
            letters[i] += 1;
        }
    }
}
