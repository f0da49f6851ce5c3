use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{DiceSet, Grid, KING_MOVES};
use crate::trie::Trie;

pub mod search;

pub use self::search::{find_all_words, find_words_with_min_length, score, WordCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardKind {
    /// 4x4 with the classic dice
    Regular,
    /// 5x5 Big Boggle
    Big,
}

impl BoardKind {
    pub fn size(&self) -> usize {
        match self {
            Self::Regular => 4,
            Self::Big => 5,
        }
    }

    pub fn dice(&self) -> DiceSet {
        match self {
            Self::Regular => DiceSet::boggle(),
            Self::Big => DiceSet::big_boggle(),
        }
    }
}

impl Default for BoardKind {
    fn default() -> Self {
        Self::Regular
    }
}

impl std::str::FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "big" => Ok(Self::Big),
            other => Err(format!("unknown board kind {:?}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoggleResult {
    pub words: WordCounts,
    pub score: u32,
}

impl BoggleResult {
    /// Number of word paths found, counting repeats
    pub fn total_words(&self) -> usize {
        self.words.values().sum()
    }

    /// Average number of paths per distinct word
    pub fn mean_multiplicity(&self) -> f64 {
        if self.words.is_empty() {
            0.0
        } else {
            self.total_words() as f64 / self.words.len() as f64
        }
    }
}

/// A square board of dice with king-move adjacency
#[derive(Debug, Clone)]
pub struct BoggleBoard {
    kind: BoardKind,
    dice: DiceSet,
    grid: Grid,
}

impl BoggleBoard {
    pub fn new(kind: BoardKind) -> Self {
        let size = kind.size();
        Self {
            kind,
            dice: kind.dice(),
            grid: Grid::new(size, size, &KING_MOVES),
        }
    }

    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rolls a fresh set of dice onto the board
    pub fn shake(&mut self, rng: &mut dyn RngCore) -> Result<&mut Self> {
        self.grid.shake(&self.dice, rng)?;
        Ok(self)
    }

    pub fn preset<M, R>(&mut self, letters: M) -> Result<&mut Self>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        self.grid.preset(letters)?;
        Ok(self)
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    pub fn play(&self, trie: &Trie) -> BoggleResult {
        let words = find_all_words(&self.grid, trie);
        let score = score(&words);
        BoggleResult { words, score }
    }
}
