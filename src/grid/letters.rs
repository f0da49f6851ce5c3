use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Anything that can hand out letters to fill a board. Every call builds a fresh
/// bag, so a single draw never repeats an item but separate draws are independent
pub trait LetterSource {
    fn draw(&self, n: usize, rng: &mut dyn rand::RngCore) -> Result<Vec<char>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    faces: Vec<char>,
}

impl Die {
    pub fn new(faces: Vec<char>) -> Result<Self> {
        if faces.is_empty() {
            return Err(Error::DegenerateDie);
        }
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[char] {
        &self.faces
    }

    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.faces[rng.gen_range(0..self.faces.len())]
    }
}

// Classic 4x4 set
const BOGGLE_DICE: [&str; 16] = [
    "aaeegn", "elrtty", "aoottw", "abbjoo", "ehrtvw", "cimotu", "distty", "eiosst", "delrvy",
    "achops", "himnqu", "eeinsu", "eeghnw", "affkps", "hlnnrz", "deilrx",
];

// 5x5 Big Boggle set
const BIG_BOGGLE_DICE: [&str; 25] = [
    "aaafrs", "aaeeee", "aafirs", "adennn", "aeeeem", "aeegmu", "aegmnn", "afirsy", "bjkqxz",
    "ccnstw", "ceiilt", "ceilpt", "ceipst", "ddlnor", "dhhlor", "dhhnot", "dhlnor", "eiiitt",
    "emottt", "ensssu", "fiprsy", "gorrvw", "hiprry", "nootuw", "ooottu",
];

/// A bag of dice. Drawing grabs `n` distinct dice and rolls each one
#[derive(Debug, Clone)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    pub fn from_faces<'a, I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let dice = faces
            .into_iter()
            .map(|f| Die::new(f.chars().collect()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(dice))
    }

    pub fn boggle() -> Self {
        Self::standard(&BOGGLE_DICE)
    }

    pub fn big_boggle() -> Self {
        Self::standard(&BIG_BOGGLE_DICE)
    }

    fn standard(faces: &[&str]) -> Self {
        let dice = faces
            .iter()
            .map(|f| Die {
                faces: f.chars().collect(),
            })
            .collect();
        Self::new(dice)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl LetterSource for DiceSet {
    fn draw(&self, n: usize, rng: &mut dyn rand::RngCore) -> Result<Vec<char>> {
        if n > self.dice.len() {
            return Err(Error::InsufficientLetters {
                needed: n,
                available: self.dice.len(),
            });
        }
        let mut bag: Vec<&Die> = self.dice.iter().collect();
        bag.shuffle(rng);
        Ok(bag.into_iter().take(n).map(|d| d.roll(rng)).collect())
    }
}

/// Scrabble tile counts, a through z. Blanks are not part of this game
pub const SCRABBLE_TILES: [usize; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Weighted bag of letters. Each letter appears as many times as its weight
#[derive(Debug, Clone)]
pub struct LetterBag {
    distribution: Vec<char>,
}

impl LetterBag {
    pub fn new<I: IntoIterator<Item = (char, usize)>>(weights: I) -> Self {
        let mut distribution = Vec::new();
        for (letter, amt) in weights {
            distribution.extend(std::iter::repeat(letter).take(amt));
        }
        Self { distribution }
    }

    pub fn scrabble() -> Self {
        Self::new(('a'..='z').zip(SCRABBLE_TILES.iter().copied()))
    }

    pub fn letters(&self) -> &[char] {
        &self.distribution
    }

    pub fn len(&self) -> usize {
        self.distribution.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distribution.is_empty()
    }
}

impl LetterSource for LetterBag {
    fn draw(&self, n: usize, rng: &mut dyn rand::RngCore) -> Result<Vec<char>> {
        if n > self.distribution.len() {
            return Err(Error::InsufficientLetters {
                needed: n,
                available: self.distribution.len(),
            });
        }
        Ok(self
            .distribution
            .choose_multiple(rng, n)
            .copied()
            .collect())
    }
}
