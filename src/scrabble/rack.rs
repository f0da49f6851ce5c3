use std::fmt;

use crate::error::{Error, Result};

/// Letters a player can build a word from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    /// Histogram count of each letter in the rack
    letters: [u8; 26],
    /// The total number of tiles held
    n_total: usize,
}

fn slot(letter: char) -> Result<usize> {
    if letter.is_ascii_lowercase() {
        Ok(letter as usize - 'a' as usize)
    } else {
        Err(Error::InvalidLetter(letter))
    }
}

impl Rack {
    /// Tiles held after every refill
    pub const MAX_TILES: usize = 7;

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_letters<I: IntoIterator<Item = char>>(letters: I) -> Result<Self> {
        let mut rack = Self::empty();
        for l in letters {
            rack.add(l)?;
        }
        Ok(rack)
    }

    /// Reads a typed tray. Case is ignored and whitespace between letters is skipped
    pub fn parse(tray: &str) -> Result<Self> {
        Self::from_letters(
            tray.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_lowercase()),
        )
    }

    /// Puts one tile on the rack. A full rack refuses it
    pub fn add(&mut self, letter: char) -> Result<()> {
        let i = slot(letter)?;
        if self.n_total >= Self::MAX_TILES {
            return Err(Error::RackFull {
                capacity: Self::MAX_TILES,
            });
        }
        self.letters[i] += 1;
        self.n_total += 1;
        Ok(())
    }

    /// Takes one copy of the letter out. Returns false if the rack has none
    pub fn remove(&mut self, letter: char) -> bool {
        match slot(letter) {
            Ok(i) if self.letters[i] > 0 => {
                self.letters[i] -= 1;
                self.n_total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of copies of `letter` held
    pub fn count(&self, letter: char) -> usize {
        slot(letter).map_or(0, |i| self.letters[i] as usize)
    }

    /// Checks whether every letter of the word can be taken from the rack at once
    pub fn contains_all(&self, word: &str) -> bool {
        let mut tmp = self.clone();
        word.chars().all(|c| tmp.remove(c))
    }

    pub fn len(&self) -> usize {
        self.n_total
    }

    pub fn is_empty(&self) -> bool {
        self.n_total == 0
    }

    /// Missing tiles until the rack is full
    pub fn space(&self) -> usize {
        Self::MAX_TILES.saturating_sub(self.n_total)
    }

    /// Held letters in alphabetical order
    pub fn letters(&self) -> Vec<char> {
        let mut letters = Vec::with_capacity(self.n_total);
        for (i, &n) in self.letters.iter().enumerate() {
            for _ in 0..n {
                letters.push((b'a' + i as u8) as char);
            }
        }
        letters
    }

    /// Copy of the per-letter counts, a through z
    pub(crate) fn histogram(&self) -> [u8; 26] {
        self.letters
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letters().into_iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rack_multiset() {
        let mut rack = Rack::from_letters("hello".chars()).unwrap();
        assert_eq!(rack.len(), 5);
        assert_eq!(rack.count('l'), 2);
        assert_eq!(rack.space(), 2);
        assert!(rack.contains_all("hell"));
        assert!(!rack.contains_all("hells"));
        assert!(!rack.contains_all("helll"));

        assert!(rack.remove('l'));
        assert!(rack.remove('l'));
        assert!(!rack.remove('l'));
        assert_eq!(rack.to_string(), "eho");
    }

    #[test]
    fn test_invalid_letter() {
        assert!(matches!(
            Rack::from_letters("ab?".chars()),
            Err(Error::InvalidLetter('?'))
        ));
        let mut rack = Rack::empty();
        assert!(!rack.remove('A'));
    }

    #[test]
    fn test_full_rack_refuses_tiles() {
        assert!(matches!(
            Rack::from_letters("catsxxxxx".chars()),
            Err(Error::RackFull { capacity: 7 })
        ));
        assert!(matches!(
            Rack::from_letters(std::iter::repeat('a').take(256)),
            Err(Error::RackFull { .. })
        ));

        let mut rack = Rack::from_letters("catsxxx".chars()).unwrap();
        assert_eq!(rack.space(), 0);
        assert!(rack.add('e').is_err());
        assert_eq!(rack.len(), 7);
        assert!(rack.remove('x'));
        rack.add('e').unwrap();
        assert_eq!(rack.to_string(), "acestxx");
    }

    #[test]
    fn test_parse_tray() {
        let rack = Rack::parse(" c A t\t").unwrap();
        assert_eq!(rack.to_string(), "act");
        assert!(Rack::parse("").unwrap().is_empty());
        assert!(matches!(Rack::parse("c-a"), Err(Error::InvalidLetter('-'))));
    }
}
