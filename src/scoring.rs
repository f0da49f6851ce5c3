/// Boggle points by word length. Words of 8 letters or more use the last tier
pub const LENGTH_POINTS: [u32; 9] = [0, 0, 0, 1, 1, 2, 3, 5, 11];

/// Scrabble tile values, a through z
pub const LETTER_POINTS: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

pub fn length_points(len: usize) -> u32 {
    LENGTH_POINTS[len.min(LENGTH_POINTS.len() - 1)]
}

/// Value of a single tile. Anything outside a-z is worth nothing
pub fn letter_points(letter: char) -> u32 {
    if letter.is_ascii_lowercase() {
        LETTER_POINTS[letter as usize - 'a' as usize]
    } else {
        0
    }
}

pub fn word_points(word: &str) -> u32 {
    word.chars().map(letter_points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_points_clamped() {
        assert_eq!(length_points(0), 0);
        assert_eq!(length_points(2), 0);
        assert_eq!(length_points(3), 1);
        assert_eq!(length_points(7), 5);
        assert_eq!(length_points(8), 11);
        assert_eq!(length_points(16), 11);
    }

    #[test]
    fn test_word_points() {
        assert_eq!(word_points("cats"), 6);
        assert_eq!(word_points("quiz"), 22);
        assert_eq!(word_points(""), 0);
        assert_eq!(letter_points('A'), 0);
    }
}
