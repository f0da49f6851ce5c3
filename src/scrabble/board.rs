use std::collections::HashMap;

use crate::error::Result;
use crate::grid::{Grid, Position, ORTHOGONAL};

use super::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareEffect {
    DoubleWord,
    DoubleLetter,
    TripleWord,
    TripleLetter,
    Center,
}

// 1-based (row, col) for one quadrant's worth of premiums; the rest are mirrored
const DOUBLE_LETTER: [(usize, usize); 6] = [(1, 4), (3, 7), (4, 1), (4, 8), (7, 3), (7, 7)];
const TRIPLE_LETTER: [(usize, usize); 3] = [(2, 6), (6, 2), (6, 6)];
const DOUBLE_WORD: [(usize, usize); 4] = [(2, 2), (3, 3), (4, 4), (5, 5)];
const TRIPLE_WORD: [(usize, usize); 3] = [(1, 1), (1, 8), (8, 1)];
const CENTER: (usize, usize) = (8, 8);

/// The 15x15 Scrabble grid with its premium squares. Premiums are kept as layout
/// data only, word scores never look at them
#[derive(Debug, Clone)]
pub struct ScrabbleBoard {
    grid: Grid,
    premiums: HashMap<Position, SquareEffect>,
}

impl ScrabbleBoard {
    pub fn empty() -> Self {
        let mut premiums = HashMap::new();
        let layout = [
            (&DOUBLE_LETTER[..], SquareEffect::DoubleLetter),
            (&TRIPLE_LETTER[..], SquareEffect::TripleLetter),
            (&DOUBLE_WORD[..], SquareEffect::DoubleWord),
            (&TRIPLE_WORD[..], SquareEffect::TripleWord),
        ];
        for (cells, effect) in layout {
            for &(row, col) in cells {
                for pos in Self::mirrored(row, col) {
                    premiums.insert(pos, effect);
                }
            }
        }
        premiums.insert(
            Position {
                row: CENTER.0,
                col: CENTER.1,
            },
            SquareEffect::Center,
        );

        Self {
            grid: Grid::new(BOARD_SIZE, BOARD_SIZE, &ORTHOGONAL),
            premiums,
        }
    }

    /// All eight reflections of a cell across the board's middle row, column and diagonal
    fn mirrored(row: usize, col: usize) -> Vec<Position> {
        let flip = |x: usize| BOARD_SIZE + 1 - x;
        let mut out = Vec::with_capacity(8);
        for (r, c) in [(row, col), (col, row)] {
            for (r, c) in [(r, c), (flip(r), c), (r, flip(c)), (flip(r), flip(c))] {
                let pos = Position { row: r, col: c };
                if !out.contains(&pos) {
                    out.push(pos);
                }
            }
        }
        out
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Premium at the 1-based coordinate, if any
    pub fn premium(&self, row: usize, col: usize) -> Result<Option<SquareEffect>> {
        let node = self.grid.by_coordinate(row, col)?;
        Ok(self.premiums.get(&self.grid.position(node)).copied())
    }

    pub fn start_position(&self) -> Position {
        Position {
            row: CENTER.0,
            col: CENTER.1,
        }
    }
}

impl Default for ScrabbleBoard {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &ScrabbleBoard, effect: SquareEffect) -> usize {
        board.premiums.values().filter(|&&e| e == effect).count()
    }

    #[test]
    fn test_standard_layout() {
        let board = ScrabbleBoard::empty();
        assert_eq!(board.grid().len(), 225);
        assert_eq!(count(&board, SquareEffect::DoubleLetter), 24);
        assert_eq!(count(&board, SquareEffect::TripleLetter), 12);
        assert_eq!(count(&board, SquareEffect::DoubleWord), 16);
        assert_eq!(count(&board, SquareEffect::TripleWord), 8);
        assert_eq!(count(&board, SquareEffect::Center), 1);
    }

    #[test]
    fn test_premium_lookup() {
        let board = ScrabbleBoard::empty();
        assert_eq!(board.premium(1, 1).unwrap(), Some(SquareEffect::TripleWord));
        assert_eq!(board.premium(15, 8).unwrap(), Some(SquareEffect::TripleWord));
        assert_eq!(board.premium(8, 8).unwrap(), Some(SquareEffect::Center));
        assert_eq!(board.premium(12, 1).unwrap(), Some(SquareEffect::DoubleLetter));
        assert_eq!(board.premium(10, 14).unwrap(), Some(SquareEffect::TripleLetter));
        assert_eq!(board.premium(2, 3).unwrap(), None);
        assert!(board.premium(16, 1).is_err());
    }
}
