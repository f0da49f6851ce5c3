use std::fmt;

use rand::RngCore;

use crate::error::{Error, Result};

pub mod letters;

pub use self::letters::{DiceSet, Die, LetterBag, LetterSource};

/// Offset in (row, col) applied to a cell to reach a neighbor
pub type Offset = (isize, isize);

/// Every surrounding cell, used by Boggle boards
pub const KING_MOVES: [Offset; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Up, down, left and right, used by the Scrabble board
pub const ORTHOGONAL: [Offset; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Stable identity of a grid cell. Ids are handed out once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone)]
struct Node {
    pos: Position,
    letter: Option<char>,
    edges: Vec<NodeId>,
}

/// Fixed topology of cells. Letters change every round, edges never do
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
}

impl Grid {
    /// Builds a `rows` x `cols` grid and wires every in-bounds offset. The opposite of
    /// each offset is wired as well so adjacency is always symmetric
    pub fn new(rows: usize, cols: usize, directions: &[Offset]) -> Self {
        let mut offsets: Vec<Offset> = Vec::with_capacity(directions.len() * 2);
        for &(dr, dc) in directions.iter() {
            for off in [(dr, dc), (-dr, -dc)] {
                if off != (0, 0) && !offsets.contains(&off) {
                    offsets.push(off);
                }
            }
        }

        let mut nodes = Vec::with_capacity(rows * cols);
        for row in 1..=rows {
            for col in 1..=cols {
                nodes.push(Node {
                    pos: Position { row, col },
                    letter: None,
                    edges: Vec::new(),
                });
            }
        }

        for node in nodes.iter_mut() {
            let Position { row, col } = node.pos;
            for &(dr, dc) in offsets.iter() {
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 1 || c < 1 || r > rows as isize || c > cols as isize {
                    continue;
                }
                node.edges
                    .push(NodeId((r as usize - 1) * cols + (c as usize - 1)));
            }
        }

        Self { rows, cols, nodes }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].edges
    }

    pub fn letter(&self, node: NodeId) -> Option<char> {
        self.nodes[node.0].letter
    }

    pub fn set_letter(&mut self, node: NodeId, letter: char) {
        self.nodes[node.0].letter = Some(letter);
    }

    pub fn position(&self, node: NodeId) -> Position {
        self.nodes[node.0].pos
    }

    /// Looks up a cell by its 1-based coordinates
    pub fn by_coordinate(&self, row: usize, col: usize) -> Result<NodeId> {
        if row < 1 || col < 1 || row > self.rows || col > self.cols {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(NodeId((row - 1) * self.cols + (col - 1)))
    }

    /// Randomizes every cell from a fresh draw of the letter source
    pub fn shake<S>(&mut self, source: &S, rng: &mut dyn RngCore) -> Result<()>
    where
        S: LetterSource + ?Sized,
    {
        let letters = source.draw(self.nodes.len(), rng)?;
        for (node, letter) in self.nodes.iter_mut().zip(letters) {
            node.letter = Some(letter);
        }
        Ok(())
    }

    /// Overwrites the letters row by row. The matrix must hold exactly one letter per cell
    pub fn preset<M, R>(&mut self, matrix: M) -> Result<()>
    where
        M: IntoIterator<Item = R>,
        R: IntoIterator<Item = char>,
    {
        let letters: Vec<char> = matrix.into_iter().flatten().collect();
        if letters.len() != self.nodes.len() {
            return Err(Error::InvalidShape {
                expected: self.nodes.len(),
                actual: letters.len(),
            });
        }
        for (node, letter) in self.nodes.iter_mut().zip(letters) {
            node.letter = Some(letter);
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|n| match n.letter {
                    Some(l) => l.to_uppercase().to_string(),
                    None => ".".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
