//! Word finding on letter grids: every word on a Boggle board, and the best
//! word a Scrabble rack can make.

pub mod bench;
pub mod boggle;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod scoring;
pub mod scrabble;
pub mod trie;
pub mod utils;

pub use error::{Error, Result};
pub use trie::{Trie, TrieCursor};
