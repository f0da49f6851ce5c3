use thiserror::Error;

/// Errors raised by the board, dictionary and search layers
#[derive(Debug, Error)]
pub enum Error {
    #[error("letter matrix has {actual} cells but the board has {expected}")]
    InvalidShape { expected: usize, actual: usize },
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("a die must have at least one face")]
    DegenerateDie,
    #[error("no trie edge for letter {0:?}")]
    NotFound(char),
    #[error("letter source holds {available} items but {needed} were requested")]
    InsufficientLetters { needed: usize, available: usize },
    #[error("rack letters must be in a-z, got {0:?}")]
    InvalidLetter(char),
    #[error("rack already holds {capacity} tiles")]
    RackFull { capacity: usize },
    #[error("dictionary cache is corrupt: {0}")]
    CorruptTrie(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
