pub mod bag;
pub mod board;
pub mod game;
pub mod rack;
pub mod search;

const BOARD_SIZE: usize = 15;

pub use self::bag::Bag;
pub use self::board::{ScrabbleBoard, SquareEffect};
pub use self::game::{ScrabbleGame, ScrabbleResult};
pub use self::rack::Rack;
pub use self::search::{find_best_word, find_best_word_up_to, BestWord};
