//! Common imports for driving a game.
//!
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let mut board = Board::new();
//! let mut bot = Bot::seeded(SearchConfig::from(Difficulty::Easy), 1);
//! assert!(bot.play(&mut board).is_some());
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, Bot, Color, Difficulty, FenError, GameStatus, Move,
    MoveList, MoveParseError, Piece, SearchConfig, Square, SquareError,
};
