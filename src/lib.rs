//! Chess rules engine with a fixed-depth alpha-beta opponent.
//!
//! The [`Board`] owns the position and is the only thing that mutates it.
//! Legal move generation and check/mate/stalemate detection live on the board
//! as well; [`Bot`] and [`find_best_move`] pick replies for the computer side.
//!
//! # Example
//! ```
//! use minimax_chess::{Board, Bot, Color, SearchConfig};
//!
//! let mut board = Board::new();
//! assert!(board.move_piece("e2".parse().unwrap(), "e4".parse().unwrap()));
//!
//! let mut bot = Bot::seeded(SearchConfig::with_depth(2), 7);
//! let reply = bot.play(&mut board).expect("black has moves");
//! assert_eq!(board.side_to_move(), Color::White);
//! assert_eq!(board.move_log().last(), Some(&reply.to_string()));
//! ```

pub mod board;

pub use board::{
    find_best_move, Board, Bot, Color, Difficulty, GameStatus, Move, Piece, SearchConfig, Square,
};
