//! Chess board representation and game logic.
//!
//! Uses an 8×8 mailbox of `(Color, Piece)` values. Supports the full set of
//! movement rules including castling and en passant; promotion is completed by
//! the caller through [`Board::set_piece`].
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{CastlingFlags, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Public API - evaluation and search
pub use eval::{evaluate, material_balance};
pub use search::{
    find_best_move, search, Bot, Difficulty, SearchConfig, SearchResult, SearchStats,
};

pub(crate) use state::MoveRecord;
