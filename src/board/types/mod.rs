//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Move` and `MoveList` - coordinate-pair moves
//! - `CastlingFlags` - king/rook "has moved" bookkeeping

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingFlags;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;
