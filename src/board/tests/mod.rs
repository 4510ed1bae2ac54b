//! Board module tests.
//!
//! - `movegen.rs` - perft counts and move generation
//! - `make_unmake.rs` - `move_piece`/`undo_move` bookkeeping
//! - `edge_cases.rs` - castling, en passant, promotion, mate and stalemate
//! - `search.rs` - minimax bot behaviour
//! - `proptest.rs` - property-based tests over random playouts

mod movegen;
mod search;
