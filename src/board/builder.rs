//! Piece-by-piece position setup, an alternative to FEN.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let mut board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.generate_moves(Color::White).len(), 6);
//! ```

use super::{Board, CastlingFlags, Color, Piece, Square};

#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingFlags,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// An empty board, White to move, no king or rook marked as moved.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingFlags::unmoved(),
            en_passant_target: None,
        }
    }

    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board.pieces().collect(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing anything already on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, flags: CastlingFlags) -> Self {
        self.castling = flags;
        self
    }

    /// Mark `color`'s king as moved, ruling out castling on both wings.
    #[must_use]
    pub fn king_moved(mut self, color: Color) -> Self {
        self.castling.mark_king_moved(color);
        self
    }

    #[must_use]
    pub fn rook_moved(mut self, color: Color, kingside: bool) -> Self {
        self.castling.mark_rook_moved(color, kingside);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board.white_to_move = self.side_to_move == Color::White;
        board.castling = self.castling;
        board.en_passant_target = self.en_passant_target;
        board
    }
}
