use super::{CastlingFlags, Color, Piece, Square};

/// Everything needed to take back one applied move.
#[derive(Clone, Debug)]
pub(crate) struct MoveRecord {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: (Color, Piece),
    /// The captured piece and where it stood (behind `to` for en passant).
    pub(crate) captured: Option<(Square, (Color, Piece))>,
    /// Rook relocation `(from, to)` performed by a castle.
    pub(crate) rook_shift: Option<(Square, Square)>,
    pub(crate) was_white_turn: bool,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling: CastlingFlags,
}

/// A game in progress: the position plus everything needed to continue and
/// take back moves.
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    pub(crate) white_to_move: bool,
    pub(crate) castling: CastlingFlags,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) move_log: Vec<String>,
    /// Plies played before this board was set up (from a FEN fullmove number).
    pub(crate) starting_ply: usize,
}

impl Board {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, i), Color::White, *piece);
            board.set_piece(Square(7, i), Color::Black, *piece);
            board.set_piece(Square(1, i), Color::White, Piece::Pawn);
            board.set_piece(Square(6, i), Color::Black, Piece::Pawn);
        }
        board
    }

    /// A board with no pieces, White to move and nothing marked as moved.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            white_to_move: true,
            castling: CastlingFlags::unmoved(),
            en_passant_target: None,
            history: Vec::new(),
            move_log: Vec::new(),
            starting_ply: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// Replace whatever stands on `sq`. Used to complete a promotion.
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    pub fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn castling_flags(&self) -> CastlingFlags {
        self.castling
    }

    /// A pawn standing on its far rank, waiting to be replaced.
    #[must_use]
    pub fn promotion_square(&self) -> Option<Square> {
        self.pieces().find_map(|(sq, color, piece)| {
            (piece == Piece::Pawn && sq.rank() == color.pawn_promotion_rank()).then_some(sq)
        })
    }

    /// Applied moves in coordinate notation (`e2->e4`), oldest first.
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    /// Number of moves that `undo_move` can still take back.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The move log as numbered lines, one per full move:
    /// `1. e2->e4 e7->e5`.
    #[must_use]
    pub fn formatted_move_list(&self) -> String {
        self.move_log
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Copies position, turn, castling flags, en-passant target and the display
/// log. The undo history starts out empty on the copy.
impl Clone for Board {
    fn clone(&self) -> Self {
        Board {
            squares: self.squares,
            white_to_move: self.white_to_move,
            castling: self.castling,
            en_passant_target: self.en_passant_target,
            history: Vec::new(),
            move_log: self.move_log.clone(),
            starting_ply: self.starting_ply,
        }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.to_fen())?;
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
