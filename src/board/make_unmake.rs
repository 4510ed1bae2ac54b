use super::{Board, Color, Move, MoveRecord, Piece, Square};

impl Board {
    /// Apply the move `from -> to` for the side to move.
    ///
    /// Returns `false` without touching the board when `from` is empty or
    /// holds a piece of the side not to move. Anything else is applied as-is:
    /// callers are expected to have checked the move against
    /// [`Board::legal_destinations`] first.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some((color, _)) if color == self.side_to_move() => {}
            _ => {
                log::debug!("ignoring move request {from}->{to}");
                return false;
            }
        }

        let Some(record) = self.make_move(from, to) else {
            return false;
        };
        log::trace!("{:?} {:?} {from}->{to}", record.moved.0, record.moved.1);
        self.move_log.push(Move::new(from, to).to_string());
        self.history.push(record);
        true
    }

    /// Take back the most recent `move_piece`.
    ///
    /// Restores every square the move touched, the side to move and the
    /// en-passant target. Castling flags stay as they are: a king or rook
    /// that moved once keeps counting as moved. No-op on empty history.
    pub fn undo_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };
        log::trace!("undo {}->{}", record.from, record.to);
        self.unmake_move(&record);
        self.move_log.pop();
    }

    /// Run `f` with `mv` applied, then put the board back exactly as it was,
    /// castling flags included. Returns `None` if `mv.from` is empty.
    ///
    /// Unlike `move_piece` this does not look at whose turn it is and leaves
    /// the undo history and move log alone.
    pub(crate) fn with_move<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        let record = self.make_move(mv.from, mv.to)?;
        let result = f(self);
        self.unmake_move(&record);
        self.castling = record.previous_castling;
        Some(result)
    }

    pub(crate) fn make_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let moved = self.piece_at(from)?;
        let (color, piece) = moved;

        let mut record = MoveRecord {
            from,
            to,
            moved,
            captured: self.piece_at(to).map(|victim| (to, victim)),
            rook_shift: None,
            was_white_turn: self.white_to_move,
            previous_en_passant_target: self.en_passant_target,
            previous_castling: self.castling,
        };

        if self.is_en_passant_capture(from, to) {
            if let Some(behind) = to.offset(-color.pawn_direction(), 0) {
                record.captured = self.piece_at(behind).map(|victim| (behind, victim));
                self.clear_square(behind);
            }
        }

        if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
            let kingside = to.file() > from.file();
            let rook_from = Square(from.rank(), if kingside { 7 } else { 0 });
            let rook_to = Square(from.rank(), (from.file() + to.file()) / 2);
            let rook = (color, Piece::Rook);
            if self.piece_at(rook_from) == Some(rook) {
                self.clear_square(rook_from);
                self.squares[rook_to.0][rook_to.1] = Some(rook);
                record.rook_shift = Some((rook_from, rook_to));
            }
        }

        self.update_castling_flags(from, moved, record.captured);

        self.en_passant_target = None;
        if piece == Piece::Pawn
            && from.rank() == color.pawn_start_rank()
            && from.rank().abs_diff(to.rank()) == 2
        {
            self.en_passant_target = Some(Square((from.rank() + to.rank()) / 2, from.file()));
        }

        self.squares[to.0][to.1] = Some(moved);
        self.clear_square(from);
        self.white_to_move = color == Color::Black;

        Some(record)
    }

    pub(crate) fn unmake_move(&mut self, record: &MoveRecord) {
        if let Some((rook_from, rook_to)) = record.rook_shift {
            self.squares[rook_from.0][rook_from.1] = self.piece_at(rook_to);
            self.clear_square(rook_to);
        }

        self.clear_square(record.to);
        self.squares[record.from.0][record.from.1] = Some(record.moved);
        if let Some((sq, victim)) = record.captured {
            self.squares[sq.0][sq.1] = Some(victim);
        }

        self.white_to_move = record.was_white_turn;
        self.en_passant_target = record.previous_en_passant_target;
    }

    fn update_castling_flags(
        &mut self,
        from: Square,
        (color, piece): (Color, Piece),
        captured: Option<(Square, (Color, Piece))>,
    ) {
        match piece {
            Piece::King => self.castling.mark_king_moved(color),
            Piece::Rook if from.rank() == color.back_rank() => match from.file() {
                0 => self.castling.mark_rook_moved(color, false),
                7 => self.castling.mark_rook_moved(color, true),
                _ => {}
            },
            _ => {}
        }

        // A rook taken on its corner can never castle again either.
        if let Some((sq, (victim_color, Piece::Rook))) = captured {
            if sq.rank() == victim_color.back_rank() {
                match sq.file() {
                    0 => self.castling.mark_rook_moved(victim_color, false),
                    7 => self.castling.mark_rook_moved(victim_color, true),
                    _ => {}
                }
            }
        }
    }
}
