mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::SliderType;

use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Destinations the piece on `from` could reach ignoring king safety.
    ///
    /// Uses the color of the piece itself, not the side to move. Empty for an
    /// empty square.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        match self.piece_on(from) {
            Some(Piece::Pawn) => self.generate_pawn_moves(from, &mut targets),
            Some(Piece::Knight) => self.generate_knight_moves(from, &mut targets),
            Some(Piece::Bishop) => {
                self.generate_slider_moves(from, SliderType::Bishop, &mut targets)
            }
            Some(Piece::Rook) => self.generate_slider_moves(from, SliderType::Rook, &mut targets),
            Some(Piece::Queen) => {
                self.generate_slider_moves(from, SliderType::Queen, &mut targets)
            }
            Some(Piece::King) => self.generate_king_moves(from, &mut targets),
            None => {}
        }
        targets
    }

    /// Pseudo-legal destinations that do not leave the mover's own king in check.
    ///
    /// A castle is also dropped when the king is in check or the square it
    /// passes over is attacked.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        let opponent = color.opponent();

        let mut legal = self.pseudo_legal_destinations(from);
        legal.retain(|&to| {
            if piece == Piece::King && from.file().abs_diff(to.file()) == 2 {
                let crossed = Square(from.rank(), (from.file() + to.file()) / 2);
                if self.is_in_check(color) || self.is_square_attacked(crossed, opponent) {
                    return false;
                }
            }
            self.with_move(Move::new(from, to), |b| !b.is_in_check(color))
                .unwrap_or(false)
        });
        legal
    }

    /// Every legal move for `color`, regardless of whose turn it is.
    pub fn generate_moves(&mut self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let origins: Vec<Square> = self
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(sq, _, _)| sq)
            .collect();
        for from in origins {
            for to in self.legal_destinations(from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(sq, _, _)| sq)
            .collect();
        origins
            .into_iter()
            .any(|from| !self.legal_destinations(from).is_empty())
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Count leaf nodes of the legal move tree from the side to move.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves(self.side_to_move());
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            nodes += self.with_move(mv, |b| b.perft(depth - 1)).unwrap_or(0);
        }
        nodes
    }
}
