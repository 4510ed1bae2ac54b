use super::super::{Board, Color, Piece, Square};
use super::knights::KNIGHT_OFFSETS;
use super::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// King steps plus the two-file castling steps.
    ///
    /// Castling is offered from the home square while neither the king nor
    /// the rook on that wing has moved, that rook is still in its corner and
    /// the squares between them are empty. Attacks are not considered here.
    pub(crate) fn generate_king_moves(&self, from: Square, targets: &mut Vec<Square>) {
        self.generate_step_moves(from, &KING_OFFSETS, targets);

        let Some(color) = self.color_on(from) else {
            return;
        };
        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) || self.castling.king_moved(color) {
            return;
        }

        let rook = Some((color, Piece::Rook));
        if self.castling.may_castle(color, true)
            && self.is_empty(Square(back_rank, 5))
            && self.is_empty(Square(back_rank, 6))
            && self.piece_at(Square(back_rank, 7)) == rook
        {
            targets.push(Square(back_rank, 6));
        }
        if self.castling.may_castle(color, false)
            && self.is_empty(Square(back_rank, 1))
            && self.is_empty(Square(back_rank, 2))
            && self.is_empty(Square(back_rank, 3))
            && self.piece_at(Square(back_rank, 0)) == rook
        {
            targets.push(Square(back_rank, 2));
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Whether any piece of `attacker_color` could capture on `square`.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        let holds = |sq: Option<Square>, kinds: &[Piece]| {
            sq.and_then(|sq| self.piece_at(sq))
                .is_some_and(|(c, p)| c == attacker_color && kinds.contains(&p))
        };

        let behind = -attacker_color.pawn_direction();
        if [-1, 1]
            .iter()
            .any(|&df| holds(square.offset(behind, df), &[Piece::Pawn]))
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(square.offset(dr, df), &[Piece::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(dr, df)| holds(square.offset(dr, df), &[Piece::King]))
        {
            return true;
        }

        let first_blocker = |(dr, df): (isize, isize)| {
            let mut cursor = square.offset(dr, df);
            while let Some(sq) = cursor {
                if !self.is_empty(sq) {
                    return Some(sq);
                }
                cursor = sq.offset(dr, df);
            }
            None
        };

        ROOK_DIRECTIONS
            .iter()
            .any(|&dir| holds(first_blocker(dir), &[Piece::Rook, Piece::Queen]))
            || BISHOP_DIRECTIONS
                .iter()
                .any(|&dir| holds(first_blocker(dir), &[Piece::Bishop, Piece::Queen]))
    }

    /// Whether `color`'s king is attacked. A board without that king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
