use super::super::{Board, Piece, Square};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, targets: &mut Vec<Square>) {
        let Some(color) = self.color_on(from) else {
            return;
        };
        let dir = color.pawn_direction();

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                targets.push(forward_sq);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double_sq) = forward_sq.offset(dir, 0) {
                        if self.is_empty(double_sq) {
                            targets.push(double_sq);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target_sq) = from.offset(dir, df) else {
                continue;
            };
            match self.color_on(target_sq) {
                Some(target_color) if target_color != color => targets.push(target_sq),
                Some(_) => {}
                None if self.is_en_passant_capture(from, target_sq) => targets.push(target_sq),
                None => {}
            }
        }
    }

    /// A pawn stepping diagonally onto the en-passant target, with an enemy
    /// pawn directly behind that square.
    pub(crate) fn is_en_passant_capture(&self, from: Square, to: Square) -> bool {
        let Some((color, Piece::Pawn)) = self.piece_at(from) else {
            return false;
        };
        Some(to) == self.en_passant_target
            && from.file() != to.file()
            && self.is_empty(to)
            && to
                .offset(-color.pawn_direction(), 0)
                .and_then(|behind| self.piece_at(behind))
                == Some((color.opponent(), Piece::Pawn))
    }
}
