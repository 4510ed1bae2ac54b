use super::super::{Board, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, targets: &mut Vec<Square>) {
        self.generate_step_moves(from, &KNIGHT_OFFSETS, targets);
    }

    /// Single-step destinations (knight jumps, king steps): empty or enemy squares.
    pub(crate) fn generate_step_moves(
        &self,
        from: Square,
        offsets: &[(isize, isize)],
        targets: &mut Vec<Square>,
    ) {
        let Some(color) = self.color_on(from) else {
            return;
        };
        for &(dr, df) in offsets {
            if let Some(to) = from.offset(dr, df) {
                if self.color_on(to) != Some(color) {
                    targets.push(to);
                }
            }
        }
    }
}
