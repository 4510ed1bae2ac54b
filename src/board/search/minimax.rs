use super::SearchStats;
use crate::board::{evaluate, Board, Color};

/// Alpha-beta minimax over the legal move tree, scored by material from
/// `perspective`'s point of view.
pub(crate) struct Minimax {
    pub(crate) perspective: Color,
    pub(crate) stats: SearchStats,
}

impl Minimax {
    pub(crate) fn new(perspective: Color) -> Self {
        Minimax {
            perspective,
            stats: SearchStats::default(),
        }
    }

    /// Score `board` searching `depth` more plies.
    ///
    /// A node is a leaf at depth zero or once either color is out of legal
    /// moves. The node maximizes when `perspective` is the side to move.
    pub(crate) fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0
            || !board.has_legal_moves(Color::White)
            || !board.has_legal_moves(Color::Black)
        {
            self.stats.leaves += 1;
            return evaluate(board, self.perspective);
        }

        let to_move = board.side_to_move();
        let maximizing = to_move == self.perspective;
        let moves = board.generate_moves(to_move);

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in moves {
            let Some(score) = board.with_move(mv, |b| self.alpha_beta(b, depth - 1, alpha, beta))
            else {
                continue;
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}
