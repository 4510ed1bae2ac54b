//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Positions are scored by material only. Root candidates are shuffled before
//! they are searched so that equally good moves are picked at random; the
//! random source is always supplied by the caller.

mod bot;
mod minimax;
mod params;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{evaluate, Board, Color, Move};
pub use bot::Bot;
pub(crate) use minimax::Minimax;
pub use params::{Difficulty, SearchConfig};

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// `None` when the side has no legal move
    pub best_move: Option<Move>,
    /// Material score of `best_move` from the searching side's point of view
    pub score: i32,
    pub stats: SearchStats,
}

/// Search `depth` plies for `side` and report the chosen move with its score.
///
/// `board` is not modified: the search runs on one scratch copy. The side to
/// move on that copy is set to `side`, so the bot can be asked for either
/// color. A depth of zero is searched as one.
pub fn search<R: Rng + ?Sized>(board: &Board, side: Color, depth: u32, rng: &mut R) -> SearchResult {
    let depth = depth.max(1);
    let mut scratch = board.clone();
    scratch.white_to_move = side == Color::White;

    let mut engine = Minimax::new(side);
    let mut moves = scratch.generate_moves(side);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: evaluate(&scratch, side),
            stats: engine.stats,
        };
    }
    moves.as_mut_slice().shuffle(rng);

    let mut best_move = None;
    let mut best_score = i32::MIN;
    for mv in moves {
        let Some(score) =
            scratch.with_move(mv, |b| engine.alpha_beta(b, depth - 1, best_score, i32::MAX))
        else {
            continue;
        };
        log::debug!("candidate {mv}: {score}");
        if score > best_score || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        stats: engine.stats,
    }
}

/// The move [`search`] would pick, or `None` if `side` cannot move.
pub fn find_best_move<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    depth: u32,
    rng: &mut R,
) -> Option<Move> {
    search(board, side, depth, rng).best_move
}
