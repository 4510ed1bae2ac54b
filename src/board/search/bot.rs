use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{search, SearchConfig};
use crate::board::{Board, Color, Move};

/// Computer opponent: a search configuration plus its own random source.
pub struct Bot<R: Rng = StdRng> {
    config: SearchConfig,
    rng: R,
}

impl Bot<StdRng> {
    /// Bot seeded from system entropy.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Bot::with_rng(config, StdRng::from_entropy())
    }

    /// Bot whose move choices are reproducible for a given seed.
    #[must_use]
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Bot::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Bot<R> {
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        Bot { config, rng }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Pick a move for `side` without touching `board`.
    pub fn choose_move(&mut self, board: &Board, side: Color) -> Option<Move> {
        let result = search(board, side, self.config.depth, &mut self.rng);
        if let Some(mv) = result.best_move {
            log::info!(
                "{side} plays {mv} (score {}, {} nodes, {} cutoffs)",
                result.score,
                result.stats.nodes,
                result.stats.cutoffs
            );
        }
        result.best_move
    }

    /// Choose a move for the side to move and apply it with `move_piece`.
    pub fn play(&mut self, board: &mut Board) -> Option<Move> {
        let mv = self.choose_move(board, board.side_to_move())?;
        board.move_piece(mv.from, mv.to).then_some(mv)
    }
}
