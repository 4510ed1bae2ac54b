use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Whole-board classification, as shown to a player after each move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Checkmate { winner: Color },
    Check(Color),
    Stalemate,
    Ongoing,
}

impl GameStatus {
    #[must_use]
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "Checkmate! {winner} wins!"),
            GameStatus::Check(color) => write!(f, "{color} is in check!"),
            GameStatus::Stalemate => f.write_str("Stalemate!"),
            GameStatus::Ongoing => Ok(()),
        }
    }
}

impl Board {
    /// Classify both sides: mate before check, White before Black, and
    /// stalemate of either side before ongoing play.
    pub fn status(&mut self) -> GameStatus {
        for color in Color::BOTH {
            if self.is_checkmate(color) {
                return GameStatus::Checkmate {
                    winner: color.opponent(),
                };
            }
        }
        for color in Color::BOTH {
            if self.is_in_check(color) {
                return GameStatus::Check(color);
            }
        }
        if Color::BOTH.into_iter().any(|color| self.is_stalemate(color)) {
            return GameStatus::Stalemate;
        }
        GameStatus::Ongoing
    }
}
