//! Castling bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_KINGSIDE_ROOK_MOVED: u8 = 1 << 1;
const WHITE_QUEENSIDE_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_KINGSIDE_ROOK_MOVED: u8 = 1 << 4;
const BLACK_QUEENSIDE_ROOK_MOVED: u8 = 1 << 5;

/// "Has moved" flags for both kings and the four corner rooks.
///
/// Bits only ever get set during a game. `Board::undo_move` leaves them alone,
/// so a castle right lost once stays lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingFlags(u8);

impl CastlingFlags {
    /// Nothing has moved yet (standard starting position)
    #[must_use]
    pub const fn unmoved() -> Self {
        CastlingFlags(0)
    }

    /// Every king and rook counts as moved: no castling for anyone
    #[must_use]
    pub const fn all_moved() -> Self {
        CastlingFlags(
            WHITE_KING_MOVED
                | WHITE_KINGSIDE_ROOK_MOVED
                | WHITE_QUEENSIDE_ROOK_MOVED
                | BLACK_KING_MOVED
                | BLACK_KINGSIDE_ROOK_MOVED
                | BLACK_QUEENSIDE_ROOK_MOVED,
        )
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::rook_bit(color, kingside) != 0
    }

    /// Whether neither the king nor the rook on that wing has moved
    #[inline]
    #[must_use]
    pub const fn may_castle(self, color: Color, kingside: bool) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, kingside)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::rook_bit(color, kingside);
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => WHITE_KINGSIDE_ROOK_MOVED,
            (Color::White, false) => WHITE_QUEENSIDE_ROOK_MOVED,
            (Color::Black, true) => BLACK_KINGSIDE_ROOK_MOVED,
            (Color::Black, false) => BLACK_QUEENSIDE_ROOK_MOVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_tracked_per_wing() {
        let mut flags = CastlingFlags::unmoved();
        assert!(flags.may_castle(Color::White, true));

        flags.mark_rook_moved(Color::White, true);
        assert!(!flags.may_castle(Color::White, true));
        assert!(flags.may_castle(Color::White, false));
        assert!(flags.may_castle(Color::Black, true));

        flags.mark_king_moved(Color::Black);
        assert!(!flags.may_castle(Color::Black, true));
        assert!(!flags.may_castle(Color::Black, false));
        assert!(!flags.rook_moved(Color::Black, false));
    }

    #[test]
    fn all_moved_blocks_everything() {
        let flags = CastlingFlags::all_moved();
        for color in Color::BOTH {
            assert!(flags.king_moved(color));
            assert!(!flags.may_castle(color, true));
            assert!(!flags.may_castle(color, false));
        }
    }
}
