use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingFlags, Color, Move, Piece, Square};

impl Board {
    /// Set up a position from FEN.
    ///
    /// Castling letters become "has moved" flags: a missing `K`/`Q` marks
    /// that rook as moved, and a color with neither letter has its king
    /// marked as moved. The fullmove number, if present, carries over to
    /// [`Board::to_fen`]. The halfmove clock is not tracked: it is read
    /// past and always written back as 0.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        board.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling = parse_castling(parts[2])?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            ep => Some(
                Square::from_str(ep).map_err(|_| FenError::InvalidEnPassant {
                    found: ep.to_string(),
                })?,
            ),
        };

        if let Some(fullmove) = parts.get(5).and_then(|n| n.parse::<usize>().ok()) {
            board.starting_ply =
                fullmove.saturating_sub(1) * 2 + usize::from(!board.white_to_move);
        }

        Ok(board)
    }

    /// Set up a position from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The position as FEN. The halfmove clock is not tracked and is always 0;
    /// the fullmove number counts on from the one the board was set up with.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let mut castling = String::new();
        for (color, kingside, letter) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.may_castle(color, kingside) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {active} {castling} {ep} 0 {}",
            rows.join("/"),
            (self.starting_ply + self.move_log.len()) / 2 + 1
        )
    }

    /// Parse a coordinate move (`e2e4` or `e2->e4`) and play it if legal for
    /// the side to move.
    ///
    /// # Example
    /// ```
    /// use minimax_chess::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.apply_move_str("e2e4").unwrap();
    /// board.apply_move_str("e7->e5").unwrap();
    /// assert_eq!(board.move_log(), ["e2->e4", "e7->e5"]);
    /// ```
    pub fn apply_move_str(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv: Move = notation.parse()?;
        let illegal = || MoveParseError::IllegalMove {
            notation: notation.trim().to_string(),
        };

        if self.color_on(mv.from) != Some(self.side_to_move()) {
            return Err(illegal());
        }
        if !self.legal_destinations(mv.from).contains(&mv.to) {
            return Err(illegal());
        }
        if !self.move_piece(mv.from, mv.to) {
            return Err(illegal());
        }
        Ok(mv)
    }
}

fn parse_castling(field: &str) -> Result<CastlingFlags, FenError> {
    let mut available = [[false; 2]; 2]; // [color][kingside]
    for c in field.chars() {
        match c {
            'K' => available[Color::White.index()][1] = true,
            'Q' => available[Color::White.index()][0] = true,
            'k' => available[Color::Black.index()][1] = true,
            'q' => available[Color::Black.index()][0] = true,
            '-' => {}
            _ => return Err(FenError::InvalidCastling { char: c }),
        }
    }

    let mut flags = CastlingFlags::unmoved();
    for color in Color::BOTH {
        let [queenside, kingside] = available[color.index()];
        if !kingside {
            flags.mark_rook_moved(color, true);
        }
        if !queenside {
            flags.mark_rook_moved(color, false);
        }
        if !kingside && !queenside {
            flags.mark_king_moved(color);
        }
    }
    Ok(flags)
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
