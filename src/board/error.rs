//! Errors from parsing squares, moves and FEN.

use std::fmt;

/// Why a FEN string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four fields up to and including en passant
    TooFewParts { found: usize },
    InvalidPiece { char: char },
    /// Anything other than `KQkq` or `-`
    InvalidCastling { char: char },
    InvalidSideToMove { found: String },
    InvalidEnPassant { found: String },
    /// A ninth rank in the placement field
    InvalidRank { rank: usize },
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => write!(
                f,
                "FEN needs placement, side, castling and en passant fields, found {found} field(s)"
            ),
            FenError::InvalidPiece { char } => write!(f, "Unknown piece letter '{char}' in FEN"),
            FenError::InvalidCastling { char } => {
                write!(f, "Unknown castling letter '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Side to move is '{found}', not 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "'{found}' is not an en passant square")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "FEN has more than 8 ranks (rank index {rank})")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "FEN rank {rank} describes {files} files")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a coordinate move was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Neither `e2e4` nor `e2->e4`
    InvalidFormat { notation: String },
    InvalidSquare { notation: String },
    /// Well-formed, but not playable for the side to move
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Move '{notation}' must look like 'e2e4' or 'e2->e4'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "'{notation}' names a square off the board")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not a legal move here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    /// Not a file letter `a`-`h` followed by a rank digit `1`-`8`
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "Rank index {rank} is off the board"),
            SquareError::FileOutOfBounds { file } => write!(f, "File index {file} is off the board"),
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square name")
            }
        }
    }
}

impl std::error::Error for SquareError {}
