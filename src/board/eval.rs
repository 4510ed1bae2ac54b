use super::{Board, Color};

/// Sum of piece values on the board, White positive.
#[must_use]
pub fn material_balance(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, color, piece)| color.sign() * piece.value())
        .sum()
}

/// Material balance seen from `perspective`: positive means `perspective` is ahead.
#[must_use]
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    perspective.sign() * material_balance(board)
}
