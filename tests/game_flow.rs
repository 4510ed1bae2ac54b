use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_chess::board::{Board, Bot, Color, GameStatus, MoveParseError, Piece, SearchConfig};

#[test]
fn scripted_game_reaches_mate() {
    let mut board = Board::new();
    for notation in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        board
            .apply_move_str(notation)
            .unwrap_or_else(|e| panic!("{notation}: {e}"));
    }

    assert_eq!(board.status(), GameStatus::Checkmate { winner: Color::White });
    assert_eq!(
        board.formatted_move_list(),
        "1. e2->e4 e7->e5\n2. f1->c4 b8->c6\n3. d1->h5 g8->f6\n4. h5->f7"
    );
    assert!(matches!(
        board.apply_move_str("e8f7"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn undo_walks_the_game_back_to_the_start() {
    let mut board = Board::new();
    let start = board.to_fen();
    for notation in ["d2d4", "d7d5", "c1f4", "c8f5", "e2e3", "e7e6"] {
        board.apply_move_str(notation).unwrap();
    }
    while board.history_len() > 0 {
        board.undo_move();
    }
    assert_eq!(board.to_fen(), start);
    assert!(board.move_log().is_empty());
}

#[test]
fn bots_play_a_legal_game() {
    let mut board = Board::new();
    let mut white = Bot::seeded(SearchConfig::with_depth(1), 1);
    let mut black = Bot::with_rng(SearchConfig::with_depth(2), StdRng::seed_from_u64(2));

    for _ in 0..40 {
        if board.status().is_game_over() {
            break;
        }
        let side = board.side_to_move();
        let legal = board.generate_moves(side);
        let mv = match side {
            Color::White => white.play(&mut board),
            Color::Black => black.play(&mut board),
        }
        .expect("side to move has a legal move");
        assert!(legal.contains(&mv), "{mv} was not legal");
        assert!(!board.is_in_check(side), "{side} left in check after {mv}");

        if let Some(sq) = board.promotion_square() {
            board.set_piece(sq, side, Piece::Queen);
        }
    }
    assert!(!board.move_log().is_empty());
}
