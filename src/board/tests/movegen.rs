//! Perft counts and basic move generation checks.

use crate::board::{Board, Color, Move, Square};

struct TestPosition {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Rook endgame with en passant",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Castling on both wings",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568)],
    },
];

#[test]
fn perft_matches_reference_counts() {
    for position in TEST_POSITIONS {
        let mut board = Board::from_fen(position.fen);
        for &(depth, expected) in position.depths {
            assert_eq!(
                board.perft(depth),
                expected,
                "{} at depth {depth}",
                position.name
            );
        }
        assert_eq!(board.to_fen(), Board::from_fen(position.fen).to_fen());
    }
}

#[test]
fn white_has_twenty_opening_moves() {
    let mut board = Board::new();
    let moves = board.generate_moves(Color::White);
    assert_eq!(moves.len(), 20);
    assert!(moves.contains(&Move::new(Square(1, 4), Square(3, 4))));
    assert!(moves.contains(&Move::new(Square(0, 6), Square(2, 5))));
}

#[test]
fn black_keeps_twenty_replies_after_any_first_move() {
    let mut board = Board::new();
    for mv in board.generate_moves(Color::White) {
        assert!(board.move_piece(mv.from, mv.to));
        assert_eq!(board.generate_moves(Color::Black).len(), 20, "after {mv}");
        board.undo_move();
    }
    assert_eq!(board.history_len(), 0);
}

#[test]
fn pseudo_legal_ignores_turn_and_empty_squares() {
    let board = Board::new();
    assert!(board.pseudo_legal_destinations(Square(3, 3)).is_empty());

    let mut black_knight = board.pseudo_legal_destinations(Square(7, 1));
    black_knight.sort();
    assert_eq!(black_knight, vec![Square(5, 0), Square(5, 2)]);
}

#[test]
fn sliders_stop_at_blockers() {
    let board = Board::from_fen("4k3/8/8/3p4/8/8/3R1P2/4K3 w - - 0 1");
    let rook = board.pseudo_legal_destinations(Square(1, 3));

    // Up the file to the enemy pawn on d5, included.
    assert!(rook.contains(&Square(2, 3)));
    assert!(rook.contains(&Square(4, 3)));
    assert!(!rook.contains(&Square(5, 3)));
    // Along the rank up to, not onto, the own pawn on f2.
    assert!(rook.contains(&Square(1, 4)));
    assert!(!rook.contains(&Square(1, 5)));
    assert_eq!(rook.len(), 3 + 3 + 1 + 1);
}

#[test]
fn queen_moves_are_rook_and_bishop_rays() {
    let board = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
    assert_eq!(board.pseudo_legal_destinations(Square(3, 3)).len(), 27);
}

#[test]
fn pinned_piece_has_no_legal_moves() {
    let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert_eq!(board.pseudo_legal_destinations(Square(1, 4)).len(), 6);
    assert!(board.legal_destinations(Square(1, 4)).is_empty());
}

#[test]
fn busiest_known_position_fits_the_move_list() {
    let mut board = Board::from_fen("R6R/3Q4/1Q4Q1/4Q3/2Q4Q/Q4Q2/pp1Q4/kBNN1KB1 w - - 0 1");
    assert_eq!(board.generate_moves(Color::White).len(), 218);
}
