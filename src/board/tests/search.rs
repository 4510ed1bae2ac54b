//! Minimax bot tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::search::Minimax;
use crate::board::{
    evaluate, find_best_move, material_balance, search, Board, Bot, Color, Difficulty, Move,
    SearchConfig, Square,
};

fn mv(from: &str, to: &str) -> Move {
    Move::new(from.parse().unwrap(), to.parse().unwrap())
}

#[test]
fn material_is_balanced_at_the_start() {
    let board = Board::new();
    assert_eq!(material_balance(&board), 0);
    assert_eq!(evaluate(&board, Color::Black), 0);

    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    assert_eq!(material_balance(&board), -400);
    assert_eq!(evaluate(&board, Color::White), -400);
    assert_eq!(evaluate(&board, Color::Black), 400);
}

#[test]
fn unique_best_capture_is_always_found() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        for depth in [1, 2] {
            let result = search(&board, Color::White, depth, &mut rng);
            assert_eq!(result.best_move, Some(mv("d1", "d5")), "seed {seed} depth {depth}");
            assert_eq!(result.score, 500);
        }
    }
}

#[test]
fn ties_resolve_within_the_best_set() {
    let board = Board::from_fen("4k3/8/8/8/n2Q3n/8/8/4K3 w - - 0 1");
    let best = [mv("d4", "a4"), mv("d4", "h4")];

    let mut seen = Vec::new();
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen = find_best_move(&board, Color::White, 1, &mut rng).unwrap();
        assert!(best.contains(&chosen), "seed {seed} picked {chosen}");
        if !seen.contains(&chosen) {
            seen.push(chosen);
        }
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn deeper_search_sees_the_recapture() {
    let board = Board::from_fen("3qk3/8/8/8/8/8/8/3RK3 b - - 0 1");
    let mut rng = StdRng::seed_from_u64(3);

    let shallow = search(&board, Color::Black, 1, &mut rng);
    assert_eq!(shallow.best_move, Some(mv("d8", "d1")));
    assert_eq!(shallow.score, 900);

    let deep = search(&board, Color::Black, 2, &mut rng);
    assert_ne!(deep.best_move, Some(mv("d8", "d1")));
    assert_eq!(deep.score, 400);
    assert!(deep.stats.nodes > shallow.stats.nodes);
}

#[test]
fn depth_zero_is_a_leaf() {
    let mut board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let mut engine = Minimax::new(Color::Black);
    let score = engine.alpha_beta(&mut board, 0, i32::MIN, i32::MAX);

    assert_eq!(score, evaluate(&board, Color::Black));
    assert_eq!(engine.stats.nodes, 1);
    assert_eq!(engine.stats.leaves, 1);
}

#[test]
fn depth_zero_request_searches_one_ply() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        find_best_move(&board, Color::White, 0, &mut rng),
        Some(mv("d1", "d5"))
    );
}

#[test]
fn no_move_for_a_mated_side() {
    let mut board = Board::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        board.move_piece(from.parse().unwrap(), to.parse().unwrap());
    }
    let mut rng = StdRng::seed_from_u64(0);
    let result = search(&board, Color::White, 3, &mut rng);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, evaluate(&board, Color::White));

    let mut bot = Bot::seeded(SearchConfig::with_depth(2), 0);
    assert_eq!(bot.play(&mut board), None);
    assert_eq!(board.move_log().len(), 4);
}

#[test]
fn search_leaves_the_board_untouched() {
    let mut board = Board::new();
    board.move_piece(Square(1, 4), Square(3, 4));
    let fen = board.to_fen();

    let mut rng = StdRng::seed_from_u64(11);
    let result = search(&board, Color::Black, 3, &mut rng);
    assert!(result.best_move.is_some());
    assert!(result.stats.cutoffs > 0);
    assert_eq!(board.to_fen(), fen);
    assert_eq!(board.history_len(), 1);
}

#[test]
fn search_can_answer_for_the_side_not_to_move() {
    let board = Board::from_fen("4k3/8/8/3q4/8/8/8/3RK3 b - - 0 1");
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(
        find_best_move(&board, Color::White, 1, &mut rng),
        Some(mv("d1", "d5"))
    );
}

#[test]
fn seeded_bots_agree() {
    let board = Board::new();
    let config = SearchConfig::from(Difficulty::Easy);
    let first = Bot::seeded(config, 42).choose_move(&board, Color::White);
    let second = Bot::seeded(config, 42).choose_move(&board, Color::White);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn bot_play_applies_its_move() {
    let mut board = Board::new();
    let mut bot = Bot::seeded(SearchConfig::with_depth(1), 9);
    let white = bot.play(&mut board).unwrap();
    let black = bot.play(&mut board).unwrap();

    assert_eq!(board.move_log(), [white.to_string(), black.to_string()]);
    assert!(board.white_to_move());
    assert_eq!(board.color_on(black.to), Some(Color::Black));
}

#[test]
fn difficulty_maps_to_depth() {
    assert_eq!(SearchConfig::from(Difficulty::Easy).depth, 2);
    assert_eq!(SearchConfig::from(Difficulty::Medium).depth, 3);
    assert_eq!(SearchConfig::from(Difficulty::Hard).depth, 4);
    assert_eq!(SearchConfig::default().depth, 3);
    for difficulty in Difficulty::ALL {
        let bot = Bot::seeded(SearchConfig::from(difficulty), 1);
        assert_eq!(bot.config().depth, difficulty.depth());
    }
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert!("extreme".parse::<Difficulty>().is_err());
}
