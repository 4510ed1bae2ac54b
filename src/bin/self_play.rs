use std::env;
use std::process::ExitCode;

use minimax_chess::board::{Board, Bot, Difficulty, Piece, SearchConfig};

const MAX_PLIES: usize = 200;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let difficulty = match args.next().map(|s| s.parse::<Difficulty>()) {
        None => Difficulty::default(),
        Some(Ok(d)) => d,
        Some(Err(e)) => {
            let names: Vec<String> = Difficulty::ALL
                .iter()
                .map(|d| format!("{d:?}").to_lowercase())
                .collect();
            eprintln!("{e}; expected one of: {}", names.join(", "));
            return ExitCode::FAILURE;
        }
    };
    let config = SearchConfig::from(difficulty);
    let mut bot = match args.next().map(|s| s.parse::<u64>()) {
        None => Bot::new(config),
        Some(Ok(seed)) => Bot::seeded(config, seed),
        Some(Err(e)) => {
            eprintln!("invalid seed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut board = Board::new();
    for _ in 0..MAX_PLIES {
        if board.status().is_game_over() {
            break;
        }
        let side = board.side_to_move();
        if bot.play(&mut board).is_none() {
            break;
        }
        if let Some(sq) = board.promotion_square() {
            board.set_piece(sq, side, Piece::Queen);
        }
    }

    println!("{}", board.formatted_move_list());
    let status = board.status();
    if status.is_game_over() {
        println!("{status}");
    } else {
        println!("No result after {} plies.", board.move_log().len());
    }
    ExitCode::SUCCESS
}
