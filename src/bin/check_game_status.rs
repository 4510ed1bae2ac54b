use std::env;
use std::process::ExitCode;

use minimax_chess::board::Board;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_game_status [--fen <fen>] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let (mut board, moves) = match args.iter().position(|a| a == "--fen") {
        Some(idx) => {
            let Some(fen) = args.get(idx + 1) else {
                eprintln!("--fen needs a value");
                return ExitCode::FAILURE;
            };
            match Board::try_from_fen(fen) {
                Ok(board) => (board, &args[idx + 2..]),
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => (Board::new(), &args[..]),
    };

    for notation in moves {
        if let Err(e) = board.apply_move_str(notation) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let side = board.side_to_move();
    let legal_moves = board.generate_moves(side);
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {side}");
    println!("legal_moves: {}", legal_moves.len());
    println!("in_check: {}", board.is_in_check(side));
    println!("checkmate: {}", board.is_checkmate(side));
    println!("stalemate: {}", board.is_stalemate(side));
    println!("status: {}", board.status());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
