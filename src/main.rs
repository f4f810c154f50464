use chessling::agents::*;
use chessling::{Game, GameStatus};

// ---------------------------------------------
// Main
// ---------------------------------------------
//
// Small demo shell around the engine. Run plain for a spectator game of
// random vs. greedy, or `cargo run -- human` to take the white pieces
// yourself (squares are entered in algebraic notation, e.g. e2 / e4).

fn main() {
    let human = std::env::args().any(|arg| arg == "human");

    let (status, final_board) = if human {
        let mut game = Game::new(HumanAgent::new(), GreedyMaterialAgent::new());
        let status = game.play(400);
        (status, game.board().clone())
    } else {
        let mut game = Game::new(
            RandomAgent::new(),
            SlowAgent::new(GreedyMaterialAgent::new(), 300),
        );
        let status = game.play(200);
        (status, game.board().clone())
    };

    println!("{}\n", final_board);
    match status {
        GameStatus::CheckMate => {
            println!("Checkmate! {} wins.", final_board.side_to_move().opposite())
        }
        GameStatus::StaleMate => println!("Stalemate."),
        _ => println!("Game stopped after the move cap."),
    }
}
