use crate::alliances::*;
use crate::boards::*;
use crate::moves::*;
use crate::players::*;

// ---------------------------------------------
// Game loop
// ---------------------------------------------

/// An agent is an object that can play chess by choosing moves
/// appropriate to the current board. Implementations are expected to
/// pick from `current_player().legal_moves()`; anything else is
/// rejected by the game loop and the agent is simply asked again.
pub trait Agent {
    fn choose_move(&mut self, board: &Board) -> Move;
}

/// Drives two agents against each other over the engine's narrow
/// query/command interface. The loop owns nothing but the current board
/// snapshot; every move produces a fresh one.
pub struct Game<W: Agent, B: Agent> {
    board: Board,
    white: W,
    black: B,
}

impl<W: Agent, B: Agent> Game<W, B> {
    pub fn new(white: W, black: B) -> Game<W, B> {
        Game {
            board: Board::standard_start(),
            white,
            black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until checkmate, stalemate or the ply cap. Returns the
    /// classification of the side to move on the final board.
    pub fn play(&mut self, max_plies: usize) -> GameStatus {
        for _ in 0..max_plies {
            let status = self.board.current_player().status();
            if status.is_terminal() {
                break;
            }
            println!("{}\n", self.board);

            let mv = match self.board.side_to_move() {
                Alliance::White => self.white.choose_move(&self.board),
                Alliance::Black => self.black.choose_move(&self.board),
            };
            let transition = self.board.current_player().make_move(&mv);
            match transition.status {
                MoveStatus::Done => {
                    println!("{} plays {}", self.board.side_to_move(), mv);
                    self.board = transition.board;
                }
                MoveStatus::IllegalMove => {
                    println!("{} attempted the illegal {}", self.board.side_to_move(), mv);
                }
            }
        }
        self.board.current_player().status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;

    #[test]
    fn test_capped_random_game() {
        let mut game = Game::new(RandomAgent::new(), RandomAgent::new());
        let status = game.play(40);
        // Either the cap was reached or the game actually ended; both
        // leave a coherent board behind.
        assert_eq!(game.board().current_player().status(), status);
        assert!(game.board().all_pieces().count() <= 32);
    }
}
