/// Differing kinds of agents that can play the game
use crate::boards::Board;
use crate::game::Agent;
use crate::moves::Move;
use crate::positions::Position;
use std::io::{stdout, Write};
use text_io::read;

pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }
}

impl Agent for HumanAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        let player = board.current_player();
        loop {
            println!("Your turn: ");
            print!("From: ");
            stdout().flush().unwrap();
            let from: String = read!();
            print!("To: ");
            stdout().flush().unwrap();
            let to: String = read!();

            if let (Ok(from), Ok(to)) = (from.parse::<Position>(), to.parse::<Position>()) {
                if let Some(mv) = player
                    .legal_moves()
                    .iter()
                    .find(|m| m.start == from && m.end == to)
                {
                    return mv.clone();
                }
            }
            println!("Not a legal move, try again.");
        }
    }
}

pub struct RandomAgent {}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {}
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        use rand::seq::SliceRandom;
        let rng = &mut rand::thread_rng();
        board
            .current_player()
            .legal_moves()
            .choose(rng)
            .expect("no playable moves left")
            .clone()
    }
}

/// Picks the move leaving the best one-ply material balance, breaking
/// ties randomly via an up-front shuffle.
pub struct GreedyMaterialAgent {}

impl GreedyMaterialAgent {
    pub fn new() -> Self {
        GreedyMaterialAgent {}
    }
}

impl Agent for GreedyMaterialAgent {
    fn choose_move(&mut self, board: &Board) -> Move {
        use rand::seq::SliceRandom;

        let player = board.current_player();
        let alliance = player.alliance();
        let mut moves: Vec<Move> = player.legal_moves().to_vec();
        moves.shuffle(&mut rand::thread_rng());

        let mut best_move = None;
        let mut best_material_gain: i32 = i32::MIN;
        for mv in moves {
            let next = mv.apply(board);
            let our_material = next.material_value(alliance);
            let enemy_material = next.material_value(alliance.opposite());
            let material_gain = our_material as i32 - enemy_material as i32;

            if material_gain > best_material_gain {
                best_move = Some(mv);
                best_material_gain = material_gain;
            }
        }

        best_move.expect("no playable moves left")
    }
}

pub struct SlowAgent<A: Agent> {
    inner: A,
    response_time_millis: u64,
}

impl<A: Agent> SlowAgent<A> {
    pub fn new(agent: A, response_time_millis: u64) -> Self {
        SlowAgent {
            inner: agent,
            response_time_millis,
        }
    }
}

impl<A: Agent> Agent for SlowAgent<A> {
    fn choose_move(&mut self, board: &Board) -> Move {
        std::thread::sleep(std::time::Duration::from_millis(self.response_time_millis));
        self.inner.choose_move(board)
    }
}
