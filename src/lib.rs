//! A chess rules engine built on immutable snapshots: every move
//! application produces a fresh board, pieces are values that are copied
//! (never mutated) when they move, and each side's legal moves are a
//! view computed on demand from the current position.
//!
//! The core flow: [`Board::standard_start`] builds the opening position,
//! [`Board::current_player`] derives the side to move's [`Player`] view
//! (pseudo-legal generation, castle synthesis, king-safety filtering),
//! and [`Player::make_move`] applies one of its legal moves, yielding a
//! [`MoveTransition`] with the successor board. Everything is pure and
//! synchronous; shared boards are safe to read concurrently.
#[macro_use]
extern crate impl_ops;

pub mod agents;
pub mod alliances;
pub mod boards;
pub mod chess_errors;
pub mod game;
pub mod geometry;
pub mod moves;
pub mod pieces;
pub mod players;
pub mod positions;
pub mod utils;

pub use alliances::Alliance;
pub use boards::{Board, Tile};
pub use chess_errors::{ChessError, ChessResult};
pub use game::{Agent, Game};
pub use moves::{Move, MoveKind};
pub use pieces::{Piece, PieceKind};
pub use players::{
    calculate_attacks_on, perft, GameStatus, MoveStatus, MoveTransition, Player,
};
pub use positions::Position;
