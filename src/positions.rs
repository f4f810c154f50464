use crate::chess_errors::*;
use crate::geometry;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Chessboard positions on a 8x8 board.
//
// Numbered row-major from Black's back rank, as shown in geometry.rs:
// a8 is 0, h8 is 7, a1 is 56, h1 is 63.
//
// ---------------------------------------------
// Positions
// ---------------------------------------------

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl From<u8> for Position {
    fn from(u: u8) -> Self {
        debug_assert!(u < 64, "Invalid position: {}", u);
        Position(u)
    }
}

impl From<usize> for Position {
    fn from(u: usize) -> Self {
        (u as u8).into()
    }
}

impl From<i32> for Position {
    fn from(u: i32) -> Self {
        (u as u8).into()
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        geometry::COORDINATE_FROM_ALGEBRAIC
            .get(s)
            .copied()
            .ok_or_else(|| ChessError::InvalidCoordinate(s.to_string()))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", geometry::ALGEBRAIC_NOTATION[self.0 as usize])
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct PositionIterator(u8);

impl Iterator for PositionIterator {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 > 63 {
            None
        } else {
            self.0 = self.0 + 1u8;
            Some((self.0 - 1).into())
        }
    }
}

impl Position {
    /// Returns row and col from position.
    /// Example: Position 63 (h1 on the chess board) is mapped to (7,7).
    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / 8, self.0 % 8)
    }

    /// Transforms a row and a col to a Position on the board.
    /// Row and col must correspond to a legal board position.
    pub fn from_row_col(row: u8, col: u8) -> Position {
        debug_assert!(Position::in_board(row as i16, col as i16));
        (row * 8 + col).into()
    }

    /// Checks if row and col belong to a legal board position.
    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < 8 && col < 8
    }

    /// Shifts the position by a flat coordinate offset. None if the result
    /// falls off the board. File-wrap handling is the caller's business
    /// (see the geometry exclusion tables).
    pub fn offset(self, delta: i16) -> Option<Position> {
        let target = self.0 as i16 + delta;
        if geometry::is_valid_coord(target) {
            Some(Position(target as u8))
        } else {
            None
        }
    }

    /// Allows access to the underlying u8. Should only be used when necessary.
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Allows to iterate over all positions on the board.
    pub fn all_positions() -> PositionIterator {
        PositionIterator(0)
    }
}

impl_op_ex_commutative!(+ |a: &Position, b: &u8| -> Position { Position::from(a.0 + b) });
