use crate::geometry::*;
use crate::positions::*;
use std::fmt::{self, Display};

// ---------------------------------------------
// Alliances
// ---------------------------------------------

/// One of the two sides. Carries the forward direction of its pawns
/// (White advances towards row 0, Black towards row 7) and knows its
/// pawn home row and promotion row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    /// Row multiplier for "one step forward": candidate offsets are
    /// scaled by this, so 8 becomes -8 for White and +8 for Black.
    pub const fn direction(self) -> i16 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    pub const fn opposite(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// The row this alliance's pawns start on, where double pushes are
    /// allowed from.
    pub fn is_pawn_home(self, pos: Position) -> bool {
        match self {
            Alliance::White => RANK_2[pos.index()],
            Alliance::Black => RANK_7[pos.index()],
        }
    }

    /// The farthest row from this alliance; pawns arriving here promote.
    pub fn is_promotion_square(self, pos: Position) -> bool {
        match self {
            Alliance::White => RANK_8[pos.index()],
            Alliance::Black => RANK_1[pos.index()],
        }
    }
}

impl Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}
