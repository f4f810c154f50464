use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Failures of the engine interface. Illegal move attempts are NOT errors;
/// they are reported through `MoveStatus::IllegalMove` and leave the board
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ChessError {
    /// A coordinate outside 0..63 (or an unparseable algebraic square)
    /// was passed to a query.
    InvalidCoordinate(String),
    /// A board was constructed that breaks the structural invariants
    /// (doubly occupied square, missing or duplicated king).
    InvariantViolation(String),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;

impl From<String> for ChessError {
    fn from(s: String) -> ChessError {
        ChessError::InvariantViolation(s)
    }
}

impl From<&str> for ChessError {
    fn from(s: &str) -> ChessError {
        ChessError::InvariantViolation(s.to_string())
    }
}

impl Error for ChessError {}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChessError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            ChessError::InvariantViolation(s) => write!(f, "Board invariant violated: {}", s),
        }
    }
}
