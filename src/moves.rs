use crate::boards::*;
use crate::pieces::*;
use crate::positions::*;
use std::fmt;

// ---------------------------------------------
// Moves
// ---------------------------------------------

/// An immutable state-transition descriptor. Applying it yields a fresh
/// board; neither the move nor the source board is ever mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    pub piece: Piece,
    pub start: Position,
    pub end: Position,
    pub kind: MoveKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MoveKind {
    Quiet,
    Capture(Piece),
    /// Pawn double push; makes the jumped-over square the en-passant
    /// target of the resulting board.
    PawnJump,
    /// Diagonal pawn capture onto the (empty) en-passant target. The
    /// captured pawn is the variant payload, which does NOT stand on the
    /// destination square.
    EnPassant(Piece),
    CastleKingside {
        rook: Piece,
        rook_from: Position,
        rook_to: Position,
    },
    CastleQueenside {
        rook: Piece,
        rook_from: Position,
        rook_to: Position,
    },
    Promotion {
        kind: PieceKind,
        captured: Option<Piece>,
    },
}

impl Move {
    pub fn new(piece: Piece, end: Position, kind: MoveKind) -> Move {
        Move {
            start: piece.position,
            piece,
            end,
            kind,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn captured_piece(&self) -> Option<&Piece> {
        match &self.kind {
            MoveKind::Capture(piece) | MoveKind::EnPassant(piece) => Some(piece),
            MoveKind::Promotion {
                captured: Some(piece),
                ..
            } => Some(piece),
            _ => None,
        }
    }

    fn castle_rook(&self) -> Option<&Piece> {
        match &self.kind {
            MoveKind::CastleKingside { rook, .. } | MoveKind::CastleQueenside { rook, .. } => {
                Some(rook)
            }
            _ => None,
        }
    }

    /// Replaces the promoted kind chosen by the generator (queen) with the
    /// consumer's choice. A no-op on anything but a promotion.
    pub fn with_promotion_kind(mut self, kind: PieceKind) -> Move {
        if let MoveKind::Promotion {
            kind: ref mut promoted,
            ..
        } = self.kind
        {
            *promoted = kind;
        }
        self
    }

    /// Same transition up to the promoted kind; used by `make_move` so a
    /// consumer-overridden promotion still matches the legal set.
    pub fn matches(&self, other: &Move) -> bool {
        if self.piece != other.piece || self.end != other.end {
            return false;
        }
        match (&self.kind, &other.kind) {
            (
                MoveKind::Promotion { captured: a, .. },
                MoveKind::Promotion { captured: b, .. },
            ) => a == b,
            (a, b) => a == b,
        }
    }

    /// Pure transition: builds the successor board. The moved piece is
    /// replaced by its `moved_to` copy, the captured piece (if any)
    /// removed, a castling rook relocated. The side to move flips and the
    /// en-passant target is set for a pawn jump and cleared otherwise.
    pub fn apply(&self, board: &Board) -> Board {
        let mut pieces = Vec::with_capacity(32);
        for piece in board.all_pieces() {
            if *piece == self.piece
                || Some(piece) == self.captured_piece()
                || Some(piece) == self.castle_rook()
            {
                continue;
            }
            pieces.push(*piece);
        }

        match &self.kind {
            MoveKind::Promotion { kind, .. } => {
                pieces.push(Piece::new(*kind, self.piece.alliance, self.end).as_moved());
            }
            MoveKind::CastleKingside { rook, rook_to, .. }
            | MoveKind::CastleQueenside { rook, rook_to, .. } => {
                pieces.push(self.piece.moved_to(self.end));
                pieces.push(rook.moved_to(*rook_to));
            }
            _ => pieces.push(self.piece.moved_to(self.end)),
        }

        let en_passant_target = if let MoveKind::PawnJump = self.kind {
            self.start.offset(8 * self.piece.alliance.direction())
        } else {
            None
        };

        // apply is only ever fed moves generated against `board`, and
        // those preserve the construction invariants.
        Board::new(pieces, self.piece.alliance.opposite(), en_passant_target)
            .expect("move application left the board in an invalid state")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MoveKind::CastleKingside { .. } => write!(f, "O-O"),
            MoveKind::CastleQueenside { .. } => write!(f, "O-O-O"),
            MoveKind::Promotion { kind, captured } => write!(
                f,
                "{}{}{}{}={}",
                self.piece.kind.designator(),
                self.start,
                if captured.is_some() { "x" } else { "" },
                self.end,
                kind.designator()
            ),
            _ => write!(
                f,
                "{}{}{}{}",
                self.piece.kind.designator(),
                self.start,
                if self.is_attack() { "x" } else { "" },
                self.end
            ),
        }
    }
}
