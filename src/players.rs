use crate::alliances::*;
use crate::boards::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;

// ---------------------------------------------
// Players
// ---------------------------------------------

/// Outcome classification for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    CheckMate,
    StaleMate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::CheckMate | GameStatus::StaleMate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Done,
    IllegalMove,
}

/// Result of asking a player to make a move. An illegal request is not an
/// error: the status says so and the board comes back unchanged.
#[derive(Debug)]
pub struct MoveTransition {
    pub board: Board,
    pub status: MoveStatus,
}

/// A per-side view over a board, computed on demand and never stored:
/// the king, whether it is attacked, and the fully filtered legal move
/// list (pseudo-legal moves plus synthesized castles, minus everything
/// that would leave the own king attacked). The opponent view is simply
/// `Player::new(board, alliance.opposite())`.
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
    king: Piece,
    in_check: bool,
    legal_moves: Vec<Move>,
}

/// The subset of `moves` whose destination is `pos`. Used for check
/// detection and for castle-path safety.
pub fn calculate_attacks_on<'m>(pos: Position, moves: &'m [Move]) -> Vec<&'m Move> {
    moves.iter().filter(|m| m.end == pos).collect()
}

/// Simulates the move and asks whether the mover's king square is among
/// the opponent's pseudo-legal destinations afterwards.
fn leaves_king_in_check(board: &Board, mv: &Move, king: &Piece) -> bool {
    let next = mv.apply(board);
    let king_pos = if mv.piece.kind == PieceKind::King {
        mv.end
    } else {
        king.position
    };
    next.pseudo_legal_moves(mv.piece.alliance.opposite())
        .iter()
        .any(|reply| reply.end == king_pos)
}

impl<'a> Player<'a> {
    pub fn new(board: &'a Board, alliance: Alliance) -> Player<'a> {
        let opponent_pseudo = board.pseudo_legal_moves(alliance.opposite());
        let king = *board
            .pieces(alliance)
            .iter()
            .find(|p| p.kind == PieceKind::King)
            .expect("board invariant: exactly one king per side");
        let in_check = !calculate_attacks_on(king.position, &opponent_pseudo).is_empty();

        let mut legal_moves: Vec<Move> = board
            .pseudo_legal_moves(alliance)
            .into_iter()
            .chain(castle_moves(board, alliance, &king, in_check, &opponent_pseudo))
            .filter(|mv| !leaves_king_in_check(board, mv, &king))
            .collect();
        // Deterministic ordering, so equal boards always enumerate their
        // moves identically.
        legal_moves.sort_by_key(|mv| (mv.start.get(), mv.end.get()));

        Player {
            board,
            alliance,
            king,
            in_check,
            legal_moves,
        }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn king(&self) -> &Piece {
        &self.king
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.in_check && self.legal_moves.is_empty()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.in_check && self.legal_moves.is_empty()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_in_checkmate() {
            GameStatus::CheckMate
        } else if self.is_in_stalemate() {
            GameStatus::StaleMate
        } else if self.in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// The sole mutation-producing entry point: applies the move if it is
    /// in the legal set (promotion kind aside, see `Move::matches`) and
    /// reports `IllegalMove` with the unchanged board otherwise.
    pub fn make_move(&self, mv: &Move) -> MoveTransition {
        if self.legal_moves.iter().any(|legal| legal.matches(mv)) {
            MoveTransition {
                board: mv.apply(self.board),
                status: MoveStatus::Done,
            }
        } else {
            MoveTransition {
                board: self.board.clone(),
                status: MoveStatus::IllegalMove,
            }
        }
    }
}

/// Castle synthesis. Every condition that fails silently omits the castle;
/// nothing here is an error. The coordinate sets per alliance and side
/// mirror each other across the board.
fn castle_moves(
    board: &Board,
    alliance: Alliance,
    king: &Piece,
    in_check: bool,
    opponent_pseudo: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    if king.has_moved || in_check {
        return castles;
    }

    let empty = |coord: u8| !board.tile_at(coord.into()).is_occupied();
    let unattacked =
        |coord: u8| calculate_attacks_on(coord.into(), opponent_pseudo).is_empty();
    let eligible_rook = |coord: u8| -> Option<Piece> {
        board
            .tile_at(coord.into())
            .piece()
            .filter(|r| r.kind == PieceKind::Rook && r.alliance == alliance && !r.has_moved)
            .copied()
    };

    // Kingside: the two squares between king and rook must be empty and
    // the king crosses both of them.
    let (between, rook_from, king_to, rook_to) = match alliance {
        Alliance::White => ([61u8, 62u8], 63u8, 62u8, 61u8),
        Alliance::Black => ([5, 6], 7, 6, 5),
    };
    if between.iter().all(|&c| empty(c) && unattacked(c)) {
        if let Some(rook) = eligible_rook(rook_from) {
            castles.push(Move::new(
                *king,
                king_to.into(),
                MoveKind::CastleKingside {
                    rook,
                    rook_from: rook_from.into(),
                    rook_to: rook_to.into(),
                },
            ));
        }
    }

    // Queenside: three squares between king and rook must be empty, but
    // the king only crosses the two next to it -- the rook's neighbour
    // square may be attacked.
    let (between, crossed, rook_from, king_to, rook_to) = match alliance {
        Alliance::White => ([57u8, 58u8, 59u8], [58u8, 59u8], 56u8, 58u8, 59u8),
        Alliance::Black => ([1, 2, 3], [2, 3], 0, 2, 3),
    };
    if between.iter().all(|&c| empty(c)) && crossed.iter().all(|&c| unattacked(c)) {
        if let Some(rook) = eligible_rook(rook_from) {
            castles.push(Move::new(
                *king,
                king_to.into(),
                MoveKind::CastleQueenside {
                    rook,
                    rook_from: rook_from.into(),
                    rook_to: rook_to.into(),
                },
            ));
        }
    }

    castles
}

/// Standard move-generation benchmark: the number of leaf positions
/// reachable in exactly `depth` legal moves.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    board
        .current_player()
        .legal_moves()
        .iter()
        .map(|mv| perft(&mv.apply(board), depth - 1))
        .sum()
}
