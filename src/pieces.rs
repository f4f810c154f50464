use crate::alliances::*;
use crate::boards::*;
use crate::geometry::*;
use crate::moves::*;
use crate::positions::*;
use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used for display and move notation (upper-cased; tiles
    /// lower-case it for Black).
    pub const fn designator(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Conventional material value, used by the greedy agent.
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// An immutable piece value. A move never mutates a piece; it produces a
/// fresh copy bound to the destination with `has_moved` set (relevant for
/// pawn double pushes and castling eligibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
    pub position: Position,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, alliance: Alliance, position: Position) -> Piece {
        Piece {
            kind,
            alliance,
            position,
            has_moved: false,
        }
    }

    /// The successor piece after a move to `dest`.
    pub fn moved_to(&self, dest: Position) -> Piece {
        Piece {
            position: dest,
            has_moved: true,
            ..*self
        }
    }

    pub fn as_moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    pub fn glyph(&self) -> char {
        let c = self.kind.designator();
        match self.alliance {
            Alliance::White => c,
            Alliance::Black => c.to_ascii_lowercase(),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ---------------------------------------------
// Pseudo-legal move generation
// ---------------------------------------------
//
// Candidate destinations are flat coordinate offsets. The per-file
// exclusion sets below reproduce exactly the wrap cases where an offset
// jumps the board edge: they are keyed by (file, offset), not by any
// generic distance rule, because the bad offsets differ per file.

const KNIGHT_OFFSETS: [i16; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i16; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const BISHOP_DIRECTIONS: [i16; 4] = [-9, -7, 7, 9];
const ROOK_DIRECTIONS: [i16; 4] = [-8, -1, 1, 8];

fn knight_wraps(pos: Position, offset: i16) -> bool {
    (FILE_A[pos.index()] && matches!(offset, -17 | -10 | 6 | 15))
        || (FILE_B[pos.index()] && matches!(offset, -10 | 6))
        || (FILE_G[pos.index()] && matches!(offset, -6 | 10))
        || (FILE_H[pos.index()] && matches!(offset, -15 | -6 | 10 | 17))
}

fn king_wraps(pos: Position, offset: i16) -> bool {
    (FILE_A[pos.index()] && matches!(offset, -9 | -1 | 7))
        || (FILE_H[pos.index()] && matches!(offset, -7 | 1 | 9))
}

// A sliding step wraps under the same conditions as a king step in the
// same direction; checked against the current ray square, not the origin.
fn slide_wraps(pos: Position, direction: i16) -> bool {
    king_wraps(pos, direction)
}

fn pawn_capture_wraps(pos: Position, offset: i16, alliance: Alliance) -> bool {
    match offset {
        7 => {
            (FILE_H[pos.index()] && alliance == Alliance::White)
                || (FILE_A[pos.index()] && alliance == Alliance::Black)
        }
        9 => {
            (FILE_A[pos.index()] && alliance == Alliance::White)
                || (FILE_H[pos.index()] && alliance == Alliance::Black)
        }
        _ => unreachable!("pawn capture offsets are 7 and 9"),
    }
}

impl Piece {
    /// All moves consistent with this piece's movement pattern and the
    /// board occupancy. King safety is not considered here; the Player
    /// filters these down to legal moves.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceKind::Knight => self.stepping_moves(board, &KNIGHT_OFFSETS, knight_wraps),
            PieceKind::King => self.stepping_moves(board, &KING_OFFSETS, king_wraps),
            PieceKind::Bishop => self.sliding_moves(board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.sliding_moves(board, &ROOK_DIRECTIONS),
            PieceKind::Queen => {
                let mut moves = self.sliding_moves(board, &BISHOP_DIRECTIONS);
                moves.extend(self.sliding_moves(board, &ROOK_DIRECTIONS));
                moves
            }
            PieceKind::Pawn => self.pawn_moves(board),
        }
    }

    fn stepping_moves(
        &self,
        board: &Board,
        offsets: &[i16],
        wraps: fn(Position, i16) -> bool,
    ) -> Vec<Move> {
        let mut moves = Vec::new();
        for &offset in offsets {
            if wraps(self.position, offset) {
                continue;
            }
            let dest = match self.position.offset(offset) {
                Some(p) => p,
                None => continue,
            };
            match board.tile_at(dest).piece() {
                None => moves.push(Move::new(*self, dest, MoveKind::Quiet)),
                Some(target) if target.alliance != self.alliance => {
                    moves.push(Move::new(*self, dest, MoveKind::Capture(*target)))
                }
                // Own piece blocks the square entirely.
                Some(_) => {}
            }
        }
        moves
    }

    fn sliding_moves(&self, board: &Board, directions: &[i16]) -> Vec<Move> {
        let mut moves = Vec::new();
        for &direction in directions {
            let mut current = self.position;
            loop {
                if slide_wraps(current, direction) {
                    break;
                }
                current = match current.offset(direction) {
                    Some(p) => p,
                    None => break,
                };
                match board.tile_at(current).piece() {
                    None => moves.push(Move::new(*self, current, MoveKind::Quiet)),
                    Some(target) => {
                        if target.alliance != self.alliance {
                            moves.push(Move::new(*self, current, MoveKind::Capture(*target)));
                        }
                        break;
                    }
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        let dir = self.alliance.direction();

        if let Some(one_up) = self.position.offset(8 * dir) {
            if !board.tile_at(one_up).is_occupied() {
                moves.push(self.pawn_advance(one_up, None));

                // Double push: first move, from the home row, both the
                // passed-over and the landing square empty.
                if !self.has_moved && self.alliance.is_pawn_home(self.position) {
                    if let Some(two_up) = self.position.offset(16 * dir) {
                        if !board.tile_at(two_up).is_occupied() {
                            moves.push(Move::new(*self, two_up, MoveKind::PawnJump));
                        }
                    }
                }
            }
        }

        for &diagonal in &[7, 9] {
            if pawn_capture_wraps(self.position, diagonal, self.alliance) {
                continue;
            }
            let dest = match self.position.offset(diagonal * dir) {
                Some(p) => p,
                None => continue,
            };
            match board.tile_at(dest).piece() {
                Some(target) if target.alliance != self.alliance => {
                    moves.push(self.pawn_advance(dest, Some(*target)));
                }
                Some(_) => {}
                None => {
                    // The en-passant destination is empty; the captured
                    // pawn stands beside the mover, one row short of the
                    // target from the mover's point of view.
                    if board.en_passant_target() == Some(dest) {
                        if let Some(beside) = dest.offset(-8 * dir) {
                            if let Some(victim) = board.tile_at(beside).piece() {
                                if victim.kind == PieceKind::Pawn
                                    && victim.alliance != self.alliance
                                {
                                    moves.push(Move::new(
                                        *self,
                                        dest,
                                        MoveKind::EnPassant(*victim),
                                    ));
                                }
                            }
                        }
                    }
                }
            }
        }

        moves
    }

    /// A pawn step or capture onto the far row becomes a promotion
    /// (queen by default, see `Move::with_promotion_kind`).
    fn pawn_advance(&self, dest: Position, captured: Option<Piece>) -> Move {
        if self.alliance.is_promotion_square(dest) {
            Move::new(
                *self,
                dest,
                MoveKind::Promotion {
                    kind: PieceKind::Queen,
                    captured,
                },
            )
        } else {
            match captured {
                Some(target) => Move::new(*self, dest, MoveKind::Capture(target)),
                None => Move::new(*self, dest, MoveKind::Quiet),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces;

    fn board_with(pieces: Vec<Piece>, side: Alliance) -> Board {
        Board::new(pieces, side, None).unwrap()
    }

    fn destinations(piece: &Piece, board: &Board) -> Vec<Position> {
        let mut dests: Vec<Position> = piece
            .pseudo_legal_moves(board)
            .iter()
            .map(|m| m.end)
            .collect();
        dests.sort();
        dests
    }

    #[test]
    fn test_knight_in_corner() {
        let board = board_with(
            pieces![(Knight, White, 0), (King, White, 60), (King, Black, 4)],
            Alliance::White,
        );
        let knight = *board.tile_at(0.into()).piece().unwrap();
        assert_eq!(
            destinations(&knight, &board),
            vec![Position::from(10u8), Position::from(17u8)]
        );
    }

    #[test]
    fn test_knight_on_b_file() {
        let board = board_with(
            pieces![(Knight, White, 1), (King, White, 60), (King, Black, 4)],
            Alliance::White,
        );
        let knight = *board.tile_at(1.into()).piece().unwrap();
        // a6, d7, c6 -- the 6 offset must not wrap to h7
        assert_eq!(
            destinations(&knight, &board),
            vec![
                Position::from(11u8),
                Position::from(16u8),
                Position::from(18u8)
            ]
        );
    }

    #[test]
    fn test_king_in_corner() {
        let board = board_with(
            pieces![(King, White, 56), (King, Black, 4)],
            Alliance::White,
        );
        let king = *board.tile_at(56.into()).piece().unwrap();
        // a2, b2, b1; offset 7 must not produce h1
        assert_eq!(
            destinations(&king, &board),
            vec![
                Position::from(48u8),
                Position::from(49u8),
                Position::from(57u8)
            ]
        );
    }

    #[test]
    fn test_rook_open_board() {
        let board = board_with(
            pieces![(Rook, White, 35), (King, White, 62), (King, Black, 6)],
            Alliance::White,
        );
        let rook = *board.tile_at(35.into()).piece().unwrap();
        assert_eq!(rook.pseudo_legal_moves(&board).len(), 14);
    }

    #[test]
    fn test_bishop_ray_stops_at_pieces() {
        // Bishop d4, own pawn f6 blocks one diagonal, enemy pawn b6
        // capturable on the other.
        let board = board_with(
            pieces![
                (Bishop, White, 35),
                (Pawn, White, 21),
                (Pawn, Black, 17),
                (King, White, 62),
                (King, Black, 6)
            ],
            Alliance::White,
        );
        let bishop = *board.tile_at(35.into()).piece().unwrap();
        let moves = bishop.pseudo_legal_moves(&board);
        assert!(moves
            .iter()
            .any(|m| m.end == Position::from(17u8) && matches!(m.kind, MoveKind::Capture(_))));
        // Square behind the enemy pawn is unreachable
        assert!(!moves.iter().any(|m| m.end == Position::from(8u8)));
        // Own pawn's square and beyond are unreachable
        assert!(!moves.iter().any(|m| m.end == Position::from(21u8)));
        assert!(!moves.iter().any(|m| m.end == Position::from(14u8)));
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let board = board_with(
            pieces![(Queen, White, 35), (King, White, 63), (King, Black, 6)],
            Alliance::White,
        );
        let queen = *board.tile_at(35.into()).piece().unwrap();
        // 14 rook moves + 13 bishop moves from d4
        assert_eq!(queen.pseudo_legal_moves(&board).len(), 27);
    }

    #[test]
    fn test_pawn_pushes() {
        let board = Board::standard_start();
        let pawn = *board.tile_at(52.into()).piece().unwrap();
        // e3 and e4
        assert_eq!(
            destinations(&pawn, &board),
            vec![Position::from(36u8), Position::from(44u8)]
        );
    }

    #[test]
    fn test_pawn_blocked() {
        let board = board_with(
            pieces![
                (Pawn, White, 52),
                (Knight, Black, 44),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
        );
        let pawn = *board.tile_at(52.into()).piece().unwrap();
        assert!(pawn.pseudo_legal_moves(&board).is_empty());
    }

    #[test]
    fn test_pawn_jump_needs_both_squares_empty() {
        // e3 blocked but e4 free: neither push nor jump
        let blocked_near = board_with(
            pieces![
                (Pawn, White, 52),
                (Knight, Black, 44),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
        );
        let pawn = *blocked_near.tile_at(52.into()).piece().unwrap();
        assert!(pawn.pseudo_legal_moves(&blocked_near).is_empty());

        // e3 free but e4 occupied: single push only
        let blocked_far = board_with(
            pieces![
                (Pawn, White, 52),
                (Knight, Black, 36),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
        );
        let pawn = *blocked_far.tile_at(52.into()).piece().unwrap();
        assert_eq!(
            destinations(&pawn, &blocked_far),
            vec![Position::from(44u8)]
        );
    }

    #[test]
    fn test_pawn_captures_and_file_edge() {
        // White pawn a4 can only capture towards b5, never wrap to h5
        let board = board_with(
            pieces![
                (Pawn, White, 32),
                (Pawn, Black, 25),
                (Pawn, Black, 23),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
        );
        let pawn = *board.tile_at(32.into()).piece().unwrap();
        let moves = pawn.pseudo_legal_moves(&board);
        assert!(moves
            .iter()
            .any(|m| m.end == Position::from(25u8) && matches!(m.kind, MoveKind::Capture(_))));
        assert!(!moves.iter().any(|m| m.end == Position::from(23u8)));
    }

    #[test]
    fn test_pawn_promotion_generated() {
        let board = board_with(
            pieces![
                (Pawn, White, 8),
                (Rook, Black, 1),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
        );
        let pawn = *board.tile_at(8.into()).piece().unwrap();
        let moves = pawn.pseudo_legal_moves(&board);
        // Quiet promotion on a8 and capturing promotion on b8
        assert!(moves.iter().any(|m| m.end == Position::from(0u8)
            && matches!(
                m.kind,
                MoveKind::Promotion {
                    kind: PieceKind::Queen,
                    captured: None
                }
            )));
        assert!(moves.iter().any(|m| m.end == Position::from(1u8)
            && matches!(
                m.kind,
                MoveKind::Promotion {
                    kind: PieceKind::Queen,
                    captured: Some(_)
                }
            )));
    }

    #[test]
    fn test_en_passant_generated() {
        // Black pawn on d4 beside a White pawn that just jumped to e4
        let board = Board::new(
            pieces![
                (Pawn, Black, 35),
                (Pawn, White, 36),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::Black,
            Some(Position::from(44u8)),
        )
        .unwrap();
        let pawn = *board.tile_at(35.into()).piece().unwrap();
        let moves = pawn.pseudo_legal_moves(&board);
        assert!(moves
            .iter()
            .any(|m| m.end == Position::from(44u8) && matches!(m.kind, MoveKind::EnPassant(_))));
    }
}
