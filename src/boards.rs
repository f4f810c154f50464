use crate::alliances::*;
use crate::chess_errors::*;
use crate::geometry;
use crate::moves::*;
use crate::pieces::*;
use crate::players::*;
use crate::positions::*;
use array_init::array_init;
use std::fmt::{self, Display};

// ---------------------------------------------
// Board Types
// ---------------------------------------------

/// A tile is a read-only projection of the piece snapshot: either empty
/// or holding exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Empty(Position),
    Occupied(Position, Piece),
}

impl Tile {
    pub fn coordinate(&self) -> Position {
        match self {
            Tile::Empty(pos) | Tile::Occupied(pos, _) => *pos,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_, _))
    }

    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "-"),
            Tile::Occupied(_, piece) => write!(f, "{}", piece),
        }
    }
}

// Displays the first 64 items from an iterator in a chessboard style:
//
//   a  b  c  d  e  f  g  h
// 8 i1 i2 i3 ...        8
// 7 ....
//
// Where i1,...i64 are the items of the iterator.
// It is required that the iterator has at least 64 items, else we will
// return with an error.
fn display_chessboard_style<I, C>(it: &mut I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = C>,
    C: Display,
{
    write!(f, " ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    for row in 0..8 {
        write!(f, "\n{} ", 8 - row)?;
        for _col in 0..8 {
            let i = it.next().expect("Iterator ended too early");
            write!(f, "{} ", i)?;
        }
        write!(f, "{} ", 8 - row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..'i' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

/// An immutable position snapshot: the 64-tile projection, the per-side
/// piece collections, whose turn it is, and the square (if any) a pawn
/// jumped over on the immediately preceding move.
///
/// A board is fully determined at construction; making a move builds a
/// disjoint new board (`Move::apply`). Players are not stored: they are
/// transient views computed on demand, which keeps the representation
/// free of reference cycles.
#[derive(Clone, PartialEq)]
pub struct Board {
    tiles: [Tile; 64],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Alliance,
    en_passant_target: Option<Position>,
}

impl Board {
    /// Builds a board from a full piece list, checking the structural
    /// invariants: one piece per square, exactly one king per side.
    pub fn new(
        pieces: Vec<Piece>,
        side_to_move: Alliance,
        en_passant_target: Option<Position>,
    ) -> ChessResult<Board> {
        let mut occupancy: [Option<Piece>; 64] = [None; 64];
        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        let mut white_kings = 0;
        let mut black_kings = 0;

        for piece in pieces {
            let slot = &mut occupancy[piece.position.index()];
            if let Some(other) = slot {
                return Err(ChessError::InvariantViolation(format!(
                    "{} and {} both placed on {}",
                    other, piece, piece.position
                )));
            }
            *slot = Some(piece);
            match piece.alliance {
                Alliance::White => {
                    white_pieces.push(piece);
                    if piece.kind == PieceKind::King {
                        white_kings += 1;
                    }
                }
                Alliance::Black => {
                    black_pieces.push(piece);
                    if piece.kind == PieceKind::King {
                        black_kings += 1;
                    }
                }
            }
        }

        if white_kings != 1 || black_kings != 1 {
            return Err(ChessError::InvariantViolation(format!(
                "each side needs exactly one king, got {} white / {} black",
                white_kings, black_kings
            )));
        }

        let tiles = array_init(|i| match occupancy[i] {
            Some(piece) => Tile::Occupied(i.into(), piece),
            None => Tile::Empty(i.into()),
        });

        Ok(Board {
            tiles,
            white_pieces,
            black_pieces,
            side_to_move,
            en_passant_target,
        })
    }

    /// The canonical initial position: White to move, no en-passant
    /// target, nothing has moved yet.
    pub fn standard_start() -> Board {
        use crate::pieces::PieceKind::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut pieces = Vec::with_capacity(32);
        for (col, &kind) in back_rank.iter().enumerate() {
            pieces.push(Piece::new(kind, Alliance::Black, Position::from(col)));
            pieces.push(Piece::new(
                kind,
                Alliance::White,
                Position::from(56 + col),
            ));
        }
        for col in 0..8usize {
            pieces.push(Piece::new(Pawn, Alliance::Black, Position::from(8 + col)));
            pieces.push(Piece::new(Pawn, Alliance::White, Position::from(48 + col)));
        }

        Board::new(pieces, Alliance::White, None)
            .expect("standard setup failed; board in invalid state")
    }

    pub fn tile_at(&self, pos: Position) -> &Tile {
        &self.tiles[pos.index()]
    }

    /// Query entry point for untrusted integer coordinates.
    pub fn tile_at_coord(&self, coord: i16) -> ChessResult<&Tile> {
        let pos = geometry::checked_position(coord)?;
        Ok(self.tile_at(pos))
    }

    pub fn pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    /// Union of the pseudo-legal moves of one side's pieces.
    pub fn pseudo_legal_moves(&self, alliance: Alliance) -> Vec<Move> {
        self.pieces(alliance)
            .iter()
            .flat_map(|piece| piece.pseudo_legal_moves(self))
            .collect()
    }

    pub fn material_value(&self, alliance: Alliance) -> u32 {
        self.pieces(alliance).iter().map(|p| p.kind.value()).sum()
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, Alliance::Black)
    }

    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.side_to_move)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_chessboard_style(&mut self.tiles.iter(), f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {}  En passant: {:?}\n{}",
            self.side_to_move, self.en_passant_target, self
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces;

    #[test]
    fn test_standard_start_layout() {
        let board = Board::standard_start();

        assert_eq!(board.side_to_move(), Alliance::White);
        assert_eq!(board.en_passant_target(), None);
        assert_eq!(board.pieces(Alliance::White).len(), 16);
        assert_eq!(board.pieces(Alliance::Black).len(), 16);

        let expect_kind = |coord: usize, kind: PieceKind, alliance: Alliance| {
            let piece = board.tile_at(coord.into()).piece().unwrap();
            assert_eq!(piece.kind, kind);
            assert_eq!(piece.alliance, alliance);
            assert!(!piece.has_moved);
        };

        expect_kind(0, PieceKind::Rook, Alliance::Black);
        expect_kind(3, PieceKind::Queen, Alliance::Black);
        expect_kind(4, PieceKind::King, Alliance::Black);
        expect_kind(12, PieceKind::Pawn, Alliance::Black);
        expect_kind(52, PieceKind::Pawn, Alliance::White);
        expect_kind(59, PieceKind::Queen, Alliance::White);
        expect_kind(60, PieceKind::King, Alliance::White);
        expect_kind(63, PieceKind::Rook, Alliance::White);

        for coord in 16..48usize {
            assert!(!board.tile_at(coord.into()).is_occupied());
        }
    }

    #[test]
    fn test_tiles_match_piece_sets() {
        let board = Board::standard_start();
        for piece in board.all_pieces() {
            assert_eq!(board.tile_at(piece.position).piece(), Some(piece));
        }
    }

    #[test]
    fn test_double_occupancy_rejected() {
        let result = Board::new(
            pieces![
                (Rook, White, 0),
                (Knight, White, 0),
                (King, White, 60),
                (King, Black, 4)
            ],
            Alliance::White,
            None,
        );
        assert!(matches!(result, Err(ChessError::InvariantViolation(_))));
    }

    #[test]
    fn test_missing_king_rejected() {
        let result = Board::new(
            pieces![(Rook, White, 0), (King, Black, 4)],
            Alliance::White,
            None,
        );
        assert!(matches!(result, Err(ChessError::InvariantViolation(_))));
    }

    #[test]
    fn test_out_of_range_query() {
        let board = Board::standard_start();
        assert!(board.tile_at_coord(12).is_ok());
        assert!(matches!(
            board.tile_at_coord(64),
            Err(ChessError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            board.tile_at_coord(-1),
            Err(ChessError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_display_grid() {
        let text = Board::standard_start().to_string();
        let second_line = text.lines().nth(1).unwrap();
        assert_eq!(second_line.trim(), "8 r n b q k b n r 8");
        let pawn_line = text.lines().nth(2).unwrap();
        assert_eq!(pawn_line.trim(), "7 p p p p p p p p 7");
        let empty_line = text.lines().nth(3).unwrap();
        assert_eq!(empty_line.trim(), "6 - - - - - - - - 6");
        let white_line = text.lines().nth(8).unwrap();
        assert_eq!(white_line.trim(), "1 R N B Q K B N R 1");
    }
}
