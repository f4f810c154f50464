use crate::chess_errors::*;
use crate::positions::*;
use array_const_fn_init::array_const_fn_init;
use array_init::array_init;
use lazy_static::lazy_static;
use std::collections::HashMap;

// ---------------------------------------------
// Board Geometry
// ---------------------------------------------
//
// Static membership tables over the 64 board coordinates. Their single
// job is to stop stepping and sliding pieces from wrapping around the
// board edge: a knight on the a-file must not reach the h-file of the
// neighbouring row just because the flat offset arithmetic lands there.
//
//     a   b   c   d   e   f   g   h
//    --------------------------------
// 8 | 0   1   2   3   4   5   6   7  | 8
// 7 | 8   9   10  11  12  13  14  15 | 7
// 6 | 16  17  18  19  20  21  22  23 | 6
// 5 | 24  25  26  27  28  29  30  31 | 5
// 4 | 32  33  34  35  36  37  38  39 | 4
// 3 | 40  41  42  43  44  45  46  47 | 3
// 2 | 48  49  50  51  52  53  54  55 | 2
// 1 | 56  57  58  59  60  61  62  63 | 1
//    --------------------------------
//    a   b   c   d   e   f   g   h

pub const NUM_TILES: usize = 64;
pub const TILES_PER_ROW: usize = 8;

/// True iff the (possibly offset-shifted) coordinate still names a tile.
pub const fn is_valid_coord(coord: i16) -> bool {
    coord >= 0 && coord < NUM_TILES as i16
}

const fn file_a(i: usize) -> bool {
    i % TILES_PER_ROW == 0
}

const fn file_b(i: usize) -> bool {
    i % TILES_PER_ROW == 1
}

const fn file_g(i: usize) -> bool {
    i % TILES_PER_ROW == 6
}

const fn file_h(i: usize) -> bool {
    i % TILES_PER_ROW == 7
}

// Row numbering starts at rank 8; rank 7 holds Black's pawns,
// rank 2 White's.
const fn rank_8(i: usize) -> bool {
    i / TILES_PER_ROW == 0
}

const fn rank_7(i: usize) -> bool {
    i / TILES_PER_ROW == 1
}

const fn rank_2(i: usize) -> bool {
    i / TILES_PER_ROW == 6
}

const fn rank_1(i: usize) -> bool {
    i / TILES_PER_ROW == 7
}

pub const FILE_A: [bool; 64] = array_const_fn_init![file_a; 64];
pub const FILE_B: [bool; 64] = array_const_fn_init![file_b; 64];
pub const FILE_G: [bool; 64] = array_const_fn_init![file_g; 64];
pub const FILE_H: [bool; 64] = array_const_fn_init![file_h; 64];
pub const RANK_8: [bool; 64] = array_const_fn_init![rank_8; 64];
pub const RANK_7: [bool; 64] = array_const_fn_init![rank_7; 64];
pub const RANK_2: [bool; 64] = array_const_fn_init![rank_2; 64];
pub const RANK_1: [bool; 64] = array_const_fn_init![rank_1; 64];

/// File membership for arbitrary files (0 = a, 7 = h).
pub const fn on_file(coord: usize, file: usize) -> bool {
    coord % TILES_PER_ROW == file
}

/// Rank membership in chess numbering (1..=8, rank 8 at the top row).
pub const fn on_rank(coord: usize, rank: usize) -> bool {
    coord / TILES_PER_ROW == TILES_PER_ROW - rank
}

const FILE_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

lazy_static! {
    /// Algebraic square name ("a8".."h1") for every coordinate.
    pub static ref ALGEBRAIC_NOTATION: [String; 64] = array_init(|i| {
        format!("{}{}", FILE_NAMES[i % TILES_PER_ROW], TILES_PER_ROW - i / TILES_PER_ROW)
    });

    /// Reverse lookup used by `Position::from_str`.
    pub static ref COORDINATE_FROM_ALGEBRAIC: HashMap<String, Position> = {
        let mut m = HashMap::with_capacity(NUM_TILES);
        for p in Position::all_positions() {
            m.insert(ALGEBRAIC_NOTATION[p.index()].clone(), p);
        }
        m
    };
}

/// Checked conversion from an untrusted integer coordinate.
pub fn checked_position(coord: i16) -> ChessResult<Position> {
    if is_valid_coord(coord) {
        Ok(Position::from(coord as u8))
    } else {
        Err(ChessError::InvalidCoordinate(coord.to_string()))
    }
}
