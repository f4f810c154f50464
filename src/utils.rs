// For testing purposes: easily creates the piece list for a synthetic
// board. Positions are plain coordinates (0..63).
//
//     let board = Board::new(
//         pieces![(King, White, 60), (Rook, White, 63), (King, Black, 4)],
//         Alliance::White,
//         None,
//     )?;
#[macro_export]
macro_rules! pieces {
    ( $( ($kind:ident, $alliance:ident, $pos:expr) ),* $(,)? ) => {
        vec![
            $(
                $crate::pieces::Piece::new(
                    $crate::pieces::PieceKind::$kind,
                    $crate::alliances::Alliance::$alliance,
                    $crate::positions::Position::from($pos as u8),
                )
            ),*
        ]
    };
}
