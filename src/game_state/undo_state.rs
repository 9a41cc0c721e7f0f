use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`.
///
/// Holds everything the move destroyed, so unmaking restores the previous
/// position exactly, including rights, the en-passant target and the
/// captured-piece lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from the
    /// destination for en passant).
    pub captured: Option<(Square, Piece)>,

    pub prev_side_to_move: Color,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
