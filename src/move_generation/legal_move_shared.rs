use crate::game_state::position::{BitIter, Position};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};

/// Emit a quiet or capture move for every square in `targets` not held by
/// `color`'s own pieces.
#[inline]
pub fn push_target_moves(
    position: &Position,
    from: Square,
    color: Color,
    targets: u64,
    out: &mut Vec<Move>,
) {
    let enemy_occ = position.occupancy(color.opposite());
    for to in BitIter(targets & !position.occupancy(color)) {
        let kind = if (1u64 << to) & enemy_occ != 0 {
            MoveKind::Capture
        } else {
            MoveKind::Quiet
        };
        out.push(Move::new(from, to, kind));
    }
}
