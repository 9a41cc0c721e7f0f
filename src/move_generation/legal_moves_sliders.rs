//! Bishop, rook and queen move generation by ray casting.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::slider_attacks;

pub fn generate_slider_moves(
    position: &Position,
    from: Square,
    kind: PieceKind,
    color: Color,
    out: &mut Vec<Move>,
) {
    let targets = slider_attacks(kind, from, position.occupancy_all());
    push_target_moves(position, from, color, targets, out);
}
