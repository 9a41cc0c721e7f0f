use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_target_moves(position, from, color, knight_attacks(from), out);
}
