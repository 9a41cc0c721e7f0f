//! Pawn pushes, double pushes, captures, en passant and promotions.

use crate::game_state::position::BitIter;
use crate::game_state::{chess_types::*, position::Position};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::{pawn_attacks, pawn_push_delta, promotion_rank};

pub fn generate_pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let delta = pawn_push_delta(color);
    let last_rank = promotion_rank(color);

    // Pawns never stand on their own last rank, so one step stays on board.
    let one_step = (from as i8 + delta) as Square;
    if rank_of(from) != last_rank && position.is_empty(one_step) {
        if rank_of(one_step) == last_rank {
            out.push(Move::new(
                from,
                one_step,
                MoveKind::Promotion {
                    capture: false,
                    piece: None,
                },
            ));
        } else {
            out.push(Move::new(from, one_step, MoveKind::Quiet));

            if rank_of(from) == color.pawn_rank() {
                let two_step = (one_step as i8 + delta) as Square;
                if position.is_empty(two_step) {
                    out.push(Move::new(from, two_step, MoveKind::DoublePawnPush));
                }
            }
        }
    }

    let enemy_occ = position.occupancy(color.opposite());
    for to in BitIter(pawn_attacks(color, from)) {
        if (1u64 << to) & enemy_occ != 0 {
            let kind = if rank_of(to) == last_rank {
                MoveKind::Promotion {
                    capture: true,
                    piece: None,
                }
            } else {
                MoveKind::Capture
            };
            out.push(Move::new(from, to, kind));
        } else if position.en_passant_square == Some(to) && position.is_empty(to) {
            out.push(Move::new(from, to, MoveKind::EnPassant));
        }
    }
}
