//! Check oracle.
//!
//! Answers "is this square attacked" by raw reachability: pawn diagonals,
//! knight jumps, plain king steps and blocked rays. Castling never counts as
//! an attack and no own-king legality filter runs here, so the generator can
//! call into this module without recursing.

use crate::game_state::{chess_types::*, position::Position};
use crate::game_state::position::BitIter;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};

/// True when `color`'s king is attacked.
///
/// # Panics
/// Panics when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let king_sq = position.king_square(color);
    is_square_attacked(position, king_sq, color.opposite())
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    !attackers_to_square(position, square, attacker_color, true).is_empty()
}

/// Pieces of `attacker_color` that attack `square`. With `first_only` the
/// scan stops at the first attacker found.
pub fn attackers_to_square(
    position: &Position,
    square: Square,
    attacker_color: Color,
    first_only: bool,
) -> Vec<(Square, PieceKind)> {
    let mut attackers = Vec::new();
    let occupancy = position.occupancy_all();
    let attacker_occ = position.occupancy(attacker_color);

    // Reverse lookups: a piece of kind K on X attacks `square` exactly when a
    // K on `square` would reach X (pawns use the defender's diagonals).
    let probes: [(u64, &[PieceKind]); 5] = [
        (pawn_attacks(attacker_color.opposite(), square), &[PieceKind::Pawn]),
        (knight_attacks(square), &[PieceKind::Knight]),
        (king_attacks(square), &[PieceKind::King]),
        (bishop_attacks(square, occupancy), &[PieceKind::Bishop, PieceKind::Queen]),
        (rook_attacks(square, occupancy), &[PieceKind::Rook, PieceKind::Queen]),
    ];

    for (mask, kinds) in probes {
        for from in BitIter(mask & attacker_occ) {
            let Some(piece) = position.piece_at(from) else {
                continue;
            };
            if kinds.contains(&piece.kind) {
                attackers.push((from, piece.kind));
                if first_only {
                    return attackers;
                }
            }
        }
    }

    attackers
}
