//! Ray casting for bishops, rooks and queens.
//!
//! Rays run from the origin until they leave the board or hit an occupied
//! square; the blocker square itself is included so captures can be read
//! off the mask.

use crate::game_state::chess_types::PieceKind;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn ray_attacks(square: u8, directions: &[(i8, i8)], occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    for &(file_step, rank_step) in directions {
        let mut file = (square % 8) as i8 + file_step;
        let mut rank = (square / 8) as i8 + rank_step;

        while (0..8).contains(&file) && (0..8).contains(&rank) {
            let bit = 1u64 << (rank as u32 * 8 + file as u32);
            attacks |= bit;
            if occupancy & bit != 0 {
                break;
            }
            file += file_step;
            rank += rank_step;
        }
    }
    attacks
}

#[inline]
pub fn bishop_attacks(square: u8, occupancy: u64) -> u64 {
    ray_attacks(square, &BISHOP_DIRECTIONS, occupancy)
}

#[inline]
pub fn rook_attacks(square: u8, occupancy: u64) -> u64 {
    ray_attacks(square, &ROOK_DIRECTIONS, occupancy)
}

#[inline]
pub fn queen_attacks(square: u8, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Attack mask for any sliding piece kind; empty for non-sliders.
pub fn slider_attacks(kind: PieceKind, square: u8, occupancy: u64) -> u64 {
    match kind {
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, queen_attacks, rook_attacks};

    #[test]
    fn open_board_ray_counts() {
        let d4 = 27u8;
        assert_eq!(rook_attacks(d4, 0).count_ones(), 14);
        assert_eq!(bishop_attacks(d4, 0).count_ones(), 13);
        assert_eq!(queen_attacks(d4, 0).count_ones(), 27);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }
}
