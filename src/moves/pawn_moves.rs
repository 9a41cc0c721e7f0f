//! Pawn geometry: diagonal capture targets and push direction per color.

use crate::game_state::chess_types::Color;
use crate::moves::step_tables::build_step_table;

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = build_step_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [u64; 64] = build_step_table(&[(-1, -1), (1, -1)]);

/// Squares a `color` pawn on `square` attacks diagonally.
#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

/// Square index delta of a single pawn push.
#[inline]
pub const fn pawn_push_delta(color: Color) -> i8 {
    match color {
        Color::Light => 8,
        Color::Dark => -8,
    }
}

/// Rank index (0-based) on which a `color` pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Color;

    #[test]
    fn light_pawn_attacks_from_e2() {
        let e2 = 12u8;
        assert_eq!(pawn_attacks(Color::Light, e2), (1u64 << 19) | (1u64 << 21));
    }

    #[test]
    fn dark_pawn_on_a_file_attacks_one_square() {
        let a7 = 48u8;
        assert_eq!(pawn_attacks(Color::Dark, a7), 1u64 << 41);
    }
}
