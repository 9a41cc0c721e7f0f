use crate::moves::step_tables::{build_step_table, KNIGHT_OFFSETS};

pub const KNIGHT_TARGETS: [u64; 64] = build_step_table(&KNIGHT_OFFSETS);

/// Squares a knight on `square` attacks.
#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_TARGETS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_targets() {
        let a1 = 0u8;
        let b3 = 17u8;
        let c2 = 10u8;
        assert_eq!(knight_attacks(a1), (1u64 << b3) | (1u64 << c2));
    }
}
