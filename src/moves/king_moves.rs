use crate::moves::step_tables::{build_step_table, KING_OFFSETS};

pub const KING_TARGETS: [u64; 64] = build_step_table(&KING_OFFSETS);

/// Squares a king on `square` attacks (no castling).
#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_TARGETS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::king_attacks;

    #[test]
    fn king_step_counts() {
        assert_eq!(king_attacks(27).count_ones(), 8);
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(4).count_ones(), 5);
    }
}
