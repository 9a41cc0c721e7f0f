//! Const-built target tables for pieces that move by fixed offsets.

/// File/rank offsets for the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// File/rank offsets for the eight king steps.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// For every square, the mask of on-board squares reached by `offsets`.
pub const fn build_step_table<const N: usize>(offsets: &[(i8, i8); N]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut mask = 0u64;
        let mut i = 0usize;

        while i < N {
            let f = file + offsets[i].0;
            let r = rank + offsets[i].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                mask |= 1u64 << (r as usize * 8 + f as usize);
            }
            i += 1;
        }

        table[sq] = mask;
        sq += 1;
    }

    table
}
