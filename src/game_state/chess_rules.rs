//! Starting placements and pre-game setup rules.
//!
//! Covers the standard start, Chess960 back-rank shuffles and handicap piece
//! removal. Castling rights for non-standard setups are derived from the
//! resulting placement.

use rand::Rng;

use crate::game_state::chess_types::*;
use crate::game_state::game_config::{GameConfig, Handicap};
use crate::game_state::position::Position;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Random Chess960 back rank, files a..h.
///
/// Bishops go on opposite-colored squares, then the queen and both knights on
/// random free files; the three files left take rook, king, rook in order so
/// the king always stands between its rooks.
pub fn chess960_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    let mut rank: [Option<PieceKind>; 8] = [None; 8];

    const LIGHT_FILES: [usize; 4] = [1, 3, 5, 7];
    const DARK_FILES: [usize; 4] = [0, 2, 4, 6];
    rank[LIGHT_FILES[rng.random_range(0..4)]] = Some(PieceKind::Bishop);
    rank[DARK_FILES[rng.random_range(0..4)]] = Some(PieceKind::Bishop);

    for kind in [PieceKind::Queen, PieceKind::Knight, PieceKind::Knight] {
        let free = free_files(&rank);
        rank[free[rng.random_range(0..free.len())]] = Some(kind);
    }

    let free = free_files(&rank);
    for (file, kind) in free
        .into_iter()
        .zip([PieceKind::Rook, PieceKind::King, PieceKind::Rook])
    {
        rank[file] = Some(kind);
    }

    rank.map(|cell| match cell {
        Some(kind) => kind,
        None => unreachable!("all eight files are filled"),
    })
}

fn free_files(rank: &[Option<PieceKind>; 8]) -> Vec<usize> {
    (0..8).filter(|&file| rank[file].is_none()).collect()
}

/// Position with both sides' back ranks set to `back_rank` and full pawn
/// ranks. Castling rights follow from placement.
pub fn position_with_back_rank(back_rank: &[PieceKind; 8]) -> Position {
    let mut position = Position::new_empty();
    for color in [Color::Light, Color::Dark] {
        for (file, &kind) in back_rank.iter().enumerate() {
            position.put(square_at(file as u8, color.home_rank()), Piece::new(kind, color));
            position.put(
                square_at(file as u8, color.pawn_rank()),
                Piece::new(PieceKind::Pawn, color),
            );
        }
    }
    position.castling_rights = position.castling_rights_from_placement();
    position
}

/// Strip the handicapped side's pieces.
///
/// `Q`, `R`, `B` and `N` clear every matching piece on the side's home rank;
/// `P` clears the whole pawn rank. Rights are recomputed afterwards.
pub fn apply_handicap(position: &mut Position, handicap: &Handicap) {
    let side = handicap.side;
    for &kind in &handicap.pieces {
        let rank = match kind {
            PieceKind::Pawn => side.pawn_rank(),
            PieceKind::King => continue,
            _ => side.home_rank(),
        };
        for file in 0..8 {
            let square = square_at(file, rank);
            if position.piece_at(square) == Some(Piece::new(kind, side)) {
                position.take(square);
            }
        }
    }
    position.castling_rights = position.castling_rights_from_placement();
}

/// Initial position for a new game under `config`.
pub fn initial_position<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Position {
    let mut position = if config.chess960 {
        position_with_back_rank(&chess960_back_rank(rng))
    } else {
        Position::new_game()
    };
    if let Some(handicap) = &config.handicap {
        apply_handicap(&mut position, handicap);
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn standard_back_rank_matches_start_fen() {
        let position = position_with_back_rank(&STANDARD_BACK_RANK);
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn chess960_ranks_obey_placement_rules() {
        let mut rng = StdRng::seed_from_u64(960);
        for _ in 0..200 {
            let rank = chess960_back_rank(&mut rng);
            let files_of = |kind: PieceKind| -> Vec<usize> {
                (0..8).filter(|&f| rank[f] == kind).collect()
            };

            let bishops = files_of(PieceKind::Bishop);
            assert_eq!(bishops.len(), 2);
            assert_ne!(bishops[0] % 2, bishops[1] % 2, "bishops share a color: {rank:?}");

            let rooks = files_of(PieceKind::Rook);
            let king = files_of(PieceKind::King);
            assert_eq!(rooks.len(), 2);
            assert_eq!(king.len(), 1);
            assert!(rooks[0] < king[0] && king[0] < rooks[1], "king outside rooks: {rank:?}");

            assert_eq!(files_of(PieceKind::Queen).len(), 1);
            assert_eq!(files_of(PieceKind::Knight).len(), 2);
        }
    }

    #[test]
    fn chess960_mirrors_both_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let position = position_with_back_rank(&chess960_back_rank(&mut rng));
        for file in 0..8 {
            let light = position.piece_at(square_at(file, 0)).expect("white back rank is full");
            let dark = position.piece_at(square_at(file, 7)).expect("black back rank is full");
            assert_eq!(light.kind, dark.kind);
        }
    }

    #[test]
    fn handicap_removes_named_pieces_and_rights() {
        let mut position = Position::new_game();
        apply_handicap(
            &mut position,
            &Handicap {
                side: Color::Dark,
                pieces: vec![PieceKind::Queen, PieceKind::Rook],
            },
        );
        assert_eq!(position.piece_at(square_at(3, 7)), None);
        assert_eq!(position.piece_at(square_at(0, 7)), None);
        assert_eq!(position.piece_at(square_at(7, 7)), None);
        assert_eq!(position.castling_rights, CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE);
        assert_eq!(position.count_kings(Color::Dark), 1);
    }

    #[test]
    fn pawn_handicap_clears_pawn_rank() {
        let mut position = Position::new_game();
        apply_handicap(
            &mut position,
            &Handicap {
                side: Color::Light,
                pieces: vec![PieceKind::Pawn],
            },
        );
        assert!((0..8).all(|file| position.is_empty(square_at(file, 1))));
        assert_eq!(position.castling_rights, CASTLE_ALL);
    }
}
