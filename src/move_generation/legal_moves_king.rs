use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{Move, MoveKind};

/// King steps plus any available castling moves.
pub fn generate_king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    generate_basic_king_moves(position, from, color, out);
    generate_castling_moves(position, from, color, out);
}

/// Single king steps only: no castling, no attack queries.
pub fn generate_basic_king_moves(
    position: &Position,
    from: Square,
    color: Color,
    out: &mut Vec<Move>,
) {
    push_target_moves(position, from, color, king_attacks(from), out);
}

fn generate_castling_moves(position: &Position, king_from: Square, color: Color, out: &mut Vec<Move>) {
    let rank = color.home_rank();
    if king_from != square_at(CASTLING_KING_FILE, rank) {
        return;
    }

    let enemy = color.opposite();
    let mut checked_in_check = None;

    for side in [CastleSide::King, CastleSide::Queen] {
        if !position.has_castling_right(color, side) {
            continue;
        }

        let (rook_file, _, king_to_file) = side.files();
        if position.piece_at(square_at(rook_file, rank)) != Some(Piece::new(PieceKind::Rook, color)) {
            continue;
        }

        // Every square strictly between king and rook must be empty.
        let (low, high) = if rook_file < CASTLING_KING_FILE {
            (rook_file + 1, CASTLING_KING_FILE)
        } else {
            (CASTLING_KING_FILE + 1, rook_file)
        };
        if (low..high).any(|file| !position.is_empty(square_at(file, rank))) {
            continue;
        }

        // Cannot castle out of check.
        let in_check = *checked_in_check
            .get_or_insert_with(|| is_square_attacked(position, king_from, enemy));
        if in_check {
            return;
        }

        // Neither the square crossed nor the destination may be attacked.
        let crossed_file = if king_to_file > CASTLING_KING_FILE {
            CASTLING_KING_FILE + 1
        } else {
            CASTLING_KING_FILE - 1
        };
        if is_square_attacked(position, square_at(crossed_file, rank), enemy)
            || is_square_attacked(position, square_at(king_to_file, rank), enemy)
        {
            continue;
        }

        out.push(Move::new(
            king_from,
            square_at(king_to_file, rank),
            MoveKind::Castle(side),
        ));
    }
}
