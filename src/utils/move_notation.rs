//! Short algebraic notation for the move log.
//!
//! Piece letter (none for pawns), origin file for pawn captures, `x` on a
//! capture, then the destination. Castling prints as `O-O` / `O-O-O` and en
//! passant gets an ` e.p.` suffix. No check or promotion markers.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::{file_char, square_to_algebraic};

pub fn move_notation(moved: PieceKind, mv: Move) -> String {
    match mv.kind {
        MoveKind::Castle(CastleSide::King) => return "O-O".to_owned(),
        MoveKind::Castle(CastleSide::Queen) => return "O-O-O".to_owned(),
        _ => {}
    }

    let mut out = String::with_capacity(10);
    if moved == PieceKind::Pawn {
        if mv.is_capture() {
            out.push(file_char(mv.from));
        }
    } else {
        out.push(moved.letter());
    }
    if mv.is_capture() {
        out.push('x');
    }
    out.push_str(&square_to_algebraic(mv.to));
    if mv.kind == MoveKind::EnPassant {
        out.push_str(" e.p.");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::move_notation;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::{Move, MoveKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str, kind: MoveKind) -> Move {
        Move::new(
            algebraic_to_square(from).expect("from square"),
            algebraic_to_square(to).expect("to square"),
            kind,
        )
    }

    #[test]
    fn notation_follows_piece_and_capture_rules() {
        assert_eq!(move_notation(PieceKind::Pawn, mv("e2", "e4", MoveKind::DoublePawnPush)), "e4");
        assert_eq!(move_notation(PieceKind::Knight, mv("g1", "f3", MoveKind::Quiet)), "Nf3");
        assert_eq!(move_notation(PieceKind::Bishop, mv("c4", "f7", MoveKind::Capture)), "Bxf7");
        assert_eq!(move_notation(PieceKind::Pawn, mv("e4", "d5", MoveKind::Capture)), "exd5");
    }

    #[test]
    fn special_moves_have_their_own_forms() {
        assert_eq!(
            move_notation(PieceKind::King, mv("e1", "g1", MoveKind::Castle(CastleSide::King))),
            "O-O"
        );
        assert_eq!(
            move_notation(PieceKind::King, mv("e8", "c8", MoveKind::Castle(CastleSide::Queen))),
            "O-O-O"
        );
        assert_eq!(
            move_notation(PieceKind::Pawn, mv("e5", "d6", MoveKind::EnPassant)),
            "exd6 e.p."
        );
        let promo = MoveKind::Promotion {
            capture: true,
            piece: Some(PieceKind::Queen),
        };
        assert_eq!(move_notation(PieceKind::Pawn, mv("b7", "a8", promo)), "bxa8");
    }
}
