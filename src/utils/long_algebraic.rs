//! Coordinate move text (`e2e4`, `e7e8q`) to and from [`Move`].
//!
//! Parsing resolves the text against the legal moves of a position, so the
//! returned move always carries the right variant tag.

use crate::chess_errors::ChessError;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_generator::moves_from;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(piece) = mv.promotion_piece() {
        out.push(piece.letter().to_ascii_lowercase());
    }
    out
}

/// Resolve `text` to a legal move of the side to move.
///
/// A promotion without a suffix comes back with no piece chosen.
pub fn long_algebraic_to_move(text: &str, position: &Position) -> Result<Move, ChessError> {
    let invalid = || ChessError::InvalidLongAlgebraic(text.to_owned());
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    let promotion = match text.chars().nth(4) {
        Some(ch) => Some(char_to_promotion(ch).ok_or_else(invalid)?),
        None => None,
    };

    let illegal = ChessError::IllegalMove { from, to };
    match position.piece_at(from) {
        Some(piece) if piece.color == position.side_to_move => {}
        _ => return Err(illegal),
    }

    let mv = moves_from(position, from)
        .into_iter()
        .find(|m| m.to == to)
        .ok_or(illegal)?;

    match (mv.is_promotion(), promotion) {
        (true, Some(piece)) => Ok(mv.with_promotion(piece)),
        (_, None) => Ok(mv),
        (false, Some(_)) => Err(invalid()),
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;
    use crate::game_state::position::Position;
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn double_push_resolves_with_its_tag() {
        let position = Position::new_game();
        let mv = long_algebraic_to_move("e2e4", &position).expect("e2e4 should be legal");
        assert_eq!(mv.kind, MoveKind::DoublePawnPush);
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn promotion_suffix_chooses_the_piece() {
        let position =
            Position::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8n", &position).expect("promotion should parse");
        assert_eq!(mv.promotion_piece(), Some(PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(mv), "a7a8n");

        let pending = long_algebraic_to_move("a7a8", &position).expect("bare promotion parses");
        assert!(pending.is_promotion());
        assert_eq!(pending.promotion_piece(), None);
    }

    #[test]
    fn castling_text_maps_to_castle_move() {
        let position =
            Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e1c1", &position).expect("castle should parse");
        assert_eq!(mv.kind, MoveKind::Castle(CastleSide::Queen));
    }

    #[test]
    fn wrong_side_or_illegal_targets_are_rejected() {
        let position = Position::new_game();
        assert!(matches!(
            long_algebraic_to_move("e7e5", &position),
            Err(ChessError::IllegalMove { .. })
        ));
        assert!(matches!(
            long_algebraic_to_move("e2e5", &position),
            Err(ChessError::IllegalMove { .. })
        ));
        assert!(matches!(
            long_algebraic_to_move("e2e4q", &position),
            Err(ChessError::InvalidLongAlgebraic(_))
        ));
        assert!(long_algebraic_to_move("zz", &position).is_err());
    }
}
