//! FEN-to-Position parser.
//!
//! Accepts the four mandatory fields (board, side, castling, en passant);
//! the halfmove and fullmove clocks are optional and validated but not kept.

use crate::chess_errors::ChessError;
use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessError> {
    let invalid = |why: &str| ChessError::InvalidFen(format!("{why}: '{fen}'"));
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(4..=6).contains(&fields.len()) {
        return Err(invalid("expected 4 to 6 fields"));
    }

    let mut position = Position::new_empty();
    parse_board(fields[0], &mut position).map_err(|why| invalid(&why))?;
    position.side_to_move = parse_side_to_move(fields[1]).ok_or_else(|| invalid("bad side to move"))?;
    position.castling_rights =
        parse_castling_rights(fields[2]).ok_or_else(|| invalid("bad castling rights"))?;
    position.en_passant_square = match fields[3] {
        "-" => None,
        square => Some(algebraic_to_square(square).map_err(|_| invalid("bad en-passant square"))?),
    };

    for clock in fields.iter().skip(4) {
        clock.parse::<u16>().map_err(|_| invalid("bad move clock"))?;
    }

    Ok(position)
}

/// Fill `position` from a FEN piece-placement field (rank 8 first).
pub fn parse_board(board_part: &str, position: &mut Position) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err("board rank has too many files".to_owned());
                }
                continue;
            }

            let piece =
                Piece::from_char(ch).ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            if file >= 8 {
                return Err("board rank has too many files".to_owned());
            }
            position.put(square_at(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(format!("rank '{rank_str}' does not sum to 8 files"));
        }
    }

    Ok(())
}

pub fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::Light),
        "b" => Some(Color::Dark),
        _ => None,
    }
}

pub fn parse_castling_rights(castling_part: &str) -> Option<CastlingRights> {
    if castling_part == "-" {
        return Some(0);
    }
    if castling_part.is_empty() {
        return None;
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        let bit = match ch {
            'K' => CASTLE_LIGHT_KINGSIDE,
            'Q' => CASTLE_LIGHT_QUEENSIDE,
            'k' => CASTLE_DARK_KINGSIDE,
            'q' => CASTLE_DARK_QUEENSIDE,
            _ => return None,
        };
        rights |= bit;
    }
    Some(rights)
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(position.side_to_move, Color::Light);
        assert_eq!(position.castling_rights, CASTLE_ALL);
        assert_eq!(position.occupancy_all().count_ones(), 32);
        assert_eq!(
            position.piece_at(square_at(4, 0)),
            Some(Piece::new(PieceKind::King, Color::Light))
        );
    }

    #[test]
    fn clocks_are_optional() {
        let position =
            parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3").expect("four-field FEN should parse");
        assert_eq!(position.side_to_move, Color::Dark);
        assert_eq!(position.en_passant_square, Some(square_at(4, 2)));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8 w - -",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9",
        ] {
            assert!(parse_fen(bad).is_err(), "'{bad}' should be rejected");
        }
    }
}
