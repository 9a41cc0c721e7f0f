use crate::game_state::{chess_types::*, position::Position};
use crate::utils::algebraic::square_to_algebraic;

/// Full FEN; the clocks are not tracked and always read `0 1`.
pub fn generate_fen(position: &Position) -> String {
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };

    format!(
        "{} {} {} {} 0 1",
        generate_board_field(position),
        side_to_move,
        generate_castling_field(position.castling_rights),
        generate_en_passant_field(position.en_passant_square),
    )
}

/// Piece-placement field only, rank 8 first. Also the opening-book key.
pub fn generate_board_field(position: &Position) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            match position.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (bit, ch) in [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ] {
        if rights & bit != 0 {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

pub fn generate_en_passant_field(square: Option<Square>) -> String {
    square.map_or_else(|| "-".to_owned(), square_to_algebraic)
}
