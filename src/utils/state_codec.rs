//! Game code: a compact printable string holding a whole position.
//!
//! The payload is six `|`-separated fields:
//!
//! ```text
//! board|side|captured white|captured black|castling|en passant
//! ```
//!
//! The board field is the FEN placement field; captured lists are piece
//! letters in capture order (upper case white, lower case black). The payload
//! bytes are hex encoded, the hex digest cut into 10-digit groups, and each
//! group written in base 36; groups are joined with `-`.

use crate::chess_errors::CodecError;
use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::en_passant_victim_square;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::fen_generator::{
    generate_board_field, generate_castling_field, generate_en_passant_field,
};
use crate::utils::fen_parser::{parse_board, parse_castling_rights};

const HEX_GROUP_LEN: usize = 10;
const GROUP_MAX: u64 = (1 << (HEX_GROUP_LEN * 4)) - 1;
const TOKEN_SEPARATOR: &str = "-";
const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 6;

pub fn encode(position: &Position) -> String {
    let side = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let captured = |color: Color| -> String {
        position
            .captured_of(color)
            .iter()
            .map(|&kind| Piece::new(kind, color).to_char())
            .collect()
    };

    let payload = [
        generate_board_field(position),
        side.to_owned(),
        captured(Color::Light),
        captured(Color::Dark),
        generate_castling_field(position.castling_rights),
        generate_en_passant_field(position.en_passant_square),
    ]
    .join("|");

    compact(&payload)
}

/// Decode a game code. Any malformed or truncated code is rejected.
pub fn decode(code: &str) -> Result<Position, CodecError> {
    let payload = expand(code)?;
    let fields: Vec<&str> = payload.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(CodecError::FieldCount(fields.len()));
    }

    let mut position = Position::new_empty();

    if let Some(bad) = fields[0]
        .chars()
        .find(|&ch| ch != '/' && !ch.is_ascii_digit() && Piece::from_char(ch).is_none())
    {
        return Err(CodecError::InvalidPiece(bad));
    }
    parse_board(fields[0], &mut position).map_err(CodecError::InvalidBoard)?;

    position.side_to_move = match fields[1] {
        "w" => Color::Light,
        "b" => Color::Dark,
        other => return Err(CodecError::InvalidSideToMove(other.to_owned())),
    };

    for (field, color) in [(fields[2], Color::Light), (fields[3], Color::Dark)] {
        for ch in field.chars() {
            match Piece::from_char(ch) {
                Some(piece) if piece.color == color && piece.kind != PieceKind::King => {
                    position.captured[color.index()].push(piece.kind);
                }
                _ => return Err(CodecError::InvalidCapturedPiece(ch)),
            }
        }
    }

    position.castling_rights = parse_castling_rights(fields[4])
        .ok_or_else(|| CodecError::InvalidCastling(fields[4].to_owned()))?;

    for color in [Color::Light, Color::Dark] {
        let count = position.count_kings(color);
        if count != 1 {
            return Err(CodecError::KingCount { color, count });
        }
    }

    if is_king_in_check(&position, position.side_to_move.opposite()) {
        return Err(CodecError::OpponentInCheck);
    }

    position.en_passant_square = match fields[5] {
        "-" => None,
        text => Some(
            en_passant_target(&position, text)
                .ok_or_else(|| CodecError::InvalidEnPassant(text.to_owned()))?,
        ),
    };

    Ok(position)
}

/// The target must sit on the mover's capture rank, be empty, and have the
/// opponent pawn that just double-pushed right behind it.
fn en_passant_target(position: &Position, text: &str) -> Option<Square> {
    let square = algebraic_to_square(text).ok()?;
    let mover = position.side_to_move;
    let capture_rank = match mover {
        Color::Light => 5,
        Color::Dark => 2,
    };
    if rank_of(square) != capture_rank || !position.is_empty(square) {
        return None;
    }
    let pawn = Piece::new(PieceKind::Pawn, mover.opposite());
    let victim = en_passant_victim_square(mover, square);
    (position.piece_at(victim) == Some(pawn)).then_some(square)
}

/// Text to base-36 token string.
pub fn compact(payload: &str) -> String {
    let hex: String = payload.bytes().map(|b| format!("{b:02x}")).collect();

    hex.as_bytes()
        .chunks(HEX_GROUP_LEN)
        .map(|chunk| {
            // Hex digits are ASCII, so every chunk is valid UTF-8 and valid hex.
            let digits = std::str::from_utf8(chunk).unwrap_or_default();
            to_base36(u64::from_str_radix(digits, 16).unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}

/// Inverse of [`compact`]. Groups are left padded to full width and the NUL
/// bytes that padding produces are dropped.
pub fn expand(code: &str) -> Result<String, CodecError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(CodecError::Empty);
    }

    let mut bytes = Vec::with_capacity(code.len());
    for token in code.split(TOKEN_SEPARATOR) {
        let valid = !token.is_empty() && token.chars().all(|ch| ch.is_ascii_alphanumeric());
        if !valid {
            return Err(CodecError::InvalidToken(token.to_owned()));
        }
        let value = u64::from_str_radix(token, 36)
            .map_err(|_| CodecError::TokenOutOfRange(token.to_owned()))?;
        if value > GROUP_MAX {
            return Err(CodecError::TokenOutOfRange(token.to_owned()));
        }
        bytes.extend(
            value.to_be_bytes()[8 - HEX_GROUP_LEN / 2..]
                .iter()
                .copied()
                .filter(|&b| b != 0),
        );
    }

    if !bytes.iter().all(|&b| (0x20..0x7f).contains(&b)) {
        return Err(CodecError::NonAsciiPayload);
    }
    String::from_utf8(bytes).map_err(|_| CodecError::NonAsciiPayload)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::with_capacity(8);
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn play(position: &mut Position, moves: &[&str]) {
        for text in moves {
            let mv = long_algebraic_to_move(text, position).expect("scripted move is legal");
            make_move(position, mv);
        }
    }

    #[test]
    fn compact_matches_the_reference_grouping() {
        // "Hello" is 48656c6c6f, one full group.
        assert_eq!(compact("Hello"), to_base36(0x48656c6c6f));
        assert_eq!(expand(&compact("Hello")).expect("should expand"), "Hello");

        // Seven bytes: one full group plus a four-digit tail.
        let code = compact("Hello!?");
        assert_eq!(code.split('-').count(), 2);
        assert_eq!(expand(&code).expect("should expand"), "Hello!?");
    }

    #[test]
    fn start_position_round_trips() {
        let position = Position::new_game();
        let code = encode(&position);
        assert!(code
            .chars()
            .all(|ch| ch == '-' || ch.is_ascii_digit() || ch.is_ascii_lowercase()));
        assert_eq!(decode(&code).expect("code should decode"), position);
    }

    #[test]
    fn captures_rights_and_en_passant_round_trip() {
        let mut position = Position::new_game();
        play(
            &mut position,
            &["e2e4", "d7d5", "e4d5", "g8f6", "f1b5", "c7c6", "d5c6", "b8c6", "g1f3", "e7e5"],
        );
        assert_eq!(position.en_passant_square, Some(square_at(4, 5)));
        assert_eq!(position.captured_of(Color::Dark), &[PieceKind::Pawn, PieceKind::Pawn]);
        assert_eq!(position.captured_of(Color::Light), &[PieceKind::Pawn]);

        let decoded = decode(&encode(&position)).expect("code should decode");
        assert_eq!(decoded, position);
    }

    #[test]
    fn empty_and_garbage_codes_fail_distinctly() {
        assert_eq!(decode(""), Err(CodecError::Empty));
        assert!(matches!(decode("abc-!!"), Err(CodecError::InvalidToken(_))));
        assert!(matches!(decode("abc--def"), Err(CodecError::InvalidToken(_))));
        assert!(matches!(
            decode("zzzzzzzzzz"),
            Err(CodecError::TokenOutOfRange(_))
        ));
        // 0x01 bytes are not printable.
        assert_eq!(decode(&to_base36(0x0101010101)), Err(CodecError::NonAsciiPayload));
    }

    #[test]
    fn truncated_code_is_rejected() {
        let code = encode(&Position::new_game());
        let cut = code.rsplit_once('-').map(|(head, _)| head).expect("multi-group code");
        assert!(decode(cut).is_err());
    }

    #[test]
    fn malformed_payload_fields_are_reported() {
        let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
        let cases = [
            (format!("{start}|w|||KQkq"), CodecError::FieldCount(5)),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX|w|||KQkq|-".to_owned(),
                CodecError::InvalidPiece('X'),
            ),
            (format!("{start}|x|||KQkq|-"), CodecError::InvalidSideToMove("x".to_owned())),
            (format!("{start}|w|p|||-"), CodecError::InvalidCapturedPiece('p')),
            (format!("{start}|w|||KZ|-"), CodecError::InvalidCastling("KZ".to_owned())),
            (format!("{start}|w|||-|e4"), CodecError::InvalidEnPassant("e4".to_owned())),
            (
                "rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR|w|||-|-".to_owned(),
                CodecError::KingCount {
                    color: Color::Dark,
                    count: 0,
                },
            ),
            (
                "4k3/8/8/8/8/8/8/4RK2|w|||-|-".to_owned(),
                CodecError::OpponentInCheck,
            ),
            (
                "8/8/8/3Pk3/8/8/8/4K3|w|||-|e6".to_owned(),
                CodecError::InvalidEnPassant("e6".to_owned()),
            ),
            (
                "4k3/8/8/4p3/8/8/8/4K3|w|||-|e3".to_owned(),
                CodecError::InvalidEnPassant("e3".to_owned()),
            ),
            (
                "4k3/8/4n3/4p3/8/8/8/4K3|w|||-|e6".to_owned(),
                CodecError::InvalidEnPassant("e6".to_owned()),
            ),
        ];
        for (payload, expected) in cases {
            assert_eq!(decode(&compact(&payload)), Err(expected), "payload {payload}");
        }

        assert!(matches!(
            decode(&compact(&format!("{start}/8|w|||-|-"))),
            Err(CodecError::InvalidBoard(_))
        ));
    }
}
