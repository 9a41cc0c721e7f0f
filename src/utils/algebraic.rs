//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and square
//! indices; reused by FEN, the game code, notation and long algebraic text.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{file_of, rank_of, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
///
/// # Panics
/// Panics on an index past `63`; squares only come from board iteration.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    assert!(square < 64, "square index out of bounds: {square}");
    let file_char = file_char(square);
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + file_of(square))
}
