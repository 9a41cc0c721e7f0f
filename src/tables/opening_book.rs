//! Opening book keyed by piece placement.
//!
//! Maps the FEN placement field of a handful of well-known early positions to
//! replies in coordinate notation. Side to move and rights are not part of
//! the key, so a reply is only used once it resolves to a legal move.

use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_board_field;
use crate::utils::long_algebraic::long_algebraic_to_move;

const EMBEDDED_BOOK: &[(&str, &[&str])] = &[
    // 1.e4
    ("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR", &["e7e5", "c7c5", "e7e6", "c7c6"]),
    // 1.d4
    ("rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR", &["d7d5", "g8f6", "e7e6", "c7c5"]),
    // 1.Nf3
    ("rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R", &["d7d5", "g8f6", "c7c5"]),
    // 1.e4 e5
    ("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR", &["g1f3", "b1c3", "f1c4"]),
    // 1.e4 e5 2.Nf3
    ("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R", &["b8c6", "g8f6", "d7d6"]),
    // Sicilian: 1.e4 c5
    ("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR", &["g1f3", "b1c3", "d2d4"]),
    // Sicilian: 1.e4 c5 2.Nf3
    ("rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R", &["d7d6", "b8c6", "g8f6"]),
    // French: 1.e4 e6
    ("rnbqkbnr/pppp1ppp/4p3/8/4P3/8/PPPP1PPP/RNBQKBNR", &["d2d4", "b1c3", "g1f3"]),
    // 1.d4 d5
    ("rnbqkbnr/ppp1pppp/8/3p4/3P4/8/PPP1PPPP/RNBQKBNR", &["c2c4"]),
    // Queen's Gambit: 1.d4 d5 2.c4
    ("rnbqkbnr/ppp1pppp/8/3p4/2PP4/8/PP2PPPP/RNBQKBNR", &["e7e6", "c7c6", "d5c4"]),
];

#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    by_board: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// The built-in table of common openings.
    pub fn load_default() -> Self {
        Self::from_entries(EMBEDDED_BOOK)
    }

    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        let by_board = entries
            .iter()
            .map(|(board, replies)| {
                let replies = replies.iter().map(|r| (*r).to_owned()).collect();
                ((*board).to_owned(), replies)
            })
            .collect();
        Self { by_board }
    }

    pub fn len(&self) -> usize {
        self.by_board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_board.is_empty()
    }

    /// Book replies for the placement of `position`.
    pub fn lookup(&self, position: &Position) -> Option<&[String]> {
        self.by_board
            .get(&generate_board_field(position))
            .map(Vec::as_slice)
    }

    /// Pick one reply uniformly and resolve it against the legal moves.
    ///
    /// `None` when the position is not in the book or the picked reply is
    /// not legal here; the caller then searches normally.
    pub fn choose_move<R: Rng + ?Sized>(&self, position: &Position, rng: &mut R) -> Option<Move> {
        let reply = self.lookup(position)?.choose(rng)?;
        match long_algebraic_to_move(reply, position) {
            Ok(mv) => Some(mv),
            Err(err) => {
                debug!(reply = %reply, error = %err, "book reply rejected");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::OpeningBook;
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

    fn after(moves: &[&str]) -> Position {
        let mut position = Position::new_game();
        for text in moves {
            let mv = long_algebraic_to_move(text, &position).expect("scripted move is legal");
            make_move(&mut position, mv);
        }
        position
    }

    #[test]
    fn embedded_book_has_every_entry() {
        assert_eq!(OpeningBook::load_default().len(), 10);
    }

    #[test]
    fn king_knight_opening_offers_three_replies() {
        let book = OpeningBook::load_default();
        let position = after(&["e2e4", "e7e5", "g1f3"]);
        let replies = book.lookup(&position).expect("position is in the book");
        assert_eq!(replies, ["b8c6", "g8f6", "d7d6"]);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let mv = book.choose_move(&position, &mut rng).expect("book reply is legal");
            let text = move_to_long_algebraic(mv);
            assert!(["b8c6", "g8f6", "d7d6"].contains(&text.as_str()), "{text}");
        }
    }

    #[test]
    fn unknown_positions_miss() {
        let book = OpeningBook::load_default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(book.lookup(&Position::new_game()).is_none());
        assert!(book.choose_move(&after(&["a2a3"]), &mut rng).is_none());
    }

    #[test]
    fn illegal_reply_falls_through() {
        // Same placement as after 1.d4 d5 but with White not to move.
        let mut position = after(&["d2d4", "d7d5"]);
        position.side_to_move = position.side_to_move.opposite();
        let book = OpeningBook::load_default();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(book.lookup(&position).is_some());
        assert!(book.choose_move(&position, &mut rng).is_none());
    }
}
