//! Move generation seam used by search and perft.

use crate::game_state::{chess_types::Color, position::Position};
use crate::moves::move_descriptions::Move;

pub trait MoveGenerator: Send + Sync {
    /// Legal moves of `color`. Implementations may probe on `position` but
    /// must hand it back unchanged.
    fn generate_legal_moves(&self, position: &mut Position, color: Color) -> Vec<Move>;
}
