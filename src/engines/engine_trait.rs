//! Engine abstraction layer used by the game session.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can sit behind a single trait interface.

use crate::chess_errors::ChessError;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// White-positive score; `None` for book moves.
    pub best_score: Option<i32>,
    pub from_book: bool,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Pick a move for the side to move. The position is borrowed
    /// exclusively for the call and comes back unchanged.
    fn choose_move(&mut self, position: &mut Position, params: &GoParams) -> EngineOutput;
}
