use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_config::DEFAULT_SEARCH_DEPTH;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::alpha_beta::{search_best_move, SearchConfig};
use crate::search::board_scoring::PieceSquareScorer;
use crate::tables::opening_book::OpeningBook;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// Book first, then fixed-depth alpha-beta over the piece-square evaluator.
///
/// All randomness (book picks and move-order shuffling) comes from the
/// injected `rng`, so a seeded engine replays identically.
pub struct MinimaxEngine<R: Rng + Send = StdRng> {
    move_generator: LegalMoveGenerator,
    scorer: PieceSquareScorer,
    book: OpeningBook,
    use_book: bool,
    depth: u8,
    rng: R,
}

impl MinimaxEngine<StdRng> {
    pub fn new(depth: u8) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    pub fn seeded(depth: u8, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }
}

impl Default for MinimaxEngine<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl<R: Rng + Send> MinimaxEngine<R> {
    pub fn with_rng(depth: u8, rng: R) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: PieceSquareScorer,
            book: OpeningBook::load_default(),
            use_book: true,
            depth,
            rng,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }
}

impl<R: Rng + Send> Engine for MinimaxEngine<R> {
    fn name(&self) -> &str {
        "Casual Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        let invalid = || ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value.trim().parse::<u8>().map_err(|_| invalid())?;
            if parsed == 0 {
                return Err(invalid());
            }
            self.depth = parsed;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("OwnBook") {
            let v = value.trim().to_ascii_lowercase();
            self.use_book = matches!(v.as_str(), "true" | "1" | "yes" | "on");
            return Ok(());
        }
        Err(invalid())
    }

    fn choose_move(&mut self, position: &mut Position, params: &GoParams) -> EngineOutput {
        let mut out = EngineOutput::default();

        if self.use_book {
            if let Some(mv) = self.book.choose_move(position, &mut self.rng) {
                let mv = if mv.is_promotion() {
                    mv.with_promotion(PieceKind::Queen)
                } else {
                    mv
                };
                let text = move_to_long_algebraic(mv);
                info!(book_move = %text, "opening book hit");
                out.info_lines
                    .push(format!("info string minimax_engine book_move {text}"));
                out.best_move = Some(mv);
                out.from_book = true;
                return out;
            }
            debug!("opening book miss");
        }

        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.depth),
        };
        let side = position.side_to_move;
        let result = search_best_move(
            position,
            side,
            &self.move_generator,
            &self.scorer,
            config,
            &mut self.rng,
        );

        out.info_lines.push(format!(
            "info depth {} nodes {} score cp {}",
            result.depth, result.nodes, result.best_score
        ));
        if let Some(mv) = result.best_move {
            let text = move_to_long_algebraic(mv);
            info!(
                best_move = %text,
                score = result.best_score,
                depth = result.depth,
                nodes = result.nodes,
                "engine move chosen"
            );
            out.info_lines
                .push(format!("info string minimax_engine best_move {text}"));
        }
        out.best_move = result.best_move;
        out.best_score = Some(result.best_score);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::position::Position;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::search::alpha_beta::MATE_SCORE;
    use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

    #[test]
    fn engine_answers_from_the_book() {
        let mut position = Position::new_game();
        for text in ["e2e4", "e7e5", "g1f3"] {
            let mv = long_algebraic_to_move(text, &position).expect("scripted move is legal");
            make_move(&mut position, mv);
        }
        let before = position.clone();

        let mut engine = MinimaxEngine::seeded(3, 99);
        let out = engine.choose_move(&mut position, &GoParams::default());
        assert!(out.from_book);
        let text = move_to_long_algebraic(out.best_move.expect("book move"));
        assert!(["b8c6", "g8f6", "d7d6"].contains(&text.as_str()));
        assert_eq!(position, before);
    }

    #[test]
    fn engine_searches_when_book_is_disabled() {
        let mut position =
            Position::from_fen("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::seeded(2, 1);
        engine.set_option("OwnBook", "false").expect("option exists");
        let out = engine.choose_move(&mut position, &GoParams::default());
        assert!(!out.from_book);
        assert_eq!(out.best_score, Some(-MATE_SCORE));
        assert_eq!(out.best_move.map(move_to_long_algebraic).as_deref(), Some("a8a1"));
        assert!(!out.info_lines.is_empty());
    }

    #[test]
    fn same_seed_same_choice() {
        let mut a = MinimaxEngine::seeded(2, 17);
        let mut b = MinimaxEngine::seeded(2, 17);
        let mut position = Position::from_fen(
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1",
        )
        .expect("FEN should parse");
        let first = a.choose_move(&mut position, &GoParams::default()).best_move;
        let second = b.choose_move(&mut position, &GoParams::default()).best_move;
        assert_eq!(first, second);
    }

    #[test]
    fn options_are_validated() {
        let mut engine = MinimaxEngine::seeded(3, 0);
        engine.set_option("Depth", "5").expect("depth is an option");
        assert_eq!(engine.depth(), 5);
        assert!(engine.set_option("Depth", "0").is_err());
        assert!(engine.set_option("Threads", "4").is_err());
    }
}
