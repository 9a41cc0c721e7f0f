//! Game facade consumed by front ends.
//!
//! Owns the live position, the move log with its snapshots, the pending
//! promotion (if any), the history view and the engine. Every mutation goes
//! through `make_move` / `unmake_move`; history viewing never touches the
//! live position.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_rules::initial_position;
use crate::game_state::game_config::GameConfig;
use crate::game_state::{chess_types::*, position::Position, undo_state::UndoState};
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, moves_from};
use crate::moves::move_descriptions::Move;
use crate::session::game_log::{GameLog, LogEntry, Snapshot};
use crate::utils::move_notation::move_notation;
use crate::utils::state_codec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check { side: Color },
    Checkmate { winner: Color },
    Stalemate,
    Resigned { winner: Color },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Resigned { .. }
        )
    }
}

/// Outcome of one applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub notation: String,
    pub captured: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    /// The pawn waits on the last rank for [`Game::choose_promotion`].
    pub promotion_pending: bool,
}

#[derive(Debug, Clone)]
struct PendingPromotion {
    mv: Move,
    piece: Piece,
    undo: UndoState,
}

pub struct Game {
    config: GameConfig,
    position: Position,
    log: GameLog,
    status: GameStatus,
    pending_promotion: Option<PendingPromotion>,
    viewing: Option<usize>,
    engine: Box<dyn Engine>,
    setup_rng: StdRng,
}

impl Game {
    /// New game with the built-in engine.
    pub fn new(config: GameConfig) -> Self {
        let engine = MinimaxEngine::new(config.search_depth);
        Self::with_engine(config, Box::new(engine), StdRng::from_os_rng())
    }

    /// Fully reproducible game: setup shuffles and engine choices follow `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        let engine = MinimaxEngine::seeded(config.search_depth, seed);
        Self::with_engine(config, Box::new(engine), StdRng::seed_from_u64(seed))
    }

    pub fn with_engine(config: GameConfig, engine: Box<dyn Engine>, setup_rng: StdRng) -> Self {
        let position = Position::new_game();
        let initial = Snapshot {
            position: position.clone(),
            game_over: false,
        };
        let mut game = Self {
            config,
            position,
            log: GameLog::new(initial),
            status: GameStatus::InProgress,
            pending_promotion: None,
            viewing: None,
            engine,
            setup_rng,
        };
        game.reset();
        game
    }

    /// Start over from the configured initial placement.
    pub fn reset(&mut self) {
        self.position = initial_position(&self.config, &mut self.setup_rng);
        self.engine.new_game();
        self.restart_from_position();
        info!(
            chess960 = self.config.chess960,
            handicap = self.config.handicap.is_some(),
            "new game"
        );
    }

    fn restart_from_position(&mut self) {
        self.pending_promotion = None;
        self.viewing = None;
        self.status = self.compute_status();
        let initial = self.snapshot();
        self.log.reset(initial);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Update one option. Takes effect for setup on the next [`Game::reset`];
    /// depth applies immediately.
    pub fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        self.config.set_option(name, value)?;
        if name.eq_ignore_ascii_case("Depth") {
            self.engine.set_option(name, value)?;
        }
        Ok(())
    }

    /// Live position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }

    #[inline]
    pub fn is_viewing_history(&self) -> bool {
        self.viewing.is_some()
    }

    /// The snapshot on display while viewing history.
    pub fn viewed_snapshot(&self) -> Option<&Snapshot> {
        self.viewing.and_then(|index| self.log.snapshot(index))
    }

    /// What a board view should draw: the viewed snapshot or the live board.
    pub fn displayed_position(&self) -> &Position {
        self.viewed_snapshot()
            .map_or(&self.position, |snapshot| &snapshot.position)
    }

    /// Legal moves of the piece on `square` for highlighting. Empty for the
    /// opponent's pieces and whenever no move could be applied.
    pub fn select_moves(&self, square: Square) -> Vec<Move> {
        if self.ensure_can_move().is_err() {
            return Vec::new();
        }
        match self.position.piece_at(square) {
            Some(piece) if piece.color == self.position.side_to_move => {
                moves_from(&self.position, square)
            }
            _ => Vec::new(),
        }
    }

    fn ensure_can_move(&self) -> ChessResult<()> {
        if self.viewing.is_some() {
            return Err(ChessError::ViewingHistory);
        }
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        if self.status.is_over() {
            return Err(ChessError::GameOver);
        }
        Ok(())
    }

    /// Apply `mv` for the side to move.
    ///
    /// The move is matched against the legal moves from `mv.from`, so only
    /// the squares (and the promotion piece, when given) need to be right.
    /// A promotion without a piece stops at the pending state.
    pub fn apply_move(&mut self, mv: Move) -> ChessResult<MoveReport> {
        self.ensure_can_move()?;

        let illegal = ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        };
        let piece = match self.position.piece_at(mv.from) {
            Some(piece) if piece.color == self.position.side_to_move => piece,
            _ => return Err(illegal),
        };
        let legal = moves_from(&self.position, mv.from)
            .into_iter()
            .find(|candidate| candidate.same_action(&mv))
            .ok_or(illegal)?;

        let chosen = match mv.promotion_piece() {
            Some(kind) => {
                validate_promotion_piece(kind)?;
                legal.with_promotion(kind)
            }
            None => legal,
        };

        let undo = make_move(&mut self.position, chosen);

        if chosen.is_promotion() && chosen.promotion_piece().is_none() {
            debug!(from = chosen.from, to = chosen.to, "promotion pending");
            let report = MoveReport {
                mv: chosen,
                notation: move_notation(piece.kind, chosen),
                captured: undo.captured.map(|(_, p)| p.kind),
                is_check: false,
                is_checkmate: false,
                is_stalemate: false,
                promotion_pending: true,
            };
            self.pending_promotion = Some(PendingPromotion {
                mv: chosen,
                piece,
                undo,
            });
            return Ok(report);
        }

        Ok(self.complete_move(chosen, piece, undo))
    }

    /// Finish a pending promotion with `kind` (queen, rook, bishop or knight).
    pub fn choose_promotion(&mut self, kind: PieceKind) -> ChessResult<MoveReport> {
        if self.viewing.is_some() {
            return Err(ChessError::ViewingHistory);
        }
        validate_promotion_piece(kind)?;
        let pending = self
            .pending_promotion
            .take()
            .ok_or(ChessError::NoPendingPromotion)?;

        let mv = pending.mv.with_promotion(kind);
        self.position
            .put(mv.to, Piece::new(kind, pending.piece.color));
        info!(to = mv.to, piece = %kind.letter(), "promotion chosen");
        Ok(self.complete_move(mv, pending.piece, pending.undo))
    }

    fn complete_move(&mut self, mv: Move, piece: Piece, undo: UndoState) -> MoveReport {
        let notation = move_notation(piece.kind, mv);
        let captured = undo.captured.map(|(_, p)| p);
        self.status = self.compute_status();

        let report = MoveReport {
            mv,
            notation: notation.clone(),
            captured: captured.map(|p| p.kind),
            is_check: matches!(
                self.status,
                GameStatus::Check { .. } | GameStatus::Checkmate { .. }
            ),
            is_checkmate: matches!(self.status, GameStatus::Checkmate { .. }),
            is_stalemate: self.status == GameStatus::Stalemate,
            promotion_pending: false,
        };

        let after = self.snapshot();
        self.log.push(
            LogEntry {
                mv,
                piece,
                captured,
                undo,
                notation,
            },
            after,
        );
        info!(
            ply = self.log.len(),
            notation = %report.notation,
            status = ?self.status,
            "move applied"
        );
        report
    }

    /// Take back the last move, or cancel a pending promotion.
    pub fn undo_last(&mut self) -> ChessResult<Move> {
        if self.viewing.is_some() {
            return Err(ChessError::ViewingHistory);
        }

        if let Some(pending) = self.pending_promotion.take() {
            unmake_move(&mut self.position, pending.mv, pending.undo);
            debug!("pending promotion cancelled");
            return Ok(pending.mv);
        }

        let entry = self.log.pop().ok_or(ChessError::NothingToUndo)?;
        unmake_move(&mut self.position, entry.mv, entry.undo);
        self.status = self.compute_status();
        info!(notation = %entry.notation, "move undone");
        Ok(entry.mv)
    }

    /// The side to move gives up. Returns the winner.
    pub fn resign(&mut self) -> ChessResult<Color> {
        self.ensure_can_move()?;
        let loser = self.position.side_to_move;
        let winner = loser.opposite();
        self.status = GameStatus::Resigned { winner };
        self.log.mark_latest_game_over();
        info!(loser = loser.name(), winner = winner.name(), "resigned");
        Ok(winner)
    }

    /// View snapshot `index` (negative means the initial snapshot).
    pub fn jump_to(&mut self, index: isize) -> ChessResult<&Snapshot> {
        if self.pending_promotion.is_some() {
            return Err(ChessError::PromotionPending);
        }
        let len = self.log.snapshots().len();
        let target = usize::try_from(index).unwrap_or(0);
        if target >= len {
            return Err(ChessError::HistoryIndexOutOfRange { index, len });
        }

        self.viewing = Some(target);
        debug!(index = target, "viewing history");
        self.log
            .snapshot(target)
            .ok_or(ChessError::HistoryIndexOutOfRange { index, len })
    }

    /// Leave history view and resume play on the live position.
    pub fn return_to_present(&mut self) {
        if self.viewing.take().is_some() {
            debug!("returned to present");
        }
    }

    /// Let the engine move for the side to move. `Ok(None)` when the side
    /// has no move.
    pub fn request_ai_move(
        &mut self,
        depth: Option<u8>,
    ) -> ChessResult<Option<(MoveReport, EngineOutput)>> {
        self.ensure_can_move()?;
        let params = GoParams {
            depth: Some(depth.unwrap_or(self.config.search_depth)),
        };
        let output = self.engine.choose_move(&mut self.position, &params);
        let Some(mv) = output.best_move else {
            return Ok(None);
        };
        let report = self.apply_move(mv)?;
        Ok(Some((report, output)))
    }

    /// Game code for the live position.
    pub fn game_code(&self) -> String {
        state_codec::encode(&self.position)
    }

    /// Replace the game with a decoded code. On failure nothing changes.
    pub fn load_game_code(&mut self, code: &str) -> ChessResult<()> {
        let position = state_codec::decode(code).map_err(|err| {
            warn!(error = %err, "game code rejected");
            ChessError::from(err)
        })?;
        self.position = position;
        self.engine.new_game();
        self.restart_from_position();
        info!(status = ?self.status, "game code loaded");
        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position.clone(),
            game_over: self.status.is_over(),
        }
    }

    fn compute_status(&mut self) -> GameStatus {
        let side = self.position.side_to_move;
        let in_check = is_king_in_check(&self.position, side);
        let can_move = has_legal_move(&mut self.position, side);
        match (in_check, can_move) {
            (true, false) => GameStatus::Checkmate {
                winner: side.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check { side },
            (false, true) => GameStatus::InProgress,
        }
    }
}

fn validate_promotion_piece(kind: PieceKind) -> ChessResult<()> {
    match kind {
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight => Ok(()),
        _ => Err(ChessError::InvalidPromotionPiece(kind.letter())),
    }
}
