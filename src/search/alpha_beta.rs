//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are White-positive throughout: White maximizes, Black minimizes.
//! The search exclusively borrows one `Position` for the whole call and
//! walks the tree with [`ScopedMove`], so every exit path (including a
//! pruning break) leaves the board as it found it.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::ScopedMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

/// Terminal score for a mated side. Larger than any static evaluation.
pub const MATE_SCORE: i32 = 100_000;
const INFINITY: i32 = MATE_SCORE + 1;

/// Deepest search the engine will run; deeper requests are clamped.
pub const MAX_SEARCH_DEPTH: u8 = 6;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

impl SearchConfig {
    /// Depth actually searched: at least one ply, at most [`MAX_SEARCH_DEPTH`].
    pub fn effective_depth(&self) -> u8 {
        if self.depth > MAX_SEARCH_DEPTH {
            warn!(
                requested = self.depth,
                max = MAX_SEARCH_DEPTH,
                "search depth clamped"
            );
        }
        self.depth.clamp(1, MAX_SEARCH_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Engine promotions always take a queen.
#[inline]
fn resolve_promotion(mv: Move) -> Move {
    if mv.is_promotion() && mv.promotion_piece().is_none() {
        mv.with_promotion(PieceKind::Queen)
    } else {
        mv
    }
}

/// Legal moves of `color` ready to be searched.
fn searchable_moves<G: MoveGenerator>(
    generator: &G,
    position: &mut Position,
    color: Color,
) -> Vec<Move> {
    generator
        .generate_legal_moves(position, color)
        .into_iter()
        .map(resolve_promotion)
        .collect()
}

/// Shuffle, then move captures to the front. The sort is stable so the
/// shuffled order survives within each group.
pub fn order_moves<R: Rng + ?Sized>(moves: &mut [Move], rng: &mut R) {
    moves.shuffle(rng);
    moves.sort_by_key(|mv| !mv.is_capture());
}

/// Score of a side with no legal moves: mated or stalemated.
#[inline]
fn terminal_score(position: &Position, color: Color) -> i32 {
    if !is_king_in_check(position, color) {
        return 0;
    }
    match color {
        Color::Light => -MATE_SCORE,
        Color::Dark => MATE_SCORE,
    }
}

/// Minimax value of `position` with `depth` plies left.
///
/// `maximizing_white` selects whose moves are expanded: White's when true,
/// Black's otherwise. Depth 0 returns the static score regardless of the
/// bounds.
#[allow(clippy::too_many_arguments)]
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    position: &mut Position,
    generator: &G,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing_white: bool,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(position);
    }

    let color = if maximizing_white { Color::Light } else { Color::Dark };
    let moves = searchable_moves(generator, position, color);
    if moves.is_empty() {
        return terminal_score(position, color);
    }

    if maximizing_white {
        let mut best = -INFINITY;
        for mv in moves {
            let mut child = ScopedMove::new(position, mv);
            let score = minimax(&mut child, generator, scorer, depth - 1, alpha, beta, false, nodes);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INFINITY;
        for mv in moves {
            let mut child = ScopedMove::new(position, mv);
            let score = minimax(&mut child, generator, scorer, depth - 1, alpha, beta, true, nodes);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Best move for `color` at the configured depth.
///
/// Ties go to the first move in search order (captures first, shuffled by
/// `rng` within each group). A side with no legal moves gets `None` and its
/// terminal score.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer, R: Rng + ?Sized>(
    position: &mut Position,
    color: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let depth = config.effective_depth();
    let maximizing_white = color == Color::Light;
    let mut nodes = 1u64;

    let mut moves = searchable_moves(generator, position, color);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: terminal_score(position, color),
            depth,
            nodes,
        };
    }
    order_moves(&mut moves, rng);

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_move = None;
    let mut best_score = if maximizing_white { -INFINITY } else { INFINITY };

    for mv in moves {
        let score = {
            let mut child = ScopedMove::new(position, mv);
            minimax(
                &mut child,
                generator,
                scorer,
                depth - 1,
                alpha,
                beta,
                !maximizing_white,
                &mut nodes,
            )
        };

        let improves = if maximizing_white {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
            if maximizing_white {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
    }

    debug!(
        side = color.name(),
        depth,
        nodes,
        score = best_score,
        "search finished"
    );

    SearchResult {
        best_move,
        best_score,
        depth,
        nodes,
    }
}
