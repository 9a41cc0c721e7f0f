//! Full legal move generation pipeline.
//!
//! Per-piece pseudo-legal generation followed by a try-and-revert filter:
//! each candidate is applied with the same `make_move` real play uses, the
//! mover's king is probed with the check oracle, and the move is unmade.

use crate::game_state::{chess_types::*, position::Position};
use crate::move_generation::legal_move_apply::ScopedMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::{generate_basic_king_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, position: &mut Position, color: Color) -> Vec<Move> {
        legal_moves_in_place(position, color)
    }
}

/// Pseudo-legal moves of the piece on `from`, for the piece's own color.
pub fn pseudo_legal_moves_from(position: &Position, from: Square, out: &mut Vec<Move>) {
    let Some(piece) = position.piece_at(from) else {
        return;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.color, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(position, from, piece.kind, piece.color, out)
        }
        PieceKind::King => generate_king_moves(position, from, piece.color, out),
    }
}

/// Attack-only variant: plain king steps, never castling.
pub fn pseudo_legal_moves_without_castling(position: &Position, from: Square, out: &mut Vec<Move>) {
    match position.piece_at(from) {
        Some(piece) if piece.kind == PieceKind::King => {
            generate_basic_king_moves(position, from, piece.color, out)
        }
        Some(_) => pseudo_legal_moves_from(position, from, out),
        None => {}
    }
}

/// Drop every candidate that leaves `color`'s king attacked.
pub fn retain_legal(position: &mut Position, color: Color, candidates: &mut Vec<Move>) {
    candidates.retain(|&mv| {
        let applied = ScopedMove::new(&mut *position, mv);
        !is_king_in_check(&applied, color)
    });
}

/// Legal moves of the piece on `square`; empty for an empty square.
pub fn moves_from(position: &Position, square: Square) -> Vec<Move> {
    let Some(piece) = position.piece_at(square) else {
        return Vec::new();
    };
    let mut moves = Vec::with_capacity(32);
    pseudo_legal_moves_from(position, square, &mut moves);

    let mut scratch = position.clone();
    retain_legal(&mut scratch, piece.color, &mut moves);
    moves
}

/// All legal moves of `color`.
pub fn all_moves(position: &Position, color: Color) -> Vec<Move> {
    let mut scratch = position.clone();
    legal_moves_in_place(&mut scratch, color)
}

/// All legal moves of `color`, probing on `position` itself. The position is
/// restored before returning.
pub fn legal_moves_in_place(position: &mut Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    let origins: Vec<Square> = position.squares_of(color).map(|(sq, _)| sq).collect();
    for from in origins {
        pseudo_legal_moves_from(position, from, &mut moves);
    }
    retain_legal(position, color, &mut moves);
    moves
}

pub fn has_legal_move(position: &mut Position, color: Color) -> bool {
    let origins: Vec<Square> = position.squares_of(color).map(|(sq, _)| sq).collect();
    let mut moves = Vec::with_capacity(32);
    for from in origins {
        moves.clear();
        pseudo_legal_moves_from(position, from, &mut moves);
        retain_legal(position, color, &mut moves);
        if !moves.is_empty() {
            return true;
        }
    }
    false
}
