//! Reversible move application.
//!
//! `make_move` is the only way a move mutates a [`Position`]; legality
//! probing, search and the game facade all go through it so captures, en
//! passant removal and castling rook relocation behave identically
//! everywhere. [`ScopedMove`] pairs a make with its unmake on every exit path.

use std::ops::{Deref, DerefMut};

use crate::game_state::{chess_types::*, position::Position, undo_state::UndoState};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Apply `mv` to `position` and return what is needed to reverse it.
///
/// A promotion without a chosen piece leaves the pawn on the last rank; the
/// caller replaces it once the choice is made.
///
/// # Panics
/// Panics when `mv.from` is empty. Moves only come from the generator, so an
/// empty origin means a move was replayed against the wrong position.
pub fn make_move(position: &mut Position, mv: Move) -> UndoState {
    let Some(moved_piece) = position.take(mv.from) else {
        panic!("make_move from empty square {} ({mv:?})", mv.from);
    };
    let mover = moved_piece.color;

    let prev_side_to_move = position.side_to_move;
    let prev_castling_rights = position.castling_rights;
    let prev_en_passant_square = position.en_passant_square;

    // Captures.
    let capture_square = match mv.kind {
        MoveKind::EnPassant => en_passant_victim_square(mover, mv.to),
        _ => mv.to,
    };
    let captured = position.take(capture_square).map(|piece| (capture_square, piece));
    if let Some((_, piece)) = captured {
        position.captured[piece.color.index()].push(piece.kind);
    }

    // Place moved/promoted piece on destination.
    let placed = match mv.kind {
        MoveKind::Promotion {
            piece: Some(kind), ..
        } => Piece::new(kind, mover),
        _ => moved_piece,
    };
    position.put(mv.to, placed);

    // Castling rook move.
    if let MoveKind::Castle(side) = mv.kind {
        let (rook_from, rook_to) = castling_rook_squares(mover, side);
        if let Some(rook) = position.take(rook_from) {
            position.put(rook_to, rook);
        }
    }

    update_castling_rights(position, moved_piece, mv.from, mv.to);

    position.en_passant_square = match mv.kind {
        MoveKind::DoublePawnPush => Some((mv.from + mv.to) / 2),
        _ => None,
    };
    position.side_to_move = mover.opposite();

    UndoState {
        moved_piece,
        captured,
        prev_side_to_move,
        prev_castling_rights,
        prev_en_passant_square,
    }
}

/// Reverse a `make_move` of `mv` that produced `undo`.
pub fn unmake_move(position: &mut Position, mv: Move, undo: UndoState) {
    position.take(mv.to);

    if let MoveKind::Castle(side) = mv.kind {
        let (rook_from, rook_to) = castling_rook_squares(undo.moved_piece.color, side);
        if let Some(rook) = position.take(rook_to) {
            position.put(rook_from, rook);
        }
    }

    position.put(mv.from, undo.moved_piece);

    if let Some((square, piece)) = undo.captured {
        position.put(square, piece);
        position.captured[piece.color.index()].pop();
    }

    position.side_to_move = undo.prev_side_to_move;
    position.castling_rights = undo.prev_castling_rights;
    position.en_passant_square = undo.prev_en_passant_square;
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::Light => to - 8,
        Color::Dark => to + 8,
    }
}

/// (rook origin, rook destination) for `color` castling on `side`.
#[inline]
pub fn castling_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    let rank = color.home_rank();
    let (rook_from_file, rook_to_file, _) = side.files();
    (square_at(rook_from_file, rank), square_at(rook_to_file, rank))
}

fn update_castling_rights(position: &mut Position, moved_piece: Piece, from: Square, to: Square) {
    if moved_piece.kind == PieceKind::King {
        position.castling_rights &= !(CastleSide::King.right(moved_piece.color)
            | CastleSide::Queen.right(moved_piece.color));
    }

    // A rook leaving its corner, or anything landing on a corner (capturing
    // the rook there), ends that castle for good.
    for square in [from, to] {
        position.castling_rights &= !corner_right(square);
    }
}

fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CASTLE_LIGHT_QUEENSIDE,
        7 => CASTLE_LIGHT_KINGSIDE,
        56 => CASTLE_DARK_QUEENSIDE,
        63 => CASTLE_DARK_KINGSIDE,
        _ => 0,
    }
}

/// A move applied for the lifetime of the guard.
///
/// Dereferences to the mutated position; dropping the guard unmakes the move,
/// so recursion can return or break early without leaving the board altered.
pub struct ScopedMove<'a> {
    position: &'a mut Position,
    mv: Move,
    undo: Option<UndoState>,
}

impl<'a> ScopedMove<'a> {
    pub fn new(position: &'a mut Position, mv: Move) -> Self {
        let undo = make_move(position, mv);
        Self {
            position,
            mv,
            undo: Some(undo),
        }
    }

    #[inline]
    pub fn undo_state(&self) -> Option<&UndoState> {
        self.undo.as_ref()
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            unmake_move(self.position, self.mv, undo);
        }
    }
}
