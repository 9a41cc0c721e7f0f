//! Move values.
//!
//! A move is a from/to pair tagged with exactly one variant, so flag
//! combinations such as "castling en passant" cannot be expressed.

use crate::game_state::chess_types::{CastleSide, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castle(CastleSide),
    /// Pawn reaching the last rank. `piece` stays `None` until the player
    /// picks the promotion piece.
    Promotion {
        capture: bool,
        piece: Option<PieceKind>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::Promotion { capture: true, .. }
        )
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion { .. })
    }

    #[inline]
    pub const fn promotion_piece(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => piece,
            _ => None,
        }
    }

    /// Same move with the promotion piece chosen. Non-promotions are returned
    /// unchanged.
    pub const fn with_promotion(self, chosen: PieceKind) -> Self {
        match self.kind {
            MoveKind::Promotion { capture, .. } => Self {
                kind: MoveKind::Promotion {
                    capture,
                    piece: Some(chosen),
                },
                ..self
            },
            _ => self,
        }
    }

    /// True when both describe the same board action, ignoring whether a
    /// promotion piece has been chosen yet.
    pub fn same_action(&self, other: &Move) -> bool {
        if self.from != other.from || self.to != other.to {
            return false;
        }
        match (self.kind, other.kind) {
            (MoveKind::Promotion { capture: a, .. }, MoveKind::Promotion { capture: b, .. }) => {
                a == b
            }
            (a, b) => a == b,
        }
    }
}
