//! Perft node counting for move generator verification.
//!
//! Promotion moves come out of the generator without a chosen piece; perft
//! expands each into the four promotion pieces so totals match published
//! reference counts.

use crate::game_state::{chess_types::PieceKind, position::Position};
use crate::move_generation::legal_move_apply::ScopedMove;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::{Move, MoveKind};

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    let mut scratch = position.clone();
    perft_recurse(generator, &mut scratch, depth)
}

fn perft_recurse<G: MoveGenerator>(generator: &G, position: &mut Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let side = position.side_to_move;
    let mut total = PerftCounts::default();

    for mv in expand_promotions(generator.generate_legal_moves(position, side)) {
        if depth == 1 {
            total.merge(leaf_counts(mv));
            continue;
        }
        let mut applied = ScopedMove::new(position, mv);
        total.merge(perft_recurse(generator, &mut applied, depth - 1));
    }

    total
}

fn leaf_counts(mv: Move) -> PerftCounts {
    PerftCounts {
        nodes: 1,
        captures: u64::from(mv.is_capture()),
        en_passant: u64::from(mv.kind == MoveKind::EnPassant),
        castles: u64::from(mv.is_castling()),
        promotions: u64::from(mv.is_promotion()),
    }
}

/// Replace every unresolved promotion by one move per promotion piece.
pub fn expand_promotions(moves: Vec<Move>) -> Vec<Move> {
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        if mv.is_promotion() && mv.promotion_piece().is_none() {
            out.extend(PROMOTION_CHOICES.iter().map(|&piece| mv.with_promotion(piece)));
        } else {
            out.push(mv);
        }
    }
    out
}
