//! Mailbox board plus the auxiliary state a game needs.
//!
//! `Position` owns all board mutation. Cells are only written through
//! [`Position::put`] and [`Position::take`] so the per-color occupancy caches
//! used by the ray-casting attack helpers always stay in sync with the cells.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; 64],

    // Occupancy caches, one bit per square.
    occupancy_by_color: [u64; 2],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// Captured piece kinds per color of the *captured* piece, in capture order.
    pub captured: [Vec<PieceKind>; 2],
}

impl Default for Position {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            occupancy_by_color: [0; 2],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            captured: [Vec::new(), Vec::new()],
        }
    }
}

impl Position {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(position) => position,
            Err(err) => panic!("starting FEN should always parse: {err}"),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, crate::chess_errors::ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Place `piece` on `square`, returning whatever stood there.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.take(square);
        self.squares[square as usize] = Some(piece);
        self.occupancy_by_color[piece.color.index()] |= 1u64 << square;
        previous
    }

    /// Empty `square`, returning its former occupant.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let previous = self.squares[square as usize].take();
        if let Some(piece) = previous {
            self.occupancy_by_color[piece.color.index()] &= !(1u64 << square);
        }
        previous
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    /// Iterate over occupied squares of one color, lowest square first.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        BitIter(self.occupancy(color)).filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, cell)| cell.map(|piece| (sq as Square, piece)))
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// Panics when the king is missing; a kingless board means the apply/undo
    /// discipline was broken upstream.
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(square) => square,
            None => panic!("{} king missing from the board", color.name()),
        }
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.squares_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn count_kings(&self, color: Color) -> usize {
        self.squares_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count()
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & side.right(color) != 0
    }

    /// Rights implied by placement: king on its e-file home square and the
    /// matching rook still in its corner.
    pub fn castling_rights_from_placement(&self) -> CastlingRights {
        let mut rights = 0;
        for color in [Color::Light, Color::Dark] {
            let rank = color.home_rank();
            if self.piece_at(square_at(CASTLING_KING_FILE, rank)) != Some(Piece::new(PieceKind::King, color)) {
                continue;
            }
            for side in [CastleSide::King, CastleSide::Queen] {
                let (rook_file, _, _) = side.files();
                if self.piece_at(square_at(rook_file, rank)) == Some(Piece::new(PieceKind::Rook, color)) {
                    rights |= side.right(color);
                }
            }
        }
        rights
    }

    #[inline]
    pub fn captured_of(&self, color: Color) -> &[PieceKind] {
        &self.captured[color.index()]
    }
}

/// Iterator over set bits of a square mask.
pub struct BitIter(pub u64);

impl Iterator for BitIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(sq)
    }
}
