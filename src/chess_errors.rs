//! Errors used throughout the chess engine.
//!
//! Recoverable failures are reported through [`ChessError`]; failures while
//! decoding a game code have their own [`CodecError`] so callers can tell a
//! corrupt code apart from a rejected move. Broken invariants (a missing
//! king, a move from an empty square) are not represented here: they panic.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The requested move is not among the legal moves of the position.
    #[error("illegal move {from}->{to}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn is waiting on the last rank for its promotion piece.
    #[error("a promotion choice is pending")]
    PromotionPending,

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0}")]
    InvalidPromotionPiece(char),

    /// Moves cannot be made while an earlier position is on display.
    #[error("viewing history; return to the present first")]
    ViewingHistory,

    #[error("the game is over")]
    GameOver,

    #[error("no move to undo")]
    NothingToUndo,

    #[error("history index {index} out of range (have {len} snapshots)")]
    HistoryIndexOutOfRange { index: isize, len: usize },

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid long algebraic move: {0}")]
    InvalidLongAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Every way a game code can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("game code is empty")]
    Empty,

    #[error("invalid base-36 token '{0}'")]
    InvalidToken(String),

    #[error("token '{0}' exceeds the 40-bit group size")]
    TokenOutOfRange(String),

    #[error("decoded payload is not printable ASCII")]
    NonAsciiPayload,

    #[error("expected 6 fields, found {0}")]
    FieldCount(usize),

    #[error("malformed board: {0}")]
    InvalidBoard(String),

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid captured piece '{0}'")]
    InvalidCapturedPiece(char),

    #[error("invalid castling rights '{0}'")]
    InvalidCastling(String),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },

    #[error("the side not to move is in check")]
    OpponentInCheck,
}

pub type ChessResult<T> = Result<T, ChessError>;
