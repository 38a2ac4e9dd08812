//! # Engine Constants - Initial Layout, Material Weights & Search Defaults
//!
//! ## Material Weights
//!
//! Evaluation is plain material counting in whole pawns:
//!
//! | Piece  | Weight |
//! |--------|--------|
//! | Pawn   | 1      |
//! | Knight | 3      |
//! | Bishop | 3      |
//! | Rook   | 5      |
//! | Queen  | 9      |
//! | King   | 1000   |
//!
//! The king weight is far above everything else combined (39 points of
//! non-king material at most) so no material trade can ever outweigh it.
//!
//! ## Search Defaults
//!
//! The search is deliberately narrow: once a node has more than
//! [`DEFAULT_SAMPLE_THRESHOLD`] candidate moves, only [`DEFAULT_SAMPLE_WIDTH`]
//! of them are explored, picked uniformly at random.

use crate::types::PieceKind;

/// Starting layout, rank-major from Black's back rank (`y = 0`) down to
/// White's (`y = 7`). Codes are color (`w`/`b`) followed by kind.
pub const INITIAL_LAYOUT: [[&str; 8]; 8] = [
    ["bR", "bN", "bB", "bQ", "bK", "bB", "bN", "bR"],
    ["bP", "bP", "bP", "bP", "bP", "bP", "bP", "bP"],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["", "", "", "", "", "", "", ""],
    ["wP", "wP", "wP", "wP", "wP", "wP", "wP", "wP"],
    ["wR", "wN", "wB", "wQ", "wK", "wB", "wN", "wR"],
];

pub const PAWN_VALUE: i32 = 1;
pub const KNIGHT_VALUE: i32 = 3;
pub const BISHOP_VALUE: i32 = 3;
pub const ROOK_VALUE: i32 = 5;
pub const QUEEN_VALUE: i32 = 9;
pub const KING_VALUE: i32 = 1000;

/// Material weight of a piece kind
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Score of a position where the searching side has delivered checkmate
pub const WIN_SCORE: i32 = i32::MAX;
/// Score of a position where the searching side has been checkmated
pub const LOSS_SCORE: i32 = -i32::MAX;
/// Score of a stalemate reached inside the search tree
pub const DRAW_SCORE: i32 = 0;

pub const DEFAULT_SEARCH_DEPTH: u32 = 3;
pub const DEFAULT_SAMPLE_THRESHOLD: usize = 2;
pub const DEFAULT_SAMPLE_WIDTH: usize = 2;

/// Ply ceiling applied by match loops (not enforced by the engine itself)
pub const DEFAULT_MAX_PLIES: u32 = 1000;

/// Longest possible ray on an 8x8 board
pub const MAX_RAY_LEN: usize = 7;
