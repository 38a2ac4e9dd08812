//! Move generation
//!
//! Candidate moves are produced in two stages:
//! 1. Each piece kind describes its movement as rays ([`possible_directions`])
//! 2. The shared walker keeps the reachable squares ([`raw_moves`])
//!
//! Raw moves ignore whether the mover's own king is left in check; the
//! [`attack`] module filters them down to legal moves.
//!
//! ## Module Organization
//!
//! - `sliding` - Ray construction and the shared ray walker
//! - `pawn`, `knight`, `bishop`, `rook`, `queen`, `king` - Per-kind rays
//! - `attack` - Attacked squares, check, legal moves, checkmate

pub mod attack;
pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;

pub use attack::{
    attacked_squares, has_any_legal_move, is_in_check, is_in_checkmate, is_in_stalemate,
    legal_moves, legal_moves_for,
};
pub use sliding::Ray;

use crate::board::Position;
use crate::types::*;

/// Movement rays for the piece standing on `origin`
///
/// Returns no rays for an empty square.
pub fn possible_directions(position: &Position, origin: Square) -> Vec<Ray> {
    let Some(piece) = position.piece_at(origin) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn::directions(position, origin, piece.color),
        PieceKind::Knight => knight::directions(origin),
        PieceKind::Bishop => bishop::directions(origin),
        PieceKind::Rook => rook::directions(origin),
        PieceKind::Queen => queen::directions(origin),
        PieceKind::King => king::directions(origin),
    }
}

/// Reachable squares for the piece on `origin`, before any check filtering
///
/// For kings this includes open castling slides.
pub fn raw_moves(position: &Position, origin: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(origin) else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(28);
    let rays = possible_directions(position, origin);
    sliding::walk_rays(position, piece.color, &rays, &mut moves);

    if piece.kind == PieceKind::King {
        moves.extend(king::castling_candidates(position, origin));
    }

    moves
}

/// Squares the piece on `origin` attacks
///
/// Same as [`raw_moves`] except that pawns attack both forward diagonals
/// whatever stands there (and never the square ahead), and castling is not
/// an attack.
pub fn attack_squares_from(position: &Position, origin: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(origin) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn::attack_rays(origin, piece.color)
            .into_iter()
            .flatten()
            .collect(),
        _ => {
            let mut moves = Vec::with_capacity(28);
            let rays = possible_directions(position, origin);
            sliding::walk_rays(position, piece.color, &rays, &mut moves);
            moves
        }
    }
}
