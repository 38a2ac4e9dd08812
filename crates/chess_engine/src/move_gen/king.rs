//! King move generation
//!
//! Handles king-specific move generation. Kings step one square in any
//! direction.
//!
//! ## Note on Castling
//!
//! Castling is not a ray. The two-square king slide is offered as an extra
//! candidate when:
//! - The king has not moved and stands on its home square (e-file, back rank)
//! - The rook in the corner on that side is the king's own and has not moved
//! - Every square strictly between them is empty
//!
//! Whether the king is in check, or passes over an attacked square, is a
//! legality question and is answered by [`super::attack::legal_moves`].
//! The rook's co-move happens when the castle is applied.

use super::sliding::{step_rays, Ray};
use crate::board::Position;
use crate::types::*;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const KING_HOME_FILE: u8 = 4;

/// One single-square ray per adjacent on-board square
pub fn directions(origin: Square) -> Vec<Ray> {
    step_rays(origin, &KING_OFFSETS)
}

/// Castling destinations currently open to the king on `origin`
pub fn castling_candidates(position: &Position, origin: Square) -> Vec<Square> {
    let mut candidates = Vec::new();

    let Some(king) = position.piece_at(origin) else {
        return candidates;
    };
    if king.kind != PieceKind::King
        || king.has_moved
        || origin.x() != KING_HOME_FILE
        || origin.y() != king.color.back_row()
    {
        return candidates;
    }

    for step in [1i8, -1] {
        let Some((rook_from, _)) = castle_rook_squares(origin, step) else {
            continue;
        };
        let rook_ready = position.piece_at(rook_from).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        });
        if !rook_ready {
            continue;
        }

        let path_clear = between(origin, rook_from).all(|sq| position.is_empty(sq));
        if path_clear {
            if let Some(dest) = origin.offset(2 * step, 0) {
                candidates.push(dest);
            }
        }
    }

    candidates
}

/// Is `from -> to` a two-column king slide?
#[inline]
pub fn is_castling_slide(from: Square, to: Square) -> bool {
    from.y() == to.y() && (to.x() as i8 - from.x() as i8).abs() == 2
}

/// Rook origin and destination for a castle in direction `step` (+1 or -1)
///
/// The rook comes from the corner on that side and lands on the square the
/// king passes over.
pub fn castle_rook_squares(king_from: Square, step: i8) -> Option<(Square, Square)> {
    let corner_x = if step > 0 { 7 } else { 0 };
    let rook_from = Square::new(corner_x, king_from.y())?;
    let rook_to = king_from.offset(step, 0)?;
    Some((rook_from, rook_to))
}

/// Squares strictly between two squares on the same row
fn between(a: Square, b: Square) -> impl Iterator<Item = Square> {
    let (lo, hi) = if a.x() < b.x() {
        (a.x(), b.x())
    } else {
        (b.x(), a.x())
    };
    let y = a.y();
    (lo + 1..hi).filter_map(move |x| Square::new(x, y))
}
