//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Position;
use crate::constants::*;
use crate::types::*;

/// Material balance from `perspective`'s point of view
///
/// Own pieces add their weight, opponent pieces subtract it, kings included.
pub fn evaluate_material(position: &Position, perspective: Color) -> i32 {
    position
        .occupied()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Non-king material per side as `(white, black)`
///
/// Used to adjudicate games that hit the ply cap.
pub fn material_totals(position: &Position) -> (i32, i32) {
    position
        .occupied()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .fold((0, 0), |(white, black), (_, piece)| match piece.color {
            Color::White => (white + piece_value(piece.kind), black),
            Color::Black => (white, black + piece_value(piece.kind)),
        })
}
