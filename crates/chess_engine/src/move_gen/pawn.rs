//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion (handled during move application)
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square towards the opponent, only onto an empty square
//! - **Double push**: from the starting row, two squares, with both squares empty
//! - **Captures**: one square diagonally forward, only onto an opponent piece
//!
//! Pawns *attack* both forward diagonals whatever stands there, and never
//! attack the square straight ahead. [`attack_rays`] is what check detection
//! uses.

use super::sliding::Ray;
use crate::board::Position;
use crate::types::*;

/// Push and capture rays for the pawn of `color` on `origin`
///
/// The push ray only contains empty squares, and capture rays only exist
/// when an opponent piece is there to be taken, so the shared ray walker
/// keeps all of them.
pub fn directions(position: &Position, origin: Square, color: Color) -> Vec<Ray> {
    let forward = color.forward();
    let mut rays = Vec::with_capacity(3);

    let mut push = Ray::new();
    if let Some(one) = origin.offset(0, forward).filter(|sq| position.is_empty(*sq)) {
        push.push(one);
        if origin.y() == color.pawn_start_row() {
            if let Some(two) = origin.offset(0, 2 * forward).filter(|sq| position.is_empty(*sq)) {
                push.push(two);
            }
        }
    }
    if !push.is_empty() {
        rays.push(push);
    }

    for target in diagonals(origin, color) {
        if position.color_at(target) == Some(color.opponent()) {
            let mut ray = Ray::new();
            ray.push(target);
            rays.push(ray);
        }
    }

    rays
}

/// Both forward diagonals, regardless of occupancy
pub fn attack_rays(origin: Square, color: Color) -> Vec<Ray> {
    diagonals(origin, color)
        .map(|sq| {
            let mut ray = Ray::new();
            ray.push(sq);
            ray
        })
        .collect()
}

/// Is `square` on the first or last row, where pawns promote?
#[inline]
pub fn is_promotion_row(square: Square) -> bool {
    square.y() == 0 || square.y() == 7
}

fn diagonals(origin: Square, color: Color) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1]
        .into_iter()
        .filter_map(move |dx| origin.offset(dx, forward))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    fn flatten(rays: Vec<Ray>) -> Vec<Square> {
        rays.into_iter().flatten().collect()
    }

    #[test]
    fn test_double_push_from_start_only() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::Pawn, Color::White, sq("e2"));
        position.place(PieceKind::Pawn, Color::White, sq("d3"));

        let from_start = flatten(directions(&position, sq("e2"), Color::White));
        assert_eq!(from_start, vec![sq("e3"), sq("e4")]);

        let advanced = flatten(directions(&position, sq("d3"), Color::White));
        assert_eq!(advanced, vec![sq("d4")]);
    }

    #[test]
    fn test_double_push_blocked_by_any_piece() {
        let mut position = Position::empty(Color::Black);
        position.place(PieceKind::Pawn, Color::Black, sq("c7"));
        position.place(PieceKind::Knight, Color::White, sq("c6"));

        assert!(directions(&position, sq("c7"), Color::Black).is_empty());
    }

    #[test]
    fn test_captures_need_an_enemy() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::Pawn, Color::White, sq("d4"));
        position.place(PieceKind::Pawn, Color::Black, sq("e5"));
        position.place(PieceKind::Pawn, Color::White, sq("c5"));

        let moves = flatten(directions(&position, sq("d4"), Color::White));
        assert!(moves.contains(&sq("e5")));
        assert!(!moves.contains(&sq("c5")));
        assert!(moves.contains(&sq("d5")));
    }

    #[test]
    fn test_attacks_ignore_occupancy() {
        let attacks = flatten(attack_rays(sq("a7"), Color::Black));
        assert_eq!(attacks, vec![sq("b6")]);
    }
}
