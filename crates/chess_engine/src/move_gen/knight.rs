//! Knight move generation
//!
//! Knights move in an L-shape: two squares in one direction, then one square
//! perpendicular. They jump, so every ray has length one and only the
//! destination square's occupant matters.

use super::sliding::{step_rays, Ray};
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// One single-square ray per on-board knight jump
pub fn directions(origin: Square) -> Vec<Ray> {
    step_rays(origin, &KNIGHT_OFFSETS)
}
