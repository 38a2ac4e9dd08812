//! Ray construction and the shared ray walker
//!
//! Every piece describes its movement as a list of rays: ordered runs of
//! squares leading away from the piece in one direction. Sliding pieces get
//! rays up to seven squares long, jumping pieces get rays of length one.
//!
//! ## Algorithm
//!
//! [`walk_rays`] turns rays into destinations. For each ray, squares are
//! visited outward in order and:
//! 1. An empty square is a destination, and the walk continues
//! 2. An opponent piece is a destination (capture), and the walk stops
//! 3. An own piece is not a destination, and the walk stops

use smallvec::SmallVec;

use crate::board::Position;
use crate::constants::MAX_RAY_LEN;
use crate::types::*;

/// Squares in one direction, nearest first
pub type Ray = SmallVec<[Square; MAX_RAY_LEN]>;

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (1, 0),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Full-length rays from `origin` towards the board edge in each direction
pub fn slide_rays(origin: Square, dirs: &[(i8, i8)]) -> Vec<Ray> {
    dirs.iter()
        .map(|&(dx, dy)| {
            let mut ray = Ray::new();
            let mut current = origin;
            while let Some(next) = current.offset(dx, dy) {
                ray.push(next);
                current = next;
            }
            ray
        })
        .filter(|ray| !ray.is_empty())
        .collect()
}

/// Single-square rays for each on-board offset (knight and king steps)
pub fn step_rays(origin: Square, offsets: &[(i8, i8)]) -> Vec<Ray> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| origin.offset(dx, dy))
        .map(|sq| {
            let mut ray = Ray::new();
            ray.push(sq);
            ray
        })
        .collect()
}

/// Walk rays for a piece of `color`, keeping reachable squares
pub fn walk_rays(position: &Position, color: Color, rays: &[Ray], moves: &mut Vec<Square>) {
    for ray in rays {
        for &square in ray {
            match position.color_at(square) {
                None => moves.push(square),
                Some(other) if other != color => {
                    moves.push(square);
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
