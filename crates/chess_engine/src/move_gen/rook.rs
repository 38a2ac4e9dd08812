//! Rook move generation
//!
//! Rooks slide horizontally and vertically until blocked by another piece or
//! the board edge.

use super::sliding::{slide_rays, Ray, ROOK_DIRS};
use crate::types::*;

/// The four straight rays from `origin`
pub fn directions(origin: Square) -> Vec<Ray> {
    slide_rays(origin, &ROOK_DIRS)
}
