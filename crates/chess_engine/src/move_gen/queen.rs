//! Queen move generation
//!
//! Queens combine the rook's straight rays with the bishop's diagonal ones.

use super::sliding::{slide_rays, Ray, QUEEN_DIRS};
use crate::types::*;

/// All eight rays from `origin`
pub fn directions(origin: Square) -> Vec<Ray> {
    slide_rays(origin, &QUEEN_DIRS)
}
