//! Bishop move generation
//!
//! Bishops slide diagonally and never leave the shade of square they start on.

use super::sliding::{slide_rays, Ray, BISHOP_DIRS};
use crate::types::*;

/// The four diagonal rays from `origin`
pub fn directions(origin: Square) -> Vec<Ray> {
    slide_rays(origin, &BISHOP_DIRS)
}
