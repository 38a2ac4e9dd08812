//! Position evaluation
//!
//! The search scores leaf positions by material alone: each piece is worth a
//! fixed weight, counted positive for the side being evaluated for and
//! negative for its opponent. Playout agents may use the heavier composite
//! score instead.
//!
//! ## Module Organization
//!
//! - `material` - Material balance and per-side material totals
//! - `composite` - Weighted material share, center control and threats

mod composite;
mod material;

pub use composite::evaluate_composite;
pub use material::{evaluate_material, material_totals};
