//! Depth-limited minimax search with random breadth sampling
//!
//! This module implements the move choice for automated players:
//! - Plain minimax (no alpha-beta, no transposition table)
//! - Every explored branch works on its own deep copy of the position
//! - Nodes with many candidate moves only explore a random sample of them
//! - Leaves are scored by material balance
//!
//! The sampling trades move quality for speed and makes the search
//! nondeterministic. A [`SearchConfig::seed`] makes it reproducible.
//!
//! ## Module Organization
//!
//! - `minimax` - The recursive search itself
//! - `sampling` - Breadth cap on candidate moves

mod minimax;
mod sampling;

pub use sampling::sample_candidates;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::constants::*;
use crate::types::*;

/// Search depth and breadth settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead
    pub depth: u32,
    /// Nodes with more candidates than this are sampled
    pub sample_threshold: usize,
    /// How many candidates a sampled node explores
    pub sample_width: usize,
    /// Fixed RNG seed; `None` draws fresh entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            sample_threshold: DEFAULT_SAMPLE_THRESHOLD,
            sample_width: DEFAULT_SAMPLE_WIDTH,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move, `None` when the side to search has no legal move
    pub best: Option<Move>,
    /// Minimax value from the searching side's point of view
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Minimax searcher owning its random source
pub struct Searcher<R = StdRng> {
    config: SearchConfig,
    rng: R,
    nodes: u64,
}

impl Searcher<StdRng> {
    /// Searcher seeded from the config, or from OS entropy without a seed
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Searcher<R> {
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            nodes: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `position` for `color` to `config.depth` plies
    ///
    /// The caller's position is never touched; the search runs on copies.
    /// `color` is treated as the side to move regardless of the position's
    /// own turn. A depth of zero only evaluates and never yields a move.
    pub fn search(&mut self, position: &Position, color: Color) -> SearchOutcome {
        self.search_to(position, color, self.config.depth)
    }

    /// Search for a move to play, at least one ply deep
    ///
    /// Like [`Searcher::search`], but a configured depth of zero is raised to
    /// one so that `best` is only `None` when `color` has no legal move.
    pub fn decide(&mut self, position: &Position, color: Color) -> SearchOutcome {
        self.search_to(position, color, self.config.depth.max(1))
    }

    /// Pick a move for `color`, or `None` when it has no legal move
    pub fn choose_move(&mut self, position: &Position, color: Color) -> Option<Move> {
        self.decide(position, color).best
    }

    fn search_to(&mut self, position: &Position, color: Color, depth: u32) -> SearchOutcome {
        self.nodes = 0;

        let mut root = position.deep_copy();
        root.set_turn(color);

        let (score, best) = self.minimax(&mut root, depth, color);
        debug!(
            "[SEARCH] {} depth {} -> {} score {} ({} nodes)",
            color,
            depth,
            best.map_or_else(|| "none".to_string(), |m| m.to_string()),
            score,
            self.nodes
        );

        SearchOutcome {
            best,
            score,
            nodes: self.nodes,
        }
    }
}

/// One-shot search with a fresh [`Searcher`]
pub fn choose_move(position: &Position, color: Color, config: SearchConfig) -> Option<Move> {
    Searcher::new(config).choose_move(position, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_round_trip() {
        let config = SearchConfig::default().with_depth(4).with_seed(21);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SearchConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_config_fields_take_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"sample_width": 3}"#).unwrap();
        assert_eq!(config.sample_width, 3);
        assert_eq!(config.depth, DEFAULT_SEARCH_DEPTH);
        assert_eq!(config.seed, None);
    }
}
