//! Flat Monte Carlo player
//!
//! Samples a handful of root moves, plays each out several times with random
//! moves for both sides, and keeps the move whose playouts ended best on
//! average. No tree is kept between decisions.

use chess_engine::api::apply_move;
use chess_engine::constants::KING_VALUE;
use chess_engine::evaluation::{evaluate_composite, evaluate_material};
use chess_engine::move_gen::{is_in_check, legal_moves_for};
use chess_engine::{Color, Move, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ChessAgent;

/// Score of a playout that ends in checkmate, far outside either evaluation
const MATE_SCORE: f64 = KING_VALUE as f64;

/// How playout end positions are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayoutEvaluation {
    /// Material balance, as the minimax leaves use
    #[default]
    Material,
    /// Weighted material share, center control and threats
    Composite,
}

/// Breadth and length of the playouts behind one decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Root moves sampled per decision
    pub root_moves: usize,
    /// Playouts per sampled root move
    pub playouts: usize,
    /// Random plies played after the root move
    pub playout_depth: u32,
    pub evaluation: PlayoutEvaluation,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            root_moves: 20,
            playouts: 20,
            playout_depth: 10,
            evaluation: PlayoutEvaluation::Material,
        }
    }
}

/// Plays the root move with the best average playout score
pub struct MonteCarloPlayer {
    color: Color,
    config: MonteCarloConfig,
    rng: StdRng,
}

impl MonteCarloPlayer {
    pub fn new(color: Color, config: MonteCarloConfig) -> Self {
        Self {
            color,
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(color: Color, config: MonteCarloConfig, seed: u64) -> Self {
        Self {
            color,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Play `first` from `root`, then random moves, and score the end
    fn playout(&mut self, root: &Position, first: Move) -> f64 {
        let mut board = root.deep_copy();
        apply_move(&mut board, first.from, first.to, true);

        for _ in 0..self.config.playout_depth {
            let mover = board.turn();
            let moves = legal_moves_for(&mut board, mover);
            let Some(&next) = moves.choose(&mut self.rng) else {
                break;
            };
            apply_move(&mut board, next.from, next.to, true);
        }
        self.score(&mut board)
    }

    fn score(&self, board: &mut Position) -> f64 {
        let mover = board.turn();
        if legal_moves_for(board, mover).is_empty() && is_in_check(board, mover, None) {
            return if mover == self.color {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }

        match self.config.evaluation {
            PlayoutEvaluation::Material => f64::from(evaluate_material(board, self.color)),
            PlayoutEvaluation::Composite => evaluate_composite(board, self.color),
        }
    }
}

impl ChessAgent for MonteCarloPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, position: &Position) -> Option<Move> {
        let mut root = position.deep_copy();
        root.set_turn(self.color);

        let candidates = legal_moves_for(&mut root, self.color);
        let sampled: Vec<Move> = candidates
            .choose_multiple(&mut self.rng, self.config.root_moves.max(1))
            .copied()
            .collect();
        let playouts = self.config.playouts.max(1);

        let mut best: Option<(f64, Move)> = None;
        for mv in sampled {
            let total: f64 = (0..playouts).map(|_| self.playout(&root, mv)).sum();
            let average = total / playouts as f64;
            debug!("[SEARCH] {} tries {}: average {:.2}", self.color, mv, average);

            let improves = match best {
                None => true,
                Some((best_average, _)) => average > best_average,
            };
            if improves {
                best = Some((average, mv));
            }
        }

        let (average, mv) = best?;
        info!(
            "[SEARCH] {} plays {} (average {:.2} over {} playouts)",
            self.color, mv, average, playouts
        );
        Some(mv)
    }
}
