//! Uniformly random player
//!
//! Baseline opponent for trials: any legal move, with no lookahead.

use chess_engine::move_gen::legal_moves_for;
use chess_engine::{Color, Move, Position};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::ChessAgent;

/// Plays a uniformly random legal move
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChessAgent for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, position: &Position) -> Option<Move> {
        let mut scratch = position.deep_copy();
        let moves = legal_moves_for(&mut scratch, self.color);
        moves.choose(&mut self.rng).copied()
    }
}
