//! Players that pick moves for one side
//!
//! Every agent answers the same question: given the current position, which
//! move does it want to play? `None` means it will not move, which the match
//! loop treats as a draw.
//!
//! - [`HumanPlayer`]: reads coordinates typed at a terminal
//! - [`RandomPlayer`]: any legal move, uniformly
//! - [`MinimaxPlayer`]: the engine's sampling minimax search
//! - [`MonteCarloPlayer`]: averages random playouts from sampled root moves

mod human;
mod minimax;
mod montecarlo;
mod random;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;
pub use montecarlo::{MonteCarloConfig, MonteCarloPlayer, PlayoutEvaluation};
pub use random::RandomPlayer;

use std::fmt;
use std::str::FromStr;

use chess_engine::{Color, Move, Position, SearchConfig};

use crate::config::MatchSettings;
use crate::error::MatchError;

/// A decision-maker for one color
pub trait ChessAgent {
    /// The side this agent plays
    fn color(&self) -> Color;

    /// Move to play from `position`, or `None` to stop
    fn choose_action(&mut self, position: &Position) -> Option<Move>;
}

/// Agent types selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Random,
    Minimax,
    MonteCarlo,
}

impl AgentKind {
    /// Whether the agent can play without someone at the keyboard
    pub fn is_automated(self) -> bool {
        !matches!(self, AgentKind::Human)
    }

    /// Build an agent of this kind for `color`
    ///
    /// `settings` configures minimax and Monte Carlo agents. `seed` replaces
    /// the configured search seed for this agent alone; without either, the
    /// agent draws fresh entropy. Human agents read from stdin and prompt on
    /// stdout.
    pub fn build(
        self,
        color: Color,
        settings: &MatchSettings,
        seed: Option<u64>,
    ) -> Box<dyn ChessAgent> {
        let search = SearchConfig {
            seed: seed.or(settings.search.seed),
            ..settings.search
        };
        match self {
            AgentKind::Human => Box::new(HumanPlayer::stdin(color)),
            AgentKind::Random => Box::new(match search.seed {
                Some(seed) => RandomPlayer::seeded(color, seed),
                None => RandomPlayer::new(color),
            }),
            AgentKind::Minimax => Box::new(MinimaxPlayer::new(color, search)),
            AgentKind::MonteCarlo => Box::new(match search.seed {
                Some(seed) => MonteCarloPlayer::seeded(color, settings.monte_carlo, seed),
                None => MonteCarloPlayer::new(color, settings.monte_carlo),
            }),
        }
    }
}

impl FromStr for AgentKind {
    type Err = MatchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "human" | "humanplayer" => Ok(AgentKind::Human),
            "random" | "randomplayer" => Ok(AgentKind::Random),
            "minimax" | "minimaxplayer" => Ok(AgentKind::Minimax),
            "montecarlo" | "monte-carlo" | "montecarloplayer" => Ok(AgentKind::MonteCarlo),
            _ => Err(MatchError::UnknownAgent {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Human => "human",
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::MonteCarlo => "montecarlo",
        };
        f.write_str(name)
    }
}
