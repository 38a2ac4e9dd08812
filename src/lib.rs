//! Headless chess matches between pluggable agents
//!
//! The rules and the search live in the `chess_engine` crate. This crate
//! supplies what sits around them: the players (human, random, minimax and
//! Monte Carlo), the turn loop that alternates them, a parallel trial runner
//! for batches of automated games, and persisted settings for the command
//! line.

pub mod agents;
pub mod config;
pub mod error;
pub mod match_runner;
pub mod trials;

pub use agents::{
    AgentKind, ChessAgent, HumanPlayer, MinimaxPlayer, MonteCarloConfig, MonteCarloPlayer,
    PlayoutEvaluation, RandomPlayer,
};
pub use config::MatchSettings;
pub use error::{MatchError, MatchResult};
pub use match_runner::{run_match, MatchReport, Outcome, Termination};
pub use trials::{run_trials, ResultsFormat, TrialRecord, TrialTally, CSV_HEADER};
