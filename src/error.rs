//! Error types for the match runner
//!
//! Covers settings persistence, agent selection and terminal input. Rule
//! violations during play are not errors here: the match loop logs a refused
//! move and asks again.

use thiserror::Error;

/// Errors that can occur outside the engine
#[derive(Error, Debug)]
pub enum MatchError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[source] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Agent name that matches no known player type
    #[error("Unknown agent {name:?} (expected human, random, minimax or montecarlo)")]
    UnknownAgent { name: String },

    /// Trials run unattended and cannot wait on a terminal
    #[error("Trials need two automated agents, got {white} vs {black}")]
    InteractiveTrials { white: String, black: String },

    /// Trial record could not be encoded
    #[error("Result serialization error: {0}")]
    Results(#[source] serde_json::Error),

    /// Trial workers could not be started
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Engine refused an operation
    #[error("Engine error: {0}")]
    Engine(#[from] chess_engine::ChessEngineError),

    /// Reading moves or writing results failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for match operations
pub type MatchResult<T> = Result<T, MatchError>;
