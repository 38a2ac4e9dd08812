//! The turn loop
//!
//! Asks the agent whose color is to move for a decision, applies it through
//! the engine and checks whether the other side is now checkmated.
//!
//! ## Termination
//!
//! - The mover checkmates the opponent: the mover wins
//! - An agent returns no move: draw
//! - More than `max_plies` decisions were requested: draw
//!
//! A refused move does not pass the turn. The same agent is asked again, but
//! the decision still counts towards `max_plies`, so the loop always ends.

use std::time::{Duration, Instant};

use chess_engine::api::apply_move;
use chess_engine::move_gen::is_in_checkmate;
use chess_engine::{Color, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::agents::ChessAgent;

/// Result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    /// Short winner label: `White`, `Black` or `Draw`
    pub fn winner_label(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "White",
            Outcome::BlackWins => "Black",
            Outcome::Draw => "Draw",
        }
    }
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Checkmate,
    /// An agent declined to move
    NoMove,
    PlyLimit,
}

/// Summary of one match
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: Outcome,
    /// Decisions requested, refused ones included
    pub plies: u32,
    pub termination: Termination,
    /// Mean wall time per decision
    pub avg_decision_time: Duration,
    /// Board when the match ended
    pub position: Position,
}

/// Play a match from the standard start
pub fn run_match(
    white: &mut dyn ChessAgent,
    black: &mut dyn ChessAgent,
    max_plies: u32,
) -> MatchReport {
    run_match_from(Position::standard(), white, black, max_plies)
}

/// Play a match from `position`, starting with the side it has to move
pub fn run_match_from(
    mut position: Position,
    white: &mut dyn ChessAgent,
    black: &mut dyn ChessAgent,
    max_plies: u32,
) -> MatchReport {
    debug_assert_eq!(white.color(), Color::White);
    debug_assert_eq!(black.color(), Color::Black);

    let mut plies = 0u32;
    let mut thinking = Duration::ZERO;

    let (outcome, termination) = loop {
        let mover = position.turn();
        let agent: &mut dyn ChessAgent = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let started = Instant::now();
        let choice = agent.choose_action(&position);
        thinking += started.elapsed();
        plies += 1;

        let Some(mv) = choice else {
            info!("[MATCH] {} has no move. Players draw!", mover);
            break (Outcome::Draw, Termination::NoMove);
        };
        if plies > max_plies {
            info!("[MATCH] {} plies played. Players draw!", max_plies);
            break (Outcome::Draw, Termination::PlyLimit);
        }

        debug!("[MATCH] ply {}: {} chose {}", plies, mover, mv);
        if !apply_move(&mut position, mv.from, mv.to, false) {
            warn!("[MATCH] Invalid move {} from {}", mv, mover);
            continue;
        }

        let defender = position.turn();
        if is_in_checkmate(&mut position, defender) {
            info!("[MATCH] {} wins by checkmate after {} plies", mover, plies);
            break (Outcome::win_for(mover), Termination::Checkmate);
        }
    };

    MatchReport {
        outcome,
        plies,
        termination,
        avg_decision_time: thinking / plies.max(1),
        position,
    }
}
