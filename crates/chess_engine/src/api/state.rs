//! Game state queries and AI move generation
//!
//! Functions for querying game state and generating AI moves.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::move_gen::*;
use crate::search::{SearchConfig, Searcher};
use crate::types::*;

/// Whether `color` can still play, and if not, why
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Checkmate,
    Stalemate,
}

/// Get current game state for `color` (playing, checkmate, stalemate)
pub fn game_status(position: &mut Position, color: Color) -> GameStatus {
    let in_check = is_in_check(position, color, None);
    let has_legal_moves = has_any_legal_move(position, color);

    if !has_legal_moves {
        if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else {
        GameStatus::Playing
    }
}

/// Get AI's response to current position
///
/// # Arguments
///
/// * `position` - The position to search from
/// * `color` - The color to move
/// * `config` - Depth and sampling settings
pub fn reply(position: &Position, color: Color, config: SearchConfig) -> Option<Move> {
    Searcher::new(config).choose_move(position, color)
}
