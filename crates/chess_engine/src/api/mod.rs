//! Public API for the chess engine
//!
//! Provides high-level functions for game management, move application and
//! AI move choice.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move application and validation (apply_move, do_move, is_legal_move)
//! - `state` - Game state queries and AI (game_status, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{apply_move, do_move, do_move_notation, is_legal_move};
pub use state::{game_status, reply, GameStatus};
