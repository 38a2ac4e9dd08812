//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Position;

/// Create a new game with the standard initial position, White to move
pub fn new_game() -> Position {
    Position::standard()
}

/// Reset the game to the starting position
pub fn reset_game(position: &mut Position) {
    *position = Position::standard();
}
