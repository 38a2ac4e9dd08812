//! Error types for chess engine
//!
//! Legality checks in the engine answer with plain booleans. These errors
//! cover the places where a caller wants to know *why*: the
//! [`crate::api::do_move`] façade and layout parsing.

use crate::types::{Color, Square};
use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Destination is not among the piece's legal moves
    #[error("Invalid move: from square {from} to square {to}")]
    InvalidMove { from: Square, to: Square },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Text that is not a formal coordinate such as `e2`
    #[error("Invalid square notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// Layout cell that is neither empty nor a color+kind code
    #[error("Invalid layout code {code:?} at row {row}, column {col}")]
    InvalidLayoutCode { row: usize, col: usize, code: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
