//! Chess rules and a sampling minimax search
//!
//! The engine keeps an 8x8 board of pieces, generates moves per piece kind,
//! filters them for self-check, and applies them with castling and promotion.
//! On top of that sits a depth-limited minimax over material that explores
//! only a random sample of the legal moves at each node.
//!
//! Coordinates: `x` is the file (`0 = a`), `y` is the row from the top of the
//! board (`0` = rank 8, Black's back rank). White pawns move towards `y = 0`.
//!
//! ```rust,ignore
//! use chess_engine::{api, Color, Position, SearchConfig};
//!
//! let mut position = api::new_game();
//! api::do_move_notation(&mut position, "e2", "e4")?;
//! let reply = api::reply(&position, Color::Black, SearchConfig::default());
//! ```

pub mod api;
pub mod bitset;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use board::Position;
pub use error::{ChessEngineError, ChessEngineResult};
pub use search::{SearchConfig, SearchOutcome, Searcher};
pub use types::{Color, Move, Piece, PieceId, PieceKind, Square, SquareShade};
