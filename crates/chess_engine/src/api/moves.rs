//! Move execution and validation
//!
//! Functions for applying moves and checking move legality.
//!
//! [`apply_move`] is the one place the board changes for real. Besides
//! relocating the piece it handles the two side effects a move can have:
//! - **Promotion**: a pawn landing on the first or last row becomes a Queen
//! - **Castling**: a king moving two columns brings the corner rook along
//!   to the square it passed over

use tracing::warn;

use crate::board::Position;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::king::{castle_rook_squares, is_castling_slide};
use crate::move_gen::pawn::is_promotion_row;
use crate::move_gen::legal_moves;
use crate::types::*;

/// Apply the move `from -> to` and pass the turn
///
/// # Returns
///
/// `false`, with the board untouched, when `from` is empty or when `to` is
/// not one of the piece's legal moves. `force` skips the legality check;
/// callers that already validated the move (the search) use it.
///
/// # Examples
///
/// ```rust,ignore
/// let mut position = Position::standard();
/// let e2 = Square::from_coord("e2").unwrap();
/// let e4 = Square::from_coord("e4").unwrap();
/// assert!(apply_move(&mut position, e2, e4, false));
/// assert_eq!(position.turn(), Color::Black);
/// ```
pub fn apply_move(position: &mut Position, from: Square, to: Square, force: bool) -> bool {
    if position.occupant(from).is_none() {
        return false;
    }
    if !force && !legal_moves(position, from).contains(&to) {
        return false;
    }

    commit(position, from, to);
    position.flip_turn();
    true
}

/// Relocate the piece on `from` and resolve promotion and castling
///
/// Does not touch the turn, so the castling rook's co-move does not flip it
/// a second time.
fn commit(position: &mut Position, from: Square, to: Square) {
    let Some(id) = position.occupant(from) else {
        return;
    };

    position.set_occupant(from, None);
    position.set_occupant(to, Some(id));
    let piece = position.piece_mut(id);
    piece.pos = to;
    piece.has_moved = true;
    let piece = *piece;

    if piece.kind == PieceKind::Pawn && is_promotion_row(to) {
        position.place(PieceKind::Queen, piece.color, to);
    }

    if piece.kind == PieceKind::King && is_castling_slide(from, to) {
        let step = if to.x() > from.x() { 1 } else { -1 };
        match castle_rook_squares(from, step) {
            Some((rook_from, rook_to)) if position.occupant(rook_from).is_some() => {
                commit(position, rook_from, rook_to);
            }
            _ => warn!("[MOVE] king slid {from}-{to} with no rook to bring along"),
        }
    }
}

/// Check if `from -> to` is legal for whichever piece stands on `from`
pub fn is_legal_move(position: &mut Position, from: Square, to: Square) -> bool {
    legal_moves(position, from).contains(&to)
}

/// Apply a move for the side to move, reporting why it was refused
///
/// # Errors
///
/// - [`ChessEngineError::NoPieceAtSquare`] if `from` is empty
/// - [`ChessEngineError::WrongPieceColor`] if the piece is not the side to move's
/// - [`ChessEngineError::InvalidMove`] if `to` is not a legal destination
pub fn do_move(position: &mut Position, from: Square, to: Square) -> ChessEngineResult<()> {
    let piece = position
        .piece_at(from)
        .copied()
        .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

    if piece.color != position.turn() {
        return Err(ChessEngineError::WrongPieceColor {
            square: from,
            color: position.turn(),
        });
    }

    if apply_move(position, from, to, false) {
        Ok(())
    } else {
        Err(ChessEngineError::InvalidMove { from, to })
    }
}

/// [`do_move`] with formal coordinates such as `"e2"`, `"e4"`
pub fn do_move_notation(position: &mut Position, from: &str, to: &str) -> ChessEngineResult<Move> {
    let parse = |text: &str| {
        Square::from_coord(text).ok_or_else(|| ChessEngineError::InvalidNotation {
            notation: text.to_string(),
        })
    };
    let mv = Move::new(parse(from)?, parse(to)?);
    do_move(position, mv.from, mv.to)?;
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::is_in_checkmate;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    #[test]
    fn test_apply_moves_piece_and_flips_turn() {
        let mut position = Position::standard();
        assert!(apply_move(&mut position, sq("e2"), sq("e4"), false));

        assert!(position.is_empty(sq("e2")));
        let pawn = position.piece_at(sq("e4")).unwrap();
        assert_eq!(pawn.pos, sq("e4"));
        assert!(pawn.has_moved);
        assert_eq!(position.turn(), Color::Black);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut position = Position::standard();
        let before = position.clone();

        assert!(!apply_move(&mut position, sq("e2"), sq("e5"), false));
        assert!(!apply_move(&mut position, sq("e4"), sq("e5"), false));
        assert_eq!(position, before);
    }

    #[test]
    fn test_force_bypasses_legality() {
        let mut position = Position::standard();
        assert!(apply_move(&mut position, sq("a1"), sq("a5"), true));
        assert_eq!(position.piece_at(sq("a5")).unwrap().kind, PieceKind::Rook);
    }

    #[test]
    fn test_white_pawn_promotes_to_queen() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("e1"));
        position.place(PieceKind::King, Color::Black, sq("h1"));
        position.place(PieceKind::Pawn, Color::White, sq("b7"));

        assert!(apply_move(&mut position, sq("b7"), sq("b8"), false));
        let promoted = position.piece_at(sq("b8")).unwrap();
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);
        assert_eq!(promoted.pos, sq("b8"));
    }

    #[test]
    fn test_black_pawn_promotes_on_capture() {
        let mut position = Position::empty(Color::Black);
        position.place(PieceKind::King, Color::White, sq("h8"));
        position.place(PieceKind::King, Color::Black, sq("a8"));
        position.place(PieceKind::Pawn, Color::Black, sq("c2"));
        position.place(PieceKind::Rook, Color::White, sq("d1"));

        assert!(apply_move(&mut position, sq("c2"), sq("d1"), false));
        let promoted = position.piece_at(sq("d1")).unwrap();
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::Black);
    }

    #[test]
    fn test_kingside_castle_brings_rook() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("e1"));
        position.place(PieceKind::Rook, Color::White, sq("h1"));
        position.place(PieceKind::King, Color::Black, sq("e8"));

        assert!(apply_move(&mut position, sq("e1"), sq("g1"), false));
        assert_eq!(position.piece_at(sq("g1")).unwrap().kind, PieceKind::King);
        let rook = position.piece_at(sq("f1")).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert_eq!(rook.pos, sq("f1"));
        assert!(position.is_empty(sq("h1")));
        assert_eq!(position.turn(), Color::Black, "castling flips the turn once");
    }

    #[test]
    fn test_queenside_castle_brings_rook() {
        let mut position = Position::empty(Color::Black);
        position.place(PieceKind::King, Color::Black, sq("e8"));
        position.place(PieceKind::Rook, Color::Black, sq("a8"));
        position.place(PieceKind::King, Color::White, sq("e1"));

        assert!(apply_move(&mut position, sq("e8"), sq("c8"), false));
        assert_eq!(position.piece_at(sq("d8")).unwrap().kind, PieceKind::Rook);
        assert!(position.is_empty(sq("a8")));
    }

    #[test]
    fn test_do_move_reports_reasons() {
        let mut position = Position::standard();

        assert_eq!(
            do_move(&mut position, sq("e4"), sq("e5")),
            Err(ChessEngineError::NoPieceAtSquare { square: sq("e4") })
        );
        assert_eq!(
            do_move(&mut position, sq("e7"), sq("e5")),
            Err(ChessEngineError::WrongPieceColor {
                square: sq("e7"),
                color: Color::White
            })
        );
        assert_eq!(
            do_move(&mut position, sq("e2"), sq("e5")),
            Err(ChessEngineError::InvalidMove {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert!(do_move(&mut position, sq("e2"), sq("e4")).is_ok());
    }

    #[test]
    fn test_fools_mate() {
        let mut position = Position::standard();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            do_move_notation(&mut position, from, to).unwrap();
        }
        assert!(is_in_checkmate(&mut position, Color::White));
    }

    #[test]
    fn test_notation_errors() {
        let mut position = Position::standard();
        assert_eq!(
            do_move_notation(&mut position, "z2", "e4"),
            Err(ChessEngineError::InvalidNotation {
                notation: "z2".to_string()
            })
        );
    }
}
