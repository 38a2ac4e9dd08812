//! Attack detection, check and legal move filtering
//!
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! A candidate move is legal when it does not leave the mover's king
//! attacked. To find out, the move is simulated in place: the destination
//! slot takes the moving piece, the origin slot is cleared, and both previous
//! occupants are remembered. The king's square is then tested against every
//! square the opponent attacks, and both slots are restored before
//! returning. Only those two slots are touched, no position copy is made.

use super::king::{castle_rook_squares, is_castling_slide};
use super::{attack_squares_from, raw_moves};
use crate::bitset::SquareSet;
use crate::board::Position;
use crate::types::*;

/// Information needed to undo a simulated move
struct UndoInfo {
    mv: Move,
    moved: Option<PieceId>,
    captured: Option<PieceId>,
}

fn make_scratch(position: &mut Position, mv: Move) -> UndoInfo {
    let undo = UndoInfo {
        mv,
        moved: position.occupant(mv.from),
        captured: position.occupant(mv.to),
    };
    position.set_occupant(mv.from, None);
    position.set_occupant(mv.to, undo.moved);
    undo
}

fn unmake_scratch(position: &mut Position, undo: UndoInfo) {
    position.set_occupant(undo.mv.to, undo.captured);
    position.set_occupant(undo.mv.from, undo.moved);
}

/// Every square attacked by at least one piece of `color`
///
/// Not filtered for self-check: a pinned piece still attacks.
pub fn attacked_squares(position: &Position, color: Color) -> SquareSet {
    let mut attacked = SquareSet::new();
    for (origin, _) in position.pieces_of(color) {
        attacked.extend(attack_squares_from(position, origin));
    }
    attacked
}

/// Is `color`'s king attacked, optionally after the hypothetical `mv`?
///
/// The board is left exactly as it was found.
///
/// # Panics
///
/// Panics if `color` has no king on the board. Every position is expected to
/// hold exactly one king per side.
pub fn is_in_check(position: &mut Position, color: Color, hypothetical: Option<Move>) -> bool {
    let undo = hypothetical.map(|mv| make_scratch(position, mv));

    let verdict = position
        .king_square(color)
        .map(|king| attacked_squares(position, color.opponent()).contains(king));

    if let Some(undo) = undo {
        unmake_scratch(position, undo);
    }

    match verdict {
        Some(in_check) => in_check,
        None => panic!("[CHECK] no {color} king on the board"),
    }
}

/// Legal destinations for the piece on `from`, in generation order
///
/// Empty when the square is empty. A king is never a capture target, even
/// when the side to move was left in check by a position that skipped a
/// turn.
pub fn legal_moves(position: &mut Position, from: Square) -> Vec<Square> {
    let Some(piece) = position.piece_at(from).copied() else {
        return Vec::new();
    };

    let mut legal = Vec::new();
    for to in raw_moves(position, from) {
        if position
            .piece_at(to)
            .is_some_and(|target| target.kind == PieceKind::King)
        {
            continue;
        }
        if piece.kind == PieceKind::King
            && is_castling_slide(from, to)
            && !castle_path_safe(position, piece.color, from, to)
        {
            continue;
        }
        if !is_in_check(position, piece.color, Some(Move::new(from, to))) {
            legal.push(to);
        }
    }
    legal
}

/// Every legal move for `color`, by origin square in row-major order
pub fn legal_moves_for(position: &mut Position, color: Color) -> Vec<Move> {
    let origins: Vec<Square> = position.pieces_of(color).map(|(sq, _)| sq).collect();

    let mut moves = Vec::new();
    for from in origins {
        moves.extend(
            legal_moves(position, from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

pub fn has_any_legal_move(position: &mut Position, color: Color) -> bool {
    let origins: Vec<Square> = position.pieces_of(color).map(|(sq, _)| sq).collect();
    origins
        .into_iter()
        .any(|from| !legal_moves(position, from).is_empty())
}

/// In check with no legal move anywhere
pub fn is_in_checkmate(position: &mut Position, color: Color) -> bool {
    is_in_check(position, color, None) && !has_any_legal_move(position, color)
}

/// Not in check, yet no legal move anywhere
pub fn is_in_stalemate(position: &mut Position, color: Color) -> bool {
    !is_in_check(position, color, None) && !has_any_legal_move(position, color)
}

/// A king may not castle out of check or across an attacked square
///
/// Landing on an attacked square is already covered by the ordinary
/// self-check test.
fn castle_path_safe(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let step = if to.x() > from.x() { 1 } else { -1 };
    let Some((_, passed_over)) = castle_rook_squares(from, step) else {
        return false;
    };
    let attacked = attacked_squares(position, color.opponent());
    !attacked.contains(from) && !attacked.contains(passed_over)
}
