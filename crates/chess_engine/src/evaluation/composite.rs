//! Composite evaluation
//!
//! A heuristic score on a 0..=150 scale built from three parts, each first
//! scaled to 0..=100:
//!
//! | Part            | Weight | Measures                                       |
//! |-----------------|--------|------------------------------------------------|
//! | Material share  | 0.8    | own material over all material on the board    |
//! | Center control  | 0.2    | own pieces on and attacks into d4, e4, d5, e5  |
//! | Offense/defense | 0.5    | opponent pieces attacked minus own pieces hit  |
//!
//! Unlike [`evaluate_material`](super::evaluate_material) the score is not
//! symmetric: a higher number is better for `perspective`, but the two sides'
//! scores do not sum to a constant.

use crate::board::Position;
use crate::move_gen::attacked_squares;
use crate::types::*;

const MATERIAL_WEIGHT: f64 = 0.8;
const CENTER_WEIGHT: f64 = 0.2;
const OFFENSE_WEIGHT: f64 = 0.5;

const CENTER_SQUARES: [&str; 4] = ["d4", "e4", "d5", "e5"];

/// Piece weights for material share and center occupation
fn share_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 10,
    }
}

/// Piece weights for attacks; an attacked king outweighs everything else
fn threat_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 1000,
        other => share_value(other),
    }
}

/// Composite score for `perspective`, higher is better
pub fn evaluate_composite(position: &Position, perspective: Color) -> f64 {
    material_share(position, perspective) * MATERIAL_WEIGHT
        + center_control(position, perspective) * CENTER_WEIGHT
        + offense_defense(position, perspective) * OFFENSE_WEIGHT
}

/// Percentage of all material on the board that belongs to `perspective`
fn material_share(position: &Position, perspective: Color) -> f64 {
    let (own, total) = position
        .occupied()
        .fold((0, 0), |(own, total), (_, piece)| {
            let value = share_value(piece.kind);
            if piece.color == perspective {
                (own + value, total + value)
            } else {
                (own, total + value)
            }
        });

    if total == 0 {
        return 50.0;
    }
    f64::from(own) / f64::from(total) * 100.0
}

/// Own weight standing on the center plus one per center square attacked
fn center_control(position: &Position, perspective: Color) -> f64 {
    let attacked = attacked_squares(position, perspective);

    let control: i32 = CENTER_SQUARES
        .iter()
        .filter_map(|coord| Square::from_coord(coord))
        .map(|square| {
            let occupying = match position.piece_at(square) {
                Some(piece) if piece.color == perspective => share_value(piece.kind),
                _ => 0,
            };
            occupying + i32::from(attacked.contains(square))
        })
        .sum();

    (f64::from(control) / 10.0 * 100.0).min(100.0)
}

/// Threats made minus threats suffered, centered on 50 and clamped
fn offense_defense(position: &Position, perspective: Color) -> f64 {
    let ours = attacked_squares(position, perspective);
    let theirs = attacked_squares(position, perspective.opponent());

    let mut offense = 0;
    let mut penalty = 0;
    for (square, piece) in position.occupied() {
        if piece.color == perspective {
            if theirs.contains(square) {
                penalty += threat_value(piece.kind) * 3;
            }
        } else if ours.contains(square) {
            offense += threat_value(piece.kind) * 6;
        }
    }

    f64::from(offense - penalty + 50).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    #[test]
    fn test_starting_position_parts() {
        let position = Position::standard();
        assert_eq!(material_share(&position, Color::White), 50.0);
        assert_eq!(offense_defense(&position, Color::White), 50.0);
        // No piece on the center and nothing attacks it yet
        assert_eq!(center_control(&position, Color::White), 0.0);
        for color in [Color::White, Color::Black] {
            assert!((evaluate_composite(&position, color) - 65.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_extra_material_raises_share() {
        let mut position = Position::standard();
        position.remove(sq("d8"));

        assert!(material_share(&position, Color::White) > 50.0);
        assert!(material_share(&position, Color::Black) < 50.0);
        assert!(
            evaluate_composite(&position, Color::White)
                > evaluate_composite(&position, Color::Black)
        );
    }

    #[test]
    fn test_central_pawn_counts_for_its_side() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("a1"));
        position.place(PieceKind::King, Color::Black, sq("h8"));
        position.place(PieceKind::Pawn, Color::White, sq("e4"));

        // The pawn stands on e4 and attacks d5
        assert!((center_control(&position, Color::White) - 20.0).abs() < 1e-9);
        assert_eq!(center_control(&position, Color::Black), 0.0);
    }

    #[test]
    fn test_hanging_queen_swings_offense() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("a1"));
        position.place(PieceKind::Rook, Color::White, sq("d1"));
        position.place(PieceKind::Queen, Color::Black, sq("d5"));
        position.place(PieceKind::King, Color::Black, sq("h8"));

        // White: queen hit for 54, rook hit back for 15
        assert_eq!(offense_defense(&position, Color::White), 89.0);
        // Black: rook hit for 30, queen hit back for 27
        assert_eq!(offense_defense(&position, Color::Black), 53.0);
    }

    #[test]
    fn test_check_dominates_offense() {
        let mut position = Position::empty(Color::Black);
        position.place(PieceKind::King, Color::White, sq("a1"));
        position.place(PieceKind::Rook, Color::White, sq("h1"));
        position.place(PieceKind::King, Color::Black, sq("h8"));

        assert_eq!(offense_defense(&position, Color::White), 100.0);
        assert_eq!(offense_defense(&position, Color::Black), 0.0);
    }
}
