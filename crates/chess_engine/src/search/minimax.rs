//! Recursive minimax
//!
//! Scores are always from the root side's point of view: the root side
//! maximizes, its opponent minimizes. Mate scores are the extremes of `i32`,
//! so no material count can ever compete with them.

use rand::Rng;
use tracing::trace;

use super::sampling::sample_candidates;
use super::Searcher;
use crate::api::apply_move;
use crate::board::Position;
use crate::constants::*;
use crate::evaluation::evaluate_material;
use crate::move_gen::{is_in_checkmate, legal_moves_for};
use crate::types::*;

impl<R: Rng> Searcher<R> {
    /// Minimax value of `position` and the move that achieves it
    ///
    /// The side to move is `position.turn()`. `position` belongs to this
    /// branch alone; children get their own copies.
    pub(super) fn minimax(
        &mut self,
        position: &mut Position,
        depth: u32,
        root: Color,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        let to_move = position.turn();

        if is_in_checkmate(position, to_move) {
            let score = if to_move == root.opponent() {
                WIN_SCORE
            } else {
                LOSS_SCORE
            };
            return (score, None);
        }

        if depth == 0 {
            return (evaluate_material(position, root), None);
        }

        let candidates = legal_moves_for(position, to_move);
        if candidates.is_empty() {
            // Stalemate inside the tree. Scored as a draw, not as a loss for
            // the side that cannot move.
            return (DRAW_SCORE, None);
        }

        let total = candidates.len();
        let candidates = sample_candidates(
            candidates,
            self.config.sample_threshold,
            self.config.sample_width,
            &mut self.rng,
        );
        trace!(
            "[SEARCH] depth {} {} to move: exploring {} of {}",
            depth,
            to_move,
            candidates.len(),
            total
        );

        let maximizing = to_move == root;
        let mut best: Option<(i32, Move)> = None;

        for mv in candidates {
            let mut branch = position.deep_copy();
            apply_move(&mut branch, mv.from, mv.to, true);
            let (score, _) = self.minimax(&mut branch, depth - 1, root);

            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, mv));
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (DRAW_SCORE, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SearchConfig, Searcher};
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(coord: &str) -> Square {
        Square::from_coord(coord).unwrap()
    }

    fn seeded(depth: u32, threshold: usize, width: usize) -> Searcher<StdRng> {
        let config = SearchConfig {
            depth,
            sample_threshold: threshold,
            sample_width: width,
            seed: Some(11),
        };
        Searcher::with_rng(config, StdRng::seed_from_u64(11))
    }

    /// White: Kg6, Qa7. Black: Kh8. Qa7-g7 is the only mate in one.
    fn mate_in_one() -> Position {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("g6"));
        position.place(PieceKind::Queen, Color::White, sq("a7"));
        position.place(PieceKind::King, Color::Black, sq("h8"));
        position
    }

    #[test]
    fn test_full_width_finds_mate_in_one() {
        let mut searcher = seeded(1, usize::MAX, usize::MAX);
        let outcome = searcher.search(&mate_in_one(), Color::White);

        assert_eq!(outcome.score, WIN_SCORE);
        let best = outcome.best.unwrap();
        assert_eq!(best.from, sq("a7"));

        let mut after = mate_in_one();
        apply_move(&mut after, best.from, best.to, false);
        assert!(is_in_checkmate(&mut after, Color::Black));
    }

    #[test]
    fn test_full_width_depth_one_grabs_free_queen() {
        let mut position = Position::empty(Color::White);
        position.place(PieceKind::King, Color::White, sq("a1"));
        position.place(PieceKind::Rook, Color::White, sq("d1"));
        position.place(PieceKind::Queen, Color::Black, sq("d5"));
        position.place(PieceKind::King, Color::Black, sq("h8"));

        let mut searcher = seeded(1, usize::MAX, usize::MAX);
        let outcome = searcher.search(&position, Color::White);

        assert_eq!(outcome.best, Some(Move::new(sq("d1"), sq("d5"))));
        assert_eq!(outcome.score, ROOK_VALUE);
    }

    #[test]
    fn test_checkmated_root_scores_as_loss() {
        let mut position = mate_in_one();
        apply_move(&mut position, sq("a7"), sq("g7"), false);

        let mut searcher = seeded(2, 2, 2);
        let outcome = searcher.search(&position, Color::Black);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.score, LOSS_SCORE);
    }

    #[test]
    fn test_sampled_search_returns_a_legal_move() {
        let mut position = Position::standard();
        let mut searcher = seeded(3, 2, 2);
        let best = searcher.choose_move(&position, Color::White).unwrap();

        let legal = legal_moves_for(&mut position, Color::White);
        assert!(legal.contains(&best));
    }

    #[test]
    fn test_search_leaves_caller_position_alone() {
        let position = Position::standard();
        let before = position.clone();
        let mut searcher = seeded(3, 2, 2);
        let _ = searcher.search(&position, Color::Black);
        assert_eq!(position, before);
    }

    #[test]
    fn test_sampling_bounds_node_count() {
        // With width 2, a depth-3 tree has at most 1 + 2 + 4 + 8 nodes
        let mut searcher = seeded(3, 2, 2);
        let outcome = searcher.search(&Position::standard(), Color::White);
        assert!(outcome.nodes <= 15, "visited {} nodes", outcome.nodes);
    }

    #[test]
    fn test_stalemate_scores_as_draw() {
        let mut position = Position::empty(Color::Black);
        position.place(PieceKind::King, Color::Black, sq("a8"));
        position.place(PieceKind::Queen, Color::White, sq("b6"));
        position.place(PieceKind::King, Color::White, sq("c1"));

        let mut searcher = seeded(2, 2, 2);
        let outcome = searcher.search(&position, Color::Black);
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.score, DRAW_SCORE);
    }
}
