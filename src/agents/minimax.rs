//! Minimax-backed player

use chess_engine::{Color, Move, Position, SearchConfig, Searcher};
use tracing::info;

use super::ChessAgent;

/// Plays the engine's sampling minimax choice
pub struct MinimaxPlayer {
    color: Color,
    searcher: Searcher,
}

impl MinimaxPlayer {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            searcher: Searcher::new(config),
        }
    }
}

impl ChessAgent for MinimaxPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_action(&mut self, position: &Position) -> Option<Move> {
        let outcome = self.searcher.decide(position, self.color);
        if let Some(mv) = outcome.best {
            info!(
                "[SEARCH] {} plays {} (score {}, {} nodes)",
                self.color, mv, outcome.score, outcome.nodes
            );
        }
        outcome.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::move_gen::legal_moves_for;

    #[test]
    fn test_opening_move_is_legal() {
        let mut position = Position::standard();
        let mut player = MinimaxPlayer::new(Color::White, SearchConfig::default().with_seed(9));
        let mv = player.choose_action(&position).unwrap();
        assert!(legal_moves_for(&mut position, Color::White).contains(&mv));
    }

    #[test]
    fn test_zero_depth_still_moves() {
        let position = Position::standard();
        let config = SearchConfig::default().with_depth(0).with_seed(9);
        let mut player = MinimaxPlayer::new(Color::White, config);
        assert!(player.choose_action(&position).is_some());
    }
}
