//! Breadth cap on candidate moves
//!
//! When a node has more than `threshold` candidates, only `width` of them,
//! drawn uniformly without replacement, are explored. This is what keeps a
//! depth-3 search cheap, and also why it is not a full-width search.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::Move;

/// Candidates to explore at one node
///
/// Lists no longer than `threshold` are returned whole, in order. A `width`
/// of zero is treated as one so a node with moves always explores something.
pub fn sample_candidates<R: Rng + ?Sized>(
    moves: Vec<Move>,
    threshold: usize,
    width: usize,
    rng: &mut R,
) -> Vec<Move> {
    if moves.len() <= threshold {
        return moves;
    }
    moves
        .choose_multiple(rng, width.max(1))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn moves(n: usize) -> Vec<Move> {
        (0..n)
            .map(|i| {
                let from = Square::from_index(i).unwrap();
                let to = Square::from_index(63 - i).unwrap();
                Move::new(from, to)
            })
            .collect()
    }

    #[test]
    fn test_short_lists_pass_through() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = moves(2);
        assert_eq!(sample_candidates(input.clone(), 2, 2, &mut rng), input);
    }

    #[test]
    fn test_long_lists_are_cut_to_width() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = moves(20);
        let sample = sample_candidates(input.clone(), 2, 2, &mut rng);

        assert_eq!(sample.len(), 2);
        assert_ne!(sample[0], sample[1], "sampling is without replacement");
        assert!(sample.iter().all(|m| input.contains(m)));
    }

    #[test]
    fn test_same_seed_same_sample() {
        let a = sample_candidates(moves(20), 2, 3, &mut StdRng::seed_from_u64(42));
        let b = sample_candidates(moves(20), 2, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_width_still_explores_one() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_candidates(moves(5), 2, 0, &mut rng).len(), 1);
    }
}
