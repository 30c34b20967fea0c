//! The N-Queens search space plugged into the beam kernel.

use beam_kernel::SearchSpace;
use rand::Rng;

use crate::board::BoardState;
use crate::config::ConfigError;
use crate::heuristic::attacking_pairs;
use crate::successors::successors;

/// N queens on an `n x n` board, scored by attacking pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueens {
    n: usize,
}

impl NQueens {
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n < 1 {
            return Err(ConfigError::BoardSize(n as i64));
        }
        Ok(Self { n })
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

impl SearchSpace for NQueens {
    type State = BoardState;

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> BoardState {
        BoardState::random(self.n, rng)
    }

    fn cost(&self, state: &BoardState) -> usize {
        attacking_pairs(state)
    }

    fn successors(&self, state: &BoardState) -> Vec<BoardState> {
        successors(state)
    }
}

#[cfg(test)]
mod tests {
    use beam_kernel::select_best;

    use super::*;

    #[test]
    fn test_zero_board_rejected() {
        assert_eq!(NQueens::new(0), Err(ConfigError::BoardSize(0)));
    }

    #[test]
    fn test_select_best_over_successors() {
        let space = NQueens::new(6).unwrap();
        let state = BoardState::from_rows(vec![0, 0, 0, 0, 0, 0]).unwrap();
        let pool = space.successors(&state);
        let min = pool.iter().map(|s| space.cost(s)).min().unwrap();

        let best = select_best(&space, pool, 3);

        assert_eq!(best.len(), 3);
        assert_eq!(space.cost(&best[0]), min);
        let costs: Vec<usize> = best.iter().map(|s| space.cost(s)).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_goal_detection() {
        let space = NQueens::new(6).unwrap();
        let solved = BoardState::from_rows(vec![1, 3, 5, 0, 2, 4]).unwrap();
        assert!(space.is_goal(&solved));
    }
}
