//! Toy search spaces for exercising the kernel without a real domain.

use rand::Rng;

use crate::space::SearchSpace;

/// Integers in `0..width`; cost is the distance to `target`.
#[derive(Debug, Clone)]
pub struct NumberLine {
    pub target: i64,
    pub width: i64,
}

impl NumberLine {
    pub fn new(target: i64, width: i64) -> Self {
        Self { target, width }
    }
}

impl SearchSpace for NumberLine {
    type State = i64;

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(0..self.width)
    }

    fn cost(&self, state: &i64) -> usize {
        (state - self.target).unsigned_abs() as usize
    }

    fn successors(&self, state: &i64) -> Vec<i64> {
        [state - 1, state + 1]
            .into_iter()
            .filter(|s| (0..self.width).contains(s))
            .collect()
    }
}

/// A landscape with no goal and a two-state trap.
///
/// States 0 and 1 are each other's best neighbor (cost 1 and 2, every other
/// state costs 3), so a width-2 beam `[0, 1]` selects itself again.
#[derive(Debug, Clone)]
pub struct Trap {
    pub width: i64,
}

impl SearchSpace for Trap {
    type State = i64;

    fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(0..self.width)
    }

    fn cost(&self, state: &i64) -> usize {
        match state {
            0 => 1,
            1 => 2,
            _ => 3,
        }
    }

    fn successors(&self, state: &i64) -> Vec<i64> {
        match state {
            0 => vec![1, 2],
            1 => vec![0, 3 % self.width],
            _ => vec![0, 1],
        }
    }
}
