//! Beam selection: keep the k lowest-cost candidates.

use serde::{Deserialize, Serialize};

use crate::space::SearchSpace;

/// A state paired with its cost, as reported in snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scored<S> {
    pub state: S,
    pub cost: usize,
}

/// Select the `k` lowest-cost states from `pool`.
///
/// The sort is stable: candidates with equal cost keep their pool order, so
/// the first element is the earliest minimal-cost member of the pool.
/// Returns `min(k, pool.len())` states. Each cost is computed once.
pub fn select_best<P: SearchSpace>(space: &P, pool: Vec<P::State>, k: usize) -> Vec<P::State> {
    rank(space, pool)
        .into_iter()
        .take(k)
        .map(|scored| scored.state)
        .collect()
}

/// Score every state and stably sort ascending by cost.
pub fn rank<P: SearchSpace>(space: &P, states: Vec<P::State>) -> Vec<Scored<P::State>> {
    let mut scored: Vec<Scored<P::State>> = states
        .into_iter()
        .map(|state| {
            let cost = space.cost(&state);
            Scored { state, cost }
        })
        .collect();
    scored.sort_by_key(|s| s.cost);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::NumberLine;

    #[test]
    fn test_select_returns_k_in_cost_order() {
        let space = NumberLine::new(10, 20);
        let pool = vec![3, 15, 9, 12, 0, 10];

        let best = select_best(&space, pool, 3);

        assert_eq!(best, vec![10, 9, 12]);
        let costs: Vec<usize> = best.iter().map(|s| space.cost(s)).collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let space = NumberLine::new(10, 20);
        // 8 and 12 both cost 2; 12 comes first in the pool.
        let best = select_best(&space, vec![12, 8, 5], 2);
        assert_eq!(best, vec![12, 8]);

        let best = select_best(&space, vec![8, 12, 5], 2);
        assert_eq!(best, vec![8, 12]);
    }

    #[test]
    fn test_k_larger_than_pool() {
        let space = NumberLine::new(0, 5);
        let best = select_best(&space, vec![4, 2], 10);
        assert_eq!(best, vec![2, 4]);
    }

    #[test]
    fn test_empty_pool() {
        let space = NumberLine::new(0, 5);
        assert!(select_best(&space, Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_first_is_minimum() {
        let space = NumberLine::new(7, 50);
        let pool: Vec<i64> = vec![40, 1, 33, 6, 21, 8, 49];
        let min = pool.iter().map(|s| space.cost(s)).min().unwrap();

        let best = select_best(&space, pool, 4);
        assert_eq!(space.cost(&best[0]), min);
    }
}
