//! Successor generation: every board one queen move away.

use crate::board::BoardState;

/// All boards that differ from `state` in exactly one column.
///
/// Enumeration is column-major with rows ascending, skipping each column's
/// current row, which yields `n * (n - 1)` distinct boards. The fixed order
/// keeps selection ties reproducible.
pub fn successors(state: &BoardState) -> Vec<BoardState> {
    let n = state.size();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1));

    for (column, &current) in state.rows().iter().enumerate() {
        for row in (0..n).filter(|&r| r != current) {
            out.push(state.replaced(column, row));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_count_and_distinctness() {
        let state = BoardState::from_rows(vec![1, 3, 5, 0, 2, 4]).unwrap();
        let succ = successors(&state);

        assert_eq!(succ.len(), 6 * 5);
        let unique: HashSet<&BoardState> = succ.iter().collect();
        assert_eq!(unique.len(), succ.len());
        assert!(!succ.contains(&state));
    }

    #[test]
    fn test_each_successor_is_one_move() {
        let state = BoardState::from_rows(vec![2, 2, 0, 1, 3]).unwrap();
        for next in successors(&state) {
            let changed = state
                .rows()
                .iter()
                .zip(next.rows())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_enumeration_order() {
        let state = BoardState::from_rows(vec![0, 2, 1]).unwrap();
        let rows: Vec<Vec<usize>> = successors(&state)
            .into_iter()
            .map(Vec::from)
            .collect();

        assert_eq!(
            rows,
            vec![
                vec![1, 2, 1],
                vec![2, 2, 1],
                vec![0, 0, 1],
                vec![0, 1, 1],
                vec![0, 2, 0],
                vec![0, 2, 2],
            ]
        );
    }

    #[test]
    fn test_single_column_has_no_successors() {
        let state = BoardState::from_rows(vec![0]).unwrap();
        assert!(successors(&state).is_empty());
    }
}
