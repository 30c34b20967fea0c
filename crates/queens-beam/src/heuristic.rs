//! Conflict heuristic: the number of attacking queen pairs.

use crate::board::BoardState;

/// Count the unordered column pairs whose queens attack each other.
///
/// A pair `(i, j)` with `i < j` attacks when the queens share a row or a
/// diagonal. Queens in different columns cannot satisfy both at once, so each
/// pair adds at most 1. Zero means no queen attacks another.
pub fn attacking_pairs(state: &BoardState) -> usize {
    let rows = state.rows();
    let mut pairs = 0;

    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if attacks(rows[i], rows[j], j - i) {
                pairs += 1;
            }
        }
    }

    pairs
}

/// Every attacking pair as `(left_column, right_column)`, in column order.
pub fn attacking_columns(state: &BoardState) -> Vec<(usize, usize)> {
    let rows = state.rows();
    (0..rows.len())
        .flat_map(|i| ((i + 1)..rows.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| attacks(rows[i], rows[j], j - i))
        .collect()
}

fn attacks(row_a: usize, row_b: usize, column_distance: usize) -> bool {
    row_a == row_b || row_a.abs_diff(row_b) == column_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[usize]) -> BoardState {
        BoardState::from_rows(rows.to_vec()).unwrap()
    }

    #[test]
    fn test_known_six_queens_solution() {
        assert_eq!(attacking_pairs(&board(&[1, 3, 5, 0, 2, 4])), 0);
    }

    #[test]
    fn test_four_queens_solutions() {
        assert_eq!(attacking_pairs(&board(&[1, 3, 0, 2])), 0);
        assert_eq!(attacking_pairs(&board(&[2, 0, 3, 1])), 0);
    }

    #[test]
    fn test_all_same_row() {
        // Every one of the C(5, 2) pairs shares a row.
        assert_eq!(attacking_pairs(&board(&[3, 3, 3, 3, 3])), 10);
    }

    #[test]
    fn test_main_diagonal() {
        assert_eq!(attacking_pairs(&board(&[0, 1, 2, 3])), 6);
        assert_eq!(attacking_pairs(&board(&[3, 2, 1, 0])), 6);
    }

    #[test]
    fn test_mixed_conflicts() {
        // (0,1) share a row, (1,3) and (2,3) share diagonals
        let state = board(&[0, 0, 3, 2]);
        assert_eq!(attacking_columns(&state), vec![(0, 1), (1, 3), (2, 3)]);
        assert_eq!(attacking_pairs(&state), 3);
    }

    #[test]
    fn test_single_queen() {
        assert_eq!(attacking_pairs(&board(&[0])), 0);
    }

    #[test]
    fn test_mirror_preserves_cost() {
        // Reversing the columns maps pairs onto pairs with the same distances.
        let rows = [4, 0, 0, 3, 5, 1];
        let mut mirrored = rows;
        mirrored.reverse();
        assert_eq!(
            attacking_pairs(&board(&rows)),
            attacking_pairs(&board(&mirrored))
        );
    }

    #[test]
    fn test_zero_iff_no_shared_row_or_diagonal() {
        let samples: [&[usize]; 4] = [
            &[1, 3, 5, 0, 2, 4],
            &[0, 2, 4, 1, 3, 5],
            &[0, 4, 7, 5, 2, 6, 1, 3],
            &[2, 0, 3, 1],
        ];
        for rows in samples {
            let state = board(rows);
            let cost = attacking_pairs(&state);
            assert_eq!(cost == 0, attacking_columns(&state).is_empty());
            assert_eq!(cost, attacking_columns(&state).len());
        }
    }
}
