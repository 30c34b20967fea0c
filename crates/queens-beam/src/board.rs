//! BoardState: one queen per column, stored as the queen's row in each column.
//!
//! Boards are immutable values. A move produces a new board; the original is
//! never touched. Nothing prevents two queens from sharing a row or a
//! diagonal; counting those collisions is the heuristic's job.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An explicit row list that does not describe an `n`-column board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has {actual} columns, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("board must have at least one column")]
    Empty,
    #[error("row {row} in column {column} is outside 0..{n}")]
    RowOutOfRange { column: usize, row: usize, n: usize },
}

/// A move that cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoveError {
    #[error("column {column} is outside 0..{n}")]
    ColumnOutOfRange { column: usize, n: usize },
    #[error("row {row} is outside 0..{n}")]
    RowOutOfRange { row: usize, n: usize },
    #[error("queen in column {column} is already on row {row}")]
    NoOp { column: usize, row: usize },
}

/// A candidate placement of `n` queens on an `n x n` board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BoardState {
    rows: Vec<usize>,
}

impl BoardState {
    /// Build a board from an explicit row per column.
    ///
    /// # Arguments
    /// * `rows` - `rows[c]` is the row of the queen in column `c`
    /// * `n` - Board size; `rows` must have exactly `n` entries, each below `n`
    pub fn new(rows: Vec<usize>, n: usize) -> Result<Self, BoardError> {
        if rows.len() != n {
            return Err(BoardError::WrongLength {
                expected: n,
                actual: rows.len(),
            });
        }
        Self::from_rows(rows)
    }

    /// Build a board whose size is the length of `rows`.
    pub fn from_rows(rows: Vec<usize>) -> Result<Self, BoardError> {
        let n = rows.len();
        if n == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|&(_, &row)| row >= n) {
            return Err(BoardError::RowOutOfRange { column, row, n });
        }
        Ok(Self { rows })
    }

    /// Draw each column's row independently and uniformly from `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { rows }
    }

    /// A copy of this board with the queen in `column` moved to `row`.
    ///
    /// Moving a queen onto the row it already occupies is rejected: it is
    /// not a move, and successor enumeration never produces it.
    pub fn with_move(&self, column: usize, row: usize) -> Result<Self, InvalidMoveError> {
        let n = self.size();
        if column >= n {
            return Err(InvalidMoveError::ColumnOutOfRange { column, n });
        }
        if row >= n {
            return Err(InvalidMoveError::RowOutOfRange { row, n });
        }
        if self.rows[column] == row {
            return Err(InvalidMoveError::NoOp { column, row });
        }
        Ok(self.replaced(column, row))
    }

    /// Unchecked move, for callers that already enumerate valid targets.
    pub(crate) fn replaced(&self, column: usize, row: usize) -> Self {
        let mut rows = self.rows.clone();
        rows[column] = row;
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn row(&self, column: usize) -> Option<usize> {
        self.rows.get(column).copied()
    }

    /// Compact row list, e.g. `1, 3, 5, 0, 2, 4`.
    pub fn label(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<Vec<usize>> for BoardState {
    type Error = BoardError;

    fn try_from(rows: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<BoardState> for Vec<usize> {
    fn from(state: BoardState) -> Self {
        state.rows
    }
}

/// Text grid, one board row per line: `Q` marks a queen, `.` an empty square.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            let line: Vec<&str> = self
                .rows
                .iter()
                .map(|&r| if r == row { "Q" } else { "." })
                .collect();
            write!(f, "{}", line.join(" "))?;
            if row + 1 < n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
