//! N-Queens by local beam search.
//!
//! This crate plugs the N-Queens problem into the beam kernel:
//! - Boards are one row index per column, so every column holds exactly one queen
//! - Cost is the number of attacking pairs; zero is a solution
//! - Neighbors move a single queen within its column
//!
//! Sessions persist a search between CLI invocations so it can be stepped,
//! inspected and reset from the command line.

pub mod board;
pub mod config;
pub mod heuristic;
pub mod results;
pub mod session;
pub mod space;
pub mod successors;

pub use board::{BoardError, BoardState, InvalidMoveError};
pub use config::{ConfigError, ConfigOverrides, QueensConfig, QueensSearch};
pub use heuristic::{attacking_columns, attacking_pairs};
pub use results::{RunReport, TrialSummary, run_trials, run_with_report};
pub use session::Session;
pub use space::NQueens;
pub use successors::successors;
