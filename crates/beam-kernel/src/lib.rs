//! Beam Kernel: local beam search with stochastic exploration and restarts.
//!
//! This crate implements a problem-agnostic local beam search. A beam of
//! candidate states is expanded each iteration, the lowest-cost candidates
//! survive, and a beam that stops changing is replaced with random states.
//! Problems plug in through the [`SearchSpace`] trait.

pub mod config;
pub mod controller;
pub mod explorer;
pub mod restart;
pub mod selection;
pub mod space;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, SearchConfig};
pub use controller::{BeamSearchController, RestoreError, SearchProgress, SearchStatus, Snapshot};
pub use explorer::StochasticExplorer;
pub use restart::{BeamUpdate, RestartPolicy, random_beam};
pub use selection::{Scored, rank, select_best};
pub use space::SearchSpace;
