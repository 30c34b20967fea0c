//! The search controller: iteration loop and termination state machine.
//!
//! ## Usage
//!
//! ```ignore
//! use beam_kernel::{BeamSearchController, SearchConfig, SearchStatus};
//!
//! let mut search = BeamSearchController::new(space, SearchConfig::default())?;
//! let status = search.run_to_completion(None);
//! let snapshot = search.snapshot();
//! ```
//!
//! Every mutating command takes `&mut self`, so a controller can only ever
//! run one command at a time. Hosts that share a controller across threads
//! must wrap it in a single lock.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, SearchConfig};
use crate::explorer::StochasticExplorer;
use crate::restart::{RestartPolicy, random_beam};
use crate::selection::{Scored, select_best};
use crate::space::SearchSpace;

/// Where the search is in its lifecycle.
///
/// `GoalReached` and `Exhausted` are sinks until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Running,
    GoalReached,
    Exhausted,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStatus::Running => "running",
            SearchStatus::GoalReached => "goal reached",
            SearchStatus::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Read-only view of the search, produced on demand after any command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<S> {
    /// Beam members in beam order, each with its cost
    pub beam: Vec<Scored<S>>,
    /// First minimal-cost member under the selector ordering.
    /// Only `None` for an empty beam, which the controller never holds.
    pub best: Option<Scored<S>>,
    /// Completed iterations since the last reset
    pub iteration: usize,
    pub status: SearchStatus,
    /// Stagnation restarts since the last reset
    pub restarts: usize,
}

impl<S> Snapshot<S> {
    pub fn best_cost(&self) -> Option<usize> {
        self.best.as_ref().map(|b| b.cost)
    }
}

/// Mutable search state, detached from the controller for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress<S> {
    pub beam: Vec<S>,
    pub iteration: usize,
    pub status: SearchStatus,
    pub restarts: usize,
}

/// A saved search that cannot be resumed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RestoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("saved beam holds {actual} states, expected between 1 and {beam_width}")]
    BeamSize { actual: usize, beam_width: usize },
}

/// Owns the beam, counters and RNG, and drives the search one iteration at a time.
pub struct BeamSearchController<P: SearchSpace, R = ChaCha8Rng> {
    space: P,
    config: SearchConfig,
    explorer: StochasticExplorer,
    restart: RestartPolicy,
    rng: R,
    beam: Vec<P::State>,
    iteration: usize,
    status: SearchStatus,
    restarts: usize,
}

impl<P: SearchSpace> BeamSearchController<P, ChaCha8Rng> {
    /// Create a controller seeded from `config.seed`, or from the thread RNG
    /// when no seed is given.
    pub fn new(space: P, config: SearchConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(space, config, rng)
    }
}

impl<P: SearchSpace, R: Rng> BeamSearchController<P, R> {
    /// Create a controller that draws every random value from `rng`.
    ///
    /// The configuration is validated before any state is drawn.
    pub fn with_rng(space: P, config: SearchConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            explorer: StochasticExplorer::new(config.randomness_factor),
            restart: RestartPolicy::new(config.beam_width),
            space,
            config,
            rng,
            beam: Vec::new(),
            iteration: 0,
            status: SearchStatus::Running,
            restarts: 0,
        };
        controller.initialize();
        Ok(controller)
    }

    /// Resume a search from saved progress, continuing with `rng` as given.
    pub fn restore(
        space: P,
        config: SearchConfig,
        rng: R,
        progress: SearchProgress<P::State>,
    ) -> Result<Self, RestoreError> {
        config.validate()?;
        let actual = progress.beam.len();
        if actual == 0 || actual > config.beam_width {
            return Err(RestoreError::BeamSize {
                actual,
                beam_width: config.beam_width,
            });
        }

        Ok(Self {
            explorer: StochasticExplorer::new(config.randomness_factor),
            restart: RestartPolicy::new(config.beam_width),
            space,
            config,
            rng,
            beam: progress.beam,
            iteration: progress.iteration,
            status: progress.status,
            restarts: progress.restarts,
        })
    }

    /// Draw a fresh beam and clear the counters.
    pub fn initialize(&mut self) {
        self.beam = random_beam(&self.space, self.config.beam_width, &mut self.rng);
        self.iteration = 0;
        self.status = SearchStatus::Running;
        self.restarts = 0;
    }

    /// Start over from any status, independent of prior history.
    pub fn reset(&mut self) {
        let previous = self.status;
        self.initialize();
        info!(previous = %previous, beam_width = self.config.beam_width, "Search reset");
    }

    /// Advance exactly one iteration if the search is still running.
    ///
    /// On a terminal status this does nothing and returns that status.
    pub fn step(&mut self) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        if self.beam.iter().any(|s| self.space.is_goal(s)) {
            self.status = SearchStatus::GoalReached;
            info!(iteration = self.iteration, restarts = self.restarts, "Goal reached");
            return self.status;
        }

        if self.iteration >= self.config.max_iterations {
            self.status = SearchStatus::Exhausted;
            info!(
                iteration = self.iteration,
                restarts = self.restarts,
                "Iteration budget exhausted"
            );
            return self.status;
        }

        let pool = self.explorer.explore(&self.space, &self.beam, &mut self.rng);
        let pool_size = pool.len();
        let selected = select_best(&self.space, pool, self.config.beam_width);
        let update = self
            .restart
            .apply(&self.space, &self.beam, selected, &mut self.rng);

        if update.is_restart() {
            self.restarts += 1;
            debug!(
                iteration = self.iteration,
                restarts = self.restarts,
                "Beam stagnated, restarting from random states"
            );
        }

        self.beam = update.into_beam();
        self.iteration += 1;

        debug!(
            iteration = self.iteration,
            pool_size,
            best_cost = self.best_cost(),
            "Iteration complete"
        );

        self.status
    }

    /// Step until the search reaches a terminal status, or until `limit`
    /// step calls have been made.
    pub fn run_to_completion(&mut self, limit: Option<usize>) -> SearchStatus {
        let mut steps = 0;
        while !self.status.is_terminal() && limit.is_none_or(|l| steps < l) {
            self.step();
            steps += 1;
        }
        self.status
    }

    pub fn snapshot(&self) -> Snapshot<P::State> {
        let beam: Vec<Scored<P::State>> = self
            .beam
            .iter()
            .map(|state| Scored {
                state: state.clone(),
                cost: self.space.cost(state),
            })
            .collect();
        // min_by_key keeps the first of equal minima, matching the stable selector.
        let best = beam.iter().min_by_key(|s| s.cost).cloned();

        Snapshot {
            beam,
            best,
            iteration: self.iteration,
            status: self.status,
            restarts: self.restarts,
        }
    }

    pub fn progress(&self) -> SearchProgress<P::State> {
        SearchProgress {
            beam: self.beam.clone(),
            iteration: self.iteration,
            status: self.status,
            restarts: self.restarts,
        }
    }

    fn best_cost(&self) -> Option<usize> {
        self.beam.iter().map(|s| self.space.cost(s)).min()
    }

    pub fn beam(&self) -> &[P::State] {
        &self.beam
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn space(&self) -> &P {
        &self.space
    }

    /// The RNG, for callers that persist its position alongside the progress.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
