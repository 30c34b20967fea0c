//! Stochastic exploration: build the candidate pool for one iteration.
//!
//! Each beam member is either expanded into all of its successors or, with
//! probability `randomness_factor`, replaced by a single successor chosen
//! uniformly at random. The random branch keeps the beam from collapsing onto
//! one greedy trajectory.

use rand::Rng;

use crate::space::SearchSpace;

/// Per-member expansion policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticExplorer {
    randomness_factor: f64,
}

impl StochasticExplorer {
    /// Create an explorer. `randomness_factor` is expected in `[0, 1]`;
    /// `SearchConfig::validate` enforces this before construction.
    pub fn new(randomness_factor: f64) -> Self {
        Self { randomness_factor }
    }

    pub fn randomness_factor(&self) -> f64 {
        self.randomness_factor
    }

    /// Pool the candidates contributed by every member of `beam`, in beam order.
    ///
    /// One uniform draw is taken per member regardless of the factor, so the
    /// RNG stream advances the same way for every configuration.
    pub fn explore<P, R>(&self, space: &P, beam: &[P::State], rng: &mut R) -> Vec<P::State>
    where
        P: SearchSpace,
        R: Rng + ?Sized,
    {
        let mut pool = Vec::new();

        for state in beam {
            let u: f64 = rng.random();
            let mut successors = space.successors(state);

            if u < self.randomness_factor {
                if !successors.is_empty() {
                    let pick = rng.random_range(0..successors.len());
                    pool.push(successors.swap_remove(pick));
                }
            } else {
                pool.append(&mut successors);
            }
        }

        pool
    }
}
