//! Configuration types for the search.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A search parameter outside its valid range.
///
/// Raised at construction, before any search activity. None of these are
/// transient, so callers should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("beam width must be at least 1, got {0}")]
    BeamWidth(i64),
    #[error("max iterations must not be negative, got {0}")]
    MaxIterations(i64),
    #[error("randomness factor must lie in [0, 1], got {0}")]
    RandomnessFactor(f64),
}

/// Search parameters, immutable once the controller is built.
///
/// Loaded from JSON at runtime; missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of states carried between iterations (k)
    pub beam_width: usize,

    /// Iteration budget before the search reports exhaustion
    pub max_iterations: usize,

    /// Per-member, per-iteration probability of replacing the full
    /// neighbor expansion with one random neighbor
    pub randomness_factor: f64,

    /// Seed for the search RNG (None draws one from the thread RNG)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: 3,
            max_iterations: 1000,
            randomness_factor: 0.05,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Apply signed overrides on top of this config, rejecting negative counts.
    ///
    /// Front ends that accept user-typed numbers go through here so that
    /// `-1` is reported as a configuration error rather than a parse error.
    /// Fields without an override keep their current value unchanged.
    pub fn with_signed(
        self,
        beam_width: Option<i64>,
        max_iterations: Option<i64>,
        randomness_factor: Option<f64>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let beam_width = match beam_width {
            Some(k) => usize::try_from(k).map_err(|_| ConfigError::BeamWidth(k))?,
            None => self.beam_width,
        };
        let max_iterations = match max_iterations {
            Some(m) => usize::try_from(m).map_err(|_| ConfigError::MaxIterations(m))?,
            None => self.max_iterations,
        };

        let config = Self {
            beam_width,
            max_iterations,
            randomness_factor: randomness_factor.unwrap_or(self.randomness_factor),
            seed: seed.or(self.seed),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width < 1 {
            return Err(ConfigError::BeamWidth(self.beam_width as i64));
        }
        // NaN fails the range check.
        if !(0.0..=1.0).contains(&self.randomness_factor) {
            return Err(ConfigError::RandomnessFactor(self.randomness_factor));
        }
        Ok(())
    }
}
