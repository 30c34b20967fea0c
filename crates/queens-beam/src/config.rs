//! Configuration for an N-Queens beam search.
//!
//! A config is assembled from three layers, later layers winning:
//! 1. Built-in defaults (6 queens, beam width 3, 1000 iterations, factor 0.05)
//! 2. An optional JSON file
//! 3. Command-line overrides

use std::path::Path;

use anyhow::{Context, Result};
use beam_kernel::{BeamSearchController, SearchConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::space::NQueens;

/// The controller type used throughout this crate.
pub type QueensSearch = BeamSearchController<NQueens>;

/// A configuration value outside its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1, got {0}")]
    BoardSize(i64),
    #[error(transparent)]
    Search(#[from] beam_kernel::ConfigError),
}

/// Board size plus the kernel's search parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueensConfig {
    /// Board size (n x n, n queens)
    pub board_size: usize,

    #[serde(flatten)]
    pub search: SearchConfig,
}

impl Default for QueensConfig {
    fn default() -> Self {
        Self {
            board_size: 6,
            search: SearchConfig::default(),
        }
    }
}

/// Per-field overrides, kept signed so negative input is reported as a
/// configuration error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub board_size: Option<i64>,
    pub beam_width: Option<i64>,
    pub max_iterations: Option<i64>,
    pub randomness_factor: Option<f64>,
    pub seed: Option<u64>,
}

impl QueensConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides on top of this config and validate the result.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let board_size = match overrides.board_size {
            Some(n) => usize::try_from(n)
                .ok()
                .filter(|&n| n >= 1)
                .ok_or(ConfigError::BoardSize(n))?,
            None => self.board_size,
        };

        let search = self.search.with_signed(
            overrides.beam_width,
            overrides.max_iterations,
            overrides.randomness_factor,
            overrides.seed,
        )?;

        let config = Self { board_size, search };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 1 {
            return Err(ConfigError::BoardSize(self.board_size as i64));
        }
        self.search.validate()?;
        Ok(())
    }

    /// Validate and build a controller with a freshly initialized beam.
    pub fn build(&self) -> Result<QueensSearch, ConfigError> {
        self.validate()?;
        let space = NQueens::new(self.board_size)?;
        Ok(BeamSearchController::new(space, self.search.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_setup() {
        let config = QueensConfig::default();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.search.beam_width, 3);
        assert_eq!(config.search.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flat_json_layout() {
        let config: QueensConfig = serde_json::from_str(
            r#"{"board_size": 8, "beam_width": 5, "randomness_factor": 0.1, "seed": 3}"#,
        )
        .unwrap();

        assert_eq!(config.board_size, 8);
        assert_eq!(config.search.beam_width, 5);
        assert_eq!(config.search.max_iterations, 1000);
        assert_eq!(config.search.seed, Some(3));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            board_size: Some(4),
            max_iterations: Some(0),
            ..Default::default()
        };
        let config = QueensConfig::default().with_overrides(&overrides).unwrap();

        assert_eq!(config.board_size, 4);
        assert_eq!(config.search.max_iterations, 0);
        assert_eq!(config.search.beam_width, 3);
    }

    #[test]
    fn test_override_validation() {
        let cases = [
            (
                ConfigOverrides {
                    board_size: Some(0),
                    ..Default::default()
                },
                ConfigError::BoardSize(0),
            ),
            (
                ConfigOverrides {
                    beam_width: Some(0),
                    ..Default::default()
                },
                ConfigError::Search(beam_kernel::ConfigError::BeamWidth(0)),
            ),
            (
                ConfigOverrides {
                    max_iterations: Some(-5),
                    ..Default::default()
                },
                ConfigError::Search(beam_kernel::ConfigError::MaxIterations(-5)),
            ),
            (
                ConfigOverrides {
                    randomness_factor: Some(1.5),
                    ..Default::default()
                },
                ConfigError::Search(beam_kernel::ConfigError::RandomnessFactor(1.5)),
            ),
        ];

        for (overrides, expected) in cases {
            assert_eq!(
                QueensConfig::default().with_overrides(&overrides),
                Err(expected)
            );
        }
    }

    #[test]
    fn test_large_values_from_json_survive_overrides() {
        let config: QueensConfig = serde_json::from_str(
            r#"{"board_size": 8, "max_iterations": 18446744073709551615}"#,
        )
        .unwrap();

        let config = config.with_overrides(&ConfigOverrides::default()).unwrap();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.search.max_iterations, usize::MAX);

        let overrides = ConfigOverrides {
            beam_width: Some(4),
            ..Default::default()
        };
        let config = config.with_overrides(&overrides).unwrap();
        assert_eq!(config.search.max_iterations, usize::MAX);
        assert_eq!(config.search.beam_width, 4);
    }

    #[test]
    fn test_build_initializes_beam() {
        let config = QueensConfig {
            board_size: 5,
            search: SearchConfig {
                beam_width: 4,
                seed: Some(1),
                ..Default::default()
            },
        };
        let search = config.build().unwrap();

        assert_eq!(search.beam().len(), 4);
        assert!(search.beam().iter().all(|s| s.size() == 5));
    }

    #[test]
    fn test_build_rejects_invalid() {
        let config = QueensConfig {
            board_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(ConfigError::BoardSize(0))));
    }
}
