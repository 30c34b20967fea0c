//! Run reports and batch trial summaries.
//!
//! Captures metrics like:
//! - Iterations to a solution (or to exhaustion)
//! - Stagnation restarts
//! - Best cost after each iteration

use std::path::Path;

use anyhow::{Context, Result};
use beam_kernel::SearchStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::BoardState;
use crate::config::{ConfigError, QueensConfig, QueensSearch};

/// Results from a single search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub config: QueensConfig,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    /// Status when the run stopped (running if a step limit cut it short)
    pub status: SearchStatus,
    pub iterations: usize,
    pub restarts: usize,
    pub best_state: Option<BoardState>,
    pub best_cost: Option<usize>,
    /// Best beam cost before the first iteration and after each one
    pub cost_history: Vec<usize>,
}

impl RunReport {
    pub fn solved(&self) -> bool {
        self.status == SearchStatus::GoalReached
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write results {}", path.display()))?;
        Ok(())
    }
}

/// Run `search` to completion (or `limit` steps) while recording its history.
pub fn run_with_report(search: &mut QueensSearch, limit: Option<usize>) -> RunReport {
    let started_at = Utc::now();
    let mut cost_history: Vec<usize> = search.snapshot().best_cost().into_iter().collect();

    let mut steps = 0;
    while !search.status().is_terminal() && limit.is_none_or(|l| steps < l) {
        let before = search.iteration();
        search.step();
        steps += 1;
        if search.iteration() > before {
            cost_history.extend(search.snapshot().best_cost());
        }
    }

    let snapshot = search.snapshot();
    RunReport {
        config: QueensConfig {
            board_size: search.space().size(),
            search: search.config().clone(),
        },
        started_at,
        ended_at: Utc::now(),
        status: snapshot.status,
        iterations: snapshot.iteration,
        restarts: snapshot.restarts,
        best_cost: snapshot.best.as_ref().map(|b| b.cost),
        best_state: snapshot.best.map(|b| b.state),
        cost_history,
    }
}

/// Aggregate over repeated independent runs of one config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSummary {
    pub config: QueensConfig,
    pub trials: usize,
    pub solved: usize,
    pub solve_rate: f64,
    pub avg_iterations: f64,
    pub min_iterations: usize,
    pub max_iterations: usize,
    pub avg_restarts: f64,
    pub runs: Vec<RunReport>,
}

impl TrialSummary {
    pub fn from_runs(config: QueensConfig, runs: Vec<RunReport>) -> Self {
        let trials = runs.len();
        let n = trials.max(1) as f64;
        let solved = runs.iter().filter(|r| r.solved()).count();

        Self {
            config,
            trials,
            solved,
            solve_rate: solved as f64 / n,
            avg_iterations: runs.iter().map(|r| r.iterations as f64).sum::<f64>() / n,
            min_iterations: runs.iter().map(|r| r.iterations).min().unwrap_or(0),
            max_iterations: runs.iter().map(|r| r.iterations).max().unwrap_or(0),
            avg_restarts: runs.iter().map(|r| r.restarts as f64).sum::<f64>() / n,
            runs,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write results {}", path.display()))?;
        Ok(())
    }
}

/// Run `trials` independent searches with the same config.
///
/// With a seed, trial `t` uses `seed + t` so the batch is reproducible;
/// without one every trial draws its own seed.
pub fn run_trials(config: &QueensConfig, trials: usize) -> Result<TrialSummary, ConfigError> {
    config.validate()?;
    let mut runs = Vec::with_capacity(trials);

    for trial in 0..trials {
        let mut trial_config = config.clone();
        trial_config.search.seed = config.search.seed.map(|s| s.wrapping_add(trial as u64));

        let mut search = trial_config.build()?;
        let report = run_with_report(&mut search, None);

        info!(
            progress = format!("{}/{}", trial + 1, trials),
            status = %report.status,
            iterations = report.iterations,
            restarts = report.restarts,
            "Completed trial"
        );
        runs.push(report);
    }

    Ok(TrialSummary::from_runs(config.clone(), runs))
}
