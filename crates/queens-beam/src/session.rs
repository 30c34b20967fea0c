//! Persisted search sessions for the step-by-step CLI.
//!
//! A session holds everything needed to continue a search in a later
//! process: the config, the beam and counters, and the exact position of the
//! RNG stream. A seeded search that is saved and resumed makes the same draws
//! as one that never stopped.

use std::path::Path;

use anyhow::{Context, Result, bail};
use beam_kernel::{BeamSearchController, SearchProgress};
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::config::{QueensConfig, QueensSearch};
use crate::space::NQueens;

/// Position of a ChaCha stream: seed, stream id and word offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: [u8; 32],
    pub stream: u64,
    pub word_pos: u128,
}

impl RngState {
    pub fn capture(rng: &ChaCha8Rng) -> Self {
        Self {
            seed: rng.get_seed(),
            stream: rng.get_stream(),
            word_pos: rng.get_word_pos(),
        }
    }

    pub fn rebuild(&self) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::from_seed(self.seed);
        rng.set_stream(self.stream);
        rng.set_word_pos(self.word_pos);
        rng
    }
}

/// A saved search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub config: QueensConfig,
    pub progress: SearchProgress<BoardState>,
    pub rng: RngState,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    /// Capture the current state of a search.
    pub fn capture(search: &QueensSearch) -> Self {
        Self {
            config: QueensConfig {
                board_size: search.space().size(),
                search: search.config().clone(),
            },
            progress: search.progress(),
            rng: RngState::capture(search.rng()),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild the controller this session was captured from.
    pub fn resume(self) -> Result<QueensSearch> {
        let n = self.config.board_size;
        if let Some(bad) = self.progress.beam.iter().find(|s| s.size() != n) {
            bail!(
                "Saved board {} has {} columns, expected {}",
                bad.label(),
                bad.size(),
                n
            );
        }

        let space = NQueens::new(n)?;
        let search = BeamSearchController::restore(
            space,
            self.config.search,
            self.rng.rebuild(),
            self.progress,
        )?;
        Ok(search)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write session {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read session {} (run `init` first)",
                path.display()
            )
        })?;
        let session = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse session {}", path.display()))?;
        Ok(session)
    }
}
