//! Parallel trial harness
//!
//! Runs `n` independent trials across a fixed number of workers. The output
//! vector is preallocated and split into disjoint contiguous chunks, one per
//! worker; each worker owns its own [`RngManager`] and writes only into its
//! own chunk. Output order is trial order, whatever the completion order.
//!
//! # Determinism
//!
//! With `HarnessConfig::seed` set, a run is reproducible for a fixed worker
//! count: the chunking and per-worker seeds depend only on `(seed, n,
//! num_workers)`, never on the rayon pool size.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Game;
use crate::rng::{fresh_seed, RngManager};

/// Errors raised while setting up a run
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Harness configuration
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::HarnessConfig;
///
/// let config: HarnessConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.num_workers, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Base seed; `None` draws fresh entropy for every run
    #[serde(default)]
    pub seed: Option<u64>,

    /// Number of index partitions; `None` uses the rayon pool size
    #[serde(default)]
    pub num_workers: Option<usize>,
}

impl HarnessConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            num_workers: None,
        }
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = Some(num_workers);
        self
    }
}

/// Fork-join executor for independent trials
#[derive(Debug, Clone)]
pub struct TrialHarness {
    seed: Option<u64>,
    num_workers: usize,
}

impl Default for TrialHarness {
    fn default() -> Self {
        Self {
            seed: None,
            num_workers: rayon::current_num_threads(),
        }
    }
}

impl TrialHarness {
    /// Create a harness from configuration
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` if `num_workers` is zero.
    pub fn new(config: HarnessConfig) -> Result<Self, SimulationError> {
        let num_workers = match config.num_workers {
            Some(0) => {
                return Err(SimulationError::InvalidConfig(
                    "num_workers must be positive".to_string(),
                ))
            }
            Some(k) => k,
            None => rayon::current_num_threads(),
        };

        Ok(Self {
            seed: config.seed,
            num_workers,
        })
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Run `n` trials, each produced by `step` from the worker's generator
    ///
    /// Either every trial completes or the call panics as a whole; no
    /// partial output is ever returned.
    pub fn run<F>(&self, n: usize, step: F) -> Vec<Game>
    where
        F: Fn(&mut RngManager) -> Game + Sync,
    {
        let mut games = vec![Game::default(); n];
        if n == 0 {
            return games;
        }

        let base_seed = self.seed.unwrap_or_else(fresh_seed);
        let chunk_len = n.div_ceil(self.num_workers);

        debug!(
            trials = n,
            workers = self.num_workers,
            chunk_len,
            seeded = self.seed.is_some(),
            "running trials"
        );

        games
            .par_chunks_mut(chunk_len)
            .enumerate()
            .for_each(|(worker_id, chunk)| {
                let mut rng = RngManager::for_worker(base_seed, worker_id as u64);
                for slot in chunk.iter_mut() {
                    *slot = step(&mut rng);
                }
            });

        games
    }
}
