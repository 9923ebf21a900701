//! Experiment driver
//!
//! Batches of runs over the core operations, described by a JSON
//! [`ExperimentConfig`] and summarized in an [`ExperimentReport`]:
//!
//! - **Single**: one labelled strategy run
//! - **Comparison**: classical, random, quantum in the 0/1 basis, and
//!   quantum at the optimal angles, side by side
//! - **NoiseSweep**: quantum win rate as `err` moves from 0 to 1
//! - **Optimize**: search for the angles maximizing the win rate at given
//!   noise levels
//!
//! # Example
//!
//! ```
//! use chsh_simulator_core_rs::experiment::{run_experiment, ExperimentConfig};
//!
//! let config: ExperimentConfig = serde_json::from_str(r#"{
//!     "trials": 2000,
//!     "harness": {"seed": 1},
//!     "runs": [{"type": "Single", "label": "Classical", "strategy": {"type": "Classical"}}]
//! }"#).unwrap();
//!
//! let report = run_experiment(&config).unwrap();
//! assert_eq!(report.entries.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::analysis::analyze;
use crate::harness::{HarnessConfig, SimulationError, TrialHarness};
use crate::models::GameResult;
use crate::strategy::{QuantumParams, StrategyConfig};

pub mod optimize;
pub mod report;

pub use optimize::{optimize_angles, OptimizedAngles, OptimizerConfig};
pub use report::{compute_config_hash, ExperimentReport, ReportEntry, SweepPoint};

/// Noise levels scanned by `Optimize` when none are given
pub const DEFAULT_OPTIMIZE_ERRORS: [f64; 8] = [0.0, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 0.99];

/// Errors raised by experiment configuration or execution
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("Invalid experiment config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

fn default_trials() -> usize {
    500_000
}

fn default_sweep_steps() -> usize {
    100
}

fn default_optimize_errors() -> Vec<f64> {
    DEFAULT_OPTIMIZE_ERRORS.to_vec()
}

/// Complete experiment description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Trials per strategy evaluation
    #[serde(default = "default_trials")]
    pub trials: usize,

    #[serde(default)]
    pub harness: HarnessConfig,

    pub runs: Vec<RunSpec>,
}

/// One step of an experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunSpec {
    Single {
        label: String,
        strategy: StrategyConfig,
    },
    Comparison,
    NoiseSweep {
        /// Angles and order; `err` is overwritten at every point
        #[serde(default = "QuantumParams::optimal")]
        angles: QuantumParams,
        #[serde(default = "default_sweep_steps")]
        steps: usize,
    },
    Optimize {
        #[serde(default = "default_optimize_errors")]
        errors: Vec<f64>,
        #[serde(default)]
        optimizer: OptimizerConfig,
    },
}

impl ExperimentConfig {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ExperimentError> {
        let config: ExperimentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the driver cannot run with
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.trials == 0 {
            return Err(ExperimentError::InvalidConfig(
                "trials must be positive".to_string(),
            ));
        }
        for run in &self.runs {
            match run {
                RunSpec::NoiseSweep { steps, .. } if *steps == 0 => {
                    return Err(ExperimentError::InvalidConfig(
                        "noise sweep steps must be positive".to_string(),
                    ));
                }
                RunSpec::Optimize { optimizer, .. } => optimizer.validate()?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Play `strategy` for `trials` rounds and aggregate
pub fn evaluate(harness: &TrialHarness, trials: usize, strategy: &StrategyConfig) -> GameResult {
    analyze(&strategy.play(harness, trials))
}

/// The four reference runs: classical bound, random play, 0/1 basis, optimal basis
pub fn comparison_suite(harness: &TrialHarness, trials: usize) -> Vec<ReportEntry> {
    let runs = [
        ("Classical Strategy", StrategyConfig::Classical { answer: false }),
        ("Pure Random", StrategyConfig::Random),
        (
            "Perfect Quantum Strategy with 0/1 Basis",
            StrategyConfig::Quantum(QuantumParams::new(0.0, 0.0, 0.0, 0.0)),
        ),
        (
            "Perfect Quantum Strategy with Optimal Basis",
            StrategyConfig::Quantum(QuantumParams::optimal()),
        ),
    ];

    runs.into_iter()
        .map(|(label, strategy)| {
            let result = evaluate(harness, trials, &strategy);
            info!(label, win_rate = result.win_rate, "comparison run");
            ReportEntry::Single {
                label: label.to_string(),
                strategy,
                result,
            }
        })
        .collect()
}

/// Quantum win rate at `err = i / steps` for `i = 0..=steps`
///
/// # Errors
///
/// Returns `ExperimentError::InvalidConfig` if `steps` is zero.
pub fn noise_sweep(
    harness: &TrialHarness,
    trials: usize,
    angles: QuantumParams,
    steps: usize,
) -> Result<Vec<SweepPoint>, ExperimentError> {
    if steps == 0 {
        return Err(ExperimentError::InvalidConfig(
            "noise sweep steps must be positive".to_string(),
        ));
    }

    let points = (0..=steps)
        .map(|i| {
            let err = i as f64 / steps as f64;
            let result = evaluate(harness, trials, &StrategyConfig::Quantum(angles.with_err(err)));
            info!(err, win_rate = result.win_rate, "noise sweep point");
            SweepPoint { err, result }
        })
        .collect();

    Ok(points)
}

/// Run every step of `config` in order
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;
    let harness = TrialHarness::new(config.harness.clone())?;
    let mut report = ExperimentReport::new(config)?;

    for run in &config.runs {
        match run {
            RunSpec::Single { label, strategy } => {
                let result = evaluate(&harness, config.trials, strategy);
                info!(label = label.as_str(), win_rate = result.win_rate, "single run");
                report.entries.push(ReportEntry::Single {
                    label: label.clone(),
                    strategy: strategy.clone(),
                    result,
                });
            }
            RunSpec::Comparison => {
                report
                    .entries
                    .extend(comparison_suite(&harness, config.trials));
            }
            RunSpec::NoiseSweep { angles, steps } => {
                let points = noise_sweep(&harness, config.trials, *angles, *steps)?;
                report.entries.push(ReportEntry::NoiseSweep {
                    angles: *angles,
                    points,
                });
            }
            RunSpec::Optimize { errors, optimizer } => {
                for &err in errors {
                    let angles = optimize_angles(&harness, err, config.trials, optimizer)?;
                    let result = evaluate(
                        &harness,
                        config.trials,
                        &StrategyConfig::Quantum(angles.params()),
                    );
                    report.entries.push(ReportEntry::Optimized { angles, result });
                }
            }
        }
    }

    Ok(report)
}
