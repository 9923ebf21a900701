//! Measurement-angle search by differential evolution
//!
//! Maximizes the simulated overall win rate over `(diff_a, diff_0, diff_b)`
//! using the best/1/bin scheme: each generation draws one dithered
//! mutation factor in `[0.5, 1)`, builds `best + F * (r1 - r2)` for every
//! member, crosses it over with the member, and keeps the trial if it is
//! at least as good. Out-of-bounds mutant coordinates are redrawn
//! uniformly inside the bounds.
//!
//! The objective is itself a simulation, hence noisy. With a seeded
//! harness every evaluation reuses the same random streams, which smooths
//! the landscape.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use tracing::debug;

use super::{evaluate, ExperimentError};
use crate::harness::TrialHarness;
use crate::rng::RngManager;
use crate::strategy::{QuantumParams, StrategyConfig};

const DIMS: usize = 3;

fn default_popsize() -> usize {
    15
}

fn default_max_generations() -> usize {
    50
}

fn default_crossover() -> f64 {
    0.7
}

fn default_tol() -> f64 {
    0.01
}

fn default_bounds() -> (f64, f64) {
    (-FRAC_PI_2, FRAC_PI_2)
}

/// Differential evolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Population size multiplier (population = popsize * 3)
    #[serde(default = "default_popsize")]
    pub popsize: usize,

    #[serde(default = "default_max_generations")]
    pub max_generations: usize,

    /// Crossover probability
    #[serde(default = "default_crossover")]
    pub crossover: f64,

    /// Relative convergence tolerance on the population's objective spread
    #[serde(default = "default_tol")]
    pub tol: f64,

    /// Search interval applied to each angle
    #[serde(default = "default_bounds")]
    pub bounds: (f64, f64),

    /// Seed of the optimizer's own generator; `None` uses entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            popsize: default_popsize(),
            max_generations: default_max_generations(),
            crossover: default_crossover(),
            tol: default_tol(),
            bounds: default_bounds(),
            seed: None,
        }
    }
}

impl OptimizerConfig {
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.popsize < 2 {
            return Err(ExperimentError::InvalidConfig(
                "popsize must be at least 2".to_string(),
            ));
        }
        let (lo, hi) = self.bounds;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ExperimentError::InvalidConfig(format!(
                "invalid angle bounds ({}, {})",
                lo, hi
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover) {
            return Err(ExperimentError::InvalidConfig(format!(
                "crossover {} outside [0, 1]",
                self.crossover
            )));
        }
        Ok(())
    }
}

/// Best angles found for one noise level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedAngles {
    pub err: f64,
    pub diff_a: f64,
    pub diff_0: f64,
    pub diff_b: f64,
    /// Win rate of the best member during the search
    pub win_rate: f64,
    /// Generations actually run
    pub generations: usize,
}

impl OptimizedAngles {
    /// Strategy parameters at the optimum (Alice measures first)
    pub fn params(&self) -> QuantumParams {
        QuantumParams::new(self.err, self.diff_a, self.diff_0, self.diff_b)
    }
}

/// Search angles maximizing the win rate at noise `err`
///
/// # Errors
///
/// Returns `ExperimentError::InvalidConfig` for an invalid `config` or
/// zero `trials`.
pub fn optimize_angles(
    harness: &TrialHarness,
    err: f64,
    trials: usize,
    config: &OptimizerConfig,
) -> Result<OptimizedAngles, ExperimentError> {
    config.validate()?;
    if trials == 0 {
        return Err(ExperimentError::InvalidConfig(
            "trials must be positive".to_string(),
        ));
    }

    let (lo, hi) = config.bounds;
    let mut rng = config
        .seed
        .map(RngManager::new)
        .unwrap_or_else(RngManager::from_entropy);

    // Minimize the negated win rate
    let energy = |x: &[f64; DIMS]| {
        let params = QuantumParams::new(err, x[0], x[1], x[2]);
        -evaluate(harness, trials, &StrategyConfig::Quantum(params)).win_rate
    };

    let pop_size = config.popsize * DIMS;
    let mut population: Vec<[f64; DIMS]> = (0..pop_size)
        .map(|_| std::array::from_fn(|_| rng.uniform(lo, hi)))
        .collect();
    let mut energies: Vec<f64> = population.iter().map(energy).collect();
    let mut best = argmin(&energies);

    let mut generations = 0;
    while generations < config.max_generations {
        generations += 1;
        let scale = rng.uniform(0.5, 1.0);

        for i in 0..pop_size {
            let r1 = pick_other(&mut rng, pop_size, &[i]);
            let r2 = pick_other(&mut rng, pop_size, &[i, r1]);
            let forced = rng.index(DIMS);

            let mut trial = population[i];
            for j in 0..DIMS {
                if j == forced || rng.next_f64() < config.crossover {
                    let mut v = population[best][j] + scale * (population[r1][j] - population[r2][j]);
                    if !(lo..=hi).contains(&v) {
                        v = rng.uniform(lo, hi);
                    }
                    trial[j] = v;
                }
            }

            let e = energy(&trial);
            if e <= energies[i] {
                population[i] = trial;
                energies[i] = e;
                if e <= energies[best] {
                    best = i;
                }
            }
        }

        debug!(
            generation = generations,
            err,
            best_win_rate = -energies[best],
            "optimizer generation"
        );

        if spread(&energies) <= config.tol * mean(&energies).abs() {
            break;
        }
    }

    let [diff_a, diff_0, diff_b] = population[best];
    Ok(OptimizedAngles {
        err,
        diff_a,
        diff_0,
        diff_b,
        win_rate: -energies[best],
        generations,
    })
}

fn argmin(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold(0, |best, (i, &v)| if v < values[best] { i } else { best })
}

/// Uniform index in `0..len` not contained in `exclude`
fn pick_other(rng: &mut RngManager, len: usize, exclude: &[usize]) -> usize {
    loop {
        let candidate = rng.index(len);
        if !exclude.contains(&candidate) {
            return candidate;
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn spread(values: &[f64]) -> f64 {
    let m = mean(values);
    (values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64).sqrt()
}
