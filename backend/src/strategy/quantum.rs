//! Measurement strategy on a shared noisy correlated state
//!
//! Each round prepares a fresh [`CorrelatedState`] with noise `err`. Alice
//! measures at `theta_a = x ? diff_a : 0`, Bob at
//! `theta_b = diff_0 + (y ? diff_b : 0)`. The first measurement collapses
//! the joint state, so the second party's outcome is conditioned on it.
//! Swapping the order (`alice_first = false`) can change the joint
//! outcome of a round but leaves each party's marginal unchanged.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use super::ChshStrategy;
use crate::quantum::CorrelatedState;
use crate::rng::RngManager;

fn default_alice_first() -> bool {
    true
}

/// Noise level, measurement angles (radians) and measurement order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantumParams {
    /// Decoherence in `[0, 1]` (not validated)
    pub err: f64,
    /// Alice's rotation when `x = 1`
    pub diff_a: f64,
    /// Bob's base rotation
    pub diff_0: f64,
    /// Bob's extra rotation when `y = 1`
    pub diff_b: f64,
    /// Alice measures first (default)
    #[serde(default = "default_alice_first")]
    pub alice_first: bool,
}

impl QuantumParams {
    pub fn new(err: f64, diff_a: f64, diff_0: f64, diff_b: f64) -> Self {
        Self {
            err,
            diff_a,
            diff_0,
            diff_b,
            alice_first: true,
        }
    }

    /// Angles reaching the Tsirelson bound on the noiseless state
    pub fn optimal() -> Self {
        Self::new(0.0, FRAC_PI_4, FRAC_PI_8, -FRAC_PI_4)
    }

    pub fn with_err(mut self, err: f64) -> Self {
        self.err = err;
        self
    }

    pub fn with_alice_first(mut self, alice_first: bool) -> Self {
        self.alice_first = alice_first;
        self
    }

    pub fn theta_a(&self, x: bool) -> f64 {
        if x {
            self.diff_a
        } else {
            0.0
        }
    }

    pub fn theta_b(&self, y: bool) -> f64 {
        self.diff_0 + if y { self.diff_b } else { 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumStrategy {
    params: QuantumParams,
}

impl QuantumStrategy {
    pub fn new(params: QuantumParams) -> Self {
        Self { params }
    }
}

impl ChshStrategy for QuantumStrategy {
    fn answer(&self, x: bool, y: bool, rng: &mut RngManager) -> (bool, bool) {
        let state = CorrelatedState::new(self.params.err);
        let theta_a = self.params.theta_a(x);
        let theta_b = self.params.theta_b(y);

        if self.params.alice_first {
            let (a, rest) = state.measure(theta_a, rng.next_f64());
            let b = rest.measure(theta_b, rng.next_f64());
            (a, b)
        } else {
            let (b, rest) = state.measure(theta_b, rng.next_f64());
            let a = rest.measure(theta_a, rng.next_f64());
            (a, b)
        }
    }

    fn name(&self) -> &'static str {
        "quantum"
    }
}
