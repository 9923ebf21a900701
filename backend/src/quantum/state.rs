//! Real-valued two-qubit state model
//!
//! The joint state is a real 16-entry array (logically 4x4 over the basis
//! {00, 01, 10, 11}). A measurement at angle `theta` projects onto
//! `cos(theta)|0> + sin(theta)|1>` (outcome 0) or its orthogonal
//! complement (outcome 1).
//!
//! # Preconditions
//!
//! `uniform` must lie in `[0, 1)`. The renormalizing division by `p` or
//! `1 - p` is then never reached with a zero divisor. Values outside that
//! range are not rejected: a division by zero yields non-finite entries,
//! which propagate to later probabilities.

use serde::{Deserialize, Serialize};

/// Joint (entangled) state of both parties
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::CorrelatedState;
///
/// let state = CorrelatedState::new(0.0);
/// assert!((state.trace() - 1.0).abs() < 1e-12);
///
/// let (a, rest) = state.measure(0.0, 0.3);
/// let b = rest.measure(0.0, 0.3);
/// assert_eq!(a, b); // perfectly correlated at equal angles
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedState {
    data: [f64; 16],
}

/// Conditional state of the remaining party after the first measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollapsedState {
    data: [f64; 4],
}

impl CorrelatedState {
    /// Noisy correlated state with decoherence parameter `err`
    ///
    /// `err = 0` is the pure correlated state, `err = 1` the fully mixed
    /// one. Values outside `[0, 1]` are accepted as-is.
    pub fn new(err: f64) -> Self {
        let mut data = [0.0; 16];
        // diagonal
        data[0] = 0.5 - 0.25 * err;
        data[5] = 0.25 * err;
        data[10] = 0.25 * err;
        data[15] = 0.5 - 0.25 * err;
        // coherences
        data[3] = 0.5 * (1.0 - err);
        data[12] = 0.5 * (1.0 - err);
        Self { data }
    }

    /// State with explicit entries, in the same layout `new` uses
    pub fn from_entries(data: [f64; 16]) -> Self {
        Self { data }
    }

    pub fn entries(&self) -> &[f64; 16] {
        &self.data
    }

    /// Probability mass (sum of the diagonal entries)
    pub fn trace(&self) -> f64 {
        let d = &self.data;
        d[0] + d[5] + d[10] + d[15]
    }

    /// Probability that measuring at `theta` yields outcome 0
    pub fn outcome_zero_probability(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        let d = &self.data;
        c * c * (d[0] + d[5]) + c * s * (d[2] + d[7] + d[8] + d[13]) + s * s * (d[10] + d[15])
    }

    /// Measure the first party at angle `theta`
    ///
    /// Returns `true` for outcome 0 (`uniform < p`), plus the renormalized
    /// state the other party measures next. Consumes the joint state.
    pub fn measure(self, theta: f64, uniform: f64) -> (bool, CollapsedState) {
        let (s, c) = theta.sin_cos();
        let d = &self.data;
        let p = self.outcome_zero_probability(theta);
        let outcome = uniform < p;

        // (first, cross, last) per reduced-state row
        let rows = [
            (d[0], d[2] + d[8], d[10]),
            (d[1], d[3] + d[9], d[11]),
            (d[4], d[6] + d[12], d[14]),
            (d[5], d[7] + d[13], d[15]),
        ];

        let mut reduced = [0.0; 4];
        for (slot, (first, cross, last)) in reduced.iter_mut().zip(rows) {
            *slot = if outcome {
                (c * c * first + c * s * cross + s * s * last) / p
            } else {
                (s * s * first - c * s * cross + c * c * last) / (1.0 - p)
            };
        }

        (outcome, CollapsedState { data: reduced })
    }
}

impl CollapsedState {
    pub fn entries(&self) -> &[f64; 4] {
        &self.data
    }

    /// Probability mass of the conditional state
    pub fn trace(&self) -> f64 {
        self.data[0] + self.data[3]
    }

    /// Probability that measuring at `theta` yields outcome 0
    pub fn outcome_zero_probability(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        let d = &self.data;
        c * c * d[0] + c * s * (d[1] + d[2]) + s * s * d[3]
    }

    /// Measure the second party at angle `theta`; consumes the state
    pub fn measure(self, theta: f64, uniform: f64) -> bool {
        uniform < self.outcome_zero_probability(theta)
    }
}
