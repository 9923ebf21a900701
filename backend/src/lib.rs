//! CHSH Simulator Core - Rust Engine
//!
//! Simulates the CHSH nonlocality game under random, classical and quantum
//! strategies, and aggregates trial records into win-rate statistics.
//!
//! # Architecture
//!
//! - **models**: Domain types (Game, GameResult)
//! - **quantum**: Two-party correlated state with destructive measurement
//! - **strategy**: Answer rules of both parties (random, classical, quantum)
//! - **harness**: Parallel trial execution with per-worker random streams
//! - **analysis**: Per-bucket and overall win statistics
//! - **experiment**: Comparison runs, noise sweeps, angle optimization
//! - **rng**: xorshift64* generators
//!
//! # Critical Invariants
//!
//! 1. Random generators are never shared between workers
//! 2. Each trial's state is measured at most twice (enforced by types)
//! 3. No input validation on the core operations: non-finite values propagate
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod analysis;
pub mod experiment;
pub mod harness;
pub mod models;
pub mod quantum;
pub mod rng;
pub mod strategy;

// Re-exports for convenience
pub use analysis::analyze;
pub use experiment::{run_experiment, ExperimentConfig, ExperimentError, ExperimentReport};
pub use harness::{HarnessConfig, SimulationError, TrialHarness};
pub use models::{Bucket, Game, GameResult};
pub use quantum::{CollapsedState, CorrelatedState};
pub use rng::RngManager;
pub use strategy::{
    play_classical, play_quantum, play_random, ChshStrategy, QuantumParams, StrategyConfig,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn chsh_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__doc__", "CHSH simulation module")?;
    m.add_class::<ffi::types::PyGame>()?;
    m.add_class::<ffi::types::PyGameResult>()?;
    m.add_function(wrap_pyfunction!(ffi::functions::py_play_random, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::py_play_classical, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::py_play_quantum, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::functions::py_analyze, m)?)?;
    Ok(())
}
