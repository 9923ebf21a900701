//! Random number generation for trial workers
//!
//! Uses the xorshift64* algorithm for fast per-worker random streams.
//! CRITICAL: Every variate a trial consumes (referee bits, answers,
//! measurement uniforms) MUST come from the worker's own `RngManager`.
//! Generators are never shared between workers.

mod xorshift;

pub use xorshift::{fresh_seed, worker_seed, RngManager};
