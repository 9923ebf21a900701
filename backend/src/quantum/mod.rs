//! Two-party correlated state and destructive measurement
//!
//! The engine has two phases, encoded as two types:
//!
//! 1. [`CorrelatedState`]: both qubits jointly represented (16 real entries).
//!    Measuring it consumes the value and returns the outcome plus a
//!    [`CollapsedState`].
//! 2. [`CollapsedState`]: the renormalized conditional state of the other
//!    party (4 real entries). Measuring it consumes the value and returns
//!    only the outcome.
//!
//! A third measurement is therefore impossible to express.

pub mod state;

pub use state::{CollapsedState, CorrelatedState};
