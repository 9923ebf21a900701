//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the simulator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the four core operations and two record types
//! 2. **Simple types**: Booleans, integers, floats, lists at the boundary
//! 3. **GIL released**: Simulations run without holding the interpreter lock
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod functions;
pub mod types;
