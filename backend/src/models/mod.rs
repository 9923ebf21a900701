//! Domain models for the CHSH simulator

pub mod game;
pub mod result;

// Re-exports
pub use game::{Bucket, Game};
pub use result::GameResult;
