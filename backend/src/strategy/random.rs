//! Uniformly random answers
//!
//! Ignores the questions entirely; wins half of all rounds on average.

use super::ChshStrategy;
use crate::rng::RngManager;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl ChshStrategy for RandomStrategy {
    fn answer(&self, _x: bool, _y: bool, rng: &mut RngManager) -> (bool, bool) {
        let a = rng.next_bool();
        let b = rng.next_bool();
        (a, b)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
