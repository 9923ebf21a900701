//! Fixed classical strategy
//!
//! Both parties return the same constant bit. The parties agree on every
//! round, so they win every bucket except `(1, 1)`: the classical bound 0.75.

use super::ChshStrategy;
use crate::rng::RngManager;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicalStrategy {
    answer: bool,
}

impl ClassicalStrategy {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl ChshStrategy for ClassicalStrategy {
    fn answer(&self, _x: bool, _y: bool, _rng: &mut RngManager) -> (bool, bool) {
        (self.answer, self.answer)
    }

    fn name(&self) -> &'static str {
        "classical"
    }
}
