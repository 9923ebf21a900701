//! CHSH Strategy Module
//!
//! A strategy decides the answers `(a, b)` of both parties once the referee
//! has drawn the question bits `(x, y)`. Every trial follows the same shape:
//!
//! 1. draw `x`, then `y`, each a fair coin from the worker's generator
//! 2. ask the strategy for `(a, b)` (it may draw more variates)
//! 3. emit a [`Game`] record
//!
//! # Strategy Interface
//!
//! ```rust
//! use chsh_simulator_core_rs::strategy::ChshStrategy;
//! use chsh_simulator_core_rs::RngManager;
//!
//! struct AlwaysDisagree;
//!
//! impl ChshStrategy for AlwaysDisagree {
//!     fn answer(&self, _x: bool, _y: bool, _rng: &mut RngManager) -> (bool, bool) {
//!         (false, true)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "always-disagree"
//!     }
//! }
//! ```
//!
//! Available strategies:
//! 1. **Random**: both answers are independent fair coins
//! 2. **Classical**: both parties return one fixed bit for the whole run
//! 3. **Quantum**: both parties measure a shared noisy correlated state

use serde::{Deserialize, Serialize};

use crate::harness::TrialHarness;
use crate::models::Game;
use crate::rng::RngManager;

pub mod classical;
pub mod quantum;
pub mod random;

pub use classical::ClassicalStrategy;
pub use quantum::{QuantumParams, QuantumStrategy};
pub use random::RandomStrategy;

/// Answer rule for both parties
pub trait ChshStrategy: Send + Sync {
    /// Answers `(a, b)` to the questions `(x, y)`
    fn answer(&self, x: bool, y: bool, rng: &mut RngManager) -> (bool, bool);

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Play one round: referee bits first, then the strategy's answers
pub fn play_round<S: ChshStrategy + ?Sized>(strategy: &S, rng: &mut RngManager) -> Game {
    let x = rng.next_bool();
    let y = rng.next_bool();
    let (a, b) = strategy.answer(x, y, rng);
    Game { x, y, a, b }
}

/// Play `n` rounds of `strategy` on `harness`
pub fn play_with<S: ChshStrategy + ?Sized>(
    harness: &TrialHarness,
    n: usize,
    strategy: &S,
) -> Vec<Game> {
    tracing::debug!(strategy = strategy.name(), trials = n, "playing");
    harness.run(n, |rng| play_round(strategy, rng))
}

/// `n` rounds with uniformly random answers
pub fn play_random(n: usize) -> Vec<Game> {
    play_with(&TrialHarness::default(), n, &RandomStrategy)
}

/// `n` rounds where both parties always answer `answer`
pub fn play_classical(n: usize, answer: bool) -> Vec<Game> {
    play_with(&TrialHarness::default(), n, &ClassicalStrategy::new(answer))
}

/// `n` rounds of the measurement strategy described by `params`
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::{analyze, play_quantum, QuantumParams};
///
/// let games = play_quantum(20_000, QuantumParams::optimal());
/// let result = analyze(&games);
/// assert!(result.win_rate > 0.8);
/// ```
pub fn play_quantum(n: usize, params: QuantumParams) -> Vec<Game> {
    play_with(&TrialHarness::default(), n, &QuantumStrategy::new(params))
}

/// Serializable strategy selection
///
/// ```
/// use chsh_simulator_core_rs::StrategyConfig;
///
/// let config: StrategyConfig =
///     serde_json::from_str(r#"{"type": "Classical", "answer": true}"#).unwrap();
/// assert_eq!(config, StrategyConfig::Classical { answer: true });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StrategyConfig {
    Random,
    Classical {
        #[serde(default)]
        answer: bool,
    },
    Quantum(QuantumParams),
}

impl StrategyConfig {
    pub fn build(&self) -> Box<dyn ChshStrategy> {
        match self {
            StrategyConfig::Random => Box::new(RandomStrategy),
            StrategyConfig::Classical { answer } => Box::new(ClassicalStrategy::new(*answer)),
            StrategyConfig::Quantum(params) => Box::new(QuantumStrategy::new(*params)),
        }
    }

    /// Play `n` rounds of the configured strategy
    pub fn play(&self, harness: &TrialHarness, n: usize) -> Vec<Game> {
        let strategy = self.build();
        play_with(harness, n, strategy.as_ref())
    }
}
