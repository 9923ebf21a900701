//! Game record
//!
//! One record per trial of the CHSH game:
//! - `x`: referee bit sent to Alice
//! - `y`: referee bit sent to Bob
//! - `a`: Alice's answer
//! - `b`: Bob's answer
//!
//! The parties win iff `a XOR b == x AND y`.

use serde::{Deserialize, Serialize};

/// A single played CHSH round
///
/// Field order and names are fixed for interop with the Python layer.
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::Game;
///
/// let game = Game::new(true, true, false, true);
/// assert!(game.is_win());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    /// Referee bit sent to Alice
    pub x: bool,
    /// Referee bit sent to Bob
    pub y: bool,
    /// Alice's answer
    pub a: bool,
    /// Bob's answer
    pub b: bool,
}

impl Game {
    pub fn new(x: bool, y: bool, a: bool, b: bool) -> Self {
        Self { x, y, a, b }
    }

    /// The `(x, y)` class this round belongs to
    pub fn bucket(&self) -> Bucket {
        Bucket::from_bits(self.x, self.y)
    }

    /// CHSH win rule: `a XOR b == x AND y`
    pub fn is_win(&self) -> bool {
        (self.a ^ self.b) == self.bucket().winning_parity()
    }
}

/// The four referee question pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// x = 0, y = 0
    B00,
    /// x = 0, y = 1
    B01,
    /// x = 1, y = 0
    B10,
    /// x = 1, y = 1
    B11,
}

impl Bucket {
    /// All buckets in rendering order
    pub const ALL: [Bucket; 4] = [Bucket::B00, Bucket::B01, Bucket::B10, Bucket::B11];

    pub fn from_bits(x: bool, y: bool) -> Self {
        match (x, y) {
            (false, false) => Bucket::B00,
            (false, true) => Bucket::B01,
            (true, false) => Bucket::B10,
            (true, true) => Bucket::B11,
        }
    }

    /// Position in `ALL` (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn x(self) -> bool {
        matches!(self, Bucket::B10 | Bucket::B11)
    }

    pub fn y(self) -> bool {
        matches!(self, Bucket::B01 | Bucket::B11)
    }

    /// Parity `a XOR b` that wins in this bucket
    pub fn winning_parity(self) -> bool {
        self == Bucket::B11
    }
}
