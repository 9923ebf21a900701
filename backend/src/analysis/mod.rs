//! Win-rate aggregation
//!
//! Single sequential pass over a completed run: bucket every game by its
//! question pair `(x, y)` and count wins under the CHSH rule.

use crate::models::{Game, GameResult};

/// Aggregate `games` into per-bucket and overall statistics
///
/// Empty buckets (and an empty input) produce NaN rates; nothing is
/// rejected.
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::{analyze, Game};
///
/// let result = analyze(&[Game::new(false, true, true, false)]);
/// assert_eq!(result.n01, 1);
/// assert_eq!(result.w01, 0);
/// assert!(result.win_rate_00.is_nan());
/// ```
pub fn analyze(games: &[Game]) -> GameResult {
    let mut counts = [0usize; 4];
    let mut wins = [0usize; 4];

    for game in games {
        let slot = game.bucket().index();
        counts[slot] += 1;
        if game.is_win() {
            wins[slot] += 1;
        }
    }

    GameResult::from_counts(counts, wins)
}
