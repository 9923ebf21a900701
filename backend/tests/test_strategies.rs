//! Statistical behaviour of the three strategies
//!
//! All runs use a fixed seed, so the assertions are deterministic; the
//! tolerances are still several standard errors wide.

use chsh_simulator_core_rs::harness::{HarnessConfig, TrialHarness};
use chsh_simulator_core_rs::strategy::{
    play_with, ClassicalStrategy, QuantumStrategy, RandomStrategy,
};
use chsh_simulator_core_rs::{
    analyze, play_classical, play_quantum, play_random, Game, QuantumParams,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8};

const TRIALS: usize = 200_000;
const TSIRELSON: f64 = 0.853_553_390_593_273_8; // (2 + sqrt 2) / 4

fn harness(seed: u64) -> TrialHarness {
    TrialHarness::new(HarnessConfig::seeded(seed).with_workers(8)).unwrap()
}

fn rate(games: &[Game], pick: impl Fn(&Game) -> bool) -> f64 {
    games.iter().filter(|g| pick(g)).count() as f64 / games.len() as f64
}

#[test]
fn test_random_strategy_wins_half() {
    let games = play_with(&harness(1), TRIALS, &RandomStrategy);
    let result = analyze(&games);

    assert!((result.win_rate - 0.5).abs() < 0.01, "{}", result);
    assert!((rate(&games, |g| g.a) - 0.5).abs() < 0.01);
    assert!((rate(&games, |g| g.b) - 0.5).abs() < 0.01);
    assert!((rate(&games, |g| g.x) - 0.5).abs() < 0.01);
    assert!((rate(&games, |g| g.y) - 0.5).abs() < 0.01);
}

#[test]
fn test_classical_strategy_hits_classical_bound() {
    for answer in [false, true] {
        let games = play_with(&harness(2), TRIALS, &ClassicalStrategy::new(answer));
        assert!(games.iter().all(|g| g.a == answer && g.b == answer));

        let result = analyze(&games);
        assert_eq!(result.win_rate_00, 1.0);
        assert_eq!(result.win_rate_01, 1.0);
        assert_eq!(result.win_rate_10, 1.0);
        assert_eq!(result.win_rate_11, 0.0);
        assert!((result.win_rate - 0.75).abs() < 0.01, "{}", result);
    }
}

#[test]
fn test_quantum_optimal_angles_reach_tsirelson_bound() {
    for alice_first in [true, false] {
        let params = QuantumParams::optimal().with_alice_first(alice_first);
        let games = play_with(&harness(3), TRIALS, &QuantumStrategy::new(params));
        let result = analyze(&games);

        assert!(
            (result.win_rate - TSIRELSON).abs() < 0.01,
            "alice_first = {}: {}",
            alice_first,
            result
        );
        for rate in [result.win_rate_00, result.win_rate_01, result.win_rate_10, result.win_rate_11] {
            assert!((rate - TSIRELSON).abs() < 0.015, "bucket rate {}", rate);
        }
    }
}

#[test]
fn test_quantum_beats_classical_bound() {
    let params = QuantumParams::new(0.0, -FRAC_PI_4, -FRAC_PI_8, FRAC_PI_4);
    let result = analyze(&play_with(&harness(4), TRIALS, &QuantumStrategy::new(params)));
    assert!(result.win_rate > 0.8, "{}", result);
}

#[test]
fn test_quantum_standard_basis_matches_classical() {
    let params = QuantumParams::new(0.0, 0.0, 0.0, 0.0);
    let games = play_with(&harness(5), TRIALS, &QuantumStrategy::new(params));
    assert!(games.iter().all(|g| g.a == g.b));

    let result = analyze(&games);
    assert_eq!(result.win_rate_11, 0.0);
    assert!((result.win_rate - 0.75).abs() < 0.01);
}

#[test]
fn test_quantum_fully_mixed_wins_half() {
    for (diff_a, diff_0, diff_b) in [(FRAC_PI_4, FRAC_PI_8, -FRAC_PI_4), (FRAC_PI_2, FRAC_PI_4, FRAC_PI_2), (0.0, 0.0, 0.0)] {
        let params = QuantumParams::new(1.0, diff_a, diff_0, diff_b);
        let result = analyze(&play_with(&harness(6), TRIALS, &QuantumStrategy::new(params)));
        assert!((result.win_rate - 0.5).abs() < 0.01, "{}", result);
    }
}

#[test]
fn test_quantum_noise_degrades_linearly() {
    let params = QuantumParams::optimal().with_err(0.5);
    let result = analyze(&play_with(&harness(7), TRIALS, &QuantumStrategy::new(params)));
    let expected = 0.5 + 0.5 * (TSIRELSON - 0.5);
    assert!((result.win_rate - expected).abs() < 0.01, "{}", result);
}

#[test]
fn test_measurement_order_keeps_marginals() {
    let params = QuantumParams::optimal().with_err(0.1);
    let forward = play_with(&harness(8), TRIALS, &QuantumStrategy::new(params));
    let reverse = play_with(
        &harness(8),
        TRIALS,
        &QuantumStrategy::new(params.with_alice_first(false)),
    );

    // Same streams: identical questions, possibly different answers
    assert!(forward.iter().zip(&reverse).all(|(f, r)| f.x == r.x && f.y == r.y));
    let changed = forward
        .iter()
        .zip(&reverse)
        .filter(|(f, r)| (f.a, f.b) != (r.a, r.b))
        .count();
    assert!(changed > 0, "reversing order changed no round");

    for x in [false, true] {
        let fwd: Vec<Game> = forward.iter().copied().filter(|g| g.x == x).collect();
        let rev: Vec<Game> = reverse.iter().copied().filter(|g| g.x == x).collect();
        assert!((rate(&fwd, |g| g.a) - rate(&rev, |g| g.a)).abs() < 0.015);
    }
    for y in [false, true] {
        let fwd: Vec<Game> = forward.iter().copied().filter(|g| g.y == y).collect();
        let rev: Vec<Game> = reverse.iter().copied().filter(|g| g.y == y).collect();
        assert!((rate(&fwd, |g| g.b) - rate(&rev, |g| g.b)).abs() < 0.015);
    }
}

#[test]
fn test_free_functions_use_fresh_entropy() {
    let games = play_random(50_000);
    assert_eq!(games.len(), 50_000);
    assert!((analyze(&games).win_rate - 0.5).abs() < 0.02);

    let games = play_classical(10_000, true);
    assert!(games.iter().all(|g| g.a && g.b));

    let result = analyze(&play_quantum(50_000, QuantumParams::optimal()));
    assert!((result.win_rate - TSIRELSON).abs() < 0.02, "{}", result);
}
