//! Module-level Python functions
//!
//! Names and keyword arguments follow the interop surface:
//!
//! ```python
//! import chsh_simulator_core_rs as CHSH
//!
//! games = CHSH.PlayQuantum(100000, 0.0, 0.785, 0.393, -0.785)
//! print(CHSH.Analyze(games))
//! ```

use pyo3::prelude::*;

use super::types::{PyGame, PyGameResult};
use crate::analysis::analyze;
use crate::models::Game;
use crate::strategy::{play_classical, play_quantum, play_random, QuantumParams};

fn into_py_games(games: Vec<Game>) -> Vec<PyGame> {
    games.into_iter().map(PyGame::from).collect()
}

/// Simulate games and return a list of results.
#[pyfunction]
#[pyo3(name = "PlayRandom", signature = (n))]
pub fn py_play_random(py: Python<'_>, n: usize) -> Vec<PyGame> {
    into_py_games(py.allow_threads(|| play_random(n)))
}

/// Simulate games and return a list of results.
#[pyfunction]
#[pyo3(name = "PlayClassical", signature = (n, Strategy=false))]
#[allow(non_snake_case)]
pub fn py_play_classical(py: Python<'_>, n: usize, Strategy: bool) -> Vec<PyGame> {
    into_py_games(py.allow_threads(|| play_classical(n, Strategy)))
}

/// Simulate games and return a list of results.
#[pyfunction]
#[pyo3(name = "PlayQuantum", signature = (n, err, diff_a, diff_0, diff_b, Alice_first=true))]
#[allow(non_snake_case)]
pub fn py_play_quantum(
    py: Python<'_>,
    n: usize,
    err: f64,
    diff_a: f64,
    diff_0: f64,
    diff_b: f64,
    Alice_first: bool,
) -> Vec<PyGame> {
    let params = QuantumParams::new(err, diff_a, diff_0, diff_b).with_alice_first(Alice_first);
    into_py_games(py.allow_threads(|| play_quantum(n, params)))
}

/// Analyze a list of games and return a summary.
#[pyfunction]
#[pyo3(name = "Analyze", signature = (games))]
pub fn py_analyze(py: Python<'_>, games: Vec<PyGame>) -> PyGameResult {
    let games: Vec<Game> = games.into_iter().map(Game::from).collect();
    PyGameResult::from(py.allow_threads(|| analyze(&games)))
}
