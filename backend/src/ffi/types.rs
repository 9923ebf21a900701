//! Python classes for the game record and the aggregated result
//!
//! Attribute names match the interop names (`x`, `y`, `a`, `b`;
//! `n00` ... `WinRate`) so existing driver scripts keep working.

use pyo3::prelude::*;

use crate::models::{Game, GameResult};

/// One CHSH round, read/write from Python
#[pyclass(name = "Game")]
#[derive(Debug, Clone, Copy)]
pub struct PyGame {
    #[pyo3(get, set)]
    pub x: bool,
    #[pyo3(get, set)]
    pub y: bool,
    #[pyo3(get, set)]
    pub a: bool,
    #[pyo3(get, set)]
    pub b: bool,
}

#[pymethods]
impl PyGame {
    #[new]
    #[pyo3(signature = (x=false, y=false, a=false, b=false))]
    fn new(x: bool, y: bool, a: bool, b: bool) -> Self {
        Self { x, y, a, b }
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(x={}, y={}, a={}, b={})",
            py_bool(self.x),
            py_bool(self.y),
            py_bool(self.a),
            py_bool(self.b)
        )
    }
}

impl From<Game> for PyGame {
    fn from(game: Game) -> Self {
        Self {
            x: game.x,
            y: game.y,
            a: game.a,
            b: game.b,
        }
    }
}

impl From<PyGame> for Game {
    fn from(game: PyGame) -> Self {
        Game::new(game.x, game.y, game.a, game.b)
    }
}

/// Aggregated statistics, read-only from Python
#[pyclass(name = "GameResult", frozen)]
#[derive(Debug, Clone)]
pub struct PyGameResult {
    inner: GameResult,
}

#[pymethods]
impl PyGameResult {
    #[getter]
    fn n00(&self) -> usize {
        self.inner.n00
    }

    #[getter]
    fn n01(&self) -> usize {
        self.inner.n01
    }

    #[getter]
    fn n10(&self) -> usize {
        self.inner.n10
    }

    #[getter]
    fn n11(&self) -> usize {
        self.inner.n11
    }

    #[getter]
    fn w00(&self) -> usize {
        self.inner.w00
    }

    #[getter]
    fn w01(&self) -> usize {
        self.inner.w01
    }

    #[getter]
    fn w10(&self) -> usize {
        self.inner.w10
    }

    #[getter]
    fn w11(&self) -> usize {
        self.inner.w11
    }

    #[getter(WinRate00)]
    fn win_rate_00(&self) -> f64 {
        self.inner.win_rate_00
    }

    #[getter(WinRate01)]
    fn win_rate_01(&self) -> f64 {
        self.inner.win_rate_01
    }

    #[getter(WinRate10)]
    fn win_rate_10(&self) -> f64 {
        self.inner.win_rate_10
    }

    #[getter(WinRate11)]
    fn win_rate_11(&self) -> f64 {
        self.inner.win_rate_11
    }

    #[getter]
    fn n(&self) -> usize {
        self.inner.n
    }

    #[getter]
    fn w(&self) -> usize {
        self.inner.w
    }

    #[getter(WinRate)]
    fn win_rate(&self) -> f64 {
        self.inner.win_rate
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

impl From<GameResult> for PyGameResult {
    fn from(inner: GameResult) -> Self {
        Self { inner }
    }
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
