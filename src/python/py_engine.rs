//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{ConfigError, EngineConfig, GameRng};
use crate::rules::RoundEngine;

use super::py_core::{PyOutcome, PyRound};

fn value_error(err: ConfigError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python wrapper for RoundEngine.
///
/// Not thread-safe: observers registered on the Rust side are `!Send`.
#[pyclass(name = "RoundEngine", unsendable)]
pub struct PyRoundEngine {
    engine: RoundEngine,
}

#[pymethods]
impl PyRoundEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible word selection (random if omitted)
    /// - words_file: Path to a TOML word pool file (built-in pools if omitted)
    #[new]
    #[pyo3(signature = (seed = None, words_file = None))]
    fn new(seed: Option<u64>, words_file: Option<&str>) -> PyResult<Self> {
        let config = match words_file {
            Some(path) => EngineConfig::load(path).map_err(value_error)?,
            None => EngineConfig::standard(),
        };
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let engine = RoundEngine::with_rng(config, rng).map_err(value_error)?;
        Ok(Self { engine })
    }

    /// Deal a fresh round for "easy", "medium" or "hard".
    fn start_round(&mut self, difficulty: &str) -> PyResult<PyRound> {
        self.engine
            .start_round(difficulty)
            .map(PyRound)
            .map_err(value_error)
    }

    /// Guess a letter. Returns the next round and the outcome.
    fn guess(&mut self, round: &PyRound, letter: &str) -> (PyRound, PyOutcome) {
        let (next, outcome) = self.engine.guess_str(&round.0, letter);
        (PyRound(next), PyOutcome(outcome))
    }

    fn __repr__(&self) -> String {
        let tiers: Vec<String> = self
            .engine
            .config()
            .difficulties()
            .map(|d| d.to_string())
            .collect();
        format!("RoundEngine(tiers=[{}])", tiers.join(", "))
    }
}
