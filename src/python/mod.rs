//! Python bindings for the hangman round engine.
//!
//! # Quick Start
//!
//! ```python
//! import hangman_engine as hm
//!
//! engine = hm.RoundEngine(seed=42)
//! round = engine.start_round("medium")
//!
//! round, outcome = engine.guess(round, "e")
//! print(outcome.kind, round.mask, round.wrong_count)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// hangman_engine: deterministic hangman rounds.
#[pymodule]
fn hangman_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRound>()?;
    m.add_class::<PyOutcome>()?;
    m.add_class::<PyRoundEngine>()?;
    Ok(())
}
