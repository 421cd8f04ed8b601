//! Round and outcome bindings for Python.

use pyo3::prelude::*;

use crate::round::{Outcome, Round, RoundStatus};
use crate::view::RoundView;

/// Python wrapper for Round.
#[pyclass(name = "Round")]
#[derive(Clone, Debug)]
pub struct PyRound(pub Round);

#[pymethods]
impl PyRound {
    /// Create a round for a fixed word.
    #[new]
    #[pyo3(signature = (word, wrong_limit = 6, hint = None))]
    fn new(word: &str, wrong_limit: u32, hint: Option<String>) -> PyResult<Self> {
        let round = Round::new(word, wrong_limit)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(Self(match hint {
            Some(hint) => round.with_hint(hint),
            None => round,
        }))
    }

    /// Reveal mask as a string, `_` for hidden positions.
    #[getter]
    fn mask(&self) -> String {
        self.0.mask().into_iter().collect()
    }

    /// "in_progress", "won" or "lost".
    #[getter]
    fn status(&self) -> &'static str {
        match self.0.status() {
            RoundStatus::InProgress => "in_progress",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }

    #[getter]
    fn wrong_count(&self) -> u32 {
        self.0.wrong_count()
    }

    #[getter]
    fn wrong_limit(&self) -> u32 {
        self.0.wrong_limit()
    }

    #[getter]
    fn hint(&self) -> Option<String> {
        self.0.hint().map(str::to_string)
    }

    /// Guessed letters, sorted.
    #[getter]
    fn guessed_letters(&self) -> Vec<char> {
        self.0.guessed_letters().collect()
    }

    /// The secret word once the round is over, else None.
    #[getter]
    fn secret(&self) -> Option<String> {
        self.0.revealed_secret().map(str::to_string)
    }

    fn is_over(&self) -> bool {
        self.0.is_over()
    }

    /// Multi-line text rendering, as shown by the terminal game.
    fn render(&self) -> String {
        RoundView::new(&self.0, None).to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Round(mask='{}', wrong={}/{}, status={})",
            self.mask(),
            self.0.wrong_count(),
            self.0.wrong_limit(),
            self.status()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for Outcome.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub Outcome);

#[pymethods]
impl PyOutcome {
    /// "correct", "incorrect" or "rejected".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0 {
            Outcome::Correct { .. } => "correct",
            Outcome::Incorrect { .. } => "incorrect",
            Outcome::Rejected(_) => "rejected",
        }
    }

    #[getter]
    fn letter(&self) -> Option<char> {
        self.0.letter()
    }

    /// Why the guess was ignored, for rejected outcomes.
    #[getter]
    fn reason(&self) -> Option<String> {
        self.0.rejection().map(|r| r.to_string())
    }

    /// Positions revealed, for correct guesses.
    #[getter]
    fn revealed(&self) -> Option<usize> {
        self.0.revealed()
    }

    /// Wrong guesses left, for incorrect guesses.
    #[getter]
    fn remaining(&self) -> Option<u32> {
        self.0.remaining()
    }

    #[getter]
    fn win(&self) -> bool {
        self.0.is_win()
    }

    #[getter]
    fn lose(&self) -> bool {
        self.0.is_loss()
    }

    #[getter]
    fn ends_round(&self) -> bool {
        self.0.ends_round()
    }

    fn __repr__(&self) -> String {
        format!("Outcome({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
