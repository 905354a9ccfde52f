//! Autoplay bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::autoplay::{play_games, Agent, AutoplayConfig, GameSummary, PerfectMemoryAgent, RandomAgent};
use crate::core::MatchConfig;

/// Python wrapper for GameSummary.
#[pyclass(name = "GameSummary")]
#[derive(Clone, Debug)]
pub struct PyGameSummary(pub GameSummary);

#[pymethods]
impl PyGameSummary {
    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn won(&self) -> bool {
        self.0.won
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.0.moves
    }

    #[getter]
    fn reveals(&self) -> usize {
        self.0.reveals
    }

    #[getter]
    fn elapsed_secs(&self) -> u64 {
        self.0.elapsed_secs
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSummary(seed={}, won={}, moves={})",
            self.0.seed, self.0.won, self.0.moves
        )
    }
}

/// Play a batch of games with a built-in agent.
///
/// # Arguments
/// - agent: "random" or "perfect-memory"
/// - count: Number of games
/// - seed: Seed of the first game
/// - pair_count: Pairs per board
#[pyfunction]
#[pyo3(signature = (agent = "perfect-memory", count = 1, seed = 0, pair_count = 8))]
pub fn autoplay(agent: &str, count: usize, seed: u64, pair_count: usize) -> PyResult<Vec<PyGameSummary>> {
    let match_config = MatchConfig::new().with_pair_count(pair_count);
    let autoplay = AutoplayConfig::new().with_seed(seed);

    let mut agent: Box<dyn Agent> = match agent {
        "random" => Box::new(RandomAgent),
        "perfect-memory" => Box::new(PerfectMemoryAgent::new()),
        other => return Err(PyValueError::new_err(format!("unknown agent: {other}"))),
    };

    let summaries = play_games(&match_config, agent.as_mut(), &autoplay, count)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(summaries.into_iter().map(PyGameSummary).collect())
}
