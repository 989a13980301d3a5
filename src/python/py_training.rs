//! Episode rollout bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::EnvConfig;
use crate::env::{GameEngine, UniformRandom};
use crate::training::{Episode, EpisodeRunner, ResultTally};

use super::py_core::{value_error, moves_to_py};

/// Python wrapper for Episode.
#[pyclass(name = "Episode")]
#[derive(Clone)]
pub struct PyEpisode(pub Episode);

#[pymethods]
impl PyEpisode {
    /// Number of agent steps.
    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Final result label, or None for an empty episode.
    #[getter]
    fn result(&self) -> Option<&'static str> {
        self.0.result().map(|r| r.as_str())
    }

    /// Sum of rewards.
    #[getter]
    fn total_reward(&self) -> i32 {
        self.0.total_reward()
    }

    /// Per-step rewards.
    fn rewards<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        let rewards: Vec<i32> = self.0.transitions.iter().map(|t| t.reward).collect();
        PyArray1::from_vec_bound(py, rewards)
    }

    /// Board after each step as a `(steps, 9)` array, NaN for empty cells.
    fn boards<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let steps = self.0.len();
        let flat: Vec<f64> = self
            .0
            .transitions
            .iter()
            .flat_map(|t| t.board.to_nan_encoded())
            .collect();
        PyArray1::from_vec_bound(py, flat)
            .reshape([steps, 9])
            .map_err(value_error)
    }

    /// Agent moves in play order.
    fn agent_moves(&self) -> Vec<(usize, u8)> {
        let moves: Vec<_> = self.0.transitions.iter().map(|t| t.agent_move).collect();
        moves_to_py(&moves)
    }

    /// Serialize with bincode.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.to_bytes().map_err(value_error)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Deserialize from bincode.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Episode::from_bytes(bytes).map(Self).map_err(value_error)
    }

    fn __repr__(&self) -> String {
        format!(
            "Episode(index={}, steps={}, result={})",
            self.0.index,
            self.0.len(),
            self.result().unwrap_or("None")
        )
    }
}

/// Python wrapper for ResultTally.
#[pyclass(name = "ResultTally")]
#[derive(Clone, Default)]
pub struct PyResultTally(pub ResultTally);

#[pymethods]
impl PyResultTally {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    #[getter]
    fn agent_wins(&self) -> u64 {
        self.0.agent_wins
    }

    #[getter]
    fn environment_wins(&self) -> u64 {
        self.0.environment_wins
    }

    #[getter]
    fn ties(&self) -> u64 {
        self.0.ties
    }

    fn episodes(&self) -> u64 {
        self.0.episodes()
    }

    fn agent_win_rate(&self) -> f64 {
        self.0.agent_win_rate()
    }

    fn environment_win_rate(&self) -> f64 {
        self.0.environment_win_rate()
    }

    fn tie_rate(&self) -> f64 {
        self.0.tie_rate()
    }

    fn __repr__(&self) -> String {
        format!(
            "ResultTally(agent={}, environment={}, tie={})",
            self.0.agent_wins, self.0.environment_wins, self.0.ties
        )
    }
}

/// Random-agent rollouts, for baselines.
#[pyclass(name = "RandomRollout")]
pub struct PyRandomRollout {
    runner: EpisodeRunner<UniformRandom>,
}

#[pymethods]
impl PyRandomRollout {
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        let engine = GameEngine::new(EnvConfig::default().with_seed(seed));
        Self {
            runner: EpisodeRunner::new(engine, UniformRandom),
        }
    }

    /// Play one episode.
    fn run_episode(&mut self) -> PyResult<PyEpisode> {
        self.runner.run_episode().map(PyEpisode).map_err(value_error)
    }

    /// Play `count` episodes and tally the results.
    fn run(&mut self, count: usize) -> PyResult<PyResultTally> {
        let episodes = self.runner.run_episodes(count).map_err(value_error)?;
        Ok(PyResultTally(
            episodes.iter().filter_map(|e| e.result()).collect(),
        ))
    }
}
