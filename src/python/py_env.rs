//! Environment bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{Board, EnvConfig};
use crate::env::GameEngine;
use crate::rules;

use super::py_core::{board_from_py, board_to_py, move_from_py, moves_to_py, value_error};

/// Python wrapper for GameEngine.
///
/// Method names and return shapes follow the classic gym-style numeric
/// tic-tac-toe environment, so an existing Q-learning loop can switch to it
/// unchanged. States are lists of 9 floats with NaN for empty cells.
///
/// Unlike the classic environment, `step` and `state_transition` return a
/// new list instead of mutating the one passed in.
#[pyclass(name = "TicTacToe")]
pub struct PyTicTacToe {
    engine: GameEngine,
    state: Board,
}

#[pymethods]
impl PyTicTacToe {
    /// Create an environment.
    ///
    /// # Arguments
    /// - seed: RNG seed for the environment's replies
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            engine: GameEngine::new(EnvConfig::default().with_seed(seed)),
            state: Board::empty(),
        }
    }

    /// Reset to an empty board and return it.
    fn reset(&mut self) -> Vec<f64> {
        self.state = self.engine.reset();
        board_to_py(&self.state)
    }

    /// Whether any row, column or diagonal sums to 15.
    fn is_winning(&self, curr_state: Vec<f64>) -> PyResult<bool> {
        Ok(rules::is_winning(&board_from_py(curr_state)?))
    }

    /// `(terminal, "Win" | "Tie" | "Resume")`.
    fn is_terminal(&self, curr_state: Vec<f64>) -> PyResult<(bool, &'static str)> {
        let (terminal, status) = rules::is_terminal(&board_from_py(curr_state)?);
        Ok((terminal, status.as_str()))
    }

    /// Indices of empty cells.
    fn allowed_positions(&self, curr_state: Vec<f64>) -> PyResult<Vec<usize>> {
        Ok(rules::allowed_positions(&board_from_py(curr_state)?).to_vec())
    }

    /// `(agent_values, environment_values)`.
    fn allowed_values(&self, curr_state: Vec<f64>) -> PyResult<(Vec<u8>, Vec<u8>)> {
        let (agent, env) = rules::allowed_values(&board_from_py(curr_state)?);
        Ok((agent.to_vec(), env.to_vec()))
    }

    /// `(agent_actions, environment_actions)`, each a list of `(position, value)`.
    #[allow(clippy::type_complexity)]
    fn action_space(
        &self,
        curr_state: Vec<f64>,
    ) -> PyResult<(Vec<(usize, u8)>, Vec<(usize, u8)>)> {
        let (agent, env) = rules::action_space(&board_from_py(curr_state)?);
        Ok((moves_to_py(&agent), moves_to_py(&env)))
    }

    /// Place `curr_action` and return the new state.
    fn state_transition(
        &mut self,
        curr_state: Vec<f64>,
        curr_action: &Bound<'_, PyAny>,
    ) -> PyResult<Vec<f64>> {
        let board = board_from_py(curr_state)?;
        let mv = move_from_py(curr_action)?;
        self.state = rules::state_transition(board, mv).map_err(value_error)?;
        Ok(board_to_py(&self.state))
    }

    /// Agent move plus environment reply.
    ///
    /// Returns `(next_state, reward, terminal, result)` where result is one
    /// of "Agent", "Environment", "Tie", "Resume".
    fn step(
        &mut self,
        curr_state: Vec<f64>,
        curr_action: &Bound<'_, PyAny>,
    ) -> PyResult<(Vec<f64>, i32, bool, &'static str)> {
        let board = board_from_py(curr_state)?;
        let mv = move_from_py(curr_action)?;
        let transition = self.engine.step(board, mv).map_err(value_error)?;

        self.state = transition.board;
        Ok((
            board_to_py(&transition.board),
            transition.reward,
            transition.terminal,
            transition.result.as_str(),
        ))
    }

    /// Latest state as a numpy array (NaN = empty).
    fn state_array<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        PyArray1::from_slice_bound(py, &self.state.to_nan_encoded())
    }

    fn __repr__(&self) -> String {
        let (_, status) = rules::is_terminal(&self.state);
        format!(
            "TicTacToe(filled={}, status={})",
            self.state.filled_count(),
            status
        )
    }
}
