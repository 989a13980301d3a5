//! Python bindings for the numeric tic-tac-toe environment.
//!
//! # Quick Start
//!
//! ```python
//! import numeric_tictactoe as ntt
//!
//! env = ntt.TicTacToe(seed=42)
//! state = env.reset()
//!
//! agent_actions, _ = env.action_space(state)
//! state, reward, terminal, result = env.step(state, agent_actions[0])
//!
//! # Random-agent baseline
//! tally = ntt.RandomRollout(seed=7).run(1000)
//! print(tally.agent_win_rate())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;
mod py_training;

pub use py_env::*;
pub use py_training::*;

/// numeric_tictactoe: odd-vs-even tic-tac-toe as an RL environment.
#[pymodule]
fn numeric_tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Environment
    m.add_class::<PyTicTacToe>()?;

    // Rollouts
    m.add_class::<PyEpisode>()?;
    m.add_class::<PyResultTally>()?;
    m.add_class::<PyRandomRollout>()?;

    Ok(())
}
