//! Conversions between Python values and core types.
//!
//! Boards cross the boundary as 9 floats with NaN for empty cells, moves as
//! `(position, value)` pairs given either as a tuple or a list.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::core::{Board, Move};

/// Map any crate error to `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

/// Decode a NaN-encoded board.
pub(crate) fn board_from_py(state: Vec<f64>) -> PyResult<Board> {
    Board::from_nan_encoded(&state).map_err(value_error)
}

/// Encode a board as a Python-friendly list of floats.
pub(crate) fn board_to_py(board: &Board) -> Vec<f64> {
    board.to_nan_encoded().to_vec()
}

/// Extract a move from `(position, value)` or `[position, value]`.
pub(crate) fn move_from_py(action: &Bound<'_, PyAny>) -> PyResult<Move> {
    if let Ok((position, value)) = action.extract::<(usize, u8)>() {
        return Ok(Move::new(position, value));
    }
    if let Ok(list) = action.downcast::<PyList>() {
        let pair: Vec<i64> = list.extract()?;
        if let [position, value] = pair[..] {
            let position = usize::try_from(position).map_err(value_error)?;
            let value = u8::try_from(value).map_err(value_error)?;
            return Ok(Move::new(position, value));
        }
    }
    Err(PyErr::new::<PyValueError, _>(
        "action must be a (position, value) pair",
    ))
}

/// Convert moves to Python tuples.
pub(crate) fn moves_to_py(moves: &[Move]) -> Vec<(usize, u8)> {
    moves.iter().map(|&m| m.into()).collect()
}
