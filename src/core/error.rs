//! Error types.
//!
//! Illegal input fails fast instead of corrupting a board:
//! - `BoardError`: a board that could never arise from legal play
//! - `MoveError`: a move that is illegal on the board it is applied to
//! - `Error`: everything a step or an episode codec can fail with

use thiserror::Error as ThisError;

use crate::rules::Status;

use super::board::Side;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Invalid board contents.
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum BoardError {
    #[error("value {value} at position {position} is outside 1..=9")]
    ValueOutOfRange { position: usize, value: u8 },
    #[error("value {value} appears more than once")]
    DuplicateValue { value: u8 },
    #[error("cell at position {position} is neither empty nor an integer in 1..=9: {raw}")]
    InvalidCell { position: usize, raw: f64 },
    #[error("board must have 9 cells, got {len}")]
    WrongLength { len: usize },
}

/// Illegal move.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum MoveError {
    #[error("position {position} is outside 0..=8")]
    PositionOutOfRange { position: usize },
    #[error("value {value} is outside 1..=9")]
    ValueOutOfRange { value: u8 },
    #[error("position {position} is already occupied by {occupant}")]
    PositionOccupied { position: usize, occupant: u8 },
    #[error("value {value} is already on the board")]
    ValueUsed { value: u8 },
    #[error("{side} cannot place value {value}")]
    WrongParity { side: Side, value: u8 },
    #[error("game is already over ({status})")]
    GameOver { status: Status },
}

/// Top-level error.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("environment policy produced no move on a non-terminal board")]
    NoEnvironmentMove,
    #[error("agent policy produced no move on a non-terminal board")]
    NoAgentMove,
    #[error("episode codec failed: {0}")]
    Codec(#[from] bincode::Error),
}
