//! Core types: board, sides, moves, RNG, configuration, errors.
//!
//! Everything here is plain data. The game rules live in `rules`.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use board::{Board, Side, CELL_COUNT, MAX_VALUE, MIN_VALUE};
pub use config::{reward_for, EnvConfig};
pub use error::{BoardError, Error, MoveError, Result};
pub use rng::{GameRng, GameRngState};
