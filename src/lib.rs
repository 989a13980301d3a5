//! # numeric-tictactoe
//!
//! Numeric Tic-Tac-Toe as a reinforcement-learning environment.
//!
//! The agent places odd numbers (1, 3, 5, 7, 9), the environment places even
//! numbers (2, 4, 6, 8), each number at most once. Any row, column or
//! diagonal whose filled cells sum to 15 wins; a full board without one is a
//! tie.
//!
//! ## Design Principles
//!
//! 1. **Value Boards**: `Board` is `Copy`. Every transition returns a new
//!    board, so no caller sees another's board change underneath it.
//!
//! 2. **Fail Fast**: Illegal moves, wrong-parity values and steps on a
//!    finished board are errors, never silent corruption.
//!
//! 3. **Injectable Opponent**: The environment's reply comes from a
//!    `MovePolicy` drawing on a seeded `GameRng`, so tests and experiments
//!    replay exactly.
//!
//! ## Rewards
//!
//! | result      | reward |
//! |-------------|--------|
//! | Agent       | +10    |
//! | Environment | -10    |
//! | Tie         | 0      |
//! | Resume      | -1     |
//!
//! ## Modules
//!
//! - `core`: Board, sides, moves, RNG, configuration, errors
//! - `rules`: Win/tie detection, legal moves, placement
//! - `env`: `GameEngine` two-ply step and move policies
//! - `training`: Episode rollout and result tallies
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod env;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Side, Move, MoveRecord,
    GameRng, GameRngState,
    EnvConfig,
    BoardError, MoveError, Error, Result,
};

pub use crate::rules::{GameResult, Status};

pub use crate::env::{GameEngine, Transition, MovePolicy, UniformRandom, FirstLegal, Scripted};

pub use crate::training::{Episode, EpisodeRunner, ResultTally};
