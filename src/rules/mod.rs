//! Game rules as pure functions over `Board`.
//!
//! - Win detection: any row, column or diagonal summing to 15
//! - Terminal detection: win, else full board (tie), else resume
//! - Legal moves: empty positions x unused values, split by parity
//! - Transition: validated placement returning a new board

pub mod engine;

pub use engine::{
    action_space, allowed_positions, allowed_values, is_terminal, is_winning, legal_moves, line_sum,
    state_transition, validate_move, validate_move_for, GameResult, Status, LINES, MAGIC_SUM,
};
