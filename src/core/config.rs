//! Environment configuration and the reward schedule.
//!
//! The schedule is fixed because downstream learners depend on it:
//! +10 agent win, -10 environment win, 0 tie, -1 per non-terminal step.

use serde::{Deserialize, Serialize};

use crate::rules::GameResult;

/// Reward when the agent completes a line.
pub const AGENT_WIN_REWARD: i32 = 10;
/// Reward when the environment completes a line.
pub const ENVIRONMENT_WIN_REWARD: i32 = -10;
/// Reward when the board fills with no line.
pub const TIE_REWARD: i32 = 0;
/// Reward for each step that leaves the game running.
pub const RESUME_REWARD: i32 = -1;

/// Reward for a step that ended with `result`.
#[must_use]
pub const fn reward_for(result: GameResult) -> i32 {
    match result {
        GameResult::Agent => AGENT_WIN_REWARD,
        GameResult::Environment => ENVIRONMENT_WIN_REWARD,
        GameResult::Tie => TIE_REWARD,
        GameResult::Resume => RESUME_REWARD,
    }
}

/// Configuration for a `GameEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Seed for the environment's random source.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl EnvConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
