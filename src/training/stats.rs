//! Outcome counts across many episodes.

use serde::{Deserialize, Serialize};

use crate::rules::GameResult;

/// Agent/environment/tie counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    /// Episodes the agent won.
    pub agent_wins: u64,

    /// Episodes the environment won.
    pub environment_wins: u64,

    /// Episodes that ended full with no line.
    pub ties: u64,
}

impl ResultTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counts to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count a final result. `Resume` is not an outcome and is ignored.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Agent => self.agent_wins += 1,
            GameResult::Environment => self.environment_wins += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::Resume => {}
        }
    }

    /// Add another tally's counts to this one.
    pub fn merge(&mut self, other: &ResultTally) {
        self.agent_wins += other.agent_wins;
        self.environment_wins += other.environment_wins;
        self.ties += other.ties;
    }

    /// Total episodes counted.
    #[must_use]
    pub fn episodes(&self) -> u64 {
        self.agent_wins + self.environment_wins + self.ties
    }

    #[must_use]
    pub fn agent_win_rate(&self) -> f64 {
        self.rate(self.agent_wins)
    }

    #[must_use]
    pub fn environment_win_rate(&self) -> f64 {
        self.rate(self.environment_wins)
    }

    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        self.rate(self.ties)
    }

    fn rate(&self, count: u64) -> f64 {
        match self.episodes() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }
}

impl FromIterator<GameResult> for ResultTally {
    fn from_iter<I: IntoIterator<Item = GameResult>>(iter: I) -> Self {
        let mut tally = Self::new();
        for result in iter {
            tally.record(result);
        }
        tally
    }
}
