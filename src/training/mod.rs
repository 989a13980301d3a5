//! Rollout infrastructure for learners built on top of the environment.
//!
//! ## Overview
//!
//! - **Episode**: every step from reset to a terminal board, with rewards
//! - **EpisodeRunner**: plays episodes with an agent policy
//! - **ResultTally**: win/loss/tie counts to track how an agent is doing
//!
//! ## Usage
//!
//! ```
//! use numeric_tictactoe::core::EnvConfig;
//! use numeric_tictactoe::env::{GameEngine, UniformRandom};
//! use numeric_tictactoe::training::{EpisodeRunner, ResultTally};
//!
//! let engine = GameEngine::new(EnvConfig::default().with_seed(7));
//! let mut runner = EpisodeRunner::new(engine, UniformRandom);
//!
//! let episodes = runner.run_episodes(100).unwrap();
//! let tally: ResultTally = episodes.iter().filter_map(|e| e.result()).collect();
//! assert_eq!(tally.episodes(), 100);
//! ```

pub mod episode;
pub mod stats;

pub use episode::{Episode, EpisodeRunner};
pub use stats::ResultTally;
