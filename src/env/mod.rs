//! The environment an RL loop talks to.
//!
//! - `GameEngine`: reset, step (agent move + environment reply), play
//! - `MovePolicy`: how a side picks its move, injected into the engine
//!
//! ## Usage
//!
//! ```
//! use numeric_tictactoe::core::EnvConfig;
//! use numeric_tictactoe::env::GameEngine;
//!
//! let mut engine = GameEngine::new(EnvConfig::default());
//! let mut board = engine.reset();
//!
//! loop {
//!     let (agent_actions, _) = numeric_tictactoe::rules::action_space(&board);
//!     let step = engine.step(board, agent_actions[0]).unwrap();
//!     board = step.board;
//!     if step.terminal {
//!         break;
//!     }
//! }
//! ```

pub mod engine;
pub mod policy;

pub use engine::{GameEngine, Transition};
pub use policy::{FirstLegal, MovePolicy, Scripted, UniformRandom};
