//! Episode rollout and recording.
//!
//! An episode records every `Transition` from reset to a terminal board:
//! - The agent's and environment's moves
//! - The per-step reward
//! - The final result
//!
//! Transitions live in an `im::Vector` so episodes clone in O(1) when a
//! learner keeps them in a replay buffer.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{Board, Error, GameRng, MoveRecord, Result, Side};
use crate::env::{GameEngine, MovePolicy, Transition, UniformRandom};
use crate::rules::{self, GameResult};

/// A complete (or in-progress) episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Index of this episode within its runner.
    pub index: u64,

    /// Steps in play order.
    pub transitions: Vector<Transition>,
}

impl Episode {
    /// Create an empty episode.
    pub fn new(index: u64) -> Self {
        Self {
            index,
            transitions: Vector::new(),
        }
    }

    /// Add a step.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push_back(transition);
    }

    /// Number of steps (agent moves).
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Whether the last step reached a terminal board.
    pub fn is_complete(&self) -> bool {
        self.transitions.last().is_some_and(|t| t.terminal)
    }

    /// Result of the last step, or `None` before the first step.
    pub fn result(&self) -> Option<GameResult> {
        self.transitions.last().map(|t| t.result)
    }

    /// Board after the last step.
    pub fn final_board(&self) -> Board {
        self.transitions.last().map_or_else(Board::empty, |t| t.board)
    }

    /// Sum of rewards over all steps.
    pub fn total_reward(&self) -> i32 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// All moves of both sides in ply order.
    pub fn moves(&self) -> Vec<MoveRecord> {
        let mut records = Vec::with_capacity(self.len() * 2);
        for t in &self.transitions {
            let ply = records.len() as u8;
            records.push(MoveRecord::new(Side::Agent, t.agent_move, ply));
            if let Some(env_move) = t.environment_move {
                records.push(MoveRecord::new(Side::Environment, env_move, ply + 1));
            }
        }
        records
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Plays whole episodes with an agent policy against a `GameEngine`.
///
/// The agent draws from its own RNG stream, derived from the engine seed, so
/// agent exploration never shifts the environment's replies.
pub struct EpisodeRunner<A: MovePolicy, P: MovePolicy = UniformRandom> {
    engine: GameEngine<P>,
    agent: A,
    agent_rng: GameRng,
    episodes_played: u64,
}

impl<A: MovePolicy, P: MovePolicy> EpisodeRunner<A, P> {
    /// Create a runner.
    pub fn new(engine: GameEngine<P>, agent: A) -> Self {
        let agent_rng = GameRng::new(engine.config().seed).for_context("agent");
        Self {
            engine,
            agent,
            agent_rng,
            episodes_played: 0,
        }
    }

    /// Get the engine.
    pub fn engine(&self) -> &GameEngine<P> {
        &self.engine
    }

    /// Number of episodes played so far.
    pub fn episodes_played(&self) -> u64 {
        self.episodes_played
    }

    /// Reset the engine and play until terminal.
    #[instrument(skip(self), fields(index = self.episodes_played))]
    pub fn run_episode(&mut self) -> Result<Episode> {
        let mut episode = Episode::new(self.episodes_played);
        let mut board = self.engine.reset();

        // Each step fills at least one cell, so this ends within 5 steps.
        loop {
            let (agent_actions, _) = rules::action_space(&board);
            let agent_move = self
                .agent
                .choose_move(&board, &agent_actions, &mut self.agent_rng)
                .ok_or(Error::NoAgentMove)?;

            let transition = self.engine.play(agent_move)?;
            episode.push(transition);
            board = transition.board;

            if transition.terminal {
                break;
            }
        }

        self.episodes_played += 1;
        debug!(
            result = ?episode.result(),
            steps = episode.len(),
            total_reward = episode.total_reward(),
            "episode finished"
        );
        Ok(episode)
    }

    /// Play `count` episodes.
    pub fn run_episodes(&mut self, count: usize) -> Result<Vec<Episode>> {
        (0..count).map(|_| self.run_episode()).collect()
    }
}
