//! The two-ply environment: agent move, terminal check, environment reply,
//! terminal check.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::core::{reward_for, Board, EnvConfig, Error, GameRng, GameRngState, Move, MoveError, Result, Side};
use crate::rules::{self, GameResult, Status};

use super::policy::{MovePolicy, UniformRandom};

/// Outcome of one `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board after the step.
    pub board: Board,

    /// Reward for the agent.
    pub reward: i32,

    /// Whether `board` is terminal.
    pub terminal: bool,

    /// Result label.
    pub result: GameResult,

    /// The agent's move.
    pub agent_move: Move,

    /// The environment's reply, absent if the agent's move ended the game.
    pub environment_move: Option<Move>,
}

impl Transition {
    /// `(board, reward, terminal, result)`.
    #[must_use]
    pub fn into_tuple(self) -> (Board, i32, bool, GameResult) {
        (self.board, self.reward, self.terminal, self.result)
    }
}

/// Numeric tic-tac-toe environment.
///
/// Holds one board for the current episode and the random source for the
/// environment's replies. Boards are values, so `step` can also be used on
/// any board without touching the held one.
///
/// ## Example
///
/// ```
/// use numeric_tictactoe::core::{EnvConfig, Move};
/// use numeric_tictactoe::env::GameEngine;
/// use numeric_tictactoe::rules::GameResult;
///
/// let mut engine = GameEngine::new(EnvConfig::default().with_seed(1));
/// let board = engine.reset();
///
/// let step = engine.step(board, Move::new(0, 5)).unwrap();
/// assert_eq!(step.reward, -1);
/// assert_eq!(step.result, GameResult::Resume);
/// assert_eq!(step.board.filled_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<P: MovePolicy = UniformRandom> {
    config: EnvConfig,
    board: Board,
    rng: GameRng,
    policy: P,
}

impl GameEngine<UniformRandom> {
    /// Create an engine whose environment plays uniformly at random.
    pub fn new(config: EnvConfig) -> Self {
        Self::with_policy(config, UniformRandom)
    }
}

impl Default for GameEngine<UniformRandom> {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}

impl<P: MovePolicy> GameEngine<P> {
    /// Create an engine with a custom environment policy.
    pub fn with_policy(config: EnvConfig, policy: P) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            board: Board::empty(),
            rng,
            policy,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Get the held board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the environment policy mutably, e.g. to swap in a new script between steps.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Clear the held board and return it.
    pub fn reset(&mut self) -> Board {
        self.board = Board::empty();
        self.board
    }

    /// Legal actions for each side on the held board.
    pub fn action_space(&self) -> (Vec<Move>, Vec<Move>) {
        rules::action_space(&self.board)
    }

    /// Terminal check on the held board.
    pub fn is_terminal(&self) -> (bool, Status) {
        rules::is_terminal(&self.board)
    }

    /// Capture the random source for checkpointing.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a random source captured with `rng_state`.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Apply the agent's move, then (unless that ended the game) one
    /// environment reply.
    ///
    /// Rejects a terminal `board`, an illegal move, and an even value. An even
    /// agent value is a `WrongParity` error even when it would complete a line.
    #[instrument(skip(self, board))]
    pub fn step(&mut self, board: Board, agent_move: Move) -> Result<Transition> {
        let (terminal, status) = rules::is_terminal(&board);
        if terminal {
            return Err(MoveError::GameOver { status }.into());
        }

        rules::validate_move_for(&board, Side::Agent, agent_move)?;
        let after_agent = rules::state_transition(board, agent_move)?;

        let (terminal, status) = rules::is_terminal(&after_agent);
        if terminal {
            let result = GameResult::from_status(status, Side::Agent);
            debug!(%result, "game ended on agent move");
            return Ok(Self::transition(after_agent, agent_move, None, result));
        }

        let env_actions = rules::legal_moves(&after_agent, Side::Environment);
        let Some(env_move) = self.policy.choose_move(&after_agent, &env_actions, &mut self.rng) else {
            warn!(available = env_actions.len(), "environment policy returned no move");
            return Err(Error::NoEnvironmentMove);
        };
        if let Err(err) = rules::validate_move_for(&after_agent, Side::Environment, env_move) {
            warn!(%env_move, %err, "environment policy chose an illegal move");
            return Err(err.into());
        }
        trace!(%env_move, "environment reply");

        let after_env = rules::state_transition(after_agent, env_move)?;
        let (_, status) = rules::is_terminal(&after_env);
        let result = GameResult::from_status(status, Side::Environment);
        debug!(%result, "step complete");

        Ok(Self::transition(after_env, agent_move, Some(env_move), result))
    }

    /// `step` on the held board, keeping the resulting board.
    pub fn play(&mut self, agent_move: Move) -> Result<Transition> {
        let transition = self.step(self.board, agent_move)?;
        self.board = transition.board;
        Ok(transition)
    }

    fn transition(
        board: Board,
        agent_move: Move,
        environment_move: Option<Move>,
        result: GameResult,
    ) -> Transition {
        Transition {
            board,
            reward: reward_for(result),
            terminal: result.is_terminal(),
            result,
            agent_move,
            environment_move,
        }
    }
}
