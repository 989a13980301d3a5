//! Move policies.
//!
//! A `MovePolicy` picks one move from a side's legal actions. The engine uses
//! one to play the environment's reply; `EpisodeRunner` uses another to play
//! the agent.
//!
//! - `UniformRandom`: uniform over legal actions (the stock opponent)
//! - `FirstLegal`: first legal action in position-major order
//! - `Scripted`: a fixed sequence of moves, for replays and tests

use std::collections::VecDeque;

use crate::core::{Board, GameRng, Move};

/// Policy for choosing a move.
pub trait MovePolicy {
    /// Choose a move from `actions`, the legal moves for the side to act.
    ///
    /// Returns `None` if the policy has nothing to play.
    fn choose_move(&mut self, board: &Board, actions: &[Move], rng: &mut GameRng) -> Option<Move>;
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn choose_move(&mut self, board: &Board, actions: &[Move], rng: &mut GameRng) -> Option<Move> {
        (**self).choose_move(board, actions, rng)
    }
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose_move(&mut self, _board: &Board, actions: &[Move], rng: &mut GameRng) -> Option<Move> {
        rng.choose(actions).copied()
    }
}

/// Always plays the first legal action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose_move(&mut self, _board: &Board, actions: &[Move], _rng: &mut GameRng) -> Option<Move> {
        actions.first().copied()
    }
}

/// Plays a fixed sequence of moves, one per call.
///
/// Moves are returned as given, even if they are not in `actions`, so a
/// script can exercise the engine's legality checks.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    moves: VecDeque<Move>,
}

impl Scripted {
    /// Create a script from moves in play order.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MovePolicy for Scripted {
    fn choose_move(&mut self, _board: &Board, _actions: &[Move], _rng: &mut GameRng) -> Option<Move> {
        self.moves.pop_front()
    }
}
