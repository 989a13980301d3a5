//! Move representation: a value placed at a position.
//!
//! A move only names *where* and *what*. Who may make it follows from the
//! value's parity (see `Side`). Whether it is legal depends on the board it
//! is applied to and is checked by `rules::state_transition`.

use serde::{Deserialize, Serialize};

use super::board::Side;

/// A single placement.
///
/// ## Example
///
/// ```
/// use numeric_tictactoe::core::{Move, Side};
///
/// // Agent places 9 in the bottom-middle cell
/// let mv = Move::new(7, 9);
/// assert_eq!(mv.position, 7);
/// assert_eq!(mv.side(), Side::Agent);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Board index, 0-8 in row-major order.
    pub position: usize,

    /// Value to place, 1-9.
    pub value: u8,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(position: usize, value: u8) -> Self {
        Self { position, value }
    }

    /// The side entitled to make this move, by value parity.
    #[must_use]
    pub const fn side(self) -> Side {
        Side::owner_of(self.value)
    }
}

impl From<(usize, u8)> for Move {
    fn from((position, value): (usize, u8)) -> Self {
        Self::new(position, value)
    }
}

impl From<Move> for (usize, u8) {
    fn from(mv: Move) -> Self {
        (mv.position, mv.value)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.value, self.position)
    }
}

/// A recorded move with the side that made it and its ply number.
///
/// Used for episode history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,

    /// The move made.
    pub mv: Move,

    /// Ply number within the episode (0-indexed, both sides counted).
    pub ply: u8,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(side: Side, mv: Move, ply: u8) -> Self {
        Self { side, mv, ply }
    }
}
