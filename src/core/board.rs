//! Board representation and side ownership.
//!
//! ## Board
//!
//! Nine cells in row-major order over a 3x3 grid. Each cell is either empty
//! or holds a value in `1..=9`, and every value appears at most once.
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Side
//!
//! The agent places odd values, the environment places even values.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Smallest placeable value.
pub const MIN_VALUE: u8 = 1;

/// Largest placeable value.
pub const MAX_VALUE: u8 = 9;

/// The two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The learning agent. Owns the odd values.
    Agent,
    /// The random opponent. Owns the even values.
    Environment,
}

impl Side {
    /// The side that owns `value` by parity.
    #[must_use]
    pub const fn owner_of(value: u8) -> Self {
        if value % 2 == 1 {
            Side::Agent
        } else {
            Side::Environment
        }
    }

    /// Check whether this side may place `value`.
    #[must_use]
    pub const fn owns(self, value: u8) -> bool {
        matches!(
            (self, value % 2),
            (Side::Agent, 1) | (Side::Environment, 0)
        )
    }

    /// All values owned by this side, ascending.
    pub fn values(self) -> impl Iterator<Item = u8> {
        (MIN_VALUE..=MAX_VALUE).filter(move |&v| self.owns(v))
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Agent => Side::Environment,
            Side::Environment => Side::Agent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Agent => write!(f, "Agent"),
            Side::Environment => write!(f, "Environment"),
        }
    }
}

/// A 3x3 numeric tic-tac-toe board.
///
/// `Board` is a small `Copy` value. Transitions return a new board rather
/// than mutating a shared one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Option<u8>; 9]", into = "[Option<u8>; 9]")]
pub struct Board {
    cells: [Option<u8>; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from raw cells.
    ///
    /// Fails if a value lies outside `1..=9` or appears more than once.
    pub fn from_cells(cells: [Option<u8>; CELL_COUNT]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT + 1];

        for (position, cell) in cells.iter().enumerate() {
            let Some(value) = *cell else { continue };

            if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                return Err(BoardError::ValueOutOfRange { position, value });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateValue { value });
            }
            seen[value as usize] = true;
        }

        Ok(Self { cells })
    }

    /// Get the raw cells.
    #[must_use]
    pub const fn cells(&self) -> &[Option<u8>; CELL_COUNT] {
        &self.cells
    }

    /// Get the value at a position, or `None` if empty or out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.cells.get(position).copied().flatten()
    }

    /// Check if a position is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, position: usize) -> bool {
        matches!(self.cells.get(position), Some(None))
    }

    /// Check if `value` has already been placed.
    #[must_use]
    pub fn contains_value(&self, value: u8) -> bool {
        self.cells.contains(&Some(value))
    }

    /// Iterate over placed values in board order.
    pub fn used_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Decode a float board where NaN marks an empty cell.
    ///
    /// This is the layout Python learners exchange with the environment.
    pub fn from_nan_encoded(cells: &[f64]) -> Result<Self, BoardError> {
        if cells.len() != CELL_COUNT {
            return Err(BoardError::WrongLength { len: cells.len() });
        }

        let mut decoded = [None; CELL_COUNT];
        for (position, &raw) in cells.iter().enumerate() {
            if raw.is_nan() {
                continue;
            }
            let in_range = raw >= f64::from(MIN_VALUE) && raw <= f64::from(MAX_VALUE);
            if !in_range || raw.fract() != 0.0 {
                return Err(BoardError::InvalidCell { position, raw });
            }
            decoded[position] = Some(raw as u8);
        }

        Self::from_cells(decoded)
    }

    /// Encode as floats with NaN for empty cells.
    #[must_use]
    pub fn to_nan_encoded(&self) -> [f64; CELL_COUNT] {
        self.cells.map(|c| c.map_or(f64::NAN, f64::from))
    }

    /// Write a value without any legality check.
    ///
    /// Only `rules::state_transition` calls this, after validation.
    pub(crate) fn place_unchecked(&mut self, position: usize, value: u8) {
        self.cells[position] = Some(value);
    }
}

impl TryFrom<[Option<u8>; CELL_COUNT]> for Board {
    type Error = BoardError;

    fn try_from(cells: [Option<u8>; CELL_COUNT]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl From<Board> for [Option<u8>; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();

        assert_eq!(board, Board::default());
        assert_eq!(board.filled_count(), 0);
        assert!(!board.is_full());
        assert!((0..CELL_COUNT).all(|p| board.is_empty_at(p)));
    }

    #[test]
    fn test_from_cells_valid() {
        let board = Board::from_cells([Some(1), Some(2), None, None, Some(9), None, None, None, None])
            .unwrap();

        assert_eq!(board.get(0), Some(1));
        assert_eq!(board.get(2), None);
        assert_eq!(board.get(4), Some(9));
        assert_eq!(board.filled_count(), 3);
        assert!(board.contains_value(9));
        assert!(!board.contains_value(3));
        assert_eq!(board.used_values().collect::<Vec<_>>(), vec![1, 2, 9]);
    }

    #[test]
    fn test_from_cells_rejects_out_of_range() {
        let err = Board::from_cells([Some(10), None, None, None, None, None, None, None, None])
            .unwrap_err();
        assert_eq!(err, BoardError::ValueOutOfRange { position: 0, value: 10 });

        let err = Board::from_cells([None, None, None, Some(0), None, None, None, None, None])
            .unwrap_err();
        assert_eq!(err, BoardError::ValueOutOfRange { position: 3, value: 0 });
    }

    #[test]
    fn test_from_cells_rejects_duplicates() {
        let err = Board::from_cells([Some(4), None, None, None, Some(4), None, None, None, None])
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateValue { value: 4 });
    }

    #[test]
    fn test_out_of_range_position_is_not_empty() {
        let board = Board::empty();
        assert!(!board.is_empty_at(9));
        assert_eq!(board.get(42), None);
    }

    #[test]
    fn test_nan_encoding() {
        let nan = f64::NAN;
        let raw = [1.0, 2.0, 3.0, 4.0, nan, nan, nan, nan, nan];
        let board = Board::from_nan_encoded(&raw).unwrap();

        assert_eq!(board.get(3), Some(4));
        assert!(board.is_empty_at(4));

        let encoded = board.to_nan_encoded();
        assert_eq!(&encoded[..4], &[1.0, 2.0, 3.0, 4.0]);
        assert!(encoded[4..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_nan_encoding_rejects_bad_input() {
        let nan = f64::NAN;

        assert_eq!(
            Board::from_nan_encoded(&[nan; 3]).unwrap_err(),
            BoardError::WrongLength { len: 3 }
        );
        assert!(matches!(
            Board::from_nan_encoded(&[2.5, nan, nan, nan, nan, nan, nan, nan, nan]),
            Err(BoardError::InvalidCell { position: 0, .. })
        ));
        assert!(matches!(
            Board::from_nan_encoded(&[nan, 0.0, nan, nan, nan, nan, nan, nan, nan]),
            Err(BoardError::InvalidCell { position: 1, .. })
        ));
        assert_eq!(
            Board::from_nan_encoded(&[3.0, 3.0, nan, nan, nan, nan, nan, nan, nan]).unwrap_err(),
            BoardError::DuplicateValue { value: 3 }
        );
    }

    #[test]
    fn test_side_parity() {
        assert_eq!(Side::Agent.values().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
        assert_eq!(Side::Environment.values().collect::<Vec<_>>(), vec![2, 4, 6, 8]);

        assert!(Side::Agent.owns(7));
        assert!(!Side::Agent.owns(8));
        assert_eq!(Side::owner_of(8), Side::Environment);
        assert_eq!(Side::Agent.opponent(), Side::Environment);
        assert_eq!(format!("{}", Side::Environment), "Environment");
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::from_cells([Some(5), None, None, None, Some(6), None, None, None, None])
            .unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_invalid_board() {
        let json = "[1,1,null,null,null,null,null,null,null]";
        assert!(serde_json::from_str::<Board>(json).is_err());
    }
}
