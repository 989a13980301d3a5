//! Win/tie detection, legal-move enumeration, and the placement transition.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::core::{Board, Move, MoveError, Side, CELL_COUNT, MAX_VALUE, MIN_VALUE};

/// Sum a line must reach to win.
pub const MAGIC_SUM: u8 = 15;

/// The 8 lines of the grid: 2 diagonals, 3 rows, 3 columns.
pub const LINES: [[usize; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
];

/// Board status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Some line sums to 15.
    Win,
    /// Board is full and no line sums to 15.
    Tie,
    /// Game continues.
    Resume,
}

impl Status {
    /// Win and Tie are absorbing.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Resume)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Win => "Win",
            Status::Tie => "Tie",
            Status::Resume => "Resume",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result label of a step: a status tagged with the side that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The agent completed a line.
    Agent,
    /// The environment completed a line.
    Environment,
    /// The board filled with no line.
    Tie,
    /// Game continues.
    Resume,
}

impl GameResult {
    /// Label the status reached after `actor` moved.
    #[must_use]
    pub const fn from_status(status: Status, actor: Side) -> Self {
        match (status, actor) {
            (Status::Win, Side::Agent) => GameResult::Agent,
            (Status::Win, Side::Environment) => GameResult::Environment,
            (Status::Tie, _) => GameResult::Tie,
            (Status::Resume, _) => GameResult::Resume,
        }
    }

    /// The underlying board status.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            GameResult::Agent | GameResult::Environment => Status::Win,
            GameResult::Tie => Status::Tie,
            GameResult::Resume => Status::Resume,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            GameResult::Agent => Some(Side::Agent),
            GameResult::Environment => Some(Side::Environment),
            GameResult::Tie | GameResult::Resume => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.status().is_terminal()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::Agent => "Agent",
            GameResult::Environment => "Environment",
            GameResult::Tie => "Tie",
            GameResult::Resume => "Resume",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of the filled cells on a line. Empty cells count as 0.
#[must_use]
pub fn line_sum(board: &Board, line: &[usize; 3]) -> u8 {
    line.iter().filter_map(|&p| board.get(p)).sum()
}

/// True iff any line's filled cells sum to exactly 15.
///
/// Partially filled lines count: `[6, 9, _]` on a row is a win.
#[must_use]
pub fn is_winning(board: &Board) -> bool {
    LINES.iter().any(|line| line_sum(board, line) == MAGIC_SUM)
}

/// Terminal check. A win takes precedence over a full board.
#[must_use]
pub fn is_terminal(board: &Board) -> (bool, Status) {
    let status = if is_winning(board) {
        Status::Win
    } else if board.is_full() {
        Status::Tie
    } else {
        Status::Resume
    };
    (status.is_terminal(), status)
}

/// Empty positions, ascending.
#[must_use]
pub fn allowed_positions(board: &Board) -> SmallVec<[usize; 9]> {
    (0..CELL_COUNT).filter(|&p| board.is_empty_at(p)).collect()
}

/// Unused values split by parity: (agent odd values, environment even values).
#[must_use]
pub fn allowed_values(board: &Board) -> (SmallVec<[u8; 5]>, SmallVec<[u8; 4]>) {
    let unused = |side: Side| side.values().filter(move |&v| !board.contains_value(v));
    (unused(Side::Agent).collect(), unused(Side::Environment).collect())
}

/// All legal (position, value) pairs for each side, position-major.
#[must_use]
pub fn action_space(board: &Board) -> (Vec<Move>, Vec<Move>) {
    let positions = allowed_positions(board);
    let (agent_values, env_values) = allowed_values(board);

    let product = |values: &[u8]| -> Vec<Move> {
        positions
            .iter()
            .flat_map(|&p| values.iter().map(move |&v| Move::new(p, v)))
            .collect()
    };

    (product(agent_values.as_slice()), product(env_values.as_slice()))
}

/// Legal actions for one side.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let (agent, env) = action_space(board);
    match side {
        Side::Agent => agent,
        Side::Environment => env,
    }
}

/// Check that `mv` can be placed on `board`, ignoring side.
pub fn validate_move(board: &Board, mv: Move) -> Result<(), MoveError> {
    if mv.position >= CELL_COUNT {
        return Err(MoveError::PositionOutOfRange {
            position: mv.position,
        });
    }
    if !(MIN_VALUE..=MAX_VALUE).contains(&mv.value) {
        return Err(MoveError::ValueOutOfRange { value: mv.value });
    }
    if let Some(occupant) = board.get(mv.position) {
        return Err(MoveError::PositionOccupied {
            position: mv.position,
            occupant,
        });
    }
    if board.contains_value(mv.value) {
        return Err(MoveError::ValueUsed { value: mv.value });
    }
    Ok(())
}

/// Check that `side` may make `mv` on `board`.
pub fn validate_move_for(board: &Board, side: Side, mv: Move) -> Result<(), MoveError> {
    validate_move(board, mv)?;
    if !side.owns(mv.value) {
        return Err(MoveError::WrongParity {
            side,
            value: mv.value,
        });
    }
    Ok(())
}

/// Place `mv` and return the new board. The input board is untouched.
#[instrument(level = "trace", skip(board))]
pub fn state_transition(board: Board, mv: Move) -> Result<Board, MoveError> {
    validate_move(&board, mv)?;
    let mut next = board;
    next.place_unchecked(mv.position, mv.value);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [Option<u8>; 9]) -> Board {
        Board::from_cells(cells).unwrap()
    }

    #[test]
    fn test_empty_board_is_not_winning() {
        assert!(!is_winning(&Board::empty()));
        assert_eq!(is_terminal(&Board::empty()), (false, Status::Resume));
    }

    #[test]
    fn test_is_winning_each_line() {
        for line in LINES {
            let mut cells = [None; 9];
            cells[line[0]] = Some(2);
            cells[line[1]] = Some(9);
            cells[line[2]] = Some(4);
            assert!(is_winning(&board(cells)), "line {:?} should win", line);
        }
    }

    #[test]
    fn test_partial_line_counts() {
        // Row {0,1,2} = 6 + 9 with one empty cell
        let b = board([Some(6), Some(9), None, None, None, None, None, None, None]);
        assert!(is_winning(&b));
    }

    #[test]
    fn test_sum_over_fifteen_is_not_winning() {
        let b = board([Some(9), Some(8), Some(7), None, None, None, None, None, None]);
        assert!(!is_winning(&b));
    }

    #[test]
    fn test_example_board_not_winning() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        assert!(!is_winning(&b));
    }

    #[test]
    fn test_terminal_tie() {
        let b = board([
            Some(1), Some(2), Some(3),
            Some(4), Some(5), Some(6),
            Some(7), Some(8), Some(9),
        ]);
        // 1+5+9 = 15 on the main diagonal
        assert_eq!(is_terminal(&b), (true, Status::Win));

        let b = board([
            Some(1), Some(2), Some(3),
            Some(4), Some(5), Some(7),
            Some(6), Some(9), Some(8),
        ]);
        assert!(!is_winning(&b));
        assert_eq!(is_terminal(&b), (true, Status::Tie));
    }

    #[test]
    fn test_win_takes_precedence_over_empty_cells() {
        let b = board([Some(5), None, None, None, Some(6), None, None, None, Some(4)]);
        assert_eq!(is_terminal(&b), (true, Status::Win));
    }

    #[test]
    fn test_allowed_positions() {
        let b = board([Some(1), None, Some(2), None, None, None, None, Some(9), None]);
        assert_eq!(allowed_positions(&b).as_slice(), &[1, 3, 4, 5, 6, 8]);
        assert_eq!(allowed_positions(&Board::empty()).as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_allowed_values() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        let (agent, env) = allowed_values(&b);
        assert_eq!(agent.as_slice(), &[5, 7, 9]);
        assert_eq!(env.as_slice(), &[6, 8]);
    }

    #[test]
    fn test_action_space_ordering() {
        let b = board([Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, None, Some(8)]);
        let (agent, env) = action_space(&b);

        assert_eq!(
            agent,
            vec![Move::new(6, 7), Move::new(6, 9), Move::new(7, 7), Move::new(7, 9)]
        );
        assert!(env.is_empty());
    }

    #[test]
    fn test_action_space_sizes_on_empty_board() {
        let (agent, env) = action_space(&Board::empty());
        assert_eq!(agent.len(), 9 * 5);
        assert_eq!(env.len(), 9 * 4);
        assert_eq!(agent[0], Move::new(0, 1));
        assert_eq!(env[env.len() - 1], Move::new(8, 8));
        assert_eq!(legal_moves(&Board::empty(), Side::Environment), env);
    }

    #[test]
    fn test_state_transition() {
        let b = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
        let next = state_transition(b, Move::new(7, 9)).unwrap();

        assert_eq!(
            next.cells(),
            &[Some(1), Some(2), Some(3), Some(4), None, None, None, Some(9), None]
        );
        // Row {6,7,8} sums to 9
        assert!(!is_winning(&next));
        // Input is unchanged
        assert_eq!(b.get(7), None);
    }

    #[test]
    fn test_state_transition_rejects_illegal_moves() {
        let b = board([Some(1), None, None, None, None, None, None, None, None]);

        assert_eq!(
            state_transition(b, Move::new(0, 3)),
            Err(MoveError::PositionOccupied { position: 0, occupant: 1 })
        );
        assert_eq!(
            state_transition(b, Move::new(1, 1)),
            Err(MoveError::ValueUsed { value: 1 })
        );
        assert_eq!(
            state_transition(b, Move::new(9, 3)),
            Err(MoveError::PositionOutOfRange { position: 9 })
        );
        assert_eq!(
            state_transition(b, Move::new(2, 10)),
            Err(MoveError::ValueOutOfRange { value: 10 })
        );
    }

    #[test]
    fn test_validate_move_for_parity() {
        let b = Board::empty();
        assert!(validate_move_for(&b, Side::Agent, Move::new(0, 5)).is_ok());
        assert_eq!(
            validate_move_for(&b, Side::Agent, Move::new(0, 4)),
            Err(MoveError::WrongParity { side: Side::Agent, value: 4 })
        );
        assert_eq!(
            validate_move_for(&b, Side::Environment, Move::new(0, 5)),
            Err(MoveError::WrongParity { side: Side::Environment, value: 5 })
        );
    }

    #[test]
    fn test_game_result_labels() {
        assert_eq!(GameResult::from_status(Status::Win, Side::Agent), GameResult::Agent);
        assert_eq!(
            GameResult::from_status(Status::Win, Side::Environment),
            GameResult::Environment
        );
        assert_eq!(GameResult::from_status(Status::Tie, Side::Agent), GameResult::Tie);
        assert_eq!(GameResult::from_status(Status::Resume, Side::Environment), GameResult::Resume);

        assert_eq!(GameResult::Environment.to_string(), "Environment");
        assert_eq!(GameResult::Agent.side(), Some(Side::Agent));
        assert_eq!(GameResult::Tie.side(), None);
        assert_eq!(GameResult::Agent.status(), Status::Win);
        assert!(!GameResult::Resume.is_terminal());
    }
}
