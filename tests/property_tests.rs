//! Property tests over random boards and random play.

use numeric_tictactoe::core::{Board, EnvConfig, GameRng, Move, Side};
use numeric_tictactoe::env::GameEngine;
use numeric_tictactoe::rules::{self, GameResult, Status};
use proptest::prelude::*;

/// Board reached by `plies` alternating uniform moves (agent first),
/// stopping early at a terminal board.
fn reachable_board(seed: u64, plies: usize) -> Board {
    let mut rng = GameRng::new(seed);
    let mut board = Board::empty();
    let mut side = Side::Agent;

    for _ in 0..plies {
        if rules::is_terminal(&board).0 {
            break;
        }
        let moves = rules::legal_moves(&board, side);
        let Some(&mv) = rng.choose(&moves) else { break };
        board = rules::state_transition(board, mv).unwrap();
        side = side.opponent();
    }
    board
}

/// Any placement of distinct values 1..=9 on any subset of cells.
fn arbitrary_board() -> impl Strategy<Value = Board> {
    (
        Just((1u8..=9).collect::<Vec<_>>()).prop_shuffle(),
        proptest::collection::vec(any::<bool>(), 9),
    )
        .prop_map(|(values, mask)| {
            let mut cells = [None; 9];
            for (i, cell) in cells.iter_mut().enumerate() {
                if mask[i] {
                    *cell = Some(values[i]);
                }
            }
            Board::from_cells(cells).unwrap()
        })
}

fn some_line_sums_to_15(board: &Board) -> bool {
    let at = |p: usize| board.get(p).unwrap_or(0);
    let rows = (0..3).any(|r| at(3 * r) + at(3 * r + 1) + at(3 * r + 2) == 15);
    let cols = (0..3).any(|c| at(c) + at(c + 3) + at(c + 6) == 15);
    let diags = at(0) + at(4) + at(8) == 15 || at(2) + at(4) + at(6) == 15;
    rows || cols || diags
}

proptest! {
    #[test]
    fn prop_is_winning_matches_line_sums(board in arbitrary_board()) {
        prop_assert_eq!(rules::is_winning(&board), some_line_sums_to_15(&board));
    }

    #[test]
    fn prop_positions_partition_cells(seed in any::<u64>(), plies in 0usize..=9) {
        let board = reachable_board(seed, plies);
        let empty = rules::allowed_positions(&board);

        for p in 0..9 {
            let is_empty = empty.contains(&p);
            prop_assert_ne!(is_empty, board.get(p).is_some());
        }
        prop_assert_eq!(empty.len() + board.filled_count(), 9);
        prop_assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_values_partition_range(seed in any::<u64>(), plies in 0usize..=9) {
        let board = reachable_board(seed, plies);
        let (agent, env) = rules::allowed_values(&board);

        let mut all: Vec<u8> = agent.iter().chain(env.iter()).copied().collect();
        all.extend(board.used_values());
        all.sort_unstable();

        prop_assert_eq!(all, (1u8..=9).collect::<Vec<_>>());
        prop_assert!(agent.iter().all(|v| v % 2 == 1));
        prop_assert!(env.iter().all(|v| v % 2 == 0));
    }

    #[test]
    fn prop_tie_iff_full_and_not_winning(board in arbitrary_board()) {
        let (terminal, status) = rules::is_terminal(&board);
        let expect_tie = rules::allowed_positions(&board).is_empty() && !rules::is_winning(&board);

        prop_assert_eq!(status == Status::Tie, expect_tie);
        prop_assert_eq!(terminal, status != Status::Resume);
    }

    #[test]
    fn prop_action_space_is_product(seed in any::<u64>(), plies in 0usize..=8) {
        let board = reachable_board(seed, plies);
        let positions = rules::allowed_positions(&board);
        let (agent_values, env_values) = rules::allowed_values(&board);
        let (agent, env) = rules::action_space(&board);

        prop_assert_eq!(agent.len(), positions.len() * agent_values.len());
        prop_assert_eq!(env.len(), positions.len() * env_values.len());

        let mut sorted = agent.clone();
        sorted.sort();
        prop_assert_eq!(&sorted, &agent);
        prop_assert!(agent.iter().all(|m| m.side() == Side::Agent && board.is_empty_at(m.position)));
    }

    #[test]
    fn prop_step_rewards_follow_schedule(seed in any::<u64>(), pick in any::<prop::sample::Index>()) {
        let mut engine = GameEngine::new(EnvConfig::default().with_seed(seed));
        let mut board = engine.reset();

        loop {
            let (agent_actions, _) = rules::action_space(&board);
            let mv: Move = agent_actions[pick.index(agent_actions.len())];
            let t = engine.step(board, mv).unwrap();

            let expected = match t.result {
                GameResult::Agent => 10,
                GameResult::Environment => -10,
                GameResult::Tie => 0,
                GameResult::Resume => -1,
            };
            prop_assert_eq!(t.reward, expected);
            prop_assert_eq!(t.terminal, t.result != GameResult::Resume);

            if t.result == GameResult::Agent {
                prop_assert!(t.environment_move.is_none());
            }
            if t.result == GameResult::Environment {
                prop_assert!(t.environment_move.is_some());
            }
            prop_assert_eq!(t.board.get(mv.position), Some(mv.value));

            board = t.board;
            if t.terminal {
                break;
            }
        }
    }
}
