//! Test suite for the move search engine
//! Covers the documented scenarios and sweeps random boards for invariants

use grid_search::{
    BoardState, Cell, CellCosts, Error, MoveKind, Player, SearchEngine, Strategy, select_move,
    tictactoe::{LineAnalyzer, WINNING_LINES},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn board(s: &str) -> BoardState {
    BoardState::from_string(s).unwrap()
}

fn random_board(rng: &mut StdRng) -> BoardState {
    let mut cells = [Cell::Empty; 9];
    for cell in &mut cells {
        *cell = match rng.random_range(0..3) {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        };
    }
    BoardState::from_cells(cells)
}

/// Random boards with at least one empty cell
fn random_open_boards(seed: u64, count: usize) -> Vec<BoardState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::with_capacity(count);
    while boards.len() < count {
        let candidate = random_board(&mut rng);
        if !candidate.is_full() {
            boards.push(candidate);
        }
    }
    boards
}

mod scenarios {
    use super::*;

    #[test]
    fn completes_top_row_under_every_strategy() {
        let state = board("OO. XX. ...");
        for strategy in Strategy::ALL {
            let pos = select_move(&state, strategy, Player::O, &CellCosts::default()).unwrap();
            assert_eq!(pos, 2, "{strategy} should complete row 0");
        }
    }

    #[test]
    fn two_step_win_through_the_anti_diagonal() {
        // O X O
        // X . X
        // . O X
        // Neither 4 nor 6 wins alone; together they complete 2-4-6.
        let state = board("OXO X.X .OX");
        for strategy in Strategy::ALL {
            let pos = select_move(&state, strategy, Player::O, &CellCosts::default()).unwrap();
            assert!(pos == 4 || pos == 6, "{strategy} returned {pos}");
        }

        let costs = CellCosts::default();
        assert_eq!(select_move(&state, Strategy::Fifo, Player::O, &costs).unwrap(), 6);
        assert_eq!(select_move(&state, Strategy::Lifo, Player::O, &costs).unwrap(), 4);
        assert_eq!(
            select_move(&state, Strategy::WeightedPriority, Player::O, &costs).unwrap(),
            6
        );
    }

    #[test]
    fn strategies_diverge_on_empty_board() {
        let costs = CellCosts::default();
        let empty = BoardState::new();
        assert_eq!(select_move(&empty, Strategy::Fifo, Player::O, &costs).unwrap(), 2);
        assert_eq!(select_move(&empty, Strategy::Lifo, Player::O, &costs).unwrap(), 6);
        assert_eq!(
            select_move(&empty, Strategy::WeightedPriority, Player::O, &costs).unwrap(),
            5
        );
    }

    #[test]
    fn fallback_when_every_line_is_blocked() {
        let state = board("X...X...X");
        for strategy in Strategy::ALL {
            let engine = SearchEngine::new(strategy, Player::O, CellCosts::default());
            let outcome = engine.search(&state).unwrap();
            assert_eq!(outcome.kind, MoveKind::Fallback, "{strategy}");
            assert_eq!(outcome.position, state.first_empty().unwrap(), "{strategy}");
        }
    }

    #[test]
    fn engine_plays_for_x_as_well() {
        let state = board("X.X OO. ...");
        for strategy in Strategy::ALL {
            let pos = select_move(&state, strategy, Player::X, &CellCosts::default()).unwrap();
            assert_eq!(pos, 1, "{strategy}");
        }
    }
}

mod preconditions {
    use super::*;

    #[test]
    fn full_board_is_exhausted_for_every_strategy() {
        let full = board("XOXXOOOXX");
        for strategy in Strategy::ALL {
            let result = select_move(&full, strategy, Player::O, &CellCosts::default());
            assert!(matches!(result, Err(Error::ExhaustedBoard)), "{strategy}");
        }
    }

    #[test]
    fn full_board_with_a_winner_is_still_exhausted() {
        let full = board("OOOXXOXOX");
        assert!(matches!(
            select_move(&full, Strategy::Lifo, Player::X, &CellCosts::default()),
            Err(Error::ExhaustedBoard)
        ));
    }

    #[test]
    fn unknown_strategy_selector_is_invalid() {
        assert!(matches!(
            "greedy".parse::<Strategy>(),
            Err(Error::InvalidStrategy { .. })
        ));
    }
}

mod properties {
    use super::*;

    #[test]
    fn single_empty_winning_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;
        while checked < 200 {
            let line = WINNING_LINES[rng.random_range(0..WINNING_LINES.len())];
            let hole = line[rng.random_range(0..3)];

            let mut cells = [Cell::Empty; 9];
            for (pos, cell) in cells.iter_mut().enumerate() {
                *cell = if line.contains(&pos) {
                    Cell::O
                } else if rng.random_bool(0.5) {
                    Cell::X
                } else {
                    Cell::O
                };
            }
            cells[hole] = Cell::Empty;
            let state = BoardState::from_cells(cells);

            for strategy in Strategy::ALL {
                let pos =
                    select_move(&state, strategy, Player::O, &CellCosts::default()).unwrap();
                assert_eq!(pos, hole, "{strategy} on {}", state.encode());
            }
            checked += 1;
        }
    }

    #[test]
    fn returned_cell_was_empty_in_the_input() {
        for state in random_open_boards(3, 300) {
            for strategy in Strategy::ALL {
                for mark in [Player::X, Player::O] {
                    let pos = select_move(&state, strategy, mark, &CellCosts::default()).unwrap();
                    assert!(state.is_empty(pos), "{strategy} {mark} on {}", state.encode());
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic() {
        for state in random_open_boards(5, 100) {
            for strategy in Strategy::ALL {
                let engine = SearchEngine::new(strategy, Player::O, CellCosts::default());
                assert_eq!(engine.search(&state).unwrap(), engine.search(&state).unwrap());
            }
        }
    }

    #[test]
    fn equal_costs_match_breadth_first() {
        for cost in [0, 1, 3, 7] {
            let costs = CellCosts::uniform(cost);
            for state in random_open_boards(17 + u64::from(cost), 150) {
                let fifo = SearchEngine::new(Strategy::Fifo, Player::O, costs);
                let weighted = SearchEngine::new(Strategy::WeightedPriority, Player::O, costs);
                assert_eq!(
                    weighted.search(&state).unwrap(),
                    fifo.search(&state).unwrap(),
                    "cost {cost} on {}",
                    state.encode()
                );
            }
        }
    }

    #[test]
    fn blocked_boards_fall_back_to_first_empty() {
        let mut seen = 0;
        for state in random_open_boards(23, 2000) {
            if !LineAnalyzer::all_lines_blocked(&state.cells, Player::O) {
                continue;
            }
            seen += 1;
            for strategy in Strategy::ALL {
                let outcome = SearchEngine::new(strategy, Player::O, CellCosts::default())
                    .search(&state)
                    .unwrap();
                assert_eq!(outcome.kind, MoveKind::Fallback);
                assert_eq!(Some(outcome.position), state.first_empty());
            }
        }
        assert!(seen > 0, "sweep should include blocked boards");
    }

    #[test]
    fn open_line_always_yields_a_winning_move() {
        // A line with no opponent mark can be completed by placements alone,
        // so the exhaustive search must find some win.
        for state in random_open_boards(29, 300) {
            if LineAnalyzer::all_lines_blocked(&state.cells, Player::O) {
                continue;
            }
            for strategy in Strategy::ALL {
                let outcome = SearchEngine::new(strategy, Player::O, CellCosts::default())
                    .search(&state)
                    .unwrap();
                assert_eq!(
                    outcome.kind,
                    MoveKind::Winning,
                    "{strategy} on {}",
                    state.encode()
                );
            }
        }
    }
}
