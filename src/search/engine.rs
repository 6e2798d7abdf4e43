//! Move search over computer-only placements

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{
    costs::CellCosts,
    frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, SearchNode},
    strategy::Strategy,
};
use crate::{
    Result,
    tictactoe::{BoardState, Player},
};

/// Why a move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Placing the mark completed a winning line in an explored state
    Winning,
    /// The frontier emptied without a win; first empty cell of the root
    Fallback,
}

/// Result of one search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub position: usize,
    pub kind: MoveKind,
    /// States taken off the frontier and expanded
    pub expanded: usize,
    /// Successor states generated
    pub generated: usize,
}

/// Search engine with a fixed strategy, mark and cost table.
///
/// Every call is independent: the frontier and visited set live only for the
/// duration of [`SearchEngine::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    strategy: Strategy,
    mark: Player,
    costs: CellCosts,
}

impl SearchEngine {
    pub fn new(strategy: Strategy, mark: Player, costs: CellCosts) -> Self {
        Self {
            strategy,
            mark,
            costs,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Pick a cell for this engine's mark on `state`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ExhaustedBoard`] if `state` has no empty cell.
    pub fn search(&self, state: &BoardState) -> Result<SearchOutcome> {
        let fallback = state.first_empty().ok_or(crate::Error::ExhaustedBoard)?;

        let outcome = match self.strategy {
            Strategy::Fifo => self.run(FifoFrontier::default(), state, fallback),
            Strategy::Lifo => self.run(LifoFrontier::default(), state, fallback),
            // Equal costs pop in exactly breadth-first order.
            Strategy::WeightedPriority if self.costs.is_uniform() => {
                self.run(FifoFrontier::default(), state, fallback)
            }
            Strategy::WeightedPriority => self.run(PriorityFrontier::default(), state, fallback),
        };

        debug!(
            strategy = %self.strategy,
            mark = %self.mark,
            board = %state.encode(),
            position = outcome.position,
            kind = ?outcome.kind,
            expanded = outcome.expanded,
            generated = outcome.generated,
            "search finished"
        );
        Ok(outcome)
    }

    /// Index-only convenience wrapper around [`SearchEngine::search`]
    pub fn select_move(&self, state: &BoardState) -> Result<usize> {
        self.search(state).map(|outcome| outcome.position)
    }

    fn run<F: Frontier>(
        &self,
        mut frontier: F,
        root: &BoardState,
        fallback: usize,
    ) -> SearchOutcome {
        let mut visited: HashSet<BoardState> = HashSet::new();
        let mut expanded = 0;
        let mut generated = 0;

        frontier.push(SearchNode::root(*root));

        while let Some(node) = frontier.pop() {
            if !visited.insert(node.state) {
                continue;
            }
            expanded += 1;
            trace!(
                state = %node.state.encode(),
                depth = node.depth,
                path_cost = node.path_cost,
                pending = frontier.len(),
                "expanding"
            );

            for pos in node.state.empty_positions() {
                let successor = node.state.with_mark(pos, self.mark);
                generated += 1;

                if successor.has_won(self.mark) {
                    return SearchOutcome {
                        position: pos,
                        kind: MoveKind::Winning,
                        expanded,
                        generated,
                    };
                }

                frontier.push(SearchNode {
                    state: successor,
                    last_move: Some(pos),
                    path_cost: node.path_cost + u64::from(self.costs.get(pos)),
                    depth: node.depth + 1,
                });
            }
        }

        SearchOutcome {
            position: fallback,
            kind: MoveKind::Fallback,
            expanded,
            generated,
        }
    }
}

/// Choose a cell for `mark` on `state` using `strategy`.
///
/// Returns the index of the first winning placement found in the strategy's
/// exploration order, or the first empty cell of `state` if no sequence of
/// `mark`-only placements wins.
///
/// # Errors
///
/// Returns [`crate::Error::ExhaustedBoard`] if `state` is full.
///
/// # Examples
///
/// ```
/// use grid_search::{BoardState, CellCosts, Player, Strategy, select_move};
///
/// let board = BoardState::from_string("OO.XX....").unwrap();
/// let pos = select_move(&board, Strategy::Fifo, Player::O, &CellCosts::default()).unwrap();
/// assert_eq!(pos, 2);
/// ```
pub fn select_move(
    state: &BoardState,
    strategy: Strategy,
    mark: Player,
    costs: &CellCosts,
) -> Result<usize> {
    SearchEngine::new(strategy, mark, *costs).select_move(state)
}
