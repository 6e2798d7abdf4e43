//! Move selectors - anything that can pick a cell for a board
//!
//! Used by the `compare` command to pit each search strategy against a
//! baseline opponent.

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use tracing::trace;

use crate::{
    Result,
    search::{CellCosts, SearchEngine},
    tictactoe::{BoardState, GameOutcome, Player},
};

/// Unified interface for move selection
pub trait MoveSelector {
    /// Pick an empty position (0-8) on `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no empty cell is available.
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Name used in comparison tables
    fn name(&self) -> &str;
}

/// Search engine wrapped as a selector
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    name: String,
    engine: SearchEngine,
}

impl SearchPlayer {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            name: engine.strategy().short_name().to_string(),
            engine,
        }
    }
}

impl MoveSelector for SearchPlayer {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        self.engine.select_move(state)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random baseline
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a new random player
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random player with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomPlayer {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        let moves: Vec<usize> = state.empty_positions().collect();
        if moves.is_empty() {
            return Err(crate::Error::ExhaustedBoard);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Play one game to completion, X moving first.
///
/// # Errors
///
/// Returns error if a selector fails or picks an occupied cell.
pub fn play_match(x: &mut dyn MoveSelector, o: &mut dyn MoveSelector) -> Result<GameOutcome> {
    let mut board = BoardState::new();
    let mut to_move = Player::X;

    loop {
        let position = match to_move {
            Player::X => x.select_move(&board)?,
            Player::O => o.select_move(&board)?,
        };
        board = board.place(position, to_move)?;
        trace!(player = %to_move, position, "match move");

        if board.has_won(to_move) {
            return Ok(GameOutcome::Win(to_move));
        }
        if board.is_full() {
            return Ok(GameOutcome::Draw);
        }
        to_move = to_move.opponent();
    }
}

/// Search player for `mark` with the given costs, one per strategy
pub fn search_players(mark: Player, costs: CellCosts) -> Vec<SearchPlayer> {
    crate::search::Strategy::ALL
        .into_iter()
        .map(|strategy| SearchPlayer::new(SearchEngine::new(strategy, mark, costs)))
        .collect()
}
