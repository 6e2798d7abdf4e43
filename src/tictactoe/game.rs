//! Turn management around the search engine

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::board::{BoardState, Player};
use crate::search::{CellCosts, SearchEngine, Strategy};

/// The human always plays X and moves first
pub const HUMAN: Player = Player::X;
/// The computer always plays O
pub const COMPUTER: Player = Player::O;

/// Who controls the O mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    VersusComputer { strategy: Strategy },
    TwoPlayer,
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress with its history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    mode: GameMode,
    board: BoardState,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty board with X to move
    pub fn new(mode: GameMode) -> Self {
        Game {
            mode,
            board: BoardState::new(),
            to_move: HUMAN,
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when the search engine should pick the next move
    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::VersusComputer { .. })
            && self.to_move == COMPUTER
            && !self.is_over()
    }

    /// Place the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// Returns error if the game is over or the position is off the board or
    /// already marked.
    pub fn play(&mut self, position: usize) -> Result<Option<GameOutcome>, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move;
        self.board = self.board.place(position, player)?;
        self.moves.push(Move { position, player });
        debug!(player = %player, position, board = %self.board.encode(), "move played");

        if self.board.has_won(player) {
            self.outcome = Some(GameOutcome::Win(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.to_move = player.opponent();
        }

        if let Some(outcome) = self.outcome {
            info!(?outcome, moves = self.moves.len(), "game over");
        }
        Ok(self.outcome)
    }

    /// Ask the search engine for the computer's move and play it.
    ///
    /// Returns the chosen position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotComputerTurn`] outside of a computer turn,
    /// or any error from the engine.
    pub fn computer_turn(&mut self, costs: &CellCosts) -> Result<usize, crate::Error> {
        let GameMode::VersusComputer { strategy } = self.mode else {
            return Err(crate::Error::NotComputerTurn);
        };
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if self.to_move != COMPUTER {
            return Err(crate::Error::NotComputerTurn);
        }

        let engine = SearchEngine::new(strategy, COMPUTER, *costs);
        let position = engine.select_move(&self.board)?;
        self.play(position)?;
        Ok(position)
    }
}
