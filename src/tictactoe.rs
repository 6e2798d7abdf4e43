//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, CELL_COUNT, Cell, Player};
pub use game::{Game, GameMode, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
