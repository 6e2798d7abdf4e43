//! Tic-Tac-Toe move search
//!
//! This crate provides:
//! - A 3x3 board model with win, draw and first-empty queries
//! - A move search engine with breadth-first, depth-first and uniform-cost
//!   frontier orderings sharing one expansion and dedup core
//! - A turn manager for human-vs-computer and two-player games
//! - Move selectors and a CLI for playing and comparing strategies

pub mod cli;
pub mod config;
pub mod error;
pub mod players;
pub mod search;
pub mod tictactoe;

pub use config::SearchConfig;
pub use error::{Error, Result};
pub use search::{CellCosts, MoveKind, SearchEngine, SearchOutcome, Strategy, select_move};
pub use tictactoe::{BoardState, Cell, Game, GameMode, GameOutcome, Player};
