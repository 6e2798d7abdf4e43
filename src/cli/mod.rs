//! CLI infrastructure for the grid search toolkit
//!
//! This module provides the command-line interface for asking the engine for
//! a single move, playing an interactive game and comparing strategies.

pub mod commands;
pub mod output;
