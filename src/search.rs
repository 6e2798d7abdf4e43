//! Move search engine
//!
//! Given a board snapshot, the engine explores states reachable by placing
//! only its own mark and returns the first cell whose placement completes a
//! winning line. Exploration order is chosen by [`Strategy`]:
//! - breadth-first (queue)
//! - depth-first (stack)
//! - uniform-cost (min-heap on accumulated [`CellCosts`])

pub mod costs;
pub mod engine;
pub mod frontier;
pub mod strategy;

pub use costs::CellCosts;
pub use engine::{MoveKind, SearchEngine, SearchOutcome, select_move};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, SearchNode};
pub use strategy::Strategy;
