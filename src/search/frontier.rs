//! Frontier containers, one per search strategy.
//!
//! The engine is generic over [`Frontier`]; the containers differ only in the
//! order in which pushed nodes come back out.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use crate::tictactoe::BoardState;

/// A state waiting to be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: BoardState,
    /// Cell marked to reach this state; `None` for the root
    pub last_move: Option<usize>,
    /// Sum of cell costs along the path from the root
    pub path_cost: u64,
    pub depth: usize,
}

impl SearchNode {
    pub fn root(state: BoardState) -> Self {
        Self {
            state,
            last_move: None,
            path_cost: 0,
            depth: 0,
        }
    }
}

/// Ordering discipline for nodes awaiting expansion
pub trait Frontier {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
    fn len(&self) -> usize;
}

/// First-in first-out queue (breadth-first)
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<SearchNode>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node: SearchNode) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out stack (depth-first)
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<SearchNode>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node: SearchNode) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap entry keyed on (path cost, insertion sequence)
#[derive(Debug)]
struct Prioritized {
    key: (u64, u64),
    node: SearchNode,
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue on accumulated path cost. Equal costs pop in insertion
/// order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Prioritized>>,
    next_seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Prioritized {
            key: (node.path_cost, seq),
            node,
        }));
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
