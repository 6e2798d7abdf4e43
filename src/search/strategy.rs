//! Frontier ordering strategies

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the search frontier is ordered.
///
/// Serialized as its [`Display`](fmt::Display) name and deserialized through
/// [`FromStr`], so config files accept the same selectors as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Strategy {
    /// Breadth-first: queue, shallowest states first
    #[default]
    Fifo,
    /// Depth-first: stack, deepest states first
    Lifo,
    /// Uniform-cost: cheapest accumulated cell cost first
    WeightedPriority,
}

impl Strategy {
    /// All strategies in display order
    pub const ALL: [Strategy; 3] = [Strategy::Fifo, Strategy::Lifo, Strategy::WeightedPriority];

    /// Short name matching the traversal it performs
    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::Fifo => "BFS",
            Strategy::Lifo => "DFS",
            Strategy::WeightedPriority => "UCS",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Fifo => "fifo",
            Strategy::Lifo => "lifo",
            Strategy::WeightedPriority => "weighted-priority",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "bfs" | "breadth-first" => Ok(Strategy::Fifo),
            "lifo" | "dfs" | "depth-first" => Ok(Strategy::Lifo),
            "weighted-priority" | "weighted_priority" | "weighted" | "ucs" | "uniform-cost" => {
                Ok(Strategy::WeightedPriority)
            }
            _ => Err(crate::Error::InvalidStrategy {
                input: s.to_string(),
                expected: "fifo/bfs, lifo/dfs, weighted-priority/ucs".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Strategy> for String {
    fn from(value: Strategy) -> Self {
        value.to_string()
    }
}
