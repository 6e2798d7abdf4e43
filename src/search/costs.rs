//! Per-cell cost table used by uniform-cost search

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::board::CELL_COUNT;

/// Static cost of marking each cell, aligned index-for-index with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct CellCosts([u32; CELL_COUNT]);

impl CellCosts {
    /// Cost table shipped with the game
    pub const DEFAULT: CellCosts = CellCosts([9, 10, 4, 1, 2, 13, 4, 2, 6]);

    pub const fn new(costs: [u32; CELL_COUNT]) -> Self {
        Self(costs)
    }

    /// Every cell costs `cost`
    pub const fn uniform(cost: u32) -> Self {
        Self([cost; CELL_COUNT])
    }

    /// Build a table from a slice, which must have exactly nine entries.
    pub fn from_slice(costs: &[u32]) -> crate::Result<Self> {
        let table: [u32; CELL_COUNT] = costs
            .try_into()
            .map_err(|_| crate::Error::InvalidCostTable { len: costs.len() })?;
        Ok(Self(table))
    }

    pub fn get(&self, pos: usize) -> u32 {
        self.0[pos]
    }

    /// True when every cell has the same cost. Uniform-cost search then
    /// visits states in breadth-first order.
    pub fn is_uniform(&self) -> bool {
        self.0.iter().all(|&c| c == self.0[0])
    }
}

impl Default for CellCosts {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Vec<u32>> for CellCosts {
    type Error = crate::Error;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        Self::from_slice(&value)
    }
}

impl From<CellCosts> for Vec<u32> {
    fn from(value: CellCosts) -> Self {
        value.0.to_vec()
    }
}

impl fmt::Display for CellCosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join(","))
    }
}

/// Parses a comma separated list such as `9,10,4,1,2,13,4,2,6`.
impl FromStr for CellCosts {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<u32>()
                    .map_err(|e| crate::Error::InvalidConfiguration {
                        message: format!("invalid cell cost '{}' in '{s}': {e}", part.trim()),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        assert_eq!(CellCosts::default(), CellCosts::new([9, 10, 4, 1, 2, 13, 4, 2, 6]));
        assert_eq!(CellCosts::default().get(5), 13);
        assert!(!CellCosts::default().is_uniform());
    }

    #[test]
    fn uniform_tables() {
        assert!(CellCosts::uniform(1).is_uniform());
        assert!(CellCosts::uniform(0).is_uniform());
        assert!(!CellCosts::new([1, 1, 1, 1, 2, 1, 1, 1, 1]).is_uniform());
    }

    #[test]
    fn length_is_enforced() {
        assert!(matches!(
            CellCosts::from_slice(&[1, 2, 3]),
            Err(crate::Error::InvalidCostTable { len: 3 })
        ));
        assert!(matches!(
            "1,1,1,1,1,1,1,1,1,1".parse::<CellCosts>(),
            Err(crate::Error::InvalidCostTable { len: 10 })
        ));
    }

    #[test]
    fn parses_comma_list() {
        let costs: CellCosts = "9, 10,4,1,2,13,4,2,6".parse().unwrap();
        assert_eq!(costs, CellCosts::DEFAULT);
        assert_eq!(costs.to_string(), "9,10,4,1,2,13,4,2,6");
        assert!("1,2,x".parse::<CellCosts>().is_err());
    }
}
