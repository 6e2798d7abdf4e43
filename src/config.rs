//! Search configuration loaded from TOML
//!
//! ```toml
//! strategy = "weighted-priority"
//! mark = "O"
//! costs = [9, 10, 4, 1, 2, 13, 4, 2, 6]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    search::{CellCosts, SearchEngine, Strategy},
    tictactoe::Player,
};

/// Settings for the computer player.
///
/// Missing keys fall back to [`SearchConfig::default`]: breadth-first search
/// placing `O` with the default cost table.
///
/// # Examples
///
/// ```
/// use grid_search::{CellCosts, Player, SearchConfig, Strategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(Strategy::WeightedPriority)
///     .with_mark(Player::X)
///     .with_costs(CellCosts::uniform(1));
/// assert_eq!(config.strategy, Strategy::WeightedPriority);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchConfig {
    /// Frontier ordering
    pub strategy: Strategy,
    /// Mark the computer places
    pub mark: Player,
    /// Per-cell costs for uniform-cost search
    pub costs: CellCosts,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            mark: Player::O,
            costs: CellCosts::default(),
        }
    }
}

/// On-disk layout. The strategy stays a string until after TOML parsing so an
/// unknown selector surfaces as [`crate::Error::InvalidStrategy`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    strategy: Option<String>,
    mark: Option<Player>,
    costs: Option<CellCosts>,
}

impl TryFrom<ConfigFile> for SearchConfig {
    type Error = crate::Error;

    fn try_from(file: ConfigFile) -> Result<Self> {
        let defaults = SearchConfig::default();
        Ok(Self {
            strategy: match file.strategy {
                Some(selector) => selector.parse()?,
                None => defaults.strategy,
            },
            mark: file.mark.unwrap_or(defaults.mark),
            costs: file.costs.unwrap_or(defaults.costs),
        })
    }
}

impl SearchConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStrategy`] for an unknown strategy
    /// selector, and [`crate::Error::ConfigParse`] on malformed TOML, unknown
    /// keys or a cost table without exactly nine entries.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.try_into()
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading search config");
        let content = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| crate::Error::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_mark(mut self, mark: Player) -> Self {
        self.mark = mark;
        self
    }

    pub fn with_costs(mut self, costs: CellCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Engine configured from these settings
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.strategy, self.mark, self.costs)
    }
}
