//! Subcommands of the `grid-search` binary

pub mod compare;
pub mod play;
pub mod select;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    SearchConfig,
    search::{CellCosts, Strategy},
    tictactoe::Player,
};

/// Config file and cost table flags
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML file with strategy, mark and costs
    #[arg(long, short = 'c')]
    pub config: Option<std::path::PathBuf>,

    /// Comma separated cost per cell, e.g. 9,10,4,1,2,13,4,2,6
    #[arg(long)]
    pub costs: Option<String>,
}

impl ConfigArgs {
    /// Resolve the configuration: file first, then `--costs` on top
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SearchConfig::default(),
        };
        if let Some(costs) = &self.costs {
            config = config.with_costs(costs.parse::<CellCosts>()?);
        }
        Ok(config)
    }
}

/// Flags for commands that run a single strategy
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EngineArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Search strategy (fifo/bfs, lifo/dfs, weighted-priority/ucs)
    #[arg(long, short = 's')]
    pub strategy: Option<String>,
}

impl EngineArgs {
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = self.source.resolve()?;
        if let Some(strategy) = &self.strategy {
            config = config.with_strategy(strategy.parse::<Strategy>()?);
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<SearchConfig> {
    SearchConfig::from_file(path)
        .with_context(|| format!("loading configuration from {}", path.display()))
}

/// Parse a `x`/`o` token, naming the flag in the error
pub fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse::<Player>()
        .with_context(|| format!("invalid value for {flag}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = EngineArgs {
            source: ConfigArgs {
                config: None,
                costs: Some("1,1,1,1,1,1,1,1,1".to_string()),
            },
            strategy: Some("dfs".to_string()),
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.strategy, Strategy::Lifo);
        assert_eq!(config.costs, CellCosts::uniform(1));
    }

    #[test]
    fn bad_strategy_flag_is_an_error() {
        let args = EngineArgs {
            strategy: Some("astar".to_string()),
            ..EngineArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
