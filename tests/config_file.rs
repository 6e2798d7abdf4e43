//! Loading search configuration from disk

use std::io::Write;

use grid_search::{CellCosts, Error, Player, SearchConfig, Strategy};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = write_config(
        r#"
strategy = "weighted-priority"
mark = "X"
costs = [1, 2, 3, 4, 5, 6, 7, 8, 9]
"#,
    );
    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.strategy, Strategy::WeightedPriority);
    assert_eq!(config.mark, Player::X);
    assert_eq!(config.costs, CellCosts::new([1, 2, 3, 4, 5, 6, 7, 8, 9]));
}

#[test]
fn partial_config_keeps_defaults() {
    let file = write_config("strategy = \"lifo\"\n");
    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SearchConfig::default().with_strategy(Strategy::Lifo));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn long_cost_table_is_rejected() {
    let file = write_config("costs = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1]\n");
    assert!(matches!(
        SearchConfig::from_file(file.path()),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn configured_engine_uses_configured_mark() {
    let config = SearchConfig::default().with_mark(Player::X);
    let board = grid_search::BoardState::from_string("XX.OO....").unwrap();
    assert_eq!(config.engine().select_move(&board).unwrap(), 2);
}

#[test]
fn strategy_aliases_load_from_file() {
    let file = write_config("strategy = \"ucs\"\n");
    let config = SearchConfig::from_file(file.path()).unwrap();
    assert_eq!(config.strategy, Strategy::WeightedPriority);
}

#[test]
fn unknown_strategy_in_file_is_invalid_strategy() {
    let file = write_config("strategy = \"astar\"\n");
    assert!(matches!(
        SearchConfig::from_file(file.path()),
        Err(Error::InvalidStrategy { .. })
    ));
}
