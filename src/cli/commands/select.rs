//! Select command - ask the engine for one move

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::{EngineArgs, parse_player_token};
use crate::{
    cli::output::{print_kv, print_section},
    search::{MoveKind, SearchOutcome, Strategy},
    tictactoe::{BoardState, LineAnalyzer, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Choose a move for a board")]
pub struct SelectArgs {
    /// Board as nine cells, row-major (X, O, and . or _ for empty)
    #[arg(long, short = 'b')]
    pub board: String,

    /// Mark the computer places (`x` or `o`); overrides the config file
    #[arg(long, short = 'm')]
    pub mark: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SelectReport {
    board: String,
    strategy: Strategy,
    mark: Player,
    #[serde(flatten)]
    outcome: SearchOutcome,
}

pub fn execute(args: SelectArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)?;
    let mut config = args.engine.resolve()?;
    if let Some(mark) = &args.mark {
        config = config.with_mark(parse_player_token(mark, "--mark")?);
    }

    let outcome = config.engine().search(&board)?;

    if args.json {
        let report = SelectReport {
            board: board.encode(),
            strategy: config.strategy,
            mark: config.mark,
            outcome,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Move Selection");
    print!("{board}");
    print_kv("Strategy", &config.strategy.to_string());
    print_kv("Mark", &config.mark.to_string());
    print_kv("Costs", &config.costs.to_string());
    let immediate: Vec<String> = LineAnalyzer::winning_moves(&board.cells, config.mark)
        .iter()
        .map(|pos| pos.to_string())
        .collect();
    if !immediate.is_empty() {
        print_kv("Immediate wins", &immediate.join(", "));
    }

    print_kv("Chosen position", &outcome.position.to_string());
    let kind = match outcome.kind {
        MoveKind::Winning => "winning line reachable",
        MoveKind::Fallback => "fallback (no winning line reachable)",
    };
    print_kv("Reason", kind);
    print_kv("States expanded", &outcome.expanded.to_string());
    print_kv("States generated", &outcome.generated.to_string());

    Ok(())
}
