//! Play command - interactive game on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;
use tracing::warn;

use super::EngineArgs;
use crate::{
    SearchConfig,
    cli::output::print_board_with_positions,
    tictactoe::{Game, GameMode, GameOutcome, Player, game::COMPUTER},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer or another person")]
pub struct PlayArgs {
    /// Two humans take turns instead of playing the computer
    #[arg(long)]
    pub two_player: bool,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// The computer always plays O, so a config asking for X cannot be honored.
fn game_mode(config: &SearchConfig, two_player: bool) -> Result<GameMode> {
    if two_player {
        return Ok(GameMode::TwoPlayer);
    }
    if config.mark != COMPUTER {
        bail!(
            "the computer plays {COMPUTER} in interactive games, but the configuration sets mark {}",
            config.mark
        );
    }
    Ok(GameMode::VersusComputer {
        strategy: config.strategy,
    })
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.engine.resolve()?;
    let mode = game_mode(&config, args.two_player)?;

    match mode {
        GameMode::TwoPlayer => println!("Two player game. X moves first."),
        GameMode::VersusComputer { strategy } => println!(
            "You are X, the computer is O ({} search). You move first.",
            strategy.short_name()
        ),
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new(mode);

    while !game.is_over() {
        if game.is_computer_turn() {
            let position = game.computer_turn(&config.costs)?;
            println!("Computer plays {position}");
            continue;
        }

        print_board_with_positions(game.board());
        print!("{} to move, enter a position (0-8) or q to quit: ", game.to_move());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            println!("Bye.");
            return Ok(());
        }

        let Ok(position) = input.parse::<usize>() else {
            println!("'{input}' is not a position");
            continue;
        };
        if let Err(e) = game.play(position) {
            warn!(position, error = %e, "rejected move");
            println!("{e}");
        }
    }

    print_board_with_positions(game.board());
    match (game.outcome(), mode) {
        (Some(GameOutcome::Win(Player::O)), GameMode::VersusComputer { .. }) => {
            println!("Computer wins! Better luck next time!")
        }
        (Some(GameOutcome::Win(player)), _) => println!("{player} wins!"),
        (Some(GameOutcome::Draw), _) => println!("It's a draw!"),
        (None, _) => {}
    }

    Ok(())
}
