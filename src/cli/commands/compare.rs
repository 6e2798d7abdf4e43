//! Compare command - pit each search strategy against a random opponent

use anyhow::{Result, bail};
use clap::Parser;
use rand::random;

use super::{ConfigArgs, parse_player_token};
use crate::{
    cli::output::{create_match_progress, percent, print_section},
    players::{MoveSelector, RandomPlayer, play_match, search_players},
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compare search strategies against a random opponent")]
pub struct CompareArgs {
    /// Number of games per strategy
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Which token the search players control (`x` or `o`); defaults to the
    /// configured mark
    #[arg(long)]
    pub search_player: Option<String>,

    // Every strategy runs, so only costs and mark are taken from the config.
    #[command(flatten)]
    pub source: ConfigArgs,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome, role: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == role => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    fn total(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.games == 0 {
        bail!("--games must be at least 1");
    }
    let config = args.source.resolve()?;
    let role = match &args.search_player {
        Some(token) => parse_player_token(token, "--search-player")?,
        None => config.mark,
    };
    let seed = args.seed.unwrap_or_else(random);

    println!("Games per strategy: {}", args.games);
    println!("Search player: {role}");
    println!("Costs: {}", config.costs);
    println!("Seed: {seed}");

    let players = search_players(role, config.costs);
    let pb = create_match_progress((players.len() * args.games) as u64)?;

    let mut results = Vec::with_capacity(players.len());
    for mut searcher in players {
        pb.set_message(searcher.name().to_string());
        // Same opponent sequence for every strategy.
        let mut opponent = RandomPlayer::with_seed("Random".to_string(), seed);
        let mut tally = Tally::default();

        for _ in 0..args.games {
            let outcome = match role {
                Player::X => play_match(&mut searcher, &mut opponent)?,
                Player::O => play_match(&mut opponent, &mut searcher)?,
            };
            tally.record(outcome, role);
            pb.inc(1);
        }
        results.push((searcher.name().to_string(), tally));
    }
    pb.finish_and_clear();

    print_section("Strategy Comparison (W-D-L vs Random)");
    for (name, tally) in &results {
        println!(
            "  {:4} {:>5}-{:<5}-{:>5}  ({:.1}% wins, {:.1}% losses)",
            name,
            tally.wins,
            tally.draws,
            tally.losses,
            percent(tally.wins, tally.total()),
            percent(tally.losses, tally.total()),
        );
    }

    Ok(())
}
