use anyhow::Context;
use brainbout::{
    config,
    console::StdConsole,
    drill::{problem_rng, Game},
    logging, roster,
};
use clap::Parser;
use std::path::PathBuf;

/// timed arithmetic drill for one or more players
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// number of problems each player solves (default: 10, or the config file value)
    #[clap(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    problems: Option<u64>,

    /// seed the problem generator for a reproducible sequence
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// read settings from this file instead of the per-user config
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let cfg = config::load(cli.config.as_deref()).context("could not load settings")?;
    let problems = cli.problems.map_or(cfg.problems_per_turn, |n| n as usize);

    let mut console = StdConsole::new();
    let mut game = Game::new(problems);
    for name in roster::register_players(&mut console)? {
        game.add_player(name);
    }

    let mut rng = problem_rng(cli.seed);
    game.start(&mut console, &mut rng)?;
    game.display_results(&mut console)?;

    Ok(())
}
