use anyhow::Context;
use brainbout::{
    config,
    console::{Console, StdConsole},
    logging,
    quiz::{Catalogue, Player, QuizGame},
    roster, Error,
};
use clap::Parser;
use itertools::Itertools;
use std::path::PathBuf;

/// themed trivia quiz for one or more players
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// theme to play, skipping the interactive choice
    #[clap(short = 't', long)]
    theme: Option<String>,

    /// print the available themes and exit
    #[clap(long)]
    list_themes: bool,

    /// read settings from this file instead of the per-user config
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let cfg = config::load(cli.config.as_deref()).context("could not load settings")?;
    let catalogue = Catalogue::builtin().context("bundled themes are broken")?;
    let mut console = StdConsole::new();

    if cli.list_themes {
        for theme in catalogue.themes() {
            console.write_line(&format!("{} ({} questions)", theme.name, theme.questions.len()))?;
        }
        return Ok(());
    }

    console.write_line("Welcome to the Quiz")?;

    let choice = match cli.theme {
        Some(theme) => theme,
        None => console.read_line(&format!(
            "Choose a theme from the following options: {} ",
            catalogue.names().join(", ")
        ))?,
    };

    let game = match QuizGame::new(&catalogue, &choice) {
        Ok(game) => game.with_quit_keyword(&cfg.quit_keyword),
        Err(e @ Error::InvalidTheme(_)) => {
            console.write_line(&e.to_string())?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut players: Vec<Player> = roster::register_players(&mut console)?
        .into_iter()
        .map(Player::new)
        .collect();
    game.start(&mut players, &mut console)?;

    Ok(())
}
