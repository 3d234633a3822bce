//! Player registration prompts shared by both games.

use crate::console::Console;
use crate::error::{Error, Result};

/// Ask how many players there are, then ask for each name in turn.
/// A count that is not a non-negative integer is fatal.
pub fn register_players(console: &mut dyn Console) -> Result<Vec<String>> {
    let raw = console.read_line("Enter the number of players: ")?;
    let count = parse_player_count(&raw)?;
    tracing::debug!(count, "registering players");

    (1..=count)
        .map(|i| -> Result<String> {
            Ok(console.read_line(&format!("Enter the name of player {i}: "))?)
        })
        .collect()
}

pub fn parse_player_count(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidPlayerCount(raw.to_string()))
}
