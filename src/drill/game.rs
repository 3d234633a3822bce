use rand::Rng;
use std::time::Instant;

use crate::config::DEFAULT_PROBLEMS_PER_TURN;
use crate::console::Console;
use crate::drill::problem::Problem;
use crate::error::Result;
use crate::util::whole_seconds;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub wrong_answers: u32,
    /// whole seconds spent on the turn
    pub total_time: u64,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrong_answers: 0,
            total_time: 0,
        }
    }
}

/// Timed arithmetic drill played by each player in turn
#[derive(Debug)]
pub struct Game {
    pub players: Vec<Player>,
    pub problems_per_turn: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_PROBLEMS_PER_TURN)
    }
}

impl Game {
    pub fn new(problems_per_turn: usize) -> Self {
        Self {
            players: Vec::new(),
            problems_per_turn,
        }
    }

    pub fn add_player(&mut self, name: impl Into<String>) {
        self.players.push(Player::new(name));
    }

    /// Wait for the go-ahead, then run every player's turn in registration order
    pub fn start<R: Rng + ?Sized>(&mut self, console: &mut dyn Console, rng: &mut R) -> Result<()> {
        console.read_line("Press enter to start ")?;

        for player in self.players.iter_mut() {
            play_turn(player, self.problems_per_turn, console, rng)?;
        }
        Ok(())
    }

    pub fn display_results(&self, console: &mut dyn Console) -> Result<()> {
        console.write_line("\n-----------------")?;
        console.write_line("Game Results:")?;
        for player in &self.players {
            console.write_line(&format!(
                "{}: {} seconds, {} wrong answers",
                player.name, player.total_time, player.wrong_answers
            ))?;
        }
        Ok(())
    }
}

fn play_turn<R: Rng + ?Sized>(
    player: &mut Player,
    problems: usize,
    console: &mut dyn Console,
    rng: &mut R,
) -> Result<()> {
    console.write_line(&format!("\n{}'s turn:", player.name))?;
    console.write_line("-----------------")?;
    tracing::info!(player = %player.name, problems, "turn started");

    let started_at = Instant::now();
    for number in 1..=problems {
        let problem = Problem::random(rng);
        tracing::debug!(number, expression = problem.expression(), answer = problem.answer(), "problem");
        player.wrong_answers += solve(&problem, number, console)?;
    }
    player.total_time = whole_seconds(started_at.elapsed());

    tracing::info!(
        player = %player.name,
        total_time = player.total_time,
        wrong_answers = player.wrong_answers,
        "turn finished"
    );
    console.write_line(&format!(
        "Nice work {}! You finished in {} seconds with {} wrong answers!",
        player.name, player.total_time, player.wrong_answers
    ))?;
    Ok(())
}

/// Keep asking until the answer is given; returns the number of misses
fn solve(problem: &Problem, number: usize, console: &mut dyn Console) -> Result<u32> {
    let prompt = format!("Problem #{number}: {} = ", problem.expression());
    let mut misses = 0;
    loop {
        let guess = console.read_line(&prompt)?;
        if problem.is_solved_by(&guess) {
            return Ok(misses);
        }
        tracing::debug!(guess = %guess, "wrong answer");
        misses += 1;
    }
}
