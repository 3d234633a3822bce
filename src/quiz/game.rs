use crate::config::DEFAULT_QUIT_KEYWORD;
use crate::console::Console;
use crate::error::Result;
use crate::quiz::catalogue::Catalogue;
use crate::quiz::question::{normalize, Question};
use crate::util::percentage;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub score: usize,
    pub percentage: f64,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            percentage: 0.0,
        }
    }
}

/// How a player's turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// every question was asked
    Completed,
    /// the player typed the quit keyword
    Stopped,
}

/// One theme's questions, asked to each player in turn
#[derive(Debug, Clone)]
pub struct QuizGame {
    theme: String,
    questions: Vec<Question>,
    quit_keyword: String,
}

impl QuizGame {
    /// Fails with `Error::InvalidTheme` when `choice` names no catalogue theme
    pub fn new(catalogue: &Catalogue, choice: &str) -> Result<Self> {
        let theme = catalogue.select(choice)?;
        tracing::info!(theme = %theme.name, questions = theme.questions.len(), "theme selected");

        Ok(Self {
            theme: theme.name.clone(),
            questions: theme.questions.iter().map(Question::from).collect(),
            quit_keyword: DEFAULT_QUIT_KEYWORD.to_string(),
        })
    }

    pub fn with_quit_keyword(mut self, keyword: &str) -> Self {
        self.quit_keyword = normalize(keyword);
        self
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn start(&self, players: &mut [Player], console: &mut dyn Console) -> Result<()> {
        for player in players.iter_mut() {
            self.play_turn(player, console)?;
        }
        Ok(())
    }

    /// Ask every question until the list runs out or the player quits, then report.
    /// The percentage is always out of the full question count.
    pub fn play_turn(&self, player: &mut Player, console: &mut dyn Console) -> Result<TurnEnd> {
        console.write_line(&format!("\n{}'s turn:", player.name))?;
        tracing::info!(player = %player.name, theme = %self.theme, "turn started");

        let mut end = TurnEnd::Completed;
        for question in &self.questions {
            let prompt = format!("{} (type '{}' to quit) ", question.text(), self.quit_keyword);
            let answer = normalize(&console.read_line(&prompt)?);

            if answer == self.quit_keyword {
                console.write_line(&format!("{} has chosen to stop the quiz.", player.name))?;
                end = TurnEnd::Stopped;
                break;
            }

            if question.check_answer(&answer) {
                console.write_line("Correct!")?;
                player.score += 1;
            } else {
                console.write_line(&format!(
                    "Incorrect! The correct answer is '{}'.",
                    question.answer()
                ))?;
            }
            tracing::debug!(player = %player.name, answer = %answer, score = player.score, "answered");
        }

        player.percentage = percentage(player.score, self.total_questions());
        tracing::info!(player = %player.name, score = player.score, ?end, "turn finished");

        console.write_line(&format!("{} got {} question(s) correct!", player.name, player.score))?;
        console.write_line(&format!("{} got {:.2}%", player.name, player.percentage))?;
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::error::Error;
    use assert_matches::assert_matches;

    fn biology() -> QuizGame {
        QuizGame::new(&Catalogue::builtin().unwrap(), "biology").unwrap()
    }

    fn answers(game: &QuizGame) -> Vec<String> {
        game.questions().iter().map(|q| q.answer().to_string()).collect()
    }

    #[test]
    fn powerhouse_scenario() {
        let game = biology();
        let mut player = Player::new("Ada");
        let mut console = ScriptedConsole::new(["Mitochondria", "stop"]);

        let end = game.play_turn(&mut player, &mut console).unwrap();
        assert_eq!(end, TurnEnd::Stopped);
        assert_eq!(player.score, 1);
        assert_eq!(console.lines[1], "Correct!");
        assert_eq!(
            console.prompts[0],
            "What is the powerhouse of the cell? (type 'stop' to quit) "
        );
    }

    #[test]
    fn perfect_run_scores_everything() {
        let game = biology();
        let mut player = Player::new("Ada");
        let mut console = ScriptedConsole::new(answers(&game));

        let end = game.play_turn(&mut player, &mut console).unwrap();
        assert_eq!(end, TurnEnd::Completed);
        assert_eq!(player.score, 10);
        assert_eq!(player.percentage, 100.0);
        assert_eq!(console.lines.last().unwrap(), "Ada got 100.00%");
    }

    #[test]
    fn wrong_answer_reports_correct_one_and_moves_on() {
        let game = biology();
        let mut player = Player::new("Ada");
        let mut inputs = vec!["ribosome".to_string()];
        inputs.extend(answers(&game).into_iter().skip(1));
        let mut console = ScriptedConsole::new(inputs);

        game.play_turn(&mut player, &mut console).unwrap();
        assert_eq!(console.lines[1], "Incorrect! The correct answer is 'mitochondria'.");
        assert_eq!(player.score, 9);
        assert_eq!(console.prompts.len(), 10);
    }

    #[test]
    fn quitting_keeps_full_denominator() {
        let game = biology();
        let mut player = Player::new("Ada");
        let mut inputs: Vec<String> = answers(&game).into_iter().take(3).collect();
        inputs.push("  STOP ".to_string());
        let mut console = ScriptedConsole::new(inputs);

        let end = game.play_turn(&mut player, &mut console).unwrap();
        assert_eq!(end, TurnEnd::Stopped);
        assert_eq!(player.score, 3);
        assert_eq!(player.percentage, 30.0);
        assert_eq!(console.prompts.len(), 4);
        assert!(console.lines.contains(&"Ada has chosen to stop the quiz.".to_string()));
        assert!(console.lines.contains(&"Ada got 3 question(s) correct!".to_string()));
        assert_eq!(console.lines.last().unwrap(), "Ada got 30.00%");
    }

    #[test]
    fn one_player_quitting_does_not_affect_the_next() {
        let game = biology();
        let mut players = vec![Player::new("quitter"), Player::new("finisher")];
        let mut inputs = vec!["stop".to_string()];
        inputs.extend(answers(&game));
        let mut console = ScriptedConsole::new(inputs);

        game.start(&mut players, &mut console).unwrap();
        assert_eq!(players[0].score, 0);
        assert_eq!(players[0].percentage, 0.0);
        assert_eq!(players[1].score, 10);
        assert_eq!(players[1].percentage, 100.0);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn custom_quit_keyword() {
        let game = biology().with_quit_keyword(" Quit");
        let mut player = Player::new("Ada");
        let mut console = ScriptedConsole::new(["stop", "quit"]);

        let end = game.play_turn(&mut player, &mut console).unwrap();
        assert_eq!(end, TurnEnd::Stopped);
        assert_eq!(player.score, 0);
        assert_eq!(console.lines[1], "Incorrect! The correct answer is 'mitochondria'.");
        assert_eq!(
            console.prompts[0],
            "What is the powerhouse of the cell? (type 'quit' to quit) "
        );
    }

    #[test]
    fn unknown_theme_never_builds_a_game() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_matches!(QuizGame::new(&catalogue, "chemistry"), Err(Error::InvalidTheme(_)));
    }

    #[test]
    fn theme_choice_is_case_insensitive() {
        let game = QuizGame::new(&Catalogue::builtin().unwrap(), "INFORMATICS").unwrap();
        assert_eq!(game.theme(), "informatics");
        assert_eq!(game.total_questions(), 10);
    }
}
