use crate::quiz::catalogue::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: &str) -> Self {
        Self {
            text: text.into(),
            answer: normalize(answer),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The expected answer, lower-cased
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn check_answer(&self, player_answer: &str) -> bool {
        normalize(player_answer) == self.answer
    }
}

impl From<&Entry> for Question {
    fn from(entry: &Entry) -> Self {
        Question::new(entry.text.clone(), &entry.answer)
    }
}

/// Answers compare trimmed and case-folded, nothing looser
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}
