use include_dir::{include_dir, Dir, File};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashSet;

use crate::error::{Error, Result};

static THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/quiz/themes");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Entry {
    pub text: String,
    pub answer: String,
}

/// A named, ordered set of questions
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub questions: Vec<Entry>,
}

/// Read-only theme catalogue, built once at startup
#[derive(Clone, Debug)]
pub struct Catalogue {
    themes: Vec<Theme>,
}

impl Catalogue {
    /// Themes bundled into the binary, ordered by file name
    pub fn builtin() -> Result<Self> {
        let docs = THEME_DIR
            .files()
            .sorted_by(|a, b| a.path().cmp(b.path()))
            .map(read_theme_file)
            .collect::<Result<Vec<_>>>()?;

        Self::from_themes(docs)
    }

    /// Parse `(label, json)` documents; the label only shows up in error messages
    pub fn from_json<'a, I>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let themes = docs
            .into_iter()
            .map(|(label, json)| parse_theme(label, json))
            .collect::<Result<Vec<_>>>()?;

        Self::from_themes(themes)
    }

    fn from_themes(themes: Vec<Theme>) -> Result<Self> {
        let mut seen = HashSet::new();
        for theme in &themes {
            if theme.questions.is_empty() {
                return Err(catalogue_error(&theme.name, "theme has no questions"));
            }
            if !seen.insert(theme.name.as_str()) {
                return Err(catalogue_error(&theme.name, "duplicate theme name"));
            }
        }
        tracing::debug!(themes = themes.len(), "catalogue loaded");
        Ok(Self { themes })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Look up a theme the way a player would type it: trimmed, any case
    pub fn select(&self, choice: &str) -> Result<&Theme> {
        let name = choice.trim().to_lowercase();
        self.get(&name).ok_or(Error::InvalidTheme(name))
    }
}

fn read_theme_file(file: &File) -> Result<Theme> {
    let label = file.path().display().to_string();
    let contents = file
        .contents_utf8()
        .ok_or_else(|| catalogue_error(&label, "not valid UTF-8"))?;
    parse_theme(&label, contents)
}

fn parse_theme(label: &str, json: &str) -> Result<Theme> {
    from_str(json).map_err(|e| catalogue_error(label, &e.to_string()))
}

fn catalogue_error(file: &str, reason: &str) -> Error {
    Error::Catalogue {
        file: file.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn builtin_catalogue_has_three_full_themes() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_eq!(
            catalogue.names().collect::<Vec<_>>(),
            vec!["informatics", "africa", "biology"]
        );
        for theme in catalogue.themes() {
            assert_eq!(theme.questions.len(), 10, "theme {}", theme.name);
        }
    }

    #[test]
    fn builtin_answers_are_lowercase() {
        let catalogue = Catalogue::builtin().unwrap();
        for entry in catalogue.themes().iter().flat_map(|t| &t.questions) {
            assert_eq!(entry.answer, entry.answer.trim().to_lowercase());
        }
    }

    #[test]
    fn biology_starts_with_the_powerhouse() {
        let catalogue = Catalogue::builtin().unwrap();
        let first = &catalogue.get("biology").unwrap().questions[0];
        assert_eq!(first.text, "What is the powerhouse of the cell?");
        assert_eq!(first.answer, "mitochondria");
    }

    #[test]
    fn select_normalizes_the_choice() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_eq!(catalogue.select("  Africa ").unwrap().name, "africa");
    }

    #[test]
    fn select_unknown_theme_fails() {
        let catalogue = Catalogue::builtin().unwrap();
        assert_matches!(catalogue.select("astronomy"), Err(Error::InvalidTheme(n)) if n == "astronomy");
        assert_matches!(catalogue.select(""), Err(Error::InvalidTheme(_)));
    }

    #[test]
    fn from_json_keeps_document_order() {
        let catalogue = Catalogue::from_json([
            ("b", r#"{"name": "zoo", "questions": [{"text": "q", "answer": "a"}]}"#),
            ("a", r#"{"name": "art", "questions": [{"text": "q", "answer": "a"}]}"#),
        ])
        .unwrap();
        assert_eq!(catalogue.names().collect::<Vec<_>>(), vec!["zoo", "art"]);
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = Catalogue::from_json([("broken.json", "{")]).unwrap_err();
        assert_matches!(err, Error::Catalogue { file, .. } if file == "broken.json");
    }

    #[test]
    fn empty_theme_is_rejected() {
        let err = Catalogue::from_json([("e", r#"{"name": "empty", "questions": []}"#)]).unwrap_err();
        assert_matches!(err, Error::Catalogue { reason, .. } if reason.contains("no questions"));
    }

    #[test]
    fn duplicate_theme_is_rejected() {
        let doc = r#"{"name": "same", "questions": [{"text": "q", "answer": "a"}]}"#;
        let err = Catalogue::from_json([("1", doc), ("2", doc)]).unwrap_err();
        assert_matches!(err, Error::Catalogue { reason, .. } if reason.contains("duplicate"));
    }
}
