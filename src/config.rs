use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_PROBLEMS_PER_TURN: usize = 10;
pub const DEFAULT_QUIT_KEYWORD: &str = "stop";

/// Settings shared by both games.
/// Every field may be omitted from the file; missing ones keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub problems_per_turn: usize,
    pub quit_keyword: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problems_per_turn: DEFAULT_PROBLEMS_PER_TURN,
            quit_keyword: DEFAULT_QUIT_KEYWORD.to_string(),
        }
    }
}

impl Config {
    /// The quit keyword as compared against answers (trimmed, lower-cased)
    pub fn normalized_quit_keyword(&self) -> String {
        self.quit_keyword.trim().to_lowercase()
    }
}

pub trait ConfigStore {
    fn load(&self) -> Result<Config>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "brainbout") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("brainbout_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        let mut cfg = serde_json::from_slice::<Config>(&bytes).map_err(|source| Error::Config {
            path: self.path.clone(),
            source,
        })?;
        if cfg.problems_per_turn == 0 {
            tracing::warn!(
                path = %self.path.display(),
                "problems_per_turn must be at least 1, using {DEFAULT_PROBLEMS_PER_TURN}"
            );
            cfg.problems_per_turn = DEFAULT_PROBLEMS_PER_TURN;
        }
        if cfg.normalized_quit_keyword().is_empty() {
            tracing::warn!(path = %self.path.display(), "empty quit_keyword, using '{DEFAULT_QUIT_KEYWORD}'");
            cfg.quit_keyword = DEFAULT_QUIT_KEYWORD.to_string();
        }
        tracing::debug!(path = %self.path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }
}

/// Settings from `path` when given, otherwise from the per-user config location
pub fn load(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => FileConfigStore::with_path(p).load(),
        None => FileConfigStore::new().load(),
    }
}
