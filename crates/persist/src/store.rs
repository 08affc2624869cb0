//! JSON file store for the snake high score.
//!
//! File format: `{"snake_high": 12}`. A missing file reads as 0. I/O failures
//! never reach the game: the store answers 0 / drops the save and keeps the
//! error for the caller to report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::HighScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreFile {
    #[serde(default)]
    pub snake_high: u32,
}

#[derive(Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
    last_error: Option<anyhow::Error>,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. A missing file is 0, not an error.
    pub fn read(&self) -> Result<u32> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let file: HighScoreFile = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(file.snake_high)
    }

    /// Write the score, creating parent directories as needed.
    pub fn write(&self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string(&HighScoreFile { snake_high: score })?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Most recent load/save failure, cleared on read.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.last_error.take()
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> u32 {
        match self.read() {
            Ok(score) => score,
            Err(e) => {
                self.last_error = Some(e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        if let Err(e) = self.write(score) {
            self.last_error = Some(e);
        }
    }
}
