//! Persistence of the single best-score integer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::engine::Score;

/// Default record location, relative to the working directory.
pub const DEFAULT_PATH: &str = "highscore.txt";

#[derive(thiserror::Error, Debug)]
pub enum HighScoreError {
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait HighScoreStore {
    /// Previously saved best score; 0 when there is no usable record.
    fn load(&self) -> Score;

    /// Overwrite the record with `value`.
    fn save(&mut self, value: Score) -> Result<(), HighScoreError>;
}

/// Plain-text record: the score in decimal, nothing else.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl Default for FileHighScore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> Score {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("could not read high score from {}: {e}", self.path.display());
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(score) => score,
            Err(e) => {
                warn!("ignoring malformed high score in {}: {e}", self.path.display());
                0
            }
        }
    }

    fn save(&mut self, value: Score) -> Result<(), HighScoreError> {
        fs::write(&self.path, value.to_string()).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory store that also records every save it receives.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    value: Score,
    saves: Vec<Score>,
}

impl MemoryHighScore {
    pub fn new(value: Score) -> Self {
        Self { value, saves: Vec::new() }
    }

    pub fn saves(&self) -> &[Score] {
        &self.saves
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> Score {
        self.value
    }

    fn save(&mut self, value: Score) -> Result<(), HighScoreError> {
        self.value = value;
        self.saves.push(value);
        Ok(())
    }
}
