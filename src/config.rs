use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::Tile;
use crate::game::SpawnPolicy;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("spawn.four_probability must be within [0, 1], got {0}")]
    FourProbability(f64),
    #[error("target_tile must be a power of two >= 4, got {0}")]
    TargetTile(Tile),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where the best score is kept.
    #[serde(default = "defaults::highscore_path")]
    pub highscore_path: PathBuf,

    /// Fixed RNG seed for reproducible games. None means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Tile value that triggers the "reached" banner.
    #[serde(default = "defaults::target_tile")]
    pub target_tile: Tile,

    #[serde(default)]
    pub spawn: SpawnPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highscore_path: defaults::highscore_path(),
            seed: None,
            target_tile: defaults::target_tile(),
            spawn: SpawnPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.spawn.four_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::FourProbability(p));
        }
        if self.target_tile < 4 || !self.target_tile.is_power_of_two() {
            return Err(ConfigError::TargetTile(self.target_tile));
        }
        Ok(())
    }
}

mod defaults {
    use std::path::PathBuf;

    use crate::engine::Tile;
    use crate::highscore::DEFAULT_PATH;

    pub fn highscore_path() -> PathBuf { PathBuf::from(DEFAULT_PATH) }
    pub fn target_tile() -> Tile { 2048 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.highscore_path, PathBuf::from("highscore.txt"));
        assert_eq!(cfg.target_tile, 2048);
        assert_eq!(cfg.spawn.four_probability, 0.5);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn full_file() {
        let cfg = Config::from_toml_str(
            r#"
            highscore_path = "/tmp/best.txt"
            seed = 7
            target_tile = 4096

            [spawn]
            four_probability = 0.1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/best.txt"));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.target_tile, 4096);
        assert_eq!(cfg.spawn.four_probability, 0.1);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_toml_str("[spawn]\nfour_probability = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::FourProbability(_)));
        let err = Config::from_toml_str("target_tile = 100\n").unwrap_err();
        assert!(matches!(err, ConfigError::TargetTile(100)));
        let err = Config::from_toml_str("target_tile = 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::TargetTile(2)));
        let err = Config::from_toml_str("board_size = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = Config::from_toml_str("[spawn]\nfour_probabilty = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_from_path() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "seed = 3\n").unwrap();
        let cfg = Config::from_toml(tmp.path()).unwrap();
        assert_eq!(cfg.seed, Some(3));

        let err = Config::from_toml(tmp.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
