//! # Configuration
//!
//! Shelf configuration is managed by [`confique`], which handles layered
//! loading from a TOML file and environment variables on top of compiled
//! defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SHELF_SAMPLE_COUNT`, `SHELF_SEED`, `SHELF_SAMPLES`.
//! 2. **Config file**: the path given by the caller, else `shelf.toml` in the
//!    OS-appropriate config directory (via the `directories` crate). A
//!    missing file is not an error.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `sample_count` | `5` | Random tags and sources generated per session |
//! | `seed` | unset | Rng seed; makes sample data and new ids reproducible |
//! | `samples` | `true` | When `false`, flashcard stores start empty |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::Serialize;

use crate::error::Result;

pub const CONFIG_FILE: &str = "shelf.toml";

/// Session configuration, read from `shelf.toml` and `SHELF_*` variables.
#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Number of random tags and sources each flashcard store starts with.
    #[config(env = "SHELF_SAMPLE_COUNT", default = 5)]
    pub sample_count: usize,

    /// Seed for the sample generator. Unset means a fresh seed per session.
    #[config(env = "SHELF_SEED")]
    pub seed: Option<u64>,

    /// Whether flashcard stores start with sample records at all.
    #[config(env = "SHELF_SAMPLES", default = true)]
    pub samples: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            sample_count: 5,
            seed: None,
            samples: true,
        }
    }
}

impl ShelfConfig {
    /// Loads configuration from the environment and `path` (or the default
    /// config file when `path` is `None`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(file) = path.map(Path::to_path_buf).or_else(default_config_path) {
            builder = builder.file(file);
        }
        Ok(builder.load()?)
    }

    /// Number of sample records to seed, zero when sampling is off.
    pub fn effective_sample_count(&self) -> usize {
        if self.samples {
            self.sample_count
        } else {
            0
        }
    }
}

/// `shelf.toml` inside the user's config directory, if one can be found.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelf", "shelf").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.sample_count, 5);
        assert_eq!(config.seed, None);
        assert!(config.samples);
    }

    #[test]
    fn test_effective_sample_count() {
        let config = ShelfConfig {
            samples: false,
            ..Default::default()
        };
        assert_eq!(config.effective_sample_count(), 0);
        assert_eq!(ShelfConfig::default().effective_sample_count(), 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "sample_count = 2\nseed = 99\n").unwrap();

        let config = ShelfConfig::load(Some(&path)).unwrap();
        assert_eq!(config.sample_count, 2);
        assert_eq!(config.seed, Some(99));
        assert!(config.samples);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = ShelfConfig::load(Some(&path)).unwrap();
        assert_eq!(config.sample_count, 5);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "sample_count = \"many\"\n").unwrap();

        assert!(matches!(
            ShelfConfig::load(Some(&path)),
            Err(crate::error::ShelfError::Config(_))
        ));
    }
}
