//! Configuration management for the console.

use std::env;
use std::path::PathBuf;

/// Default width of each table column, in characters.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// Console configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file with the initial records, built-in seed when absent
    pub seed_file: Option<PathBuf>,
    /// Width of each table column
    pub column_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_file = lookup("ROSTER_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let column_width = match lookup("ROSTER_COLUMN_WIDTH") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|width| *width > 0)
                .ok_or(ConfigError::InvalidColumnWidth(raw))?,
            None => DEFAULT_COLUMN_WIDTH,
        };

        Ok(Self {
            seed_file,
            column_width,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid ROSTER_COLUMN_WIDTH value: '{0}'")]
    InvalidColumnWidth(String),
}
