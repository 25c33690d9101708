//! Runtime settings
//!
//! Settings are layered: built-in defaults, then an optional file, then
//! `LEXICA__`-prefixed environment variables (for example
//! `LEXICA__STORAGE__WRITE_WORKERS=2`).

use std::path::{Path, PathBuf};

use garde::Validate;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::storage::{DEFAULT_WRITE_WORKERS, MAX_WRITE_WORKERS};

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum Error {
    /// A source could not be read or did not match the expected shape
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    /// The loaded values are out of range
    #[error("invalid settings: {0}")]
    Invalid(#[from] garde::Report),
}

/// Top-level settings
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    /// Where and how game modes are persisted
    #[garde(dive)]
    pub storage: StorageSettings,
}

/// Local storage settings
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding the store file; the platform data directory when unset
    #[garde(skip)]
    pub directory: Option<PathBuf>,
    /// Number of background writes allowed to run at once
    #[garde(range(min = 1, max = MAX_WRITE_WORKERS))]
    pub write_workers: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            directory: None,
            write_workers: DEFAULT_WRITE_WORKERS,
        }
    }
}

impl Settings {
    /// Loads settings from an optional file and the environment
    ///
    /// The file format is inferred from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Load`] when a source is unreadable or malformed and
    /// [`Error::Invalid`] when a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(
                config::Environment::with_prefix("LEXICA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}
