//! Game mode persistence
//!
//! This module defines the [`GameModeStore`] contract the editor writes
//! through, the errors a store can report, and [`Database`], which pairs a
//! store with the background [`WriteExecutor`] its writes run on.

use std::{io, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use derive_where::derive_where;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tokio::runtime::Handle;

use crate::{
    constants::storage::DATA_DIRECTORY_NAME,
    game_mode::{GameModeConfig, GameModeId},
    settings::StorageSettings,
};

pub mod executor;
pub mod json;
pub mod memory;

pub use executor::WriteExecutor;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Errors that can occur while reading or writing game modes
#[derive(Error, Debug)]
pub enum Error {
    /// The record failed validation and was not written
    #[error("invalid game mode: {0}")]
    Invalid(#[from] garde::Report),
    /// A record with the same identifier is already stored
    #[error("game mode {0} already exists")]
    AlreadyExists(GameModeId),
    /// No record with the requested identifier exists
    #[error("game mode {0} not found")]
    NotFound(GameModeId),
    /// No directory was configured and the platform has no data directory
    #[error("no local data directory available")]
    NoDataDirectory,
    /// Reading or writing the backing file failed
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    /// Every identifier has been handed out
    #[error("no game mode identifiers left")]
    IdsExhausted,
    /// The backing file could not be encoded or decoded
    #[error("malformed game mode data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Data persistence contract for custom game modes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameModeStore: Send + Sync {
    /// Validates and stores a game mode
    ///
    /// Unassigned identifiers are replaced with the next free one; assigned
    /// identifiers are kept. Returns the stored copy.
    async fn insert(&self, config: GameModeConfig) -> Result<GameModeConfig, Error>;

    /// Looks up a stored game mode
    async fn get(&self, id: GameModeId) -> Result<GameModeConfig, Error>;

    /// Lists every stored game mode ordered by identifier
    async fn all(&self) -> Result<Vec<GameModeConfig>, Error>;
}

/// Prepares a record for insertion into `existing`
///
/// Shared by the store implementations so they assign identifiers the same
/// way.
fn prepare_insert(
    existing: &[GameModeConfig],
    config: GameModeConfig,
) -> Result<GameModeConfig, Error> {
    use garde::Validate;

    config.validate()?;

    let id = config.id();
    if id.is_assigned() {
        if existing.iter().any(|stored| stored.id() == id) {
            return Err(Error::AlreadyExists(id));
        }
        return Ok(config);
    }

    let next = existing
        .iter()
        .map(GameModeConfig::id)
        .max()
        .unwrap_or(GameModeId::UNASSIGNED)
        .next()
        .ok_or(Error::IdsExhausted)?;
    Ok(config.with_id(next))
}

/// A store paired with the executor its writes are submitted to
#[derive(Debug)]
#[derive_where(Clone)]
pub struct Database<S> {
    store: Arc<S>,
    write_executor: WriteExecutor,
}

impl<S: GameModeStore> Database<S> {
    /// Wraps an existing store
    pub fn new(store: S, write_executor: WriteExecutor) -> Self {
        Self {
            store: Arc::new(store),
            write_executor,
        }
    }

    /// The game mode store
    pub fn game_modes(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// The shared background context for writes
    pub fn write_executor(&self) -> &WriteExecutor {
        &self.write_executor
    }
}

impl Database<JsonFileStore> {
    /// Opens the on-disk store described by `settings`
    ///
    /// Writes run on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDataDirectory`] when no directory can be resolved,
    /// or any error raised while loading the existing file.
    pub async fn open(settings: &StorageSettings) -> Result<Self, Error> {
        let directory = resolve_directory(settings).ok_or(Error::NoDataDirectory)?;
        let store = JsonFileStore::open(&directory).await?;
        let write_executor = WriteExecutor::new(Handle::current(), settings.write_workers);
        tracing::debug!(directory = %directory.display(), "opened game mode database");
        Ok(Self::new(store, write_executor))
    }
}

/// Configured directory, or the platform data directory as a fallback
fn resolve_directory(settings: &StorageSettings) -> Option<PathBuf> {
    settings
        .directory
        .clone()
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join(DATA_DIRECTORY_NAME)))
}
