//! Local JSON file store
//!
//! Game modes are kept in memory and mirrored to a single pretty-printed
//! JSON document. Each write replaces the document through a temporary file
//! so a crash mid-write leaves the previous version intact.

use std::{
    borrow::Cow,
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tokio::{fs, sync::Mutex};

use super::{Error, GameModeStore, prepare_insert};
use crate::{
    constants::storage::STORE_FILE_NAME,
    game_mode::{GameModeConfig, GameModeId},
};

/// On-disk layout of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile<'a> {
    #[serde(default)]
    game_modes: Cow<'a, [GameModeConfig]>,
}

/// A [`GameModeStore`] persisted to `game_modes.json` in a directory
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    game_modes: Mutex<Vec<GameModeConfig>>,
}

impl JsonFileStore {
    /// Opens the store in `directory`, creating the directory if needed
    ///
    /// A missing file is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the existing
    /// file cannot be read or decoded.
    pub async fn open(directory: impl AsRef<Path>) -> Result<Self, Error> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory).await?;

        let path = directory.join(STORE_FILE_NAME);
        let game_modes = load(&path).await?;
        tracing::debug!(path = %path.display(), count = game_modes.len(), "loaded game modes");

        Ok(Self {
            path,
            game_modes: Mutex::new(game_modes),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load(path: &Path) -> Result<Vec<GameModeConfig>, Error> {
    match fs::read_to_string(path).await {
        Ok(content) => {
            let file: StoreFile<'static> = serde_json::from_str(&content)?;
            Ok(file.game_modes.into_owned())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

async fn save(path: &Path, game_modes: &[GameModeConfig]) -> Result<(), Error> {
    let content = serde_json::to_string_pretty(&StoreFile {
        game_modes: Cow::Borrowed(game_modes),
    })?;

    let staging = path.with_extension("json.tmp");
    fs::write(&staging, content).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}

#[async_trait]
impl GameModeStore for JsonFileStore {
    async fn insert(&self, config: GameModeConfig) -> Result<GameModeConfig, Error> {
        let mut game_modes = self.game_modes.lock().await;
        let stored = prepare_insert(&game_modes, config)?;

        game_modes.push(stored.clone());
        if let Err(e) = save(&self.path, &game_modes).await {
            game_modes.pop();
            return Err(e);
        }

        tracing::info!(id = %stored.id(), label = stored.label(), "stored game mode");
        Ok(stored)
    }

    async fn get(&self, id: GameModeId) -> Result<GameModeConfig, Error> {
        self.game_modes
            .lock()
            .await
            .iter()
            .find(|stored| stored.id() == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn all(&self) -> Result<Vec<GameModeConfig>, Error> {
        Ok(self
            .game_modes
            .lock()
            .await
            .iter()
            .cloned()
            .sorted_by_key(GameModeConfig::id)
            .collect_vec())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game_mode::{BoardSize, HintMode, MinWordLength, ScoreType};

    fn create_test_config(label: &str) -> GameModeConfig {
        GameModeConfig::custom(
            label,
            BoardSize::FourByFour,
            Duration::from_secs(180),
            MinWordLength::Three,
            ScoreType::LetterPoints,
            HintMode::Colour,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        assert!(store.all().await.unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_insert_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let stored = {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store.insert(create_test_config("Saved")).await.unwrap()
        };

        let reopened = JsonFileStore::open(dir.path()).await.unwrap();
        let loaded = reopened.get(stored.id()).await.unwrap();
        assert_eq!(loaded, stored);
        assert_eq!(loaded.label(), "Saved");
    }

    #[tokio::test]
    async fn test_reopened_store_continues_ids() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).await.unwrap();
            store.insert(create_test_config("One")).await.unwrap();
        }

        let store = JsonFileStore::open(dir.path()).await.unwrap();
        let second = store.insert(create_test_config("Two")).await.unwrap();
        assert_eq!(second.id(), GameModeId::from(2));
    }

    #[tokio::test]
    async fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();
        store.insert(create_test_config("Layout")).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["game_modes"][0]["id"], 1);
        assert_eq!(json["game_modes"][0]["kind"], "CUSTOM");
        assert_eq!(json["game_modes"][0]["hint_mode"], "hint_colour");
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_open_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORE_FILE_NAME), "not json").unwrap();

        let result = JsonFileStore::open(dir.path()).await;
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn test_failed_write_is_rolled_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).await.unwrap();

        // A directory in place of the staging file makes the write fail.
        std::fs::create_dir(store.path().with_extension("json.tmp")).unwrap();

        let result = store.insert(create_test_config("Lost")).await;
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(store.all().await.unwrap().is_empty());
    }
}
