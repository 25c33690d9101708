//! In-memory game mode store
//!
//! Keeps every record in a vector behind an async lock. Useful for tests and
//! for hosts that persist game modes through some other channel.

use async_trait::async_trait;
use itertools::Itertools;
use tokio::sync::RwLock;

use super::{Error, GameModeStore, prepare_insert};
use crate::game_mode::{GameModeConfig, GameModeId};

/// A [`GameModeStore`] that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    game_modes: RwLock<Vec<GameModeConfig>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameModeStore for MemoryStore {
    async fn insert(&self, config: GameModeConfig) -> Result<GameModeConfig, Error> {
        let mut game_modes = self.game_modes.write().await;
        let stored = prepare_insert(&game_modes, config)?;
        game_modes.push(stored.clone());
        tracing::info!(id = %stored.id(), label = stored.label(), "stored game mode");
        Ok(stored)
    }

    async fn get(&self, id: GameModeId) -> Result<GameModeConfig, Error> {
        self.game_modes
            .read()
            .await
            .iter()
            .find(|stored| stored.id() == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn all(&self) -> Result<Vec<GameModeConfig>, Error> {
        Ok(self
            .game_modes
            .read()
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
            BoardSize::SixBySix,
            Duration::from_secs(300),
            MinWordLength::Four,
            ScoreType::WordLength,
            HintMode::Both,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.insert(create_test_config("One")).await.unwrap();
        let second = store.insert(create_test_config("Two")).await.unwrap();

        assert_eq!(first.id(), GameModeId::from(1));
        assert_eq!(second.id(), GameModeId::from(2));
    }

    #[tokio::test]
    async fn test_get_returns_stored_copy() {
        let store = MemoryStore::new();
        let stored = store.insert(create_test_config("Lookup")).await.unwrap();

        assert_eq!(store.get(stored.id()).await.unwrap(), stored);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryStore::new();
        let result = store.get(GameModeId::from(5)).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_insert_after_highest_id_keeps_ids_unique() {
        let store = MemoryStore::new();
        store
            .insert(create_test_config("Last").with_id(GameModeId::from(u64::MAX)))
            .await
            .unwrap();

        let result = store.insert(create_test_config("Next")).await;
        assert!(matches!(result, Err(Error::IdsExhausted)));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_all_is_ordered_by_id() {
        let store = MemoryStore::new();
        store
            .insert(create_test_config("Late").with_id(GameModeId::from(8)))
            .await
            .unwrap();
        store
            .insert(create_test_config("Early").with_id(GameModeId::from(3)))
            .await
            .unwrap();

        let labels = store
            .all()
            .await
            .unwrap()
            .iter()
            .map(|mode| mode.label().to_owned())
            .collect_vec();
        assert_eq!(labels, vec!["Early", "Late"]);
    }
}
