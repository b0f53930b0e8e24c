use crate::storage::RecordStore;
use async_graphql::dataloader::{DataLoader, Loader};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// DataLoader batching has-results probes for student-judged programs.
/// Every program rendered in one request collapses into a single store
/// query.
pub struct StudentResultsExistLoader {
    store: Arc<dyn RecordStore>,
}

impl StudentResultsExistLoader {
    pub fn new(store: Arc<dyn RecordStore>) -> DataLoader<Self> {
        DataLoader::new(Self { store }, tokio::spawn)
    }
}

#[async_trait]
impl Loader<Uuid> for StudentResultsExistLoader {
    type Value = bool;
    type Error = String;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let placed = self
            .store
            .get_program_ids_with_placed_results(keys)
            .await
            .map_err(|e| e.to_string())?;

        let mut map = HashMap::new();
        for id in keys {
            if placed.contains(id) {
                map.insert(*id, true);
            }
        }

        Ok(map)
    }
}

/// DataLoader batching has-results probes for General (team) programs.
pub struct TeamResultsExistLoader {
    store: Arc<dyn RecordStore>,
}

impl TeamResultsExistLoader {
    pub fn new(store: Arc<dyn RecordStore>) -> DataLoader<Self> {
        DataLoader::new(Self { store }, tokio::spawn)
    }
}

#[async_trait]
impl Loader<Uuid> for TeamResultsExistLoader {
    type Value = bool;
    type Error = String;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let placed = self
            .store
            .get_program_ids_with_placed_team_results(keys)
            .await
            .map_err(|e| e.to_string())?;

        let mut map = HashMap::new();
        for id in keys {
            if placed.contains(id) {
                map.insert(*id, true);
            }
        }

        Ok(map)
    }
}
