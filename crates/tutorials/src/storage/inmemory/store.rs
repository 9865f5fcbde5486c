//! In-memory table store implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use tutorials_core::storage::{
    validate_batch, ContinuationToken, Page, Result, ScanQuery, StoreError, TutorialStore,
};
use tutorials_core::tutorial::{merge_entity, EntityKey, TutorialEntity};

use crate::config::DEFAULT_PAGE_SIZE;

type RowKey = (String, String);

/// In-memory table store.
///
/// Scans are served in pages of `page_size` rows with continuation tokens,
/// mirroring how the hosted table service pages large partitions.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    rows: Arc<RwLock<BTreeMap<RowKey, TutorialEntity>>>,
    page_size: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new empty store with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates a new empty store that returns at most `page_size` rows per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
        }
    }

    /// Number of rows currently stored, across all partitions.
    #[cfg(test)]
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn row_key(key: &EntityKey) -> RowKey {
    (key.partition_key.clone(), key.row_key.clone())
}

#[async_trait]
impl TutorialStore for InMemoryStore {
    async fn point_lookup(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TutorialEntity>> {
        let rows = self.rows.read().await;
        Ok(rows
            .get(&(partition_key.to_string(), row_key.to_string()))
            .cloned())
    }

    async fn query_page(
        &self,
        query: &ScanQuery,
        continuation: Option<ContinuationToken>,
    ) -> Result<Page> {
        let rows = self.rows.read().await;

        let start = match continuation {
            Some(token) => (token.next_partition_key, token.next_row_key),
            None => (query.partition_key.clone(), String::new()),
        };

        let mut matching = rows
            .range(start..)
            .take_while(|(key, _)| key.0 == query.partition_key)
            .filter(|(key, _)| query.matches(&key.0, &key.1));

        let items: Vec<TutorialEntity> = matching
            .by_ref()
            .take(self.page_size)
            .map(|(_, entity)| entity.clone())
            .collect();

        let continuation = matching.next().map(|(key, _)| ContinuationToken {
            next_partition_key: key.0.clone(),
            next_row_key: key.1.clone(),
        });

        Ok(Page {
            items,
            continuation,
        })
    }

    async fn upsert(&self, entity: &TutorialEntity) -> Result<TutorialEntity> {
        let mut rows = self.rows.write().await;
        let key = row_key(&entity.key());

        let stored = match rows.get(&key) {
            Some(existing) => merge_entity(existing, entity),
            None => entity.clone(),
        };

        rows.insert(key, stored.clone());
        Ok(stored)
    }

    async fn batch_delete(&self, keys: &[EntityKey]) -> Result<()> {
        validate_batch(keys)?;

        let mut rows = self.rows.write().await;
        for key in keys {
            rows.remove(&row_key(key));
        }
        Ok(())
    }

    async fn delete(&self, key: &EntityKey) -> Result<()> {
        let mut rows = self.rows.write().await;
        if rows.remove(&row_key(key)).is_none() {
            return Err(StoreError::NotFound {
                entity_type: "Tutorial",
                id: key.row_key.clone(),
            });
        }
        Ok(())
    }
}
