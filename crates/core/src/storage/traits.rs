use async_trait::async_trait;

use crate::tutorial::{EntityKey, TutorialEntity};

use super::{ContinuationToken, Page, Result, ScanQuery};

/// Partitioned key-value table holding tutorial rows.
///
/// Implementations perform no retries; every failure is returned to the
/// caller as a [`super::StoreError`].
#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// Reads a single row by its partition and row key.
    async fn point_lookup(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TutorialEntity>>;

    /// Fetches one physical page of a scan, resuming from `continuation`.
    async fn query_page(
        &self,
        query: &ScanQuery,
        continuation: Option<ContinuationToken>,
    ) -> Result<Page>;

    /// Runs a scan to completion, following continuation tokens until the
    /// store reports no further pages.
    async fn scan(&self, query: &ScanQuery) -> Result<Vec<TutorialEntity>> {
        let mut rows = Vec::new();
        let mut continuation = None;

        loop {
            let page = self.query_page(query, continuation).await?;
            rows.extend(page.items);

            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        Ok(rows)
    }

    /// Inserts the row, or merges its non-null fields into an existing row
    /// with the same keys. Returns the stored row.
    async fn upsert(&self, entity: &TutorialEntity) -> Result<TutorialEntity>;

    /// Deletes up to [`super::MAX_BATCH_SIZE`] rows of one partition in a
    /// single request. Rows that do not exist are ignored.
    async fn batch_delete(&self, keys: &[EntityKey]) -> Result<()>;

    /// Deletes a single row. Fails with `NotFound` if the row does not exist.
    async fn delete(&self, key: &EntityKey) -> Result<()>;
}

/// Checks the batch limits shared by every store implementation.
pub fn validate_batch(keys: &[EntityKey]) -> Result<()> {
    if keys.len() > super::MAX_BATCH_SIZE {
        return Err(super::StoreError::BatchTooLarge {
            size: keys.len(),
            max: super::MAX_BATCH_SIZE,
        });
    }

    if let Some(first) = keys.first() {
        if keys.iter().any(|k| k.partition_key != first.partition_key) {
            return Err(super::StoreError::InvalidData(
                "All operations in a batch must target the same partition".to_string(),
            ));
        }
    }

    Ok(())
}
