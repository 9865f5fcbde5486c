use std::sync::Arc;

use tutorials_core::storage::{ScanQuery, StoreError, TutorialStore, MAX_BATCH_SIZE};
use tutorials_core::tutorial::{
    delete_batches, id_rows, into_tutorials, keys, next_id, parse_id, CreateTutorialRequest,
    EntityKey, Tutorial, TutorialEntity, UpdateTutorialRequest,
};

use super::ServiceError;

type Result<T> = std::result::Result<T, ServiceError>;

/// Outcome of a completed delete-all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteAllReport {
    /// Rows removed, counting both the id row and the title row of each tutorial.
    pub deleted: usize,
    /// Batch requests sent to the store.
    pub batches: usize,
}

/// Tutorial operations over the dual-keyed rows of the `Tutorial` partition.
///
/// Every tutorial is written twice, once under its id and once under its
/// title. Updates and deletes by id only touch the id row, so a title row can
/// outlive or disagree with its id row.
#[derive(Clone)]
pub struct TutorialService {
    store: Arc<dyn TutorialStore>,
}

fn log_store_error(operation: &'static str) -> impl Fn(&StoreError) {
    move |err: &StoreError| tracing::error!(error = %err, operation, "Table store request failed")
}

impl TutorialService {
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn TutorialStore> {
        &self.store
    }

    async fn scan(&self, query: ScanQuery, operation: &'static str) -> Result<Vec<TutorialEntity>> {
        Ok(self
            .store
            .scan(&query)
            .await
            .inspect_err(log_store_error(operation))?)
    }

    /// Returns every tutorial, read from the id rows.
    pub async fn list(&self) -> Result<Vec<Tutorial>> {
        tracing::info!("Get All Tutorials");
        let rows = self.scan(ScanQuery::tutorials(), "list").await?;
        Ok(into_tutorials(id_rows(rows)))
    }

    /// Returns the tutorials stored under the given id. Empty when there is none.
    pub async fn get_by_id(&self, id: &str) -> Result<Vec<Tutorial>> {
        let unique_id = parse_id(id)?;
        tracing::info!(unique_id, "Get Tutorial By Id");

        let query = ScanQuery::tutorials().with_row_key(keys::id_row_key(unique_id));
        let rows = self.scan(query, "get_by_id").await?;
        Ok(into_tutorials(rows))
    }

    /// Computes the id the next created tutorial will get.
    ///
    /// Two concurrent creates can observe the same value; the later write then
    /// merges into the earlier tutorial's id row.
    pub async fn next_id(&self) -> Result<i64> {
        let rows = self.scan(ScanQuery::tutorials(), "next_id").await?;
        Ok(next_id(rows.iter().map(|row| row.row_key.as_str()))?)
    }

    /// Creates a tutorial, writing its id row then its title row.
    ///
    /// A failure on the title row leaves the id row in place.
    pub async fn create(&self, request: CreateTutorialRequest) -> Result<Tutorial> {
        tracing::info!("Add a Tutorial");
        request.validate()?;

        let unique_id = self.next_id().await?;
        let tutorial = request.into_tutorial(unique_id)?;

        let stored = self
            .store
            .upsert(&TutorialEntity::id_row(tutorial.clone()))
            .await
            .inspect_err(log_store_error("create"))?;
        self.store
            .upsert(&TutorialEntity::title_row(tutorial))
            .await
            .inspect_err(log_store_error("create"))?;

        tracing::debug!(unique_id, title = %stored.tutorial.title, "Tutorial added");
        Ok(stored.into_tutorial())
    }

    /// Applies the present fields of `request` to the id row of tutorial `id`.
    pub async fn update(&self, id: &str, request: UpdateTutorialRequest) -> Result<Tutorial> {
        let unique_id = parse_id(id)?;
        tracing::info!(unique_id, "Update a Tutorial");
        request.validate()?;

        let mut entity = self
            .store
            .point_lookup(keys::PARTITION_KEY, &keys::id_row_key(unique_id))
            .await
            .inspect_err(log_store_error("update"))?
            .ok_or_else(|| ServiceError::NotFound("Tutorial Not Found".to_string()))?;

        request.apply_to(&mut entity.tutorial);

        let stored = self
            .store
            .upsert(&entity)
            .await
            .inspect_err(log_store_error("update"))?;
        Ok(stored.into_tutorial())
    }

    /// Deletes the id row of tutorial `id`. The title row is left behind.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let unique_id = parse_id(id)?;
        tracing::info!(unique_id, "Delete a Tutorial");

        let key = EntityKey::id_row(unique_id);
        let existing = self
            .store
            .point_lookup(&key.partition_key, &key.row_key)
            .await
            .inspect_err(log_store_error("delete_by_id"))?;
        if existing.is_none() {
            return Err(ServiceError::NotFound(format!(
                "No Tutorial Found with id - {unique_id}"
            )));
        }

        self.store
            .delete(&key)
            .await
            .inspect_err(log_store_error("delete_by_id"))?;
        Ok(())
    }

    /// Deletes every row of the partition, id rows and title rows alike, in
    /// sequential batches of at most [`MAX_BATCH_SIZE`].
    ///
    /// Stops at the first failed batch and reports how far it got.
    pub async fn delete_all(&self) -> Result<DeleteAllReport> {
        tracing::info!("Delete All Tutorials");

        let rows = self.scan(ScanQuery::tutorials(), "delete_all").await?;
        let keys: Vec<EntityKey> = rows.iter().map(TutorialEntity::key).collect();

        let mut report = DeleteAllReport::default();
        for batch in delete_batches(&keys, MAX_BATCH_SIZE) {
            if let Err(source) = self.store.batch_delete(batch).await {
                tracing::error!(
                    error = %source,
                    deleted = report.deleted,
                    batches = report.batches,
                    "Delete all stopped part way"
                );
                return Err(ServiceError::PartialDelete {
                    deleted: report.deleted,
                    batches: report.batches,
                    source,
                });
            }
            report.deleted += batch.len();
            report.batches += 1;
        }

        tracing::debug!(deleted = report.deleted, batches = report.batches, "Deleted all tutorials");
        Ok(report)
    }

    /// Returns the tutorials stored under the given title row.
    pub async fn search_by_title(&self, title: &str) -> Result<Vec<Tutorial>> {
        tracing::info!(title, "Find Tutorial By Title");

        let query = ScanQuery::tutorials().with_row_key(keys::title_row_key(title));
        let rows = self.scan(query, "search_by_title").await?;
        Ok(into_tutorials(rows))
    }
}
