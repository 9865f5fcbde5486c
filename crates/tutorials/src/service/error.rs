use thiserror::Error;
use tutorials_core::storage::StoreError;
use tutorials_core::tutorial::TutorialError;

/// Errors returned by [`super::TutorialService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] TutorialError),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A delete-all stopped part way; `deleted` rows were already removed.
    #[error("Deleted {deleted} rows in {batches} batches before failing: {source}")]
    PartialDelete {
        deleted: usize,
        batches: usize,
        source: StoreError,
    },
}
