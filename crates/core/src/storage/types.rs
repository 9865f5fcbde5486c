use crate::tutorial::{keys, TutorialEntity};

/// Maximum number of operations a single batch request may carry.
pub const MAX_BATCH_SIZE: usize = 100;

/// A partition scan with an optional row key equality filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanQuery {
    pub partition_key: String,
    pub row_key: Option<String>,
}

impl ScanQuery {
    /// Scans every row of a partition.
    pub fn partition(partition_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: None,
        }
    }

    /// Scans the tutorial partition.
    pub fn tutorials() -> Self {
        Self::partition(keys::PARTITION_KEY)
    }

    /// Restricts the scan to rows whose row key equals `row_key`.
    pub fn with_row_key(mut self, row_key: impl Into<String>) -> Self {
        self.row_key = Some(row_key.into());
        self
    }

    /// Returns true if the given key pair satisfies this query.
    pub fn matches(&self, partition_key: &str, row_key: &str) -> bool {
        self.partition_key == partition_key
            && self.row_key.as_deref().is_none_or(|filter| filter == row_key)
    }
}

/// Opaque cursor pointing at the first row of the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken {
    pub next_partition_key: String,
    pub next_row_key: String,
}

/// One physical page of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<TutorialEntity>,
    pub continuation: Option<ContinuationToken>,
}
