use serde::{Deserialize, Serialize};

use super::keys;

/// A tutorial as exposed by the REST API.
///
/// The store-internal partition and row keys are deliberately not part of
/// this shape; see [`TutorialEntity`] for the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub unique_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

impl Tutorial {
    /// Creates an unpublished tutorial without a description.
    pub fn new(unique_id: i64, title: impl Into<String>) -> Self {
        Self {
            unique_id,
            title: title.into(),
            description: None,
            published: false,
        }
    }

    /// Sets the description for this tutorial.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the published flag for this tutorial.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// The (partition, row) pair addressing a single stored row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKey {
    pub partition_key: String,
    pub row_key: String,
}

impl EntityKey {
    pub fn new(partition_key: impl Into<String>, row_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            row_key: row_key.into(),
        }
    }

    /// Key of the id-keyed row for a tutorial id.
    pub fn id_row(unique_id: i64) -> Self {
        Self::new(keys::PARTITION_KEY, keys::id_row_key(unique_id))
    }
}

/// A tutorial row as held by the table store.
///
/// Every tutorial is stored twice under [`keys::PARTITION_KEY`]: once keyed by
/// its decimal id and once keyed by its title. Both rows carry the same field
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialEntity {
    pub partition_key: String,
    pub row_key: String,
    pub tutorial: Tutorial,
}

impl TutorialEntity {
    /// Builds the id-keyed row for a tutorial.
    pub fn id_row(tutorial: Tutorial) -> Self {
        Self {
            partition_key: keys::PARTITION_KEY.to_string(),
            row_key: keys::id_row_key(tutorial.unique_id),
            tutorial,
        }
    }

    /// Builds the title-keyed row for a tutorial.
    pub fn title_row(tutorial: Tutorial) -> Self {
        Self {
            partition_key: keys::PARTITION_KEY.to_string(),
            row_key: keys::title_row_key(&tutorial.title),
            tutorial,
        }
    }

    pub fn key(&self) -> EntityKey {
        EntityKey::new(self.partition_key.clone(), self.row_key.clone())
    }

    /// Returns true if this row is keyed by the tutorial id.
    pub fn is_id_row(&self) -> bool {
        keys::is_id_row_key(&self.row_key)
    }

    pub fn into_tutorial(self) -> Tutorial {
        self.tutorial
    }
}
