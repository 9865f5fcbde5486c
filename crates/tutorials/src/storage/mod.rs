//! Storage backend implementations.
//!
//! The store is selected at startup from the connection string:
//! - `memory://` uses [`inmemory::InMemoryStore`]
//! - `dynamodb://<table>` uses `dynamodb::DynamoDbStore` (requires the `dynamodb` feature)

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod inmemory;

use std::sync::Arc;

use tutorials_core::storage::TutorialStore;

use crate::config::StorageConfig;

/// Builds the table store described by the configuration.
pub async fn connect(config: &StorageConfig) -> anyhow::Result<Arc<dyn TutorialStore>> {
    match config {
        StorageConfig::InMemory { page_size } => {
            tracing::info!(page_size, "Using in-memory table store");
            Ok(Arc::new(inmemory::InMemoryStore::with_page_size(*page_size)))
        }
        #[cfg(feature = "dynamodb")]
        StorageConfig::DynamoDb {
            table_name,
            region,
            endpoint_url,
        } => {
            tracing::info!(
                table = %table_name,
                region = ?region,
                endpoint = ?endpoint_url,
                "Using DynamoDB table store"
            );
            let store =
                dynamodb::DynamoDbStore::connect(table_name, region.clone(), endpoint_url.clone())
                    .await;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "dynamodb"))]
        StorageConfig::DynamoDb { table_name, .. } => {
            anyhow::bail!(
                "DynamoDB table {table_name} requested but the `dynamodb` feature is not enabled"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorials_core::storage::ScanQuery;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let store = connect(&StorageConfig::InMemory { page_size: 5 })
            .await
            .unwrap();

        let rows = store.scan(&ScanQuery::tutorials()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[cfg(not(feature = "dynamodb"))]
    #[tokio::test]
    async fn test_connect_dynamodb_without_feature() {
        let result = connect(&StorageConfig::DynamoDb {
            table_name: "Tutorials".to_string(),
            region: None,
            endpoint_url: None,
        })
        .await;

        assert!(result.is_err());
    }
}
