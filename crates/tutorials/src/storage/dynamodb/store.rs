//! DynamoDB table store implementation.
//!
//! Implements `TutorialStore` from `tutorials_core::storage` on a DynamoDB table
//! whose hash key is `PartitionKey` and range key is `RowKey`.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, Delete, ReturnValue, TransactWriteItem};
use aws_sdk_dynamodb::Client;

use tutorials_core::storage::{
    validate_batch, ContinuationToken, Page, Result, ScanQuery, StoreError, TutorialStore,
};
use tutorials_core::tutorial::{EntityKey, TutorialEntity};

use super::conversions::{
    item_to_entity, key_to_item, key_to_token, token_to_key, upsert_expression, PARTITION_KEY,
    ROW_KEY,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_query_error, map_transact_write_error,
    map_update_item_error,
};

/// DynamoDB-based table store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store using the AWS SDK default credential chain.
    ///
    /// `region` and `endpoint_url` override the SDK defaults when set; the
    /// endpoint is mostly useful for DynamoDB Local.
    pub async fn connect(
        table_name: impl Into<String>,
        region: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        if let Some(endpoint_url) = endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        Self::new(Client::new(&config), table_name)
    }
}

#[async_trait]
impl TutorialStore for DynamoDbStore {
    async fn point_lookup(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<TutorialEntity>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(&EntityKey::new(partition_key, row_key))))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_entity(&item)?)),
            None => Ok(None),
        }
    }

    async fn query_page(
        &self,
        query: &ScanQuery,
        continuation: Option<ContinuationToken>,
    ) -> Result<Page> {
        let request = self
            .client
            .query()
            .table_name(&self.table_name)
            .expression_attribute_names("#pk", PARTITION_KEY)
            .expression_attribute_values(":pk", AttributeValue::S(query.partition_key.clone()))
            .set_exclusive_start_key(continuation.as_ref().map(token_to_key));

        let request = match &query.row_key {
            Some(row_key) => request
                .key_condition_expression("#pk = :pk AND #rk = :rk")
                .expression_attribute_names("#rk", ROW_KEY)
                .expression_attribute_values(":rk", AttributeValue::S(row_key.clone())),
            None => request.key_condition_expression("#pk = :pk"),
        };

        let result = request.send().await.map_err(map_query_error)?;

        let items = result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_entity)
            .collect::<Result<Vec<_>>>()?;
        let continuation = result
            .last_evaluated_key
            .as_ref()
            .map(key_to_token)
            .transpose()?;

        Ok(Page {
            items,
            continuation,
        })
    }

    async fn upsert(&self, entity: &TutorialEntity) -> Result<TutorialEntity> {
        let expr = upsert_expression(entity);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(&entity.key())))
            .update_expression(expr.update_expression)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        match result.attributes {
            Some(item) => item_to_entity(&item),
            None => Ok(entity.clone()),
        }
    }

    async fn batch_delete(&self, keys: &[EntityKey]) -> Result<()> {
        validate_batch(keys)?;
        if keys.is_empty() {
            return Ok(());
        }

        let items = keys
            .iter()
            .map(|key| {
                let delete = Delete::builder()
                    .table_name(&self.table_name)
                    .set_key(Some(key_to_item(key)))
                    .build()
                    .map_err(|e| StoreError::InvalidData(e.to_string()))?;
                Ok(TransactWriteItem::builder().delete(delete).build())
            })
            .collect::<Result<Vec<_>>>()?;

        self.client
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await
            .map_err(map_transact_write_error)?;

        Ok(())
    }

    async fn delete(&self, key: &EntityKey) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(key_to_item(key)))
            .condition_expression("attribute_exists(#pk)")
            .expression_attribute_names("#pk", PARTITION_KEY)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, key.row_key.clone()))?;

        Ok(())
    }
}
