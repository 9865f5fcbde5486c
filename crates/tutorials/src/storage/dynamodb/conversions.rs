//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and tutorial rows.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use tutorials_core::storage::{ContinuationToken, StoreError};
use tutorials_core::tutorial::{EntityKey, Tutorial, TutorialEntity};

// ============================================================================
// Attribute names
// ============================================================================

pub const PARTITION_KEY: &str = "PartitionKey";
pub const ROW_KEY: &str = "RowKey";
pub const UNIQUE_ID: &str = "UniqueId";
pub const TITLE: &str = "Title";
pub const DESCRIPTION: &str = "Description";
pub const PUBLISHED: &str = "Published";

// ============================================================================
// Keys
// ============================================================================

/// Convert an entity key to a DynamoDB primary key map.
pub fn key_to_item(key: &EntityKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PARTITION_KEY.to_string(),
            AttributeValue::S(key.partition_key.clone()),
        ),
        (ROW_KEY.to_string(), AttributeValue::S(key.row_key.clone())),
    ])
}

/// Convert a continuation token to an `ExclusiveStartKey`.
pub fn token_to_key(token: &ContinuationToken) -> HashMap<String, AttributeValue> {
    key_to_item(&EntityKey::new(
        token.next_partition_key.clone(),
        token.next_row_key.clone(),
    ))
}

/// Convert a `LastEvaluatedKey` to a continuation token.
pub fn key_to_token(
    item: &HashMap<String, AttributeValue>,
) -> Result<ContinuationToken, StoreError> {
    Ok(ContinuationToken {
        next_partition_key: get_string(item, PARTITION_KEY)?,
        next_row_key: get_string(item, ROW_KEY)?,
    })
}

// ============================================================================
// Tutorial rows
// ============================================================================

/// Convert a DynamoDB item to a tutorial row.
pub fn item_to_entity(
    item: &HashMap<String, AttributeValue>,
) -> Result<TutorialEntity, StoreError> {
    Ok(TutorialEntity {
        partition_key: get_string(item, PARTITION_KEY)?,
        row_key: get_string(item, ROW_KEY)?,
        tutorial: Tutorial {
            unique_id: get_i64(item, UNIQUE_ID)?,
            title: get_string(item, TITLE)?,
            description: get_optional_string(item, DESCRIPTION),
            published: get_bool(item, PUBLISHED),
        },
    })
}

/// An `UpdateItem` expression that writes the non-null fields of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertExpression {
    pub update_expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build the insert-or-merge expression for a tutorial row.
///
/// A missing description is left out of the `SET` clause so the stored value
/// survives, which gives the merge semantics of the table service.
pub fn upsert_expression(entity: &TutorialEntity) -> UpsertExpression {
    let tutorial = &entity.tutorial;

    let mut fields = vec![
        (
            "uid",
            UNIQUE_ID,
            AttributeValue::N(tutorial.unique_id.to_string()),
        ),
        ("title", TITLE, AttributeValue::S(tutorial.title.clone())),
        ("published", PUBLISHED, AttributeValue::Bool(tutorial.published)),
    ];
    if let Some(description) = &tutorial.description {
        fields.push((
            "description",
            DESCRIPTION,
            AttributeValue::S(description.clone()),
        ));
    }

    let assignments: Vec<String> = fields
        .iter()
        .map(|(alias, _, _)| format!("#{alias} = :{alias}"))
        .collect();

    let names = fields
        .iter()
        .map(|(alias, name, _)| (format!("#{alias}"), name.to_string()))
        .collect();

    let values = fields
        .into_iter()
        .map(|(alias, _, value)| (format!(":{alias}"), value))
        .collect();

    UpsertExpression {
        update_expression: format!("SET {}", assignments.join(", ")),
        names,
        values,
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required integer attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, StoreError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    raw.parse()
        .map_err(|e| StoreError::Serialization(format!("Invalid number {}: {}", key, e)))
}

/// Get a boolean attribute, defaulting to false when absent.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> bool {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> HashMap<String, AttributeValue> {
        HashMap::from([
            (
                PARTITION_KEY.to_string(),
                AttributeValue::S("Tutorial".to_string()),
            ),
            (ROW_KEY.to_string(), AttributeValue::S("7".to_string())),
            (UNIQUE_ID.to_string(), AttributeValue::N("7".to_string())),
            (
                TITLE.to_string(),
                AttributeValue::S("Error handling".to_string()),
            ),
            (
                DESCRIPTION.to_string(),
                AttributeValue::S("thiserror and anyhow".to_string()),
            ),
            (PUBLISHED.to_string(), AttributeValue::Bool(true)),
        ])
    }

    #[test]
    fn test_item_to_entity() {
        let entity = item_to_entity(&sample_item()).unwrap();

        assert_eq!(entity.partition_key, "Tutorial");
        assert_eq!(entity.row_key, "7");
        assert_eq!(
            entity.tutorial,
            Tutorial::new(7, "Error handling")
                .with_description("thiserror and anyhow")
                .with_published(true)
        );
    }

    #[test]
    fn test_item_to_entity_optional_fields() {
        let mut item = sample_item();
        item.remove(DESCRIPTION);
        item.remove(PUBLISHED);

        let entity = item_to_entity(&item).unwrap();

        assert_eq!(entity.tutorial.description, None);
        assert!(!entity.tutorial.published);
    }

    #[test]
    fn test_item_to_entity_missing_title() {
        let mut item = sample_item();
        item.remove(TITLE);

        let result = item_to_entity(&item);

        assert_eq!(
            result,
            Err(StoreError::InvalidData(
                "Missing or invalid field: Title".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_entity_bad_number() {
        let mut item = sample_item();
        item.insert(UNIQUE_ID.to_string(), AttributeValue::N("7.5".to_string()));

        assert!(matches!(
            item_to_entity(&item),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_key_to_item() {
        let item = key_to_item(&EntityKey::new("Tutorial", "Intro"));

        assert_eq!(item.len(), 2);
        assert_eq!(item.get(PARTITION_KEY).unwrap().as_s().unwrap(), "Tutorial");
        assert_eq!(item.get(ROW_KEY).unwrap().as_s().unwrap(), "Intro");
    }

    #[test]
    fn test_continuation_token_conversion() {
        let token = ContinuationToken {
            next_partition_key: "Tutorial".to_string(),
            next_row_key: "42".to_string(),
        };

        let parsed = key_to_token(&token_to_key(&token)).unwrap();

        assert_eq!(parsed, token);
    }

    #[test]
    fn test_upsert_expression_without_description() {
        let entity = TutorialEntity::id_row(Tutorial::new(3, "Traits"));

        let expr = upsert_expression(&entity);

        assert_eq!(
            expr.update_expression,
            "SET #uid = :uid, #title = :title, #published = :published"
        );
        assert_eq!(expr.names.get("#uid").unwrap(), UNIQUE_ID);
        assert_eq!(expr.names.get("#title").unwrap(), TITLE);
        assert_eq!(expr.names.get("#published").unwrap(), PUBLISHED);
        assert!(!expr.names.contains_key("#description"));
        assert_eq!(expr.values.get(":uid").unwrap().as_n().unwrap(), "3");
        assert_eq!(expr.values.get(":title").unwrap().as_s().unwrap(), "Traits");
        assert!(!*expr.values.get(":published").unwrap().as_bool().unwrap());
    }

    #[test]
    fn test_upsert_expression_with_description() {
        let entity =
            TutorialEntity::title_row(Tutorial::new(3, "Traits").with_description("Generics"));

        let expr = upsert_expression(&entity);

        assert!(expr
            .update_expression
            .ends_with(", #description = :description"));
        assert_eq!(expr.names.get("#description").unwrap(), DESCRIPTION);
        assert_eq!(
            expr.values.get(":description").unwrap().as_s().unwrap(),
            "Generics"
        );
    }
}
