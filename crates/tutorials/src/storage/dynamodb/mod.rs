//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`TutorialStore`]
//! using `aws-sdk-dynamodb`. Scans map to `Query` with continuation through
//! `ExclusiveStartKey`, upserts to `UpdateItem`, and batch deletes to a single
//! `TransactWriteItems` request.
//!
//! [`TutorialStore`]: tutorials_core::storage::TutorialStore

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
