//! Pure functions for mapping store errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`StoreError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Conflict` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Throttled` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `Serialization` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
/// - `BatchTooLarge` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use tutorials_core::storage::{StoreError, store_error_to_status_code};
///
/// let error = StoreError::NotFound {
///     entity_type: "Tutorial",
///     id: "1".to_string(),
/// };
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::NotFound { .. } => 404,
        StoreError::Conflict(_) => 409,
        StoreError::ConnectionFailed(_) => 503,
        StoreError::Throttled(_) => 503,
        StoreError::QueryFailed(_) => 500,
        StoreError::Serialization(_) => 500,
        StoreError::InvalidData(_) => 400,
        StoreError::BatchTooLarge { .. } => 500,
    }
}
