//! API request types for tutorial operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use crate::serde::deserialize_optional_string;

use super::error::TutorialError;
use super::types::Tutorial;

/// Request payload for creating a new tutorial.
///
/// `title` is optional at the wire level so that a missing title surfaces as a
/// validation error instead of a deserialization failure. Any `uniqueId` sent
/// by the client is ignored; ids are assigned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl CreateTutorialRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            published: None,
        }
    }

    /// Set the tutorial description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the published flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Checks that a non-blank title is present.
    pub fn validate(&self) -> Result<(), TutorialError> {
        match &self.title {
            None => Err(TutorialError::MissingTitle),
            Some(title) if title.trim().is_empty() => Err(TutorialError::EmptyTitle),
            Some(_) => Ok(()),
        }
    }

    /// Validates the request and converts it into a tutorial with the given id.
    pub fn into_tutorial(self, unique_id: i64) -> Result<Tutorial, TutorialError> {
        self.validate()?;

        Ok(Tutorial {
            unique_id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            published: self.published.unwrap_or(false),
        })
    }
}

/// Request payload for updating a tutorial.
///
/// Only the fields present in the payload change; an absent `published` keeps
/// the stored value while an explicit `false` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorialRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl UpdateTutorialRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tutorial title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tutorial description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the published flag.
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    /// Checks that a provided title is not blank.
    pub fn validate(&self) -> Result<(), TutorialError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err(TutorialError::EmptyTitle),
            _ => Ok(()),
        }
    }

    /// Apply updates to an existing tutorial.
    ///
    /// The id is never touched.
    pub fn apply_to(self, tutorial: &mut Tutorial) {
        if let Some(title) = self.title {
            tutorial.title = title;
        }
        if let Some(description) = self.description {
            tutorial.description = Some(description);
        }
        if let Some(published) = self.published {
            tutorial.published = published;
        }
    }
}
