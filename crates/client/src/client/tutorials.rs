//! Tutorial API operations.

use super::TutorialsClient;
use crate::error::Result;
use tutorials_core::tutorial::{CreateTutorialRequest, Tutorial, UpdateTutorialRequest};

impl TutorialsClient {
    /// List all tutorials.
    pub async fn get_all(&self) -> Result<Vec<Tutorial>> {
        let response = self.client.get(self.url("/api/tutorials")).send().await?;
        self.handle_response(response).await
    }

    /// Get the tutorials stored under an id.
    pub async fn get(&self, id: i64) -> Result<Vec<Tutorial>> {
        let response = self
            .client
            .get(self.url(&format!("/api/tutorials/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a new tutorial.
    pub async fn create(&self, req: &CreateTutorialRequest) -> Result<Tutorial> {
        let response = self
            .client
            .post(self.url("/api/tutorials"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Update a tutorial.
    pub async fn update(&self, id: i64, req: &UpdateTutorialRequest) -> Result<Tutorial> {
        let response = self
            .client
            .put(self.url(&format!("/api/tutorials/{}", id)))
            .json(req)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a tutorial by id.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/tutorials/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Delete every tutorial.
    pub async fn remove_all(&self) -> Result<()> {
        let response = self
            .client
            .delete(self.url("/api/tutorials"))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    /// Find tutorials by exact title.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Tutorial>> {
        let response = self
            .client
            .get(self.url("/api/tutorials/search/title"))
            .query(&[("title", title)])
            .send()
            .await?;
        self.handle_response(response).await
    }
}
