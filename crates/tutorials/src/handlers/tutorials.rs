use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use tutorials_core::tutorial::{
    CreateTutorialRequest, Tutorial, TutorialError, UpdateTutorialRequest,
};

use crate::{
    handlers::{error::HttpError, AppError},
    service::ServiceError,
    state::AppState,
};

/// Query parameters for the title search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
}

/// List all tutorials (GET /api/tutorials).
pub async fn list_tutorials(State(state): State<AppState>) -> Result<Json<Vec<Tutorial>>, AppError> {
    let tutorials = state.tutorials.list().await?;

    if tutorials.is_empty() {
        return Err(HttpError::not_found("No Tutorials Found").into());
    }

    Ok(Json(tutorials))
}

/// Get the tutorials stored under an id (GET /api/tutorials/{id}).
pub async fn get_tutorial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Tutorial>>, AppError> {
    let tutorials = state.tutorials.get_by_id(&id).await?;

    if tutorials.is_empty() {
        return Err(HttpError::not_found(format!("No Tutorial Found with id - {id}")).into());
    }

    Ok(Json(tutorials))
}

/// Create a tutorial (POST /api/tutorials).
pub async fn create_tutorial(
    State(state): State<AppState>,
    payload: Result<Json<CreateTutorialRequest>, JsonRejection>,
) -> Result<Json<Tutorial>, AppError> {
    let Json(request) = payload.map_err(HttpError::from)?;

    match state.tutorials.create(request).await {
        Ok(tutorial) => Ok(Json(tutorial)),
        Err(ServiceError::Store(_)) => Err(HttpError::bad_request("Failed to add Tutorial").into()),
        Err(err) => Err(err.into()),
    }
}

/// Update a tutorial by id (PUT /api/tutorials/{id}).
pub async fn update_tutorial(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTutorialRequest>, JsonRejection>,
) -> Result<Json<Tutorial>, AppError> {
    let Json(request) = payload.map_err(HttpError::from)?;

    match state.tutorials.update(&id, request).await {
        Ok(tutorial) => Ok(Json(tutorial)),
        Err(ServiceError::Store(_)) => {
            Err(HttpError::bad_request("Failed to update Tutorial").into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Delete a tutorial by id (DELETE /api/tutorials/{id}).
pub async fn delete_tutorial(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.tutorials.delete_by_id(&id).await?;
    Ok(StatusCode::OK)
}

/// Delete every tutorial (DELETE /api/tutorials).
pub async fn delete_all_tutorials(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    match state.tutorials.delete_all().await {
        Ok(report) => {
            tracing::info!(deleted = report.deleted, batches = report.batches, "Deleted all tutorials");
            Ok(StatusCode::OK)
        }
        // A failed scan deleted nothing.
        Err(ServiceError::Store(source)) => Err(ServiceError::PartialDelete {
            deleted: 0,
            batches: 0,
            source,
        }
        .into()),
        Err(err) => Err(err.into()),
    }
}

/// Find tutorials by title (GET /api/tutorials/search?title=).
///
/// Also mounted as `/api/tutorials/search/{segment}`; the segment is ignored.
pub async fn search_tutorials(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Tutorial>>, AppError> {
    let title = params
        .title
        .filter(|title| !title.is_empty())
        .ok_or(ServiceError::Validation(TutorialError::MissingTitle))?;

    let tutorials = state.tutorials.search_by_title(&title).await?;

    if tutorials.is_empty() {
        return Err(
            HttpError::not_found(format!("No Tutorial Found with title - {title}")).into(),
        );
    }

    Ok(Json(tutorials))
}
