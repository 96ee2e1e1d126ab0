//! CRUD handlers shared by every resource
//!
//! Routes instantiate these per resource, e.g. `list::<Folder>`. Validation
//! runs before any store call, and the `Loaded` extractor runs before the
//! body is read, so a missing record wins over a bad body.

use axum::extract::{OriginalUri, State};
use axum::http::header::{HeaderName, LOCATION};
use axum::http::StatusCode;
use axum::Json;

use super::error::ApiError;
use super::extractors::{JsonBody, Loaded};
use super::resource::Resource;
use super::state::AppState;
use crate::models::ValidationError;

fn rejected(e: ValidationError) -> ApiError {
    tracing::error!("{}", e);
    ApiError::Validation(e)
}

/// GET /api/{resources}
pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Response>>, ApiError> {
    let records = R::repository(&state).list().await?;
    Ok(Json(records.iter().map(R::to_response).collect()))
}

/// POST /api/{resources}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    JsonBody(body): JsonBody<R::CreateBody>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<R::Response>), ApiError> {
    let new = R::validate_create(body).map_err(rejected)?;
    let record = R::repository(&state).insert(new).await?;
    tracing::info!("{} with id {} created", R::LABEL, record.id());

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), record.id());
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(record.to_response()),
    ))
}

/// GET /api/{resources}/{id}
pub async fn get<R: Resource>(Loaded(record): Loaded<R>) -> Json<R::Response> {
    Json(record.to_response())
}

/// PATCH /api/{resources}/{id}
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Loaded(record): Loaded<R>,
    JsonBody(body): JsonBody<R::UpdateBody>,
) -> Result<StatusCode, ApiError> {
    let patch = R::validate_update(body).map_err(rejected)?;
    let affected = R::repository(&state)
        .update_fields(record.id(), patch)
        .await?;
    tracing::debug!(affected, "{} with id {} updated", R::LABEL, record.id());
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/{resources}/{id}
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Loaded(record): Loaded<R>,
) -> Result<StatusCode, ApiError> {
    let affected = R::repository(&state).delete(record.id()).await?;
    tracing::info!(affected, "{} with id {} deleted", R::LABEL, record.id());
    Ok(StatusCode::NO_CONTENT)
}
