//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::resource::Resource;
use super::state::AppState;
use crate::models::ValidationError;

/// Record loaded from the `{id}` path segment before the handler runs.
///
/// A miss rejects the request with the resource's 404 and the handler never
/// executes. Ids that do not parse as integers cannot match and miss too.
pub struct Loaded<R>(pub R);

impl<R: Resource> FromRequestParts<AppState> for Loaded<R> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: R::LABEL,
            })?;

        let record = match raw_id.parse::<i32>() {
            Ok(id) => R::repository(state).get_by_id(id).await?,
            Err(_) => None,
        };

        match record {
            Some(record) => Ok(Self(record)),
            None => {
                tracing::error!("{} with id {} not found", R::LABEL, raw_id);
                Err(ApiError::NotFound {
                    resource: R::LABEL,
                })
            }
        }
    }
}

/// JSON request body with errors rendered in the API error shape.
///
/// A request without a JSON content type, or with an empty body, decodes as
/// the body type's default so field validation reports what is missing.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| malformed(e.body_text()))?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|e| malformed(e.body_text()))?;
        Ok(Self(value))
    }
}

fn malformed(detail: String) -> ApiError {
    tracing::debug!(%detail, "Rejected request body");
    ApiError::Validation(ValidationError::Malformed)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
