//! The pieces that differ between the folder and note controllers

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::state::AppState;
use crate::db::{Record, Repository};
use crate::models::ValidationError;

/// A resource served by the generic CRUD handlers.
pub trait Resource: Record + Clone {
    /// Capitalized name used in messages, e.g. "Folder not found".
    const LABEL: &'static str;

    /// Wire representation with untrusted text escaped.
    type Response: Serialize + Send;
    type CreateBody: DeserializeOwned + Default + Send;
    type UpdateBody: DeserializeOwned + Default + Send;

    fn id(&self) -> i32;

    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>>;

    fn to_response(&self) -> Self::Response;

    fn validate_create(body: Self::CreateBody) -> Result<Self::New, ValidationError>;

    fn validate_update(body: Self::UpdateBody) -> Result<Self::Patch, ValidationError>;
}
