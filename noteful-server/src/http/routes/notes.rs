//! Note endpoints

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::db::Repository;
use crate::http::handlers;
use crate::http::resource::Resource;
use crate::http::state::AppState;
use crate::models::{NewNote, Note, NotePatch, NoteRequest, ValidationError};
use crate::sanitize::escape;

/// Note response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub id: i32,
    pub name: String,
    /// RFC 3339 with millisecond precision, e.g. `2019-01-03T00:00:00.000Z`
    pub modified: String,
    pub folderid: i32,
    pub content: String,
}

impl From<&Note> for NoteResponse {
    fn from(n: &Note) -> Self {
        Self {
            id: n.id,
            name: escape(&n.name),
            modified: n.modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            folderid: n.folderid,
            content: escape(&n.content),
        }
    }
}

impl Resource for Note {
    const LABEL: &'static str = "Note";

    type Response = NoteResponse;
    type CreateBody = NoteRequest;
    type UpdateBody = NoteRequest;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>> {
        &state.notes
    }

    fn to_response(&self) -> NoteResponse {
        NoteResponse::from(self)
    }

    fn validate_create(body: NoteRequest) -> Result<NewNote, ValidationError> {
        body.validate_create()
    }

    fn validate_update(body: NoteRequest) -> Result<NotePatch, ValidationError> {
        body.validate_update()
    }
}

/// Note routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notes",
            get(handlers::list::<Note>).post(handlers::create::<Note>),
        )
        .route(
            "/api/notes/{id}",
            get(handlers::get::<Note>)
                .patch(handlers::update::<Note>)
                .delete(handlers::delete::<Note>),
        )
}
