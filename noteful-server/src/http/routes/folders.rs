//! Folder endpoints

use std::sync::Arc;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::db::Repository;
use crate::http::handlers;
use crate::http::resource::Resource;
use crate::http::state::AppState;
use crate::models::{
    CreateFolderRequest, Folder, FolderPatch, NewFolder, UpdateFolderRequest, ValidationError,
};
use crate::sanitize::escape;

/// Folder response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderResponse {
    pub id: i32,
    pub name: String,
}

impl From<&Folder> for FolderResponse {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id,
            name: escape(&f.name),
        }
    }
}

impl Resource for Folder {
    const LABEL: &'static str = "Folder";

    type Response = FolderResponse;
    type CreateBody = CreateFolderRequest;
    type UpdateBody = UpdateFolderRequest;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(state: &AppState) -> &Arc<dyn Repository<Self>> {
        &state.folders
    }

    fn to_response(&self) -> FolderResponse {
        FolderResponse::from(self)
    }

    fn validate_create(body: CreateFolderRequest) -> Result<NewFolder, ValidationError> {
        body.validate()
    }

    fn validate_update(body: UpdateFolderRequest) -> Result<FolderPatch, ValidationError> {
        body.validate()
    }
}

/// Folder routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/folders",
            get(handlers::list::<Folder>).post(handlers::create::<Folder>),
        )
        .route(
            "/api/folders/{id}",
            get(handlers::get::<Folder>)
                .patch(handlers::update::<Folder>)
                .delete(handlers::delete::<Folder>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_escapes_name() {
        let folder = Folder {
            id: 3,
            name: "<b>Work</b>".into(),
        };
        let response = folder.to_response();
        assert_eq!(response.id, 3);
        assert_eq!(response.name, "&lt;b&gt;Work&lt;/b&gt;");
    }
}
