//! Folder records and request validation

use serde::Deserialize;
use sqlx::FromRow;

use super::field::{lenient, Field};
use super::validation::{Truthy, ValidationError};

/// Folder record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Folder {
    pub id: i32,
    pub name: String,
}

/// Folder ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
}

/// Fields written by a folder update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPatch {
    pub name: String,
}

/// POST /api/folders body
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<Field<String>>,
}

impl CreateFolderRequest {
    pub fn validate(self) -> Result<NewFolder, ValidationError> {
        match self.name {
            Some(name) if name.is_truthy() => Ok(NewFolder {
                name: name.into_inner(),
            }),
            _ => Err(ValidationError::NameRequired),
        }
    }
}

/// PATCH /api/folders/{id} body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFolderRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<Field<String>>,
}

impl UpdateFolderRequest {
    pub fn validate(self) -> Result<FolderPatch, ValidationError> {
        match self.name {
            Some(name) if name.is_truthy() => Ok(FolderPatch {
                name: name.into_inner(),
            }),
            _ => Err(ValidationError::UpdateNameRequired),
        }
    }
}
