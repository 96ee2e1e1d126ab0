//! Persistence contract shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;

use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("foreign key violation: {column} {value} does not reference an existing row")]
    ForeignKey { column: &'static str, value: i32 },
}

/// A stored record type together with its insert and update shapes.
pub trait Record: Send + Sync + 'static {
    type New: Send + 'static;
    type Patch: Send + 'static;
}

impl Record for Folder {
    type New = NewFolder;
    type Patch = FolderPatch;
}

impl Record for Note {
    type New = NewNote;
    type Patch = NotePatch;
}

/// CRUD operations for one record type.
///
/// `update_fields` and `delete` return the number of affected rows.
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, DbError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<R>, DbError>;

    /// Insert and return the stored record, including its generated id.
    async fn insert(&self, new: R::New) -> Result<R, DbError>;

    async fn update_fields(&self, id: i32, patch: R::Patch) -> Result<u64, DbError>;

    async fn delete(&self, id: i32) -> Result<u64, DbError>;
}
