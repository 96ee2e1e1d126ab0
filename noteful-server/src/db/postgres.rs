//! PostgreSQL repositories for folders and notes

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{DbError, Repository};
use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

/// Repository backed by a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Repository<Folder> for PgRepository {
    async fn list(&self) -> Result<Vec<Folder>, DbError> {
        let folders = sqlx::query_as::<_, Folder>("SELECT id, name FROM noteful_folders ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(folders)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Folder>, DbError> {
        let folder =
            sqlx::query_as::<_, Folder>("SELECT id, name FROM noteful_folders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(folder)
    }

    async fn insert(&self, new: NewFolder) -> Result<Folder, DbError> {
        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO noteful_folders (name) VALUES ($1) RETURNING id, name",
        )
        .bind(new.name)
        .fetch_one(&self.pool)
        .await?;
        Ok(folder)
    }

    async fn update_fields(&self, id: i32, patch: FolderPatch) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE noteful_folders SET name = $1 WHERE id = $2")
            .bind(patch.name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM noteful_folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl Repository<Note> for PgRepository {
    async fn list(&self) -> Result<Vec<Note>, DbError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, name, modified, folderid, content FROM noteful_notes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Note>, DbError> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, name, modified, folderid, content FROM noteful_notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn insert(&self, new: NewNote) -> Result<Note, DbError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO noteful_notes (name, modified, folderid, content)
            VALUES ($1, COALESCE($2, now()), $3, $4)
            RETURNING id, name, modified, folderid, content
            "#,
        )
        .bind(new.name)
        .bind(new.modified)
        .bind(new.folderid)
        .bind(new.content)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    /// Only the columns present in the patch appear in the SET clause.
    async fn update_fields(&self, id: i32, patch: NotePatch) -> Result<u64, DbError> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE noteful_notes SET ");
        {
            let mut set = query.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(modified) = patch.modified {
                set.push("modified = ").push_bind_unseparated(modified);
            }
            if let Some(folderid) = patch.folderid {
                set.push("folderid = ").push_bind_unseparated(folderid);
            }
            if let Some(content) = patch.content {
                set.push("content = ").push_bind_unseparated(content);
            }
        }
        query.push(" WHERE id = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM noteful_notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
