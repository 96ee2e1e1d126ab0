//! Schema migrations for folders and notes

use sqlx::PgPool;

use super::DbError;

/// Create the folder and note tables if they do not exist yet.
///
/// Deleting a folder cascades to its notes; that rule lives here in the
/// schema and nowhere in the request handlers.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running noteful migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS noteful_folders (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS noteful_notes (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            modified TIMESTAMPTZ NOT NULL DEFAULT now(),
            folderid INTEGER NOT NULL REFERENCES noteful_folders(id) ON DELETE CASCADE,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_noteful_notes_folderid ON noteful_notes(folderid)")
        .execute(pool)
        .await?;

    tracing::info!("Noteful migrations complete");
    Ok(())
}
