//! In-process repository with the same store-side rules as the schema
//!
//! Ids are sequential from 1, notes must reference an existing folder, and
//! deleting a folder removes its notes.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{DbError, Repository};
use crate::models::{Folder, FolderPatch, NewFolder, NewNote, Note, NotePatch};

#[derive(Debug, Default)]
struct Tables {
    folders: BTreeMap<i32, Folder>,
    notes: BTreeMap<i32, Note>,
    folder_seq: i32,
    note_seq: i32,
}

impl Tables {
    fn check_folder(&self, folderid: i32) -> Result<(), DbError> {
        if self.folders.contains_key(&folderid) {
            Ok(())
        } else {
            Err(DbError::ForeignKey {
                column: "folderid",
                value: folderid,
            })
        }
    }
}

/// Repository holding folders and notes in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Folder> for MemoryRepository {
    async fn list(&self) -> Result<Vec<Folder>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.folders.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Folder>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.folders.get(&id).cloned())
    }

    async fn insert(&self, new: NewFolder) -> Result<Folder, DbError> {
        let mut tables = self.tables.write().await;
        tables.folder_seq += 1;
        let folder = Folder {
            id: tables.folder_seq,
            name: new.name,
        };
        tables.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn update_fields(&self, id: i32, patch: FolderPatch) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        match tables.folders.get_mut(&id) {
            Some(folder) => {
                folder.name = patch.name;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        if tables.folders.remove(&id).is_none() {
            return Ok(0);
        }
        tables.notes.retain(|_, note| note.folderid != id);
        Ok(1)
    }
}

#[async_trait]
impl Repository<Note> for MemoryRepository {
    async fn list(&self) -> Result<Vec<Note>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.notes.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Note>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.notes.get(&id).cloned())
    }

    async fn insert(&self, new: NewNote) -> Result<Note, DbError> {
        let mut tables = self.tables.write().await;
        tables.check_folder(new.folderid)?;

        tables.note_seq += 1;
        let note = Note {
            id: tables.note_seq,
            name: new.name,
            modified: new.modified.unwrap_or_else(Utc::now),
            folderid: new.folderid,
            content: new.content,
        };
        tables.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update_fields(&self, id: i32, patch: NotePatch) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        if let Some(folderid) = patch.folderid {
            tables.check_folder(folderid)?;
        }

        let Some(note) = tables.notes.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(name) = patch.name {
            note.name = name;
        }
        if let Some(modified) = patch.modified {
            note.modified = modified;
        }
        if let Some(folderid) = patch.folderid {
            note.folderid = folderid;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let mut tables = self.tables.write().await;
        Ok(u64::from(tables.notes.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(folderid: i32) -> NewNote {
        NewNote {
            name: "note".into(),
            modified: None,
            folderid,
            content: "body".into(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let repo = MemoryRepository::new();
        let a = Repository::<Folder>::insert(&repo, NewFolder { name: "a".into() })
            .await
            .unwrap();
        let b = Repository::<Folder>::insert(&repo, NewFolder { name: "b".into() })
            .await
            .unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let note = Repository::<Note>::insert(&repo, new_note(a.id)).await.unwrap();
        assert_eq!(note.id, 1);
    }

    #[tokio::test]
    async fn note_requires_existing_folder() {
        let repo = MemoryRepository::new();
        let err = Repository::<Note>::insert(&repo, new_note(42))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::ForeignKey {
                column: "folderid",
                value: 42
            }
        ));
    }

    #[tokio::test]
    async fn folder_delete_cascades_to_notes() {
        let repo = MemoryRepository::new();
        let folder = Repository::<Folder>::insert(&repo, NewFolder { name: "a".into() })
            .await
            .unwrap();
        let note = Repository::<Note>::insert(&repo, new_note(folder.id))
            .await
            .unwrap();

        assert_eq!(Repository::<Folder>::delete(&repo, folder.id).await.unwrap(), 1);
        assert!(Repository::<Note>::get_by_id(&repo, note.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_rows_affect_nothing() {
        let repo = MemoryRepository::new();
        assert_eq!(Repository::<Folder>::delete(&repo, 7).await.unwrap(), 0);
        assert_eq!(
            Repository::<Note>::update_fields(
                &repo,
                7,
                NotePatch {
                    name: Some("x".into()),
                    ..Default::default()
                }
            )
            .await
            .unwrap(),
            0
        );
    }
}
