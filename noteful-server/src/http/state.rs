//! Application state shared across handlers

use std::sync::Arc;

use crate::db::Repository;
use crate::models::{Folder, Note};

/// Repositories injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub folders: Arc<dyn Repository<Folder>>,
    pub notes: Arc<dyn Repository<Note>>,
}

impl AppState {
    /// Serve both resources from one backend.
    pub fn new<B>(backend: B) -> Self
    where
        B: Repository<Folder> + Repository<Note> + 'static,
    {
        let backend = Arc::new(backend);
        Self {
            folders: backend.clone(),
            notes: backend,
        }
    }

    pub fn from_parts(
        folders: Arc<dyn Repository<Folder>>,
        notes: Arc<dyn Repository<Note>>,
    ) -> Self {
        Self { folders, notes }
    }
}
