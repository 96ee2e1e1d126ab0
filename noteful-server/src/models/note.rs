//! Note records and request validation

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

use super::field::{lenient, Field};
use super::validation::{Truthy, ValidationError};

/// Note record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: i32,
    pub name: String,
    pub modified: DateTime<Utc>,
    pub folderid: i32,
    pub content: String,
}

/// Note ready for insertion. A missing `modified` is filled in by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub modified: Option<DateTime<Utc>>,
    pub folderid: i32,
    pub content: String,
}

/// Fields written by a note update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub name: Option<String>,
    pub modified: Option<DateTime<Utc>>,
    pub folderid: Option<i32>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.modified.is_none()
            && self.folderid.is_none()
            && self.content.is_none()
    }
}

/// Body shared by POST /api/notes and PATCH /api/notes/{id}
#[derive(Debug, Default, Deserialize)]
pub struct NoteRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<Field<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub modified: Option<Field<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub folderid: Option<Field<i32>>,
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<Field<String>>,
}

fn required<T>(field: Option<Field<T>>, name: &'static str) -> Result<T, ValidationError> {
    field
        .filter(|v| v.is_truthy())
        .map(Field::into_inner)
        .ok_or(ValidationError::Required { field: name })
}

impl NoteRequest {
    /// Check `name`, `folderid`, `content` in that order, failing on the first
    /// falsy one.
    pub fn validate_create(self) -> Result<NewNote, ValidationError> {
        let name = required(self.name, "name")?;
        let folderid = required(self.folderid, "folderid")?;
        let content = required(self.content, "content")?;

        Ok(NewNote {
            name,
            modified: self.modified.map(Field::into_inner),
            folderid,
            content,
        })
    }

    /// At least one field must be truthy; every supplied field is written,
    /// falsy ones included.
    pub fn validate_update(self) -> Result<NotePatch, ValidationError> {
        let truthy = [
            self.name.is_truthy(),
            self.modified.is_truthy(),
            self.folderid.is_truthy(),
            self.content.is_truthy(),
        ]
        .into_iter()
        .filter(|t| *t)
        .count();

        if truthy == 0 {
            return Err(ValidationError::EmptyNoteUpdate);
        }

        Ok(NotePatch {
            name: self.name.map(Field::into_inner),
            modified: self.modified.map(Field::into_inner),
            folderid: self.folderid.map(Field::into_inner),
            content: self.content.map(Field::into_inner),
        })
    }
}
