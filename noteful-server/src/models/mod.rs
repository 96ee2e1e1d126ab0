//! Domain models with validation at construction
//!
//! Request bodies decode into optional fields and are validated into the
//! records handed to the store. Invalid input returns ValidationError.

pub mod field;
pub mod folder;
pub mod note;
pub mod validation;

pub use field::Field;
pub use folder::{CreateFolderRequest, Folder, FolderPatch, NewFolder, UpdateFolderRequest};
pub use note::{NewNote, Note, NotePatch, NoteRequest};
pub use validation::{Truthy, ValidationError};
