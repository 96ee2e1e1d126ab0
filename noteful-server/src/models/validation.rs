//! Validation error types

use std::fmt;

/// Validation error for request bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Folder creation without a usable name
    NameRequired,

    /// Folder update without a usable name
    UpdateNameRequired,

    /// Note creation missing one of its required fields
    Required { field: &'static str },

    /// Note update where no field carries a value
    EmptyNoteUpdate,

    /// Body could not be decoded as the expected JSON shape
    Malformed,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required"),
            Self::UpdateNameRequired => write!(f, "Request body must contain name"),
            Self::Required { field } => write!(f, "'{}' is required", field),
            Self::EmptyNoteUpdate => write!(
                f,
                "Request body must contain Name, Modified, Folder Id, or Content"
            ),
            Self::Malformed => write!(f, "Malformed JSON body"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// JavaScript-style truthiness for body values.
///
/// `null`, `false`, zero and the empty string are falsy, as are absent fields.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|v| v.is_truthy())
    }
}
