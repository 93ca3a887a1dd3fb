//! Errors raised while creating notes.

use thiserror::Error;

use super::ParseNoteKindError;

/// Errors returned by note construction and [`crate::manager::NotesManager::add`].
///
/// Both variants leave the manager untouched: no note is stored and no id
/// is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The requested kind is neither `text` nor `reminder`.
    #[error(transparent)]
    InvalidKind(#[from] ParseNoteKindError),

    /// A required field is missing.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl NoteError {
    pub(crate) fn missing_reminder_time() -> Self {
        NoteError::Validation("reminder notes require a reminder time".to_string())
    }
}

/// Result type for note operations.
pub type NoteResult<T> = Result<T, NoteError>;
