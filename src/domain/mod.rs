//! Core types: Note, NoteKind, NoteId, NoteError

mod error;
mod kind;
mod note;
mod note_id;

pub use error::{NoteError, NoteResult};
pub use kind::{NoteKind, ParseNoteKindError};
pub use note::{CREATED_AT_FORMAT, Note};
pub use note_id::{NoteId, NoteIdSequence, ParseNoteIdError};
