//! Note record: a single text or reminder note.

use crate::domain::{NoteError, NoteId, NoteKind, NoteResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Timestamp layout used when rendering `created_at`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown in place of a reminder time that is unexpectedly absent.
const NO_REMINDER: &str = "(no reminder)";

/// One note held by a [`crate::manager::NotesManager`].
///
/// A note is immutable once created: there are no setters, and the only way
/// a note disappears is by being deleted from its manager.
///
/// # Invariants
/// - `reminder_time` is `Some` if and only if `kind` is [`NoteKind::Reminder`]
/// - `created_at` is fixed at construction
///
/// # Examples
///
/// ```
/// use smart_notes::domain::{Note, NoteId, NoteKind};
/// use chrono::Utc;
///
/// let id = NoteId::new(1).unwrap();
/// let note = Note::new(id, NoteKind::Text, "Buy milk", None, Utc::now()).unwrap();
/// assert_eq!(note.content(), "Buy milk");
/// assert!(note.reminder_time().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    id: NoteId,
    kind: NoteKind,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reminder_time: Option<String>,
}

impl Note {
    /// Creates a new note.
    ///
    /// A reminder time passed for a [`NoteKind::Text`] note is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`NoteError::Validation`] if `kind` is [`NoteKind::Reminder`]
    /// and `reminder_time` is `None` or empty.
    pub fn new(
        id: NoteId,
        kind: NoteKind,
        content: impl Into<String>,
        reminder_time: Option<String>,
        created_at: DateTime<Utc>,
    ) -> NoteResult<Self> {
        let reminder_time = match kind {
            NoteKind::Reminder => match reminder_time {
                Some(time) if !time.is_empty() => Some(time),
                _ => return Err(NoteError::missing_reminder_time()),
            },
            NoteKind::Text => None,
        };

        Ok(Self {
            id,
            kind,
            content: content.into(),
            created_at,
            reminder_time,
        })
    }

    /// Returns the note's id.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's kind.
    pub fn kind(&self) -> NoteKind {
        self.kind
    }

    /// Returns the note's text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the reminder time for reminder notes.
    pub fn reminder_time(&self) -> Option<&str> {
        self.reminder_time.as_deref()
    }

    /// Case-insensitive substring test against the content.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn content_contains_lowercase(&self, needle: &str) -> bool {
        self.content.to_lowercase().contains(needle)
    }

    /// Renders the note as multi-line text.
    ///
    /// ```text
    /// [Reminder Note]
    /// ID: 1
    /// Created: 2025-03-01 09:15:00
    /// Content: Doctor's appointment
    /// Reminder Time: 2025-03-10 10:00
    /// ```
    pub fn render(&self) -> String {
        let mut out = format!(
            "[{}]\nID: {}\nCreated: {}\nContent: {}",
            self.kind.label(),
            self.id,
            self.created_at.format(CREATED_AT_FORMAT),
            self.content
        );

        if self.kind == NoteKind::Reminder {
            let time = self.reminder_time.as_deref().unwrap_or(NO_REMINDER);
            out.push_str("\nReminder Time: ");
            out.push_str(time);
        }

        out
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
