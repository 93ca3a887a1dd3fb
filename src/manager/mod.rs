//! In-memory note collection and the operations over it.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{Note, NoteId, NoteIdSequence, NoteKind, NoteResult};


/// Owns every note of a session.
///
/// Notes are kept in insertion order. Ids come from a per-manager sequence,
/// so two managers never influence each other's numbering.
///
/// # Examples
///
/// ```
/// use smart_notes::manager::NotesManager;
///
/// let mut manager = NotesManager::new();
/// let id = manager.add("text", "Buy milk", None).unwrap();
/// assert_eq!(id.get(), 1);
/// assert_eq!(manager.search("MILK").len(), 1);
/// assert!(manager.delete(id));
/// assert!(!manager.delete(id));
/// ```
#[derive(Debug, Default)]
pub struct NotesManager {
    notes: Vec<Note>,
    ids: NoteIdSequence,
}

impl NotesManager {
    /// Creates an empty manager whose first note will get id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a note, parsing `kind` case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`crate::domain::NoteError::InvalidKind`] if `kind` is not `text` or `reminder`
    /// - [`crate::domain::NoteError::Validation`] if a reminder has no reminder time
    ///
    /// On error nothing is stored and no id is consumed.
    pub fn add(
        &mut self,
        kind: &str,
        content: impl Into<String>,
        reminder_time: Option<&str>,
    ) -> NoteResult<NoteId> {
        let kind = kind.parse::<NoteKind>().inspect_err(|e| {
            warn!(kind = e.invalid_value(), "rejected note with unknown kind");
        })?;
        self.add_note(kind, content, reminder_time.map(str::to_string))
    }

    /// Adds a note of an already-parsed kind.
    pub fn add_note(
        &mut self,
        kind: NoteKind,
        content: impl Into<String>,
        reminder_time: Option<String>,
    ) -> NoteResult<NoteId> {
        let note = Note::new(self.ids.peek(), kind, content, reminder_time, Utc::now())
            .inspect_err(|e| warn!(%kind, error = %e, "rejected note"))?;

        let id = self.ids.advance();
        debug_assert_eq!(id, note.id());
        self.notes.push(note);

        info!(%id, %kind, total = self.notes.len(), "note added");
        Ok(id)
    }

    /// Removes the note with `id`.
    ///
    /// Returns `false` if no such note exists; the collection is unchanged.
    pub fn delete(&mut self, id: NoteId) -> bool {
        match self.notes.iter().position(|n| n.id() == id) {
            Some(index) => {
                self.notes.remove(index);
                info!(%id, total = self.notes.len(), "note deleted");
                true
            }
            None => {
                debug!(%id, "delete found no note");
                false
            }
        }
    }

    /// Returns every note in insertion order.
    pub fn list(&self) -> &[Note] {
        debug!(count = self.notes.len(), "listing notes");
        &self.notes
    }

    /// Returns notes whose content contains `keyword`, ignoring case.
    ///
    /// An empty keyword matches every note.
    pub fn search(&self, keyword: &str) -> Vec<&Note> {
        let needle = keyword.to_lowercase();
        let found: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.content_contains_lowercase(&needle))
            .collect();
        debug!(keyword, matches = found.len(), "searched notes");
        found
    }

    /// Looks up a single note.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the manager holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
