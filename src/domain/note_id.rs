//! Sequential note identifier with parsing and serde support.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A positive integer identifying a note within one manager.
///
/// Ids are handed out by [`NoteIdSequence`] starting at 1 and are never
/// reused, even after the note they named has been deleted.
///
/// # Examples
///
/// ```
/// use smart_notes::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wraps a raw id, returning `None` for zero.
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<u64>().map_err(|e| ParseNoteIdError {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::new(value).ok_or_else(|| ParseNoteIdError {
            value: s.to_string(),
            reason: "note ids start at 1".to_string(),
        })
    }
}

/// Monotonic id source owned by a single manager.
#[derive(Debug, Clone)]
pub struct NoteIdSequence {
    next: u64,
}

impl NoteIdSequence {
    /// Creates a sequence whose first id is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the id the next successful allocation will produce.
    pub fn peek(&self) -> NoteId {
        NoteId(self.next)
    }

    /// Consumes and returns the next id.
    pub fn advance(&mut self) -> NoteId {
        let id = NoteId(self.next);
        self.next += 1;
        id
    }
}

impl Default for NoteIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
