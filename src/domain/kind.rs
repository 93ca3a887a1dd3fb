//! Note kind: plain text or reminder.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of note kinds.
///
/// Parsing is case-insensitive, so `Text`, `text`, and `TEXT` are equivalent.
///
/// # Examples
///
/// ```
/// use smart_notes::domain::NoteKind;
///
/// let kind: NoteKind = "Reminder".parse().unwrap();
/// assert_eq!(kind, NoteKind::Reminder);
/// assert_eq!(kind.as_str(), "reminder");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Text,
    Reminder,
}

impl NoteKind {
    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            NoteKind::Text => "text",
            NoteKind::Reminder => "reminder",
        }
    }

    /// Returns the heading used when rendering a note of this kind.
    pub fn label(self) -> &'static str {
        match self {
            NoteKind::Text => "Text Note",
            NoteKind::Reminder => "Reminder Note",
        }
    }

    /// Whether notes of this kind carry a reminder time.
    pub fn requires_reminder(self) -> bool {
        matches!(self, NoteKind::Reminder)
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized note kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteKindError(String);

impl ParseNoteKindError {
    /// Returns the rejected input.
    pub fn invalid_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseNoteKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid note type '{}': use 'text' or 'reminder'",
            self.0
        )
    }
}

impl std::error::Error for ParseNoteKindError {}

impl FromStr for NoteKind {
    type Err = ParseNoteKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            Ok(NoteKind::Text)
        } else if s.eq_ignore_ascii_case("reminder") {
            Ok(NoteKind::Reminder)
        } else {
            Err(ParseNoteKindError(s.to_string()))
        }
    }
}
