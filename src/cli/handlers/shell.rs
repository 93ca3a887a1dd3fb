//! Interactive session handler.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::cli::ShellArgs;
use crate::cli::config::{Config, DEFAULT_SEPARATOR_WIDTH};
use crate::cli::output::{Output, OutputFormat};
use crate::domain::{Note, NoteError, NoteId, NoteKind, ParseNoteIdError};
use crate::manager::NotesManager;

const MENU: &str = "\
Smart Notes Manager
1. Add Note
2. Show Notes
3. Search Notes
4. Delete Note
5. Exit";

const GOODBYE: &str = "Exiting Smart Notes Manager. Goodbye!";

pub fn handle_shell(args: &ShellArgs, config: &Config) -> Result<()> {
    let options = SessionOptions {
        format: config.format(args.format),
        separator_width: config.separator_width(),
        show_menu: !args.no_menu,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);
    session.run()
}

/// Presentation settings for a session.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionOptions {
    pub(crate) format: OutputFormat,
    pub(crate) separator_width: usize,
    pub(crate) show_menu: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            show_menu: true,
        }
    }
}

/// Whether the loop keeps reading after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

/// Menu-driven loop over a [`NotesManager`].
///
/// Reads choices and answers from `input` and writes prompts and results to
/// `output`. End of input ends the session the same way choosing "Exit" does.
pub(crate) struct Session<R, W> {
    manager: NotesManager,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            manager: NotesManager::new(),
            input,
            output,
            options,
        }
    }

    #[cfg(test)]
    pub(crate) fn manager(&self) -> &NotesManager {
        &self.manager
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        tracing::debug!(options = ?self.options, "session started");
        let last = loop {
            if self.options.show_menu {
                writeln!(self.output)?;
                writeln!(self.output, "{MENU}")?;
            }

            let Some(choice) = self.prompt("Enter choice: ")? else {
                break Flow::EndOfInput;
            };

            tracing::debug!(choice = choice.as_str(), "menu choice");
            let flow = match choice.as_str() {
                "1" => self.add_note()?,
                "2" => self.show_notes()?,
                "3" => self.search_notes()?,
                "4" => self.delete_note()?,
                "5" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                    Flow::Continue
                }
            };

            if flow != Flow::Continue {
                break flow;
            }
        };

        // The pending prompt has no line ending yet.
        if last == Flow::EndOfInput {
            writeln!(self.output)?;
        }
        writeln!(self.output, "{GOODBYE}")?;
        tracing::debug!(notes = self.manager.len(), "session ended");

        self.output.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Prints `message` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input. A line that isn't valid UTF-8 has
    /// already been consumed by the reader, so it is reported and the
    /// question is asked again.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{message}")?;
            self.output.flush().context("failed to flush output")?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    let len = line.trim_end_matches(['\n', '\r']).len();
                    line.truncate(len);
                    return Ok(Some(line));
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    tracing::warn!(error = %e, "rejected non-UTF-8 input line");
                    writeln!(self.output, "Invalid input. Please enter valid UTF-8 text.")?;
                }
                Err(e) => return Err(e).context("failed to read input"),
            }
        }
    }

    /// Like [`Self::prompt`] but strips surrounding whitespace.
    fn prompt_trimmed(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self.prompt(message)?.map(|s| s.trim().to_string()))
    }

    fn add_note(&mut self) -> Result<Flow> {
        let Some(kind) = self.prompt_trimmed("Enter note type (text/reminder): ")? else {
            return Ok(Flow::EndOfInput);
        };
        let Some(content) = self.prompt_trimmed("Enter note content: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let kind = kind.parse::<NoteKind>();
        let mut reminder_time = None;
        if kind.as_ref().is_ok_and(|k| k.requires_reminder()) {
            let Some(time) = self.prompt_trimmed("Enter reminder time (YYYY-MM-DD HH:MM): ")?
            else {
                return Ok(Flow::EndOfInput);
            };
            reminder_time = Some(time);
        }

        let added = match kind {
            Ok(kind) => self.manager.add_note(kind, content, reminder_time),
            Err(e) => {
                tracing::warn!(kind = e.invalid_value(), "rejected note with unknown kind");
                Err(NoteError::from(e))
            }
        };
        match added {
            Ok(id) => writeln!(self.output, "Note added successfully! (ID: {id})")?,
            Err(e) => writeln!(self.output, "Could not add note: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn show_notes(&mut self) -> Result<Flow> {
        let notes: Vec<&Note> = self.manager.list().iter().collect();
        write_notes(&mut self.output, &notes, self.options, "No notes available.")?;
        Ok(Flow::Continue)
    }

    fn search_notes(&mut self) -> Result<Flow> {
        let Some(keyword) = self.prompt_trimmed("Enter keyword to search: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let found = self.manager.search(&keyword);
        let empty_message = format!("No notes found containing '{keyword}'.");
        write_notes(&mut self.output, &found, self.options, &empty_message)?;
        Ok(Flow::Continue)
    }

    fn delete_note(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt_trimmed("Enter note ID to delete: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let id = match parse_delete_target(&raw) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "rejected delete input");
                writeln!(self.output, "Invalid input. Please enter a valid note ID.")?;
                return Ok(Flow::Continue);
            }
        };

        match id {
            Some(id) if self.manager.delete(id) => {
                writeln!(self.output, "Note with ID {id} deleted.")?;
            }
            _ => writeln!(self.output, "Note not found.")?,
        }
        Ok(Flow::Continue)
    }
}

/// Parses the answer to the delete prompt.
///
/// Any integer is accepted; integers that can never name a note (zero,
/// negatives, values beyond `u64`) yield `Ok(None)`.
pub(crate) fn parse_delete_target(raw: &str) -> Result<Option<NoteId>, ParseNoteIdError> {
    match raw.parse::<NoteId>() {
        Ok(id) => Ok(Some(id)),
        Err(e) => {
            let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(None)
            } else {
                Err(e)
            }
        }
    }
}

/// Writes notes in the configured format.
fn write_notes<W: Write>(
    out: &mut W,
    notes: &[&Note],
    options: SessionOptions,
    empty_message: &str,
) -> Result<()> {
    match options.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "{empty_message}")?;
            } else {
                let separator = "-".repeat(options.separator_width);
                for note in notes {
                    writeln!(out, "{}", note.render())?;
                    writeln!(out, "{separator}")?;
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(notes);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }
    Ok(())
}
