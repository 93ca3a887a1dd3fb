//! Builder for scripted session input.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

/// Builds the stdin fed to an interactive session.
///
/// Each method appends the menu choice and the answers to the prompts that
/// follow it, so a script reads like the user's keystrokes.
#[derive(Debug, Default, Clone)]
pub struct SessionScript {
    lines: Vec<String>,
}

impl SessionScript {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a raw line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Menu 1 with a text note.
    pub fn add_text(self, content: &str) -> Self {
        self.line("1").line("text").line(content)
    }

    /// Menu 1 with a reminder note.
    pub fn add_reminder(self, content: &str, time: &str) -> Self {
        self.line("1").line("reminder").line(content).line(time)
    }

    /// Menu 1 with an arbitrary kind; no reminder prompt is answered.
    pub fn add_kind(self, kind: &str, content: &str) -> Self {
        self.line("1").line(kind).line(content)
    }

    /// Menu 2.
    pub fn show(self) -> Self {
        self.line("2")
    }

    /// Menu 3.
    pub fn search(self, keyword: &str) -> Self {
        self.line("3").line(keyword)
    }

    /// Menu 4.
    pub fn delete(self, id: &str) -> Self {
        self.line("4").line(id)
    }

    /// Menu 5.
    pub fn exit(self) -> Self {
        self.line("5")
    }

    /// Renders the script as newline-terminated input.
    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        if !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_renders_lines_in_order() {
        let script = SessionScript::new()
            .add_reminder("Dentist", "2025-04-01 08:30")
            .delete("1")
            .exit();
        assert_eq!(script.build(), "1\nreminder\nDentist\n2025-04-01 08:30\n4\n1\n5\n");
    }

    #[test]
    fn empty_script_is_empty() {
        assert_eq!(SessionScript::new().build(), "");
    }
}
