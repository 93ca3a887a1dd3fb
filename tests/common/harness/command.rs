//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

use super::SessionScript;

/// Fluent wrapper around `assert_cmd::Command` for the `notes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct NotesCommand {
    args: Vec<String>,
    stdin: Option<Vec<u8>>,
}

impl NotesCommand {
    /// Creates a new command for the `notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option.
    pub fn config(mut self, path: &Path) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds a scripted session on stdin.
    pub fn script(mut self, script: &SessionScript) -> Self {
        self.stdin = Some(script.build().into_bytes());
        self
    }

    /// Feeds raw text on stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into().into_bytes());
        self
    }

    /// Feeds raw bytes on stdin, which need not be valid UTF-8.
    pub fn stdin_bytes(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("notes").expect("Failed to find notes binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses every JSON document
    /// printed to stdout.
    pub fn output_json_documents(self) -> Vec<serde_json::Value> {
        let output = self.output_success();
        json_documents(&output)
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `shell` command without the menu banner.
    pub fn shell(self) -> Self {
        self.args(["shell", "--no-menu"])
    }

    /// Configures for the `completions` command.
    pub fn completions(self, shell: &str) -> Self {
        self.args(["completions", shell])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the pretty-printed JSON objects embedded between prompts.
///
/// Documents start with a line that is exactly `{` and end with a line that
/// is exactly `}`.
fn json_documents(output: &str) -> Vec<serde_json::Value> {
    let mut docs = Vec::new();
    let mut current: Option<String> = None;

    for line in output.lines() {
        // Prompts are unterminated, so the opening brace may follow one.
        if current.is_none() && line.ends_with('{') && !line.contains('"') {
            current = Some("{\n".to_string());
            continue;
        }
        if let Some(buf) = current.as_mut() {
            buf.push_str(line);
            buf.push('\n');
            if line == "}" {
                let doc = current.take().expect("buffer present");
                docs.push(serde_json::from_str(&doc).expect("Failed to parse output as JSON"));
            }
        }
    }
    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // NotesCommand Basics
    // ===========================================

    #[test]
    fn test_command_runs_binary() {
        NotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_output_success() {
        let output = NotesCommand::new().args(["--help"]).output_success();
        assert!(output.contains("notes"));
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = NotesCommand::new().shell().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"shell".to_string()));
        assert!(args.contains(&"--no-menu".to_string()));
        assert!(args.contains(&"json".to_string()));
    }

    #[test]
    fn test_json_documents_after_prompt() {
        let output = "Enter choice: {\n  \"data\": []\n}\nEnter choice: Goodbye\n";
        let docs = json_documents(output);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["data"], serde_json::json!([]));
    }
}
