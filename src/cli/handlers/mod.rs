//! Command handlers for the CLI.

mod completions;
mod shell;


pub use completions::handle_completions;
pub use shell::handle_shell;

// Re-export for tests
#[cfg(test)]
pub(crate) use completions::write_completions;
#[cfg(test)]
pub(crate) use shell::{Session, SessionOptions, parse_delete_target};
