//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, scripted session input,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod script;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotesCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use script::SessionScript;
