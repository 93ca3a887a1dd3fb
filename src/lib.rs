//! smart-notes - a session-scoped notes manager for text and reminder notes

pub mod cli;
pub mod domain;
pub mod logging;
pub mod manager;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command, ShellArgs,
    config::Config,
    handlers::{handle_completions, handle_shell},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let shell_args = match cli.command {
        Some(Command::Completions(args)) => return handle_completions(&args),
        Some(Command::Shell(args)) => args,
        None => ShellArgs::default(),
    };

    let config = Config::load(cli.config.as_deref())?;
    handle_shell(&shell_args, &config)
}
