//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// notes - a session-scoped notes manager
#[derive(Parser, Debug)]
#[command(name = "notes", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/smart-notes/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive notes session (default)
    Shell(ShellArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `shell` command
#[derive(Parser, Debug, Default)]
pub struct ShellArgs {
    /// Output format for shown and searched notes
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Don't print the menu before each choice
    #[arg(long)]
    pub no_menu: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
