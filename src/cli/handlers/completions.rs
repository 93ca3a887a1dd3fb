//! Completions command handler.

use anyhow::Result;
use clap::CommandFactory;
use std::io::{self, Write};

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let stdout = io::stdout();
    write_completions(args, &mut stdout.lock())
}

pub(crate) fn write_completions<W: Write>(args: &CompletionsArgs, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}
