//! CLI entry point for course-manager.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use cmd::dispatch::Execute;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command
        .unwrap_or(Commands::Run)
        .execute(&cli.global)
}
