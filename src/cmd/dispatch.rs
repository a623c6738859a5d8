//! Command dispatch for the course-manager binary
//!
//! `Commands` implements `Execute`, so `main` only has to pick the command
//! (defaulting to the menu) and call it.

use anyhow::Result;

use crate::cli::{Commands, GlobalArgs};

/// Trait for executing CLI commands
pub trait Execute {
    /// Execute the command with the options shared by every command
    fn execute(self, global: &GlobalArgs) -> Result<()>;
}

impl Execute for Commands {
    fn execute(self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Run => super::run::cmd_run(global),
            Commands::Version => super::util::cmd_version(global.verbose > 0),
            Commands::Completion { shell } => super::util::cmd_completion(shell),
            Commands::Man { out_dir } => super::util::cmd_man(out_dir.as_ref()),
        }
    }
}
