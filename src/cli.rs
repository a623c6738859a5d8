//! CLI argument definitions for course-manager.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use course_manager::ui::OutputMode;

#[derive(Parser)]
#[command(name = "course-manager")]
#[command(version)]
#[command(about = "Manage course records from an interactive menu", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    course-manager                      Start the interactive menu\n    course-manager --seed courses.yaml  Start with courses loaded from a YAML list\n\n    Courses live in memory only and are gone when the program exits."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file to use instead of ./course-manager.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for the menu session
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputMode>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// YAML list of courses to load at start-up
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Log level implied by the -v count, if any.
    pub fn log_level(&self) -> Option<String> {
        match self.verbose {
            0 => None,
            1 => Some("info".to_string()),
            2 => Some("debug".to_string()),
            _ => Some("trace".to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive course menu (default)
    Run,
    /// Show version information (add -v for build details)
    Version,
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man page
    Man {
        /// Output directory for the man page (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
