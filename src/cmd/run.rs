//! The interactive menu command.

use anyhow::Result;
use std::io;
use tracing::debug;

use course_manager::config::{Config, Overrides};
use course_manager::input::{LinePrompter, Prompter, TerminalPrompter};
use course_manager::logging;
use course_manager::repository::InMemoryCourseRepository;
use course_manager::seed;
use course_manager::session::Session;
use course_manager::ui::{Output, OutputMode};

use crate::cli::GlobalArgs;

/// Resolve configuration from files and flags.
pub fn resolve_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = Config::load(global.config.as_deref())?;
    config.apply(Overrides {
        format: global.format,
        no_color: global.no_color,
        seed: global.seed.clone(),
        log_level: global.log_level(),
    })?;
    Ok(config)
}

/// Start the course menu on stdin/stdout.
pub fn cmd_run(global: &GlobalArgs) -> Result<()> {
    let config = resolve_config(global)?;
    logging::init(&config.logging.level);
    debug!(?config, "resolved configuration");

    let mut store = InMemoryCourseRepository::new();
    if let Some(path) = config.seed_path() {
        seed::load_seed(&mut store, &path)?;
    }

    let output = Output::new(config.output.format, config.output.color);

    // dialoguer only for a human at a terminal; piped or JSON sessions read lines
    if config.output.format == OutputMode::Human && atty::is(atty::Stream::Stdin) {
        run_session(store, TerminalPrompter::new(), output)
    } else {
        let prompter = LinePrompter::new(io::stdin().lock(), output.clone());
        run_session(store, prompter, output)
    }
}

fn run_session<P: Prompter>(
    store: InMemoryCourseRepository,
    prompter: P,
    output: Output,
) -> Result<()> {
    Session::new(store, prompter, output).run()
}
