//! Structured output for the course session.
//!
//! Provides a unified interface for displaying messages in two modes:
//! - Human: plain lines, with coloured status prefixes on a colour terminal
//! - Json: one structured JSON event per line for scripted consumption
//!
//! The Output struct can be injected with a custom writer for test capture.

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use super::colors;
use crate::domain::Course;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable lines
    #[default]
    Human,
    /// JSON-formatted structured events
    Json,
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Output {
    /// Create a new Output writing to stdout. Colour is only used when
    /// requested and stdout is a terminal.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            color: color && atty::is(atty::Stream::Stdout),
        }
    }

    /// Create an Output with a custom writer (for testing)
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            color: false,
        }
    }

    /// Output plain text: table rows, menu entries, lookups
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("info", msg),
        }
    }

    /// Output a heading line, bold on a colour terminal
    pub fn heading(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                if self.color {
                    self.write_line(&colors::heading(msg).to_string());
                } else {
                    self.write_line(msg);
                }
            }
            OutputMode::Json => self.write_json("heading", msg),
        }
    }

    /// Output a success message: "✓ {msg}"
    pub fn success(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.color {
                    colors::success("✓").to_string()
                } else {
                    "✓".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("success", msg),
        }
    }

    /// Output a warning message: "⚠ {msg}"
    pub fn warn(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.color {
                    colors::warning("⚠").to_string()
                } else {
                    "⚠".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("warning", msg),
        }
    }

    /// Output an error message: "✗ {msg}"
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.color {
                    colors::error("✗").to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json("error", msg),
        }
    }

    /// Output the question asked before reading a line of input
    pub fn prompt(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("prompt", msg),
        }
    }

    /// Output one course: the formatted `row` in human mode, the record
    /// itself under a `course` key in json mode
    pub fn course(&self, row: &str, course: &Course) {
        match self.mode {
            OutputMode::Human => self.write_line(row),
            OutputMode::Json => match serde_json::to_value(course) {
                Ok(record) => self.write_event(json!({
                    "level": "info",
                    "course": record,
                })),
                Err(_) => self.write_json("info", row),
            },
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }

    fn write_json(&self, level: &str, msg: &str) {
        self.write_event(json!({
            "level": level,
            "msg": msg,
        }));
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}
