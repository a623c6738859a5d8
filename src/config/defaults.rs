//! Default values and configuration structs with default implementations.

use serde::Deserialize;

use crate::ui::OutputMode;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_true, bool, true);
default_fn!(default_log_level, String, "warn".to_string());

/// How the session renders its output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// `human` (default) or `json`
    #[serde(default)]
    pub format: OutputMode,
    /// Colour status prefixes when stdout is a terminal (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputMode::default(),
            color: default_true(),
        }
    }
}

/// Diagnostic logging written to stderr
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Lowest level emitted unless `RUST_LOG` is set (default: warn)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
