//! Log levels and sinks
//!
//! Diagnostic events carry a [`LogLevel`]. `RUST_LOG` sets the threshold for
//! printing them (headless output, diagnostics panel) and for the log file.

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Threshold used when `RUST_LOG` is unset or unreadable.
const DEFAULT_THRESHOLD: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Append every `log` record at or above the `RUST_LOG` threshold to `path`.
///
/// The terminal is owned by the dashboard, so records go to a file. Can only
/// be installed once per process.
pub fn init_file_logger(path: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_THRESHOLD));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
}

/// Threshold for printed events, read from `RUST_LOG`.
pub fn display_threshold() -> LogLevel {
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_THRESHOLD.to_string());
    parse_threshold(&rust_log)
}

/// The level of the first `RUST_LOG` directive, e.g. `agent_dashboard=debug,hyper=warn`
/// gives `Debug`. Anything unrecognised falls back to `Info`.
pub fn parse_threshold(rust_log: &str) -> LogLevel {
    let directive = rust_log.split(',').next().unwrap_or_default();
    let level = directive.rsplit('=').next().unwrap_or_default().trim();

    match level.to_lowercase().as_str() {
        "trace" => LogLevel::Trace,
        "debug" => LogLevel::Debug,
        "warn" | "warning" => LogLevel::Warn,
        "error" => LogLevel::Error,
        _ => LogLevel::Info,
    }
}

pub fn is_displayed(level: LogLevel, threshold: LogLevel) -> bool {
    level >= threshold
}

pub fn is_displayed_with_env(level: LogLevel) -> bool {
    is_displayed(level, display_threshold())
}
