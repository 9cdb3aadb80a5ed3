//! Tracing setup
//!
//! The TUI owns the terminal, so its logs only go to a file when one is
//! requested. Line mode logs warnings to stderr by default.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file, used when `--log-file` is absent
pub const LOG_ENV: &str = "WORDLY_LOG";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Only to a file, if one is configured
    FileOnly,
    /// To stderr unless a file is configured
    Stderr,
}

/// Initialize tracing
///
/// `RUST_LOG` controls the filter; the default is `info` for files and `warn`
/// for stderr.
pub fn init_tracing(log_file: Option<&Path>, target: LogTarget) {
    let env_path = std::env::var_os(LOG_ENV);
    let log_path = log_file.or(env_path.as_deref().map(Path::new));

    if let Some(path) = log_path {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let Ok(file) = std::fs::File::create(path) else {
            eprintln!("Warning: Failed to create log file: {}", path.display());
            return;
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
        return;
    }

    if target == LogTarget::Stderr {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
