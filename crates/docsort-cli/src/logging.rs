//! Logging bootstrap.
//!
//! The libraries only emit `tracing` events. The binary routes them to an
//! append-only file (timestamp, level, target, message) and falls back to
//! stderr when the file cannot be opened. `RUST_LOG` overrides the
//! configured level.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log events ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Appending to this file
    File(PathBuf),
    /// No file requested, or it could not be opened
    Stderr,
}

/// Open a log file for appending, creating its directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build the level filter, preferring `RUST_LOG` when it is set.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// With no path, or when the file cannot be opened, events go to stderr.
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init_logging(level: &str, path: Option<&Path>) -> LogTarget {
    let failure = match path.map(|p| (p, open_log_file(p))) {
        Some((path, Ok(file))) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(level))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            return LogTarget::File(path.to_path_buf());
        }
        Some((path, Err(e))) => Some(format!("Cannot open log file {}: {}", path.display(), e)),
        None => None,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .try_init();
    if let Some(message) = failure {
        tracing::warn!("{}", message);
    }
    LogTarget::Stderr
}
