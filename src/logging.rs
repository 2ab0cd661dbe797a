//! Diagnostics logging.
//!
//! The terminal belongs to the quiz screen, so log records go to a file.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "quiz-runner.log";

/// Default log location inside the system temp directory.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Install a global subscriber appending to `path`.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}
