//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to
//! `~/.panda-party/panda-party.log` (or `PANDA_PARTY_LOG_PATH` when set).
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

pub const LOG_FILE_NAME: &str = "panda-party.log";
pub const LOG_PATH_ENV: &str = "PANDA_PARTY_LOG_PATH";

/// Resolve where log lines should be appended.
pub fn log_path() -> io::Result<PathBuf> {
    match std::env::var(LOG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => Ok(super::persistence::app_dir()?.join(LOG_FILE_NAME)),
    }
}

/// Install the global subscriber. Returns the file being written to.
pub fn init_logging() -> io::Result<PathBuf> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}
