//! File logging for the terminal client.
//!
//! The TUI owns stdout, so nothing is written to the terminal. Every session
//! gets its own directory under the platform cache dir:
//! - macOS: `~/Library/Caches/roulette/logs/<session>`
//! - Linux: `~/.cache/roulette/logs/<session>` (or `$XDG_CACHE_HOME/...`)
//! - Windows: `%LOCALAPPDATA%\roulette\cache\logs\<session>`
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Root directory holding every session's logs.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "roulette")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/roulette"))
        .join("logs")
}

pub fn session_dir(root: &Path, session_id: &str) -> PathBuf {
    root.join(session_id)
}

/// Installs the global subscriber writing to `<log_dir>/<session_id>/client.log`.
///
/// Returns the session directory so other session files can sit next to the log.
pub fn setup_logging(session_id: &str) -> Result<PathBuf> {
    let session_log_dir = session_dir(&log_dir(), session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // The writer must outlive every log call, including those during shutdown.
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", session_log_dir.join(LOG_FILE).display());

    Ok(session_log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_live_under_the_log_root() {
        let root = log_dir();
        assert!(root.ends_with("logs"));

        let dir = session_dir(&root, "session_1");
        assert_eq!(dir.parent(), Some(root.as_path()));
        assert!(dir.ends_with("session_1"));
    }
}
