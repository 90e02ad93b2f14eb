//! Error types surfaced by the runtime API.
//!
//! Gameplay rejections never show up here; they are part of normal play and
//! are reported as events. These are the failures a host has to act on.
use thiserror::Error;

use wheel_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("frame interval must be at least 1ms")]
    ZeroFrameInterval,

    #[error("frame loop command channel closed")]
    CommandChannelClosed,

    #[error("cue load task join failed")]
    CueTaskJoin(#[source] tokio::task::JoinError),
}

/// Failure while loading a single cue. Never reaches game logic.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cue file {path} not found")]
    NotFound { path: std::path::PathBuf },

    #[error("cue file {path} is empty")]
    Empty { path: std::path::PathBuf },

    #[error("failed to read cue file {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cue load was cancelled")]
    Cancelled,
}
