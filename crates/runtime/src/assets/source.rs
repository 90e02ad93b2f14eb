//! Where cue data comes from.
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::api::{AssetError, Cue};

/// A cue that finished loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedCue {
    pub cue: Cue,
    pub size_bytes: u64,
}

/// Loads the data behind one cue.
///
/// Implementations may be slow or fail; each cue is loaded on its own task
/// and a failure only affects that cue.
#[async_trait]
pub trait CueSource: Send + Sync + 'static {
    async fn load(&self, cue: Cue) -> Result<LoadedCue, AssetError>;
}

/// Cues stored as files in one directory, named after [`Cue::file_name`].
#[derive(Clone, Debug)]
pub struct FileCueSource {
    dir: PathBuf,
}

impl FileCueSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, cue: Cue) -> PathBuf {
        self.dir.join(cue.file_name())
    }
}

#[async_trait]
impl CueSource for FileCueSource {
    async fn load(&self, cue: Cue) -> Result<LoadedCue, AssetError> {
        let path = self.path_of(cue);
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetError::NotFound { path });
            }
            Err(source) => return Err(AssetError::Io { path, source }),
        };

        if metadata.len() == 0 {
            return Err(AssetError::Empty { path });
        }

        Ok(LoadedCue {
            cue,
            size_bytes: metadata.len(),
        })
    }
}
