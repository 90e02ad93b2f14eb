use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use super::source::LoadedCue;
use crate::api::{AssetError, Cue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CueStatus {
    Loading,
    Ready,
    Unavailable,
}

/// Completion message sent by a cue load task.
#[derive(Debug)]
pub struct LoadReport {
    pub cue: Cue,
    pub result: Result<LoadedCue, AssetError>,
}

/// Availability of every cue. Only ready cues are played.
#[derive(Clone, Debug)]
pub struct CueBank {
    status: BTreeMap<Cue, CueStatus>,
}

impl CueBank {
    /// Every cue still loading.
    pub fn new() -> Self {
        Self::with_status(CueStatus::Loading)
    }

    /// Every cue playable, for hosts that have no assets to wait for.
    pub fn all_ready() -> Self {
        Self::with_status(CueStatus::Ready)
    }

    fn with_status(status: CueStatus) -> Self {
        Self {
            status: Cue::iter().map(|cue| (cue, status)).collect(),
        }
    }

    pub fn status(&self, cue: Cue) -> CueStatus {
        self.status
            .get(&cue)
            .copied()
            .unwrap_or(CueStatus::Unavailable)
    }

    pub fn is_ready(&self, cue: Cue) -> bool {
        self.status(cue) == CueStatus::Ready
    }

    /// Records a load result, returning the new status of that cue.
    pub fn apply(&mut self, report: &LoadReport) -> CueStatus {
        let status = match &report.result {
            Ok(_) => CueStatus::Ready,
            Err(_) => CueStatus::Unavailable,
        };
        self.status.insert(report.cue, status);
        status
    }

    pub fn ready_count(&self) -> usize {
        self.status
            .values()
            .filter(|status| **status == CueStatus::Ready)
            .count()
    }
}

impl Default for CueBank {
    fn default() -> Self {
        Self::new()
    }
}
