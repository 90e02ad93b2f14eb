//! Concurrent cue loading.
use std::sync::Arc;

use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::bank::LoadReport;
use super::source::CueSource;
use crate::api::{AssetError, Cue, Result, RuntimeError};

/// Starts one load task per cue and returns immediately.
///
/// Every task sends exactly one [`LoadReport`] on `reports` unless it is
/// aborted; aborting through [`CueLoads`] reports the cue as cancelled.
pub fn spawn_cue_loads(
    source: Arc<dyn CueSource>,
    reports: mpsc::UnboundedSender<LoadReport>,
) -> CueLoads {
    let tasks = Cue::iter()
        .map(|cue| {
            let source = Arc::clone(&source);
            let reports = reports.clone();
            let task = tokio::spawn(async move {
                let result = source.load(cue).await;
                match &result {
                    Ok(loaded) => debug!(%cue, bytes = loaded.size_bytes, "cue loaded"),
                    Err(error) => warn!(%cue, %error, "cue failed to load, playing it as a no-op"),
                }
                if reports.send(LoadReport { cue, result }).is_err() {
                    debug!(%cue, "cue report dropped, game already gone");
                }
            });
            CueTask {
                cue,
                task,
                aborted: false,
            }
        })
        .collect();

    CueLoads { tasks, reports }
}

struct CueTask {
    cue: Cue,
    task: JoinHandle<()>,
    aborted: bool,
}

/// Handles to the in-flight cue loads.
pub struct CueLoads {
    tasks: Vec<CueTask>,
    reports: mpsc::UnboundedSender<LoadReport>,
}

impl CueLoads {
    /// Cancels one load if it is still running.
    pub fn abort(&mut self, cue: Cue) -> bool {
        let Some(entry) = self.tasks.iter_mut().find(|entry| entry.cue == cue) else {
            return false;
        };
        if entry.aborted || entry.task.is_finished() {
            return false;
        }

        entry.task.abort();
        entry.aborted = true;
        let _ = self.reports.send(LoadReport {
            cue,
            result: Err(AssetError::Cancelled),
        });
        true
    }

    /// Cancels every load still running.
    pub fn abort_all(&mut self) -> usize {
        Cue::iter().filter(|&cue| self.abort(cue)).count()
    }

    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|entry| !entry.aborted && !entry.task.is_finished())
            .count()
    }

    /// Waits for every task, returning how many ran to completion.
    pub async fn wait(self) -> Result<usize> {
        let mut completed = 0;
        for CueTask { cue, task, .. } in self.tasks {
            match task.await {
                Ok(()) => completed += 1,
                Err(error) if error.is_cancelled() => debug!(%cue, "cue load was aborted"),
                Err(error) => return Err(RuntimeError::CueTaskJoin(error)),
            }
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::source::LoadedCue;
    use async_trait::async_trait;

    struct OnlyClick;

    #[async_trait]
    impl CueSource for OnlyClick {
        async fn load(&self, cue: Cue) -> std::result::Result<LoadedCue, AssetError> {
            match cue {
                Cue::Click => Ok(LoadedCue { cue, size_bytes: 1 }),
                _ => Err(AssetError::NotFound {
                    path: cue.file_name().into(),
                }),
            }
        }
    }

    struct Stalled;

    #[async_trait]
    impl CueSource for Stalled {
        async fn load(&self, _cue: Cue) -> std::result::Result<LoadedCue, AssetError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_rest() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loads = spawn_cue_loads(Arc::new(OnlyClick), tx);
        assert_eq!(loads.wait().await.unwrap(), 4);

        let mut reports = Vec::new();
        while let Ok(report) = rx.try_recv() {
            reports.push((report.cue, report.result.is_ok()));
        }
        reports.sort();
        assert_eq!(
            reports,
            [
                (Cue::Click, true),
                (Cue::Tick, false),
                (Cue::Score, false),
                (Cue::Fail, false)
            ]
        );
    }

    #[tokio::test]
    async fn aborted_loads_report_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut loads = spawn_cue_loads(Arc::new(Stalled), tx);

        assert!(loads.abort(Cue::Tick));
        assert_eq!(loads.abort_all(), 3);
        assert_eq!(loads.wait().await.unwrap(), 0);

        let mut cancelled = 0;
        while let Ok(report) = rx.try_recv() {
            assert!(matches!(report.result, Err(AssetError::Cancelled)));
            cancelled += 1;
        }
        assert_eq!(cancelled, 4);
    }
}
