//! Session event journal.
//!
//! Writes every bus event as one JSON line to `events.jsonl` next to the
//! session log, and tallies results for the exit summary.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::warn;
use wheel_runtime::{Event, EventBus, LedgerEvent, SpinEvent, Topic};

pub const JOURNAL_FILE: &str = "events.jsonl";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    pub events: u64,
    pub wins: u32,
    pub losses: u32,
    pub rejected_bets: u32,
    pub credit_resets: u32,
    /// Events dropped because the journal fell behind.
    pub lagged: u64,
}

impl JournalStats {
    fn record(&mut self, event: &Event) {
        self.events += 1;
        match event {
            Event::Spin(SpinEvent::Finished { outcome, .. }) => {
                if outcome.is_win() {
                    self.wins += 1;
                } else {
                    self.losses += 1;
                }
            }
            Event::Ledger(LedgerEvent::BetRejected { .. }) => self.rejected_bets += 1,
            Event::Ledger(LedgerEvent::CreditsReset { .. }) => self.credit_resets += 1,
            _ => {}
        }
    }
}

struct Journal {
    writer: BufWriter<File>,
    stats: JournalStats,
}

impl Journal {
    fn write(&mut self, event: &Event) -> Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        self.stats.record(event);
        Ok(())
    }

    /// Handles one receive result; returns `false` once the topic is closed.
    fn accept(&mut self, received: Result<Event, RecvError>) -> Result<bool> {
        match received {
            Ok(event) => {
                self.write(&event)?;
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Journal dropped {} events", skipped);
                self.stats.lagged += skipped;
                Ok(true)
            }
            Err(RecvError::Closed) => Ok(false),
        }
    }

    fn drain(&mut self, rx: &mut broadcast::Receiver<Event>) -> Result<()> {
        loop {
            match rx.try_recv() {
                Ok(event) => self.write(&event)?,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Journal dropped {} events", skipped);
                    self.stats.lagged += skipped;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(()),
            }
        }
    }
}

/// Subscribes to every topic and writes to `path` until `stop` fires or the
/// bus goes away. Events already queued when stopping are still written.
pub fn spawn(
    bus: &EventBus,
    path: PathBuf,
    stop: oneshot::Receiver<()>,
) -> JoinHandle<Result<JournalStats>> {
    let mut spin = bus.subscribe(Topic::Spin);
    let mut ledger = bus.subscribe(Topic::Ledger);
    let mut assets = bus.subscribe(Topic::Assets);

    tokio::spawn(async move {
        let file = File::create(&path)
            .with_context(|| format!("failed to create journal {}", path.display()))?;
        let mut journal = Journal {
            writer: BufWriter::new(file),
            stats: JournalStats::default(),
        };

        tokio::pin!(stop);
        loop {
            let open = tokio::select! {
                _ = &mut stop => break,
                received = spin.recv() => journal.accept(received)?,
                received = ledger.recv() => journal.accept(received)?,
                received = assets.recv() => journal.accept(received)?,
            };
            if !open {
                break;
            }
        }

        journal.drain(&mut spin)?;
        journal.drain(&mut ledger)?;
        journal.drain(&mut assets)?;
        journal.writer.flush()?;

        Ok(journal.stats)
    })
}
