//! Cloneable façade for issuing commands to the frame loop.
//!
//! [`RuntimeHandle`] hides channel plumbing. Async code uses the `await`
//! helpers; input readers running on a blocking thread use the `blocking_*`
//! variants.
use tokio::sync::{broadcast, mpsc};

use wheel_core::SegmentId;

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Bet on `segment`. Ignored by the game while a spin is in flight.
    pub async fn select(&self, segment: SegmentId) -> Result<()> {
        self.send(Command::Select(segment)).await
    }

    /// Ask the frame loop to stop after the current frame.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    pub fn blocking_select(&self, segment: SegmentId) -> Result<()> {
        self.blocking_send(Command::Select(segment))
    }

    pub fn blocking_shutdown(&self) -> Result<()> {
        self.blocking_send(Command::Shutdown)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Spin` - spins starting, segment ticks and results
    /// - `Topic::Ledger` - rejected bets and credit refills
    /// - `Topic::Assets` - cue load results
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    fn blocking_send(&self, command: Command) -> Result<()> {
        self.command_tx
            .blocking_send(command)
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
