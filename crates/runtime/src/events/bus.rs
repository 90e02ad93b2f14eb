//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{AssetEvent, LedgerEvent, SpinEvent};

/// Topics for event routing
#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Topic {
    /// Spin starts, segment ticks and results
    Spin,
    /// Rejected bets and credit refills
    Ledger,
    /// Cue load results
    Assets,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Spin(SpinEvent),
    Ledger(LedgerEvent),
    Assets(AssetEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Spin(_) => Topic::Spin,
            Event::Ledger(_) => Topic::Ledger,
            Event::Assets(_) => Topic::Assets,
        }
    }
}

impl From<SpinEvent> for Event {
    fn from(event: SpinEvent) -> Self {
        Event::Spin(event)
    }
}

impl From<LedgerEvent> for Event {
    fn from(event: LedgerEvent) -> Self {
        Event::Ledger(event)
    }
}

impl From<AssetEvent> for Event {
    fn from(event: AssetEvent) -> Self {
        Event::Assets(event)
    }
}

/// Topic-based event bus
///
/// Channels for every topic are created up front, so publishing and
/// subscribing never wait on a lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a bus whose topics each buffer `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        use strum::IntoEnumIterator;

        let capacity = capacity.max(1);
        let channels = Topic::iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its topic. Events without subscribers are dropped.
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!("No subscribers for topic {}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Every topic is inserted in `with_capacity`.
            None => unreachable!("topic {topic} has no channel"),
        }
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.channels
            .get(&topic)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
