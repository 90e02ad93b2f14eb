//! Topic-based event bus for runtime events.
//!
//! Observers (history panels, session logs) subscribe to the topics they care
//! about. Publishing is fire-and-forget and never affects gameplay.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AssetEvent, LedgerEvent, SpinEvent};
