//! Host-side orchestration for the roulette wheel.
//!
//! This crate drives a [`wheel_core::GameSession`] from the outside world: a
//! fixed-interval frame loop, keyboard (or any other) input through a
//! [`RuntimeHandle`], background cue loading, deferred credit refills and a
//! topic-based event bus for observers.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types hosts interact with
//! - [`game`] maps core reports onto presentation calls
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`assets`] tracks which cues can be played
//! - [`timers`] and [`clock`] supply deferred events and frame time
pub mod api;
pub mod assets;
pub mod clock;
pub mod config;
pub mod events;
pub mod game;
pub mod runtime;
pub mod timers;

mod workers;

pub use api::{AssetError, Cue, PresentationAdapter, Result, RuntimeError, RuntimeHandle};
pub use assets::{
    CueBank, CueLoads, CueSource, CueStatus, FileCueSource, LoadReport, LoadedCue,
    spawn_cue_loads,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RuntimeConfig;
pub use events::{AssetEvent, Event, EventBus, LedgerEvent, SpinEvent, Topic};
pub use game::{Deferred, RouletteGame};
pub use runtime::{Finished, Runtime, RuntimeBuilder};
pub use timers::{TimerHandle, TimerQueue};
pub use workers::{Command, FrameLoop, LoopExit, LoopSummary};
