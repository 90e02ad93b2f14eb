//! Cue availability.
//!
//! Cues load in the background while the game is already playable. Until a cue
//! reports in, or if it fails, playing it does nothing.

mod bank;
mod loader;
mod source;

pub use bank::{CueBank, CueStatus, LoadReport};
pub use loader::{CueLoads, spawn_cue_loads};
pub use source::{CueSource, FileCueSource, LoadedCue};
