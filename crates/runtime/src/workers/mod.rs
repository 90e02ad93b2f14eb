//! Tasks that drive the game.
//!
//! The frame loop is the only place that owns a timer; everything it drives
//! runs synchronously inside a frame or a command.

mod frame;

pub use frame::{Command, FrameLoop, LoopExit, LoopSummary};
