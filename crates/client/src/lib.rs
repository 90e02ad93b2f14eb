//! Terminal front end for the roulette wheel.
//!
//! The `roulette` binary is the composition root: it builds a
//! [`wheel_runtime::Runtime`] around a [`TerminalPresenter`], feeds it keyboard
//! input and journals the session's events.

pub mod config;
pub mod input;
pub mod journal;
pub mod logging;
pub mod presentation;
pub mod terminal;

pub use config::CliConfig;
pub use input::{InputHandler, KeyAction};
pub use journal::JournalStats;
pub use presentation::TerminalPresenter;
