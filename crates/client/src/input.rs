//! Keyboard handling.
//!
//! Owns the key-to-command mapping so the rest of the client never looks at
//! `crossterm` events directly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use wheel_core::SegmentId;
use wheel_runtime::RuntimeHandle;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Bet(SegmentId),
    None,
}

/// Maps digit keys onto the segments of a wheel.
pub struct InputHandler {
    segment_count: u32,
}

impl InputHandler {
    pub fn new(segment_count: u32) -> Self {
        Self { segment_count }
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            digit @ '1'..='9' => {
                let index = digit as u32 - '1' as u32;
                if index < self.segment_count {
                    KeyAction::Bet(SegmentId(index))
                } else {
                    KeyAction::None
                }
            }
            _ => KeyAction::None,
        }
    }
}

/// Reads the keyboard on a blocking thread and forwards commands to the
/// runtime until the user quits, the runtime goes away or `stop` is raised.
pub fn spawn_reader(
    handle: RuntimeHandle,
    input: InputHandler,
    stop: Arc<AtomicBool>,
) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !stop.load(Ordering::Relaxed) {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match input.handle_key(key) {
                KeyAction::Quit => {
                    debug!("quit requested");
                    if handle.blocking_shutdown().is_err() {
                        warn!("runtime already stopped");
                    }
                    break;
                }
                KeyAction::Bet(segment) => {
                    if handle.blocking_select(segment).is_err() {
                        warn!(%segment, "runtime stopped, dropping selection");
                        break;
                    }
                }
                KeyAction::None => {}
            }
        }
        Ok(())
    })
}
