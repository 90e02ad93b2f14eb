//! Fixed-interval frame driver.
//!
//! Owns the scheduling primitive so the game never does: every interval it
//! samples the clock and runs one frame, and in between it applies commands
//! arriving from [`RuntimeHandle`](crate::RuntimeHandle).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use wheel_core::{RngOracle, SegmentId};

use crate::api::PresentationAdapter;
use crate::clock::Clock;
use crate::game::RouletteGame;

/// Commands that can be sent to the frame loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// The player picked a segment.
    Select(SegmentId),
    /// Stop after the current frame.
    Shutdown,
}

/// Why the frame loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoopExit {
    Shutdown,
    /// Every handle was dropped.
    Disconnected,
}

/// Statistics of one [`FrameLoop::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopSummary {
    pub exit: LoopExit,
    pub frames: u64,
    pub commands: u64,
}

pub struct FrameLoop<C> {
    clock: C,
    interval: Duration,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drives `game` until a shutdown command arrives or every sender is gone.
    pub async fn run<R, P>(
        &self,
        game: &mut RouletteGame<R, P>,
        commands: &mut mpsc::Receiver<Command>,
    ) -> LoopSummary
    where
        R: RngOracle,
        P: PresentationAdapter,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = 0;
        let mut handled = 0;

        game.start();
        info!(interval_ms = self.interval.as_millis() as u64, "frame loop started");

        let exit = loop {
            tokio::select! {
                command = commands.recv() => {
                    handled += 1;
                    match command {
                        Some(Command::Select(segment)) => {
                            game.select_bet(segment, self.clock.now());
                        }
                        Some(Command::Shutdown) => break LoopExit::Shutdown,
                        None => break LoopExit::Disconnected,
                    }
                }
                _ = ticker.tick() => {
                    game.frame(self.clock.now());
                    frames += 1;
                }
            }
        };

        debug!(frames, commands = handled, "frame loop finished");
        info!(%exit, "frame loop stopped");

        LoopSummary {
            exit,
            frames,
            commands: handled,
        }
    }
}
