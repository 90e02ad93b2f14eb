//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

use wheel_core::GameConfig;

/// Everything needed to build a [`Runtime`](crate::Runtime).
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Seed for every spin of the session. Random when unset.
    pub seed: Option<u64>,
    pub frame_interval_ms: u64,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            frame_interval_ms: 16,
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WHEEL_SEED` - Session seed (default: random)
    /// - `WHEEL_FRAME_INTERVAL_MS` - Frame interval (default: 16)
    /// - `WHEEL_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `WHEEL_EVENT_BUFFER` - Per-topic event buffer (default: 100)
    /// - `WHEEL_SEGMENTS` - Segments on the wheel (default: 8)
    /// - `WHEEL_BET_COST` - Credits per bet (default: 10)
    /// - `WHEEL_PAYOUT` - Credits paid on a match (default: 80)
    /// - `WHEEL_INITIAL_CREDITS` - Starting balance (default: 100)
    /// - `WHEEL_SPIN_DURATION_MS` - Spin animation length (default: 6000)
    /// - `WHEEL_RESET_DELAY_MS` - Delay before refilling credits (default: 2000)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = parse(lookup("WHEEL_SEED"));

        if let Some(interval) = parse::<u64>(lookup("WHEEL_FRAME_INTERVAL_MS")) {
            config.frame_interval_ms = interval.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("WHEEL_COMMAND_BUFFER")) {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("WHEEL_EVENT_BUFFER")) {
            config.event_buffer_size = capacity.max(1);
        }

        let game = &mut config.game;
        if let Some(count) = parse(lookup("WHEEL_SEGMENTS")) {
            game.segment_count = count;
        }
        if let Some(cost) = parse(lookup("WHEEL_BET_COST")) {
            game.bet_cost = cost;
        }
        if let Some(payout) = parse(lookup("WHEEL_PAYOUT")) {
            game.payout = payout;
        }
        if let Some(credits) = parse(lookup("WHEEL_INITIAL_CREDITS")) {
            game.initial_credits = credits;
        }
        if let Some(duration) = parse(lookup("WHEEL_SPIN_DURATION_MS")) {
            game.spin_duration_ms = duration;
        }
        if let Some(delay) = parse(lookup("WHEEL_RESET_DELAY_MS")) {
            game.reset_delay_ms = delay;
        }

        config
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
