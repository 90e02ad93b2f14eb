use std::f64::consts::FRAC_PI_2;

/// Game configuration constants and tunable parameters.
///
/// Defaults reproduce the shipped wheel: eight icons, 10 credit bets, 80
/// credit payout and a six second spin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of wedges on the wheel.
    pub segment_count: u32,
    /// Credits deducted when a bet is placed.
    pub bet_cost: u32,
    /// Credits awarded when the selected segment wins.
    pub payout: u32,
    /// Starting balance, also the balance restored after running dry.
    pub initial_credits: u32,
    /// Wall time of one spin animation.
    pub spin_duration_ms: u64,
    /// Whole turns every spin makes before settling.
    pub min_full_turns: u32,
    /// Upper bound (exclusive) of the random extra turns added on top.
    pub max_extra_turns: f64,
    /// Rotation offset that aligns a segment center with the pointer.
    pub pointer_offset: f64,
    /// Angular increment applied per idle frame.
    pub idle_drift: f64,
    /// Delay before an empty balance is refilled.
    pub reset_delay_ms: u64,
}

impl GameConfig {
    pub const DEFAULT_SEGMENT_COUNT: u32 = 8;
    pub const DEFAULT_BET_COST: u32 = 10;
    pub const DEFAULT_PAYOUT: u32 = 80;
    pub const DEFAULT_INITIAL_CREDITS: u32 = 100;
    pub const DEFAULT_SPIN_DURATION_MS: u64 = 6000;
    pub const DEFAULT_MIN_FULL_TURNS: u32 = 6;
    pub const DEFAULT_MAX_EXTRA_TURNS: f64 = 2.0;
    pub const DEFAULT_POINTER_OFFSET: f64 = FRAC_PI_2;
    pub const DEFAULT_IDLE_DRIFT: f64 = 0.001;
    pub const DEFAULT_RESET_DELAY_MS: u64 = 2000;

    pub fn new() -> Self {
        Self {
            segment_count: Self::DEFAULT_SEGMENT_COUNT,
            bet_cost: Self::DEFAULT_BET_COST,
            payout: Self::DEFAULT_PAYOUT,
            initial_credits: Self::DEFAULT_INITIAL_CREDITS,
            spin_duration_ms: Self::DEFAULT_SPIN_DURATION_MS,
            min_full_turns: Self::DEFAULT_MIN_FULL_TURNS,
            max_extra_turns: Self::DEFAULT_MAX_EXTRA_TURNS,
            pointer_offset: Self::DEFAULT_POINTER_OFFSET,
            idle_drift: Self::DEFAULT_IDLE_DRIFT,
            reset_delay_ms: Self::DEFAULT_RESET_DELAY_MS,
        }
    }

    pub fn with_segment_count(mut self, segment_count: u32) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn with_initial_credits(mut self, initial_credits: u32) -> Self {
        self.initial_credits = initial_credits;
        self
    }

    pub fn with_spin_duration_ms(mut self, spin_duration_ms: u64) -> Self {
        self.spin_duration_ms = spin_duration_ms;
        self
    }

    /// Checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_count == 0 {
            return Err(ConfigError::NoSegments);
        }
        if self.spin_duration_ms == 0 {
            return Err(ConfigError::ZeroSpinDuration);
        }
        if self.bet_cost == 0 {
            return Err(ConfigError::FreeBet);
        }
        if !self.max_extra_turns.is_finite() || self.max_extra_turns < 0.0 {
            return Err(ConfigError::InvalidExtraTurns(self.max_extra_turns));
        }
        if !self.pointer_offset.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "pointer_offset",
            });
        }
        if !self.idle_drift.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "idle_drift",
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("wheel needs at least one segment")]
    NoSegments,

    #[error("spin duration must be positive")]
    ZeroSpinDuration,

    #[error("bet cost must be positive")]
    FreeBet,

    #[error("extra turn range must be a finite non-negative number (got {0})")]
    InvalidExtraTurns(f64),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}
