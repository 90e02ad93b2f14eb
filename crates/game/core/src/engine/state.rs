use crate::types::{Millis, SegmentId};

/// Everything fixed at the moment a spin starts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpinPlan {
    /// Spin counter value the random draws were keyed on.
    pub nonce: u64,
    pub win: SegmentId,
    pub start_time: Millis,
    pub start_angle: f64,
    pub target_angle: f64,
    pub duration_ms: u64,
}

impl SpinPlan {
    /// Total rotation the wheel will travel.
    pub fn travel(&self) -> f64 {
        self.target_angle - self.start_angle
    }

    pub fn end_time(&self) -> Millis {
        self.start_time + self.duration_ms
    }
}

/// Bookkeeping of a spin in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSpin {
    pub plan: SpinPlan,
    /// Crossing index of the last rendered angle.
    pub last_segment: i64,
}

/// Lifecycle of the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SpinState {
    #[default]
    Idle,
    Spinning(ActiveSpin),
    /// Spin completed; holds until the outcome is taken.
    Resolved { win: SegmentId },
}

impl SpinState {
    pub fn phase(&self) -> SpinPhase {
        match self {
            Self::Idle => SpinPhase::Idle,
            Self::Spinning(_) => SpinPhase::Spinning,
            Self::Resolved { .. } => SpinPhase::Resolved,
        }
    }
}

/// Data-free view of [`SpinState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpinPhase {
    Idle,
    Spinning,
    Resolved,
}

/// Wedge boundaries crossed during one advance.
///
/// The wheel only moves forward while spinning, so the entered segments are
/// `from + 1 ..= to`; `to <= from` means nothing was crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentTicks {
    pub from: i64,
    pub to: i64,
}

impl SegmentTicks {
    pub const NONE: Self = Self { from: 0, to: 0 };

    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    pub fn count(&self) -> u64 {
        if self.to > self.from {
            self.to.abs_diff(self.from)
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Crossing indices of the newly entered segments, in travel order.
    pub fn entered(&self) -> impl Iterator<Item = i64> {
        (self.from + 1)..=self.to
    }
}

/// Result of one [`SpinEngine::advance`](super::SpinEngine::advance) call.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AngleUpdate {
    /// Rotation to render this frame.
    pub angle: f64,
    /// One tick cue per entered segment.
    pub ticks: SegmentTicks,
    /// Set on the frame the spin resolves.
    pub finished: Option<SegmentId>,
}

impl AngleUpdate {
    pub const fn still(angle: f64) -> Self {
        Self {
            angle,
            ticks: SegmentTicks::NONE,
            finished: None,
        }
    }
}
