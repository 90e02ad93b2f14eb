//! Spin lifecycle and animation.
//!
//! The [`SpinEngine`] is the authoritative owner of the wheel rotation. It
//! plans a spin when asked, turns elapsed time into an eased rotation, reports
//! every wedge boundary the wheel crosses, and resolves the win segment once the
//! animation completes.
//!
//! ```text
//! Idle --begin_spin--> Spinning --advance(t >= 1)--> Resolved --take_outcome--> Idle
//! ```
//!
//! The engine never samples a clock or schedules itself: the host passes a
//! timestamp to every call and decides how often to call [`SpinEngine::advance`].

pub mod easing;
mod errors;
mod state;

pub use errors::SpinError;
pub use state::{ActiveSpin, AngleUpdate, SegmentTicks, SpinPhase, SpinPlan, SpinState};

use std::f64::consts::TAU;

use crate::config::GameConfig;
use crate::layout::WheelLayout;
use crate::rng::{RngOracle, compute_seed, context};
use crate::types::{Millis, SegmentId};

/// Drives the wheel through the spin lifecycle.
#[derive(Clone, Debug)]
pub struct SpinEngine<R> {
    layout: WheelLayout,
    rng: R,
    game_seed: u64,
    nonce: u64,
    spin_duration_ms: u64,
    min_full_turns: u32,
    max_extra_turns: f64,
    idle_drift: f64,
    angle: f64,
    state: SpinState,
}

impl<R: RngOracle> SpinEngine<R> {
    /// Creates an idle engine at rotation zero.
    pub fn new(config: &GameConfig, rng: R, game_seed: u64) -> Self {
        Self {
            layout: WheelLayout::from_config(config),
            rng,
            game_seed,
            nonce: 0,
            spin_duration_ms: config.spin_duration_ms,
            min_full_turns: config.min_full_turns,
            max_extra_turns: config.max_extra_turns,
            idle_drift: config.idle_drift,
            angle: 0.0,
            state: SpinState::Idle,
        }
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn phase(&self) -> SpinPhase {
        self.state.phase()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, SpinState::Idle)
    }

    /// Rotation produced by the last advance (or the spin start).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Number of spins started so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Plans a spin from `current_angle` and starts it at `now`.
    ///
    /// The win segment is drawn uniformly, then the target rotation is the
    /// pointer alignment of that segment pushed forward by whole turns until it
    /// clears `min_full_turns` plus a random fraction of `max_extra_turns`.
    ///
    /// # Errors
    ///
    /// Rejected unless the engine is idle; a rejection leaves every field as it
    /// was.
    pub fn begin_spin(&mut self, current_angle: f64, now: Millis) -> Result<SpinPlan, SpinError> {
        match self.state {
            SpinState::Idle => {}
            SpinState::Spinning(_) => return Err(SpinError::AlreadySpinning),
            SpinState::Resolved { win } => return Err(SpinError::OutcomePending { win }),
        }
        if !current_angle.is_finite() {
            return Err(SpinError::NonFiniteAngle {
                angle: current_angle,
            });
        }
        let farthest =
            current_angle.abs() + TAU * (f64::from(self.min_full_turns) + self.max_extra_turns);
        if ulp(farthest) > self.layout.segment_angle() {
            return Err(SpinError::AngleOutOfRange {
                angle: current_angle,
            });
        }

        let nonce = self.nonce;
        let win = SegmentId(self.rng.pick_index(
            compute_seed(self.game_seed, nonce, context::WIN_SEGMENT),
            self.layout.segment_count(),
        ));
        let extra_turns = self
            .rng
            .unit(compute_seed(self.game_seed, nonce, context::EXTRA_TURNS))
            * self.max_extra_turns;

        let minimum = current_angle + TAU * (f64::from(self.min_full_turns) + extra_turns);
        let target_angle = extend_by_turns(self.layout.pointer_target(win), minimum).ok_or(
            SpinError::AngleOutOfRange {
                angle: current_angle,
            },
        )?;

        let plan = SpinPlan {
            nonce,
            win,
            start_time: now,
            start_angle: current_angle,
            target_angle,
            duration_ms: self.spin_duration_ms,
        };

        self.nonce += 1;
        self.angle = current_angle;
        self.state = SpinState::Spinning(ActiveSpin {
            plan,
            last_segment: self.layout.crossing_index(current_angle),
        });

        Ok(plan)
    }

    /// Moves the wheel to its rotation at `now`.
    ///
    /// - Idle: drifts by the configured idle increment, no signals.
    /// - Spinning: eased interpolation toward the target; reports crossed
    ///   wedges and, on the final frame, snaps to the target and resolves.
    /// - Resolved: holds the final rotation.
    pub fn advance(&mut self, now: Millis) -> AngleUpdate {
        let active = match self.state {
            SpinState::Idle => {
                self.angle += self.idle_drift;
                return AngleUpdate::still(self.angle);
            }
            SpinState::Resolved { .. } => return AngleUpdate::still(self.angle),
            SpinState::Spinning(active) => active,
        };

        let plan = active.plan;
        let t = easing::progress(now, plan.start_time, plan.duration_ms);
        let done = t >= 1.0;
        let angle = if done {
            plan.target_angle
        } else {
            easing::lerp(
                plan.start_angle,
                plan.target_angle,
                easing::ease_out_cubic(t),
            )
        };

        let segment = self.layout.crossing_index(angle);
        let ticks = SegmentTicks::new(active.last_segment, segment);
        self.angle = angle;

        if done {
            self.state = SpinState::Resolved { win: plan.win };
            AngleUpdate {
                angle,
                ticks,
                finished: Some(plan.win),
            }
        } else {
            self.state = SpinState::Spinning(ActiveSpin {
                plan,
                last_segment: segment.max(active.last_segment),
            });
            AngleUpdate {
                angle,
                ticks,
                finished: None,
            }
        }
    }

    /// Reads the resolved win segment once and returns the engine to idle.
    pub fn take_outcome(&mut self) -> Option<SegmentId> {
        match self.state {
            SpinState::Resolved { win } => {
                self.state = SpinState::Idle;
                Some(win)
            }
            _ => None,
        }
    }
}

/// Smallest `base + k·2π` (k ≥ 0) that is not below `minimum`, or `None` when
/// `minimum` is too large for whole turns to be represented.
fn extend_by_turns(base: f64, minimum: f64) -> Option<f64> {
    if base >= minimum {
        return Some(base);
    }
    let mut target = base + ((minimum - base) / TAU).ceil() * TAU;
    // ceil() can land a hair short after rounding
    if target < minimum {
        target += TAU;
    }
    (target >= minimum).then_some(target)
}

/// Distance from `value` to the next representable f64 away from zero.
fn ulp(value: f64) -> f64 {
    let magnitude = value.abs();
    f64::from_bits(magnitude.to_bits() + 1) - magnitude
}
