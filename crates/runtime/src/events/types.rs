use serde::{Deserialize, Serialize};

use wheel_core::{Millis, Outcome, SegmentId, SegmentTicks, SpinPlan};

use crate::api::Cue;

/// Spin lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SpinEvent {
    Started {
        plan: SpinPlan,
        selected: SegmentId,
        credits: u32,
    },
    /// Segments entered during one frame.
    Ticked { ticks: SegmentTicks, at: Millis },
    Finished {
        outcome: Outcome,
        credits: u32,
        at: Millis,
    },
}

/// Balance changes outside a settled spin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LedgerEvent {
    BetRejected {
        segment: SegmentId,
        code: String,
        reason: String,
    },
    ResetScheduled { due: Millis, credits: u32 },
    CreditsReset { credits: u32, at: Millis },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssetEvent {
    CueReady { cue: Cue },
    CueUnavailable { cue: Cue, reason: String },
}
