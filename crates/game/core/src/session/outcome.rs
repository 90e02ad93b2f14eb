use crate::types::SegmentId;

/// Texts shown by the game at each lifecycle step.
pub mod messages {
    pub const SPINNING: &str = "SPINNING...";
    pub const NO_MATCH: &str = "NO MATCH. TRY AGAIN.";
    pub const OUT_OF_CREDITS: &str = "OUT OF CREDITS. RESETTING...";

    pub fn matched(payout: u32) -> String {
        format!("MATCH! +{payout} CREDITS")
    }

    pub fn credits(credits: u32) -> String {
        format!("CREDITS: {credits}")
    }
}

/// How a settled spin turned out for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Win {
        segment: SegmentId,
        payout: u32,
    },
    Loss {
        segment: SegmentId,
        selected: Option<SegmentId>,
    },
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }

    /// Segment the wheel landed on.
    pub fn segment(&self) -> SegmentId {
        match self {
            Self::Win { segment, .. } | Self::Loss { segment, .. } => *segment,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Win { payout, .. } => messages::matched(*payout),
            Self::Loss { .. } => messages::NO_MATCH.to_string(),
        }
    }
}

/// Deferred refill requested when the balance can no longer cover a bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditReset {
    pub delay_ms: u64,
    /// Balance restored when the refill fires.
    pub credits: u32,
}

/// Result of [`SessionState::settle`](super::SessionState::settle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settlement {
    pub outcome: Outcome,
    /// Balance after the payout (if any).
    pub credits: u32,
    pub reset: Option<CreditReset>,
}
