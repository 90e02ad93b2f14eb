use crate::error::{ErrorSeverity, GameError};
use crate::types::SegmentId;

/// Reasons a bet is refused. A refused bet never touches the balance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetError {
    #[error("a spin is already in flight")]
    SpinInFlight,

    #[error("balance {credits} cannot cover a bet of {bet_cost}")]
    InsufficientCredits { credits: u32, bet_cost: u32 },

    #[error("segment {segment} is not on a wheel of {segment_count}")]
    UnknownSegment {
        segment: SegmentId,
        segment_count: u32,
    },
}

impl GameError for BetError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SpinInFlight | Self::InsufficientCredits { .. } => ErrorSeverity::Recoverable,
            Self::UnknownSegment { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SpinInFlight => "BET_SPIN_IN_FLIGHT",
            Self::InsufficientCredits { .. } => "BET_INSUFFICIENT_CREDITS",
            Self::UnknownSegment { .. } => "BET_UNKNOWN_SEGMENT",
        }
    }
}
