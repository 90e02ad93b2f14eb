//! Error types for the spin lifecycle.

use crate::error::{ErrorSeverity, GameError};
use crate::types::SegmentId;

/// A spin request that the engine refused. Rejection never changes state.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpinError {
    #[error("a spin is already in flight")]
    AlreadySpinning,

    #[error("previous spin resolved on {win} but its outcome was not taken")]
    OutcomePending { win: SegmentId },

    #[error("cannot start a spin from a non-finite angle ({angle})")]
    NonFiniteAngle { angle: f64 },

    #[error("start angle {angle} is too large to resolve individual segments")]
    AngleOutOfRange { angle: f64 },
}

impl GameError for SpinError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadySpinning => ErrorSeverity::Recoverable,
            Self::OutcomePending { .. } => ErrorSeverity::Internal,
            Self::NonFiniteAngle { .. } | Self::AngleOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySpinning => "SPIN_ALREADY_SPINNING",
            Self::OutcomePending { .. } => "SPIN_OUTCOME_PENDING",
            Self::NonFiniteAngle { .. } => "SPIN_NON_FINITE_ANGLE",
            Self::AngleOutOfRange { .. } => "SPIN_ANGLE_OUT_OF_RANGE",
        }
    }
}
