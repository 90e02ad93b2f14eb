//! Common error infrastructure for wheel-core.
//!
//! Domain errors (`SpinError`, `BetError`, `SelectError`) live next to the
//! state machines that produce them. This module only carries the shared
//! classification so hosts can decide how loudly to react.
//!
//! None of the core errors are fatal: a rejected bet or spin leaves every piece
//! of state untouched, and the host is free to ignore it.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: spin still in flight, balance waiting for its refill
    Recoverable,

    /// Invalid input that will never succeed as-is.
    ///
    /// Examples: segment index outside the wheel
    Validation,

    /// Unexpected state inconsistency. Indicates a bug in the caller or core.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all wheel-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this variant, handy for log fields and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
