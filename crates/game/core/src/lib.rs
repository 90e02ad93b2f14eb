//! Deterministic rules of the roulette wheel.
//!
//! `wheel-core` defines the wheel geometry, the spin lifecycle and the credit
//! ledger as pure APIs. Nothing here reads a clock, draws ambient randomness or
//! touches I/O: the host supplies timestamps and an [`RngOracle`], and presents
//! whatever the core reports. All state flows through [`GameSession`], which
//! pairs the [`engine::SpinEngine`] with the [`session::SessionState`].
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod layout;
pub mod rng;
pub mod session;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use engine::{
    AngleUpdate, SegmentTicks, SpinEngine, SpinError, SpinPhase, SpinPlan, SpinState,
};
pub use error::{ErrorSeverity, GameError};
pub use game::{FrameReport, GameSession, SelectError};
pub use layout::WheelLayout;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use session::{BetError, CreditReset, Outcome, SessionState, Settlement, messages};
pub use types::{Millis, SegmentId};
