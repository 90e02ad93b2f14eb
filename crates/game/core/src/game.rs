//! One player's game: a wheel plus its ledger.
//!
//! [`GameSession`] is the object a host owns instead of a process-wide game
//! singleton. It keeps the [`SpinEngine`] and the [`SessionState`] in lockstep:
//! a bet and its spin start together, and a resolved spin is settled on the
//! same frame it finishes.
use crate::config::{ConfigError, GameConfig};
use crate::engine::{AngleUpdate, SegmentTicks, SpinEngine, SpinError, SpinPhase, SpinPlan};
use crate::error::{ErrorSeverity, GameError};
use crate::layout::WheelLayout;
use crate::rng::RngOracle;
use crate::session::{BetError, SessionState, Settlement};
use crate::types::{Millis, SegmentId};

/// Why a selection did not start a spin.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SelectError {
    #[error("bet refused: {0}")]
    Bet(#[from] BetError),

    #[error("spin refused: {0}")]
    Spin(#[from] SpinError),
}

impl GameError for SelectError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Bet(error) => error.severity(),
            Self::Spin(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Bet(error) => error.error_code(),
            Self::Spin(error) => error.error_code(),
        }
    }
}

/// Everything a host needs to present one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub angle: f64,
    pub ticks: SegmentTicks,
    /// Present on the frame a spin resolves.
    pub settlement: Option<Settlement>,
}

impl From<AngleUpdate> for FrameReport {
    fn from(update: AngleUpdate) -> Self {
        Self {
            angle: update.angle,
            ticks: update.ticks,
            settlement: None,
        }
    }
}

pub struct GameSession<R> {
    config: GameConfig,
    engine: SpinEngine<R>,
    session: SessionState,
    spins_played: u64,
}

impl<R: RngOracle> GameSession<R> {
    /// Starts a fresh session with the configured balance.
    pub fn new(config: GameConfig, rng: R, game_seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            engine: SpinEngine::new(&config, rng, game_seed),
            session: SessionState::new(&config),
            config,
            spins_played: 0,
        })
    }

    /// Replaces the ledger, e.g. to start from a specific balance.
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &WheelLayout {
        self.engine.layout()
    }

    pub fn engine(&self) -> &SpinEngine<R> {
        &self.engine
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn credits(&self) -> u32 {
        self.session.credits()
    }

    pub fn selected(&self) -> Option<SegmentId> {
        self.session.selected()
    }

    pub fn last_win(&self) -> Option<SegmentId> {
        self.session.win()
    }

    pub fn angle(&self) -> f64 {
        self.engine.angle()
    }

    pub fn phase(&self) -> SpinPhase {
        self.engine.phase()
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.phase() == SpinPhase::Spinning
    }

    /// Spins that ran to completion and were settled.
    pub fn spins_played(&self) -> u64 {
        self.spins_played
    }

    /// Bets on `segment` and starts the spin from the current rotation.
    ///
    /// Either both happen or neither does.
    pub fn select(&mut self, segment: SegmentId, now: Millis) -> Result<SpinPlan, SelectError> {
        if !self.engine.is_idle() {
            return Err(SpinError::AlreadySpinning.into());
        }

        let previous_selection = self.session.selected();
        self.session.try_place_bet(segment)?;

        match self.engine.begin_spin(self.engine.angle(), now) {
            Ok(plan) => Ok(plan),
            Err(error) => {
                self.session.refund_bet(previous_selection);
                Err(error.into())
            }
        }
    }

    /// Advances the wheel to `now`, settling the bet if the spin finished.
    pub fn advance(&mut self, now: Millis) -> FrameReport {
        let update = self.engine.advance(now);
        let mut report = FrameReport::from(update);

        if update.finished.is_some()
            && let Some(win) = self.engine.take_outcome()
        {
            report.settlement = Some(self.session.settle(win));
            self.spins_played += 1;
        }

        report
    }

    /// Refills the balance; the host calls this when the deferred reset fires.
    pub fn reset_credits(&mut self) {
        self.session.reset_credits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use crate::session::Outcome;

    struct Forced(u32);

    impl RngOracle for Forced {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }

        fn pick_index(&self, _seed: u64, _count: u32) -> u32 {
            self.0
        }
    }

    fn finish<R: RngOracle>(game: &mut GameSession<R>, plan: &SpinPlan) -> FrameReport {
        game.advance(plan.end_time())
    }

    #[test]
    fn winning_spin_pays_out() {
        let mut game = GameSession::new(GameConfig::default(), Forced(3), 0).unwrap();
        let plan = game.select(SegmentId(3), Millis::ZERO).unwrap();
        assert_eq!(game.credits(), 90);
        assert!(game.is_spinning());

        let report = finish(&mut game, &plan);
        let settlement = report.settlement.expect("spin should settle");
        assert_eq!(
            settlement.outcome,
            Outcome::Win {
                segment: SegmentId(3),
                payout: 80
            }
        );
        assert_eq!(game.credits(), 170);
        assert_eq!(game.phase(), SpinPhase::Idle);
        assert_eq!(game.spins_played(), 1);
    }

    #[test]
    fn selection_rejected_mid_spin_leaves_ledger_alone() {
        let mut game = GameSession::new(GameConfig::default(), PcgRng, 9).unwrap();
        game.select(SegmentId(0), Millis::ZERO).unwrap();
        game.advance(Millis(100));

        let result = game.select(SegmentId(1), Millis(120));
        assert_eq!(result, Err(SelectError::Spin(SpinError::AlreadySpinning)));
        assert_eq!(game.credits(), 90);
        assert_eq!(game.selected(), Some(SegmentId(0)));
    }

    #[test]
    fn broke_session_cannot_select() {
        let session = SessionState::new(&GameConfig::default()).with_credits(5);
        let mut game = GameSession::new(GameConfig::default(), PcgRng, 9)
            .unwrap()
            .with_session(session);

        let result = game.select(SegmentId(1), Millis::ZERO);
        assert!(matches!(
            result,
            Err(SelectError::Bet(BetError::InsufficientCredits { .. }))
        ));
        assert_eq!(
            result.as_ref().err().map(|error| error.severity()),
            Some(ErrorSeverity::Recoverable)
        );
        assert!(game.engine().is_idle());
        assert_eq!(game.engine().nonce(), 0);
    }

    #[test]
    fn settlement_only_reported_once() {
        let mut game = GameSession::new(GameConfig::default(), Forced(1), 0).unwrap();
        let plan = game.select(SegmentId(2), Millis::ZERO).unwrap();
        assert!(finish(&mut game, &plan).settlement.is_some());
        assert!(game.advance(plan.end_time() + 16).settlement.is_none());
        assert_eq!(game.last_win(), Some(SegmentId(1)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::new().with_segment_count(0);
        assert!(matches!(
            GameSession::new(config, PcgRng, 0),
            Err(ConfigError::NoSegments)
        ));
    }
}
