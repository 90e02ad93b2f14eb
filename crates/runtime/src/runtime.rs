//! High-level runtime orchestrator.
//!
//! The runtime wires the game, the frame loop, the command channel and the
//! cue loads together and exposes a builder-based API for hosts.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::info;

use wheel_core::{GameSession, PcgRng, RngOracle, SessionState};

use crate::api::{PresentationAdapter, Result, RuntimeError, RuntimeHandle};
use crate::assets::{CueBank, CueLoads, CueSource, spawn_cue_loads};
use crate::clock::{Clock, SystemClock};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, Topic};
use crate::game::RouletteGame;
use crate::workers::{Command, FrameLoop, LoopSummary};

/// A built session, ready to [`run`](Self::run).
///
/// [`RuntimeHandle`] provides a cloneable façade for input sources.
pub struct Runtime<P, R = PcgRng, C = SystemClock> {
    handle: RuntimeHandle,
    game: RouletteGame<R, P>,
    frame_loop: FrameLoop<C>,
    command_rx: mpsc::Receiver<Command>,
    cue_loads: Option<CueLoads>,
    seed: u64,
}

/// What is left once the frame loop stops.
pub struct Finished<R, P> {
    pub summary: LoopSummary,
    pub game: RouletteGame<R, P>,
}

impl<P: PresentationAdapter> Runtime<P> {
    /// Create a new runtime builder around `presenter`
    pub fn builder(presenter: P) -> RuntimeBuilder<P> {
        RuntimeBuilder::new(presenter)
    }
}

impl<P, R, C> Runtime<P, R, C>
where
    P: PresentationAdapter,
    R: RngOracle,
    C: Clock,
{
    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Seed every spin of this session derives from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn game(&self) -> &RouletteGame<R, P> {
        &self.game
    }

    /// Runs frames until a shutdown command arrives or every handle is dropped.
    ///
    /// Cue loads still in flight are aborted on the way out.
    pub async fn run(self) -> Result<Finished<R, P>> {
        let Self {
            handle,
            mut game,
            frame_loop,
            mut command_rx,
            cue_loads,
            seed,
        } = self;
        drop(handle);

        info!(seed, "session started");
        let summary = frame_loop.run(&mut game, &mut command_rx).await;

        if let Some(mut loads) = cue_loads {
            let aborted = loads.abort_all();
            loads.wait().await?;
            if aborted > 0 {
                info!(aborted, "cue loads cancelled at shutdown");
            }
        }

        Ok(Finished { summary, game })
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder<P, R = PcgRng, C = SystemClock> {
    config: RuntimeConfig,
    presenter: P,
    rng: R,
    clock: C,
    session: Option<SessionState>,
    cue_source: Option<Arc<dyn CueSource>>,
    cues: Option<CueBank>,
}

impl<P: PresentationAdapter> RuntimeBuilder<P> {
    fn new(presenter: P) -> Self {
        Self {
            config: RuntimeConfig::default(),
            presenter,
            rng: PcgRng,
            clock: SystemClock::new(),
            session: None,
            cue_source: None,
            cues: None,
        }
    }
}

impl<P, R, C> RuntimeBuilder<P, R, C>
where
    P: PresentationAdapter,
    R: RngOracle,
    C: Clock,
{
    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the random oracle, e.g. for a scripted one in tests.
    pub fn rng<R2: RngOracle>(self, rng: R2) -> RuntimeBuilder<P, R2, C> {
        RuntimeBuilder {
            config: self.config,
            presenter: self.presenter,
            rng,
            clock: self.clock,
            session: self.session,
            cue_source: self.cue_source,
            cues: self.cues,
        }
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> RuntimeBuilder<P, R, C2> {
        RuntimeBuilder {
            config: self.config,
            presenter: self.presenter,
            rng: self.rng,
            clock,
            session: self.session,
            cue_source: self.cue_source,
            cues: self.cues,
        }
    }

    /// Start from an existing ledger instead of the configured balance.
    pub fn session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }

    /// Load cues from `source` in the background once built.
    pub fn cue_source(mut self, source: Arc<dyn CueSource>) -> Self {
        self.cue_source = Some(source);
        self
    }

    /// Preset cue availability. Defaults to "all ready" without a cue source.
    pub fn cues(mut self, cues: CueBank) -> Self {
        self.cues = Some(cues);
        self
    }

    /// Build the runtime.
    ///
    /// Spawns the cue loads when a source is set, so it has to be called from
    /// within a tokio runtime in that case.
    pub fn build(self) -> Result<Runtime<P, R, C>> {
        if self.config.frame_interval_ms == 0 {
            return Err(RuntimeError::ZeroFrameInterval);
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut session = GameSession::new(self.config.game.clone(), self.rng, seed)?;
        if let Some(ledger) = self.session {
            session = session.with_session(ledger);
        }

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let default_cues = match self.cue_source {
            Some(_) => CueBank::new(),
            None => CueBank::all_ready(),
        };
        let mut game = RouletteGame::new(session, self.presenter, event_bus)
            .with_cues(self.cues.unwrap_or(default_cues));

        let cue_loads = self.cue_source.map(|source| {
            let (report_tx, report_rx) = mpsc::unbounded_channel();
            game.attach_cue_reports(report_rx);
            spawn_cue_loads(source, report_tx)
        });

        info!(
            seed,
            segments = self.config.game.segment_count,
            credits = game.session().credits(),
            frame_interval_ms = self.config.frame_interval_ms,
            "runtime built"
        );

        Ok(Runtime {
            handle,
            game,
            frame_loop: FrameLoop::new(self.clock, self.config.frame_interval()),
            command_rx,
            cue_loads,
            seed,
        })
    }
}
