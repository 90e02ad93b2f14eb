//! Host-side game object.
//!
//! [`RouletteGame`] turns what [`GameSession`] reports into presentation calls,
//! cue playback, deferred credit refills and bus events. It is driven entirely
//! from outside: one `select_bet` per input and one `frame` per tick.
use tokio::sync::mpsc;
use tracing::{debug, info};

use wheel_core::{
    FrameReport, GameError, GameSession, Millis, RngOracle, SegmentId, Settlement, messages,
};

use crate::api::{Cue, PresentationAdapter};
use crate::assets::{CueBank, CueStatus, LoadReport};
use crate::events::{AssetEvent, EventBus, LedgerEvent, SpinEvent};
use crate::timers::{TimerHandle, TimerQueue};

/// Events deferred to a later frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Refill the balance after running dry.
    ResetCredits { credits: u32 },
}

pub struct RouletteGame<R, P> {
    session: GameSession<R>,
    presenter: P,
    cues: CueBank,
    cue_reports: Option<mpsc::UnboundedReceiver<LoadReport>>,
    timers: TimerQueue<Deferred>,
    pending_reset: Option<TimerHandle>,
    events: EventBus,
}

impl<R: RngOracle, P: PresentationAdapter> RouletteGame<R, P> {
    pub fn new(session: GameSession<R>, presenter: P, events: EventBus) -> Self {
        Self {
            session,
            presenter,
            cues: CueBank::new(),
            cue_reports: None,
            timers: TimerQueue::new(),
            pending_reset: None,
            events,
        }
    }

    /// Replaces the cue availability table.
    pub fn with_cues(mut self, cues: CueBank) -> Self {
        self.cues = cues;
        self
    }

    /// Cue load results arriving on `reports` are applied at frame start.
    pub fn attach_cue_reports(&mut self, reports: mpsc::UnboundedReceiver<LoadReport>) {
        self.cue_reports = Some(reports);
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn cues(&self) -> &CueBank {
        &self.cues
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Handle of the credit refill waiting to fire, if any.
    pub fn pending_reset(&self) -> Option<TimerHandle> {
        self.pending_reset
    }

    /// Drops a scheduled credit refill. Returns whether one was pending.
    pub fn cancel_pending_reset(&mut self) -> bool {
        match self.pending_reset.take() {
            Some(handle) => self.timers.cancel(handle),
            None => false,
        }
    }

    /// Draws the idle wheel and the starting balance.
    pub fn start(&mut self) {
        self.presenter.set_credits(self.session.credits());
        self.presenter.set_selected(self.session.selected());
        self.presenter.render(self.session.angle());
        self.presenter.present();
    }

    /// Handles "user picked segment `segment`".
    ///
    /// Ignored entirely while a spin is in flight. Otherwise the pick is
    /// acknowledged and a spin starts if the balance allows it. Returns whether
    /// a spin started.
    pub fn select_bet(&mut self, segment: SegmentId, now: Millis) -> bool {
        if self.session.is_spinning() {
            debug!(%segment, "selection ignored, wheel is spinning");
            return false;
        }

        self.play(Cue::Click);
        self.presenter.set_selected(Some(segment));

        match self.session.select(segment, now) {
            Ok(plan) => {
                let credits = self.session.credits();
                self.presenter.set_credits(credits);
                self.presenter.set_message(messages::SPINNING);
                self.presenter.reset_highlight();

                info!(
                    %segment,
                    nonce = plan.nonce,
                    target = plan.target_angle,
                    credits,
                    "spin started"
                );
                self.events.publish(SpinEvent::Started {
                    plan,
                    selected: segment,
                    credits,
                });
                true
            }
            Err(error) => {
                debug!(
                    %segment,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "bet rejected: {error}"
                );
                self.events.publish(LedgerEvent::BetRejected {
                    segment,
                    code: error.error_code().to_string(),
                    reason: error.to_string(),
                });
                false
            }
        }
    }

    /// Runs one frame at `now`.
    pub fn frame(&mut self, now: Millis) -> FrameReport {
        self.drain_cue_reports();
        self.fire_due_timers(now);

        let report = self.session.advance(now);
        self.presenter.render(report.angle);

        if !report.ticks.is_empty() {
            for _ in report.ticks.entered() {
                self.play(Cue::Tick);
            }
            self.events.publish(SpinEvent::Ticked {
                ticks: report.ticks,
                at: now,
            });
        }

        if let Some(settlement) = report.settlement {
            self.finish_spin(&settlement, now);
        }

        self.presenter.present();
        report
    }

    fn finish_spin(&mut self, settlement: &Settlement, now: Millis) {
        let outcome = settlement.outcome;

        self.presenter
            .show_result(outcome.segment(), outcome.is_win());
        self.presenter.set_message(&outcome.message());
        self.play(if outcome.is_win() {
            Cue::Score
        } else {
            Cue::Fail
        });
        self.presenter.set_credits(settlement.credits);

        info!(
            result = outcome.as_ref(),
            segment = %outcome.segment(),
            credits = settlement.credits,
            "spin settled"
        );
        self.events.publish(SpinEvent::Finished {
            outcome,
            credits: settlement.credits,
            at: now,
        });

        if let Some(reset) = settlement.reset {
            self.presenter.set_message(messages::OUT_OF_CREDITS);

            let due = now + reset.delay_ms;
            self.pending_reset = Some(self.timers.schedule(
                due,
                Deferred::ResetCredits {
                    credits: reset.credits,
                },
            ));
            info!(%due, "out of credits, refill scheduled");
            self.events.publish(LedgerEvent::ResetScheduled {
                due,
                credits: reset.credits,
            });
        }
    }

    fn fire_due_timers(&mut self, now: Millis) {
        for deferred in self.timers.drain_due(now) {
            match deferred {
                Deferred::ResetCredits { credits } => {
                    self.pending_reset = None;
                    self.session.reset_credits();
                    self.presenter.set_credits(self.session.credits());
                    info!(credits, "credits refilled");
                    self.events.publish(LedgerEvent::CreditsReset {
                        credits: self.session.credits(),
                        at: now,
                    });
                }
            }
        }
    }

    fn drain_cue_reports(&mut self) {
        let Some(reports) = self.cue_reports.as_mut() else {
            return;
        };

        while let Ok(report) = reports.try_recv() {
            let status = self.cues.apply(&report);
            let event = match (status, &report.result) {
                (CueStatus::Ready, _) => AssetEvent::CueReady { cue: report.cue },
                (_, Err(error)) => AssetEvent::CueUnavailable {
                    cue: report.cue,
                    reason: error.to_string(),
                },
                (_, Ok(_)) => continue,
            };
            self.events.publish(event);
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.cues.is_ready(cue) {
            self.presenter.play_cue(cue);
        }
    }

    pub fn into_parts(self) -> (GameSession<R>, P) {
        (self.session, self.presenter)
    }
}
