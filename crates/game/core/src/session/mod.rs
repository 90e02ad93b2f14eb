//! Credits, bets and settlement.
//!
//! [`SessionState`] is the bookkeeping half of a game: the balance, the segment
//! the player backed and the segment the wheel landed on. It only changes along
//! the spin lifecycle (bet placed → spin settled → optional refill).
mod errors;
mod outcome;

pub use errors::BetError;
pub use outcome::{CreditReset, Outcome, Settlement, messages};

use crate::config::GameConfig;
use crate::types::SegmentId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    credits: u32,
    selected: Option<SegmentId>,
    win: Option<SegmentId>,
    in_flight: bool,

    segment_count: u32,
    bet_cost: u32,
    payout: u32,
    initial_credits: u32,
    reset_delay_ms: u64,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            credits: config.initial_credits,
            selected: None,
            win: None,
            in_flight: false,
            segment_count: config.segment_count,
            bet_cost: config.bet_cost,
            payout: config.payout,
            initial_credits: config.initial_credits,
            reset_delay_ms: config.reset_delay_ms,
        }
    }

    /// Overrides the balance, e.g. to resume a session or stage a test.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn selected(&self) -> Option<SegmentId> {
        self.selected
    }

    /// Segment of the last settled spin.
    pub fn win(&self) -> Option<SegmentId> {
        self.win
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn bet_cost(&self) -> u32 {
        self.bet_cost
    }

    pub fn can_afford_bet(&self) -> bool {
        self.credits >= self.bet_cost
    }

    /// Places a bet, returning whether it was accepted.
    ///
    /// A refused bet leaves the session untouched.
    pub fn place_bet(&mut self, segment: SegmentId) -> bool {
        self.try_place_bet(segment).is_ok()
    }

    /// Places a bet on `segment`: records the selection, deducts the bet cost
    /// and marks a spin as in flight.
    pub fn try_place_bet(&mut self, segment: SegmentId) -> Result<(), BetError> {
        if self.in_flight {
            return Err(BetError::SpinInFlight);
        }
        if segment.0 >= self.segment_count {
            return Err(BetError::UnknownSegment {
                segment,
                segment_count: self.segment_count,
            });
        }
        if self.credits < self.bet_cost {
            return Err(BetError::InsufficientCredits {
                credits: self.credits,
                bet_cost: self.bet_cost,
            });
        }

        self.credits -= self.bet_cost;
        self.selected = Some(segment);
        self.in_flight = true;
        Ok(())
    }

    /// Reverts a bet whose spin never started.
    ///
    /// Used when the engine refuses to spin after the bet was accepted, so the
    /// pair behaves as one atomic step.
    pub(crate) fn refund_bet(&mut self, previous_selection: Option<SegmentId>) {
        if self.in_flight {
            self.credits += self.bet_cost;
            self.selected = previous_selection;
            self.in_flight = false;
        }
    }

    /// Resolves the in-flight bet against the wheel's `win` segment.
    ///
    /// A win credits the payout; a loss leaves the balance alone. Either way, a
    /// balance that can no longer cover a bet asks the host for a delayed refill.
    pub fn settle(&mut self, win: SegmentId) -> Settlement {
        self.in_flight = false;
        self.win = Some(win);

        let outcome = if self.selected == Some(win) {
            self.credits = self.credits.saturating_add(self.payout);
            Outcome::Win {
                segment: win,
                payout: self.payout,
            }
        } else {
            Outcome::Loss {
                segment: win,
                selected: self.selected,
            }
        };

        let reset = (self.credits < self.bet_cost).then_some(CreditReset {
            delay_ms: self.reset_delay_ms,
            credits: self.initial_credits,
        });

        Settlement {
            outcome,
            credits: self.credits,
            reset,
        }
    }

    /// Refills the balance to the starting amount.
    pub fn reset_credits(&mut self) {
        self.credits = self.initial_credits;
    }
}
