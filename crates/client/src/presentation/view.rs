//! What the screen shows, independent of how it is drawn.
use std::collections::VecDeque;

use bitflags::bitflags;
use wheel_core::{SegmentId, WheelLayout};
use wheel_runtime::Cue;

bitflags! {
    /// Regions of the screen that changed since the last draw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Dirty: u8 {
        const WHEEL     = 1 << 0;
        const CREDITS   = 1 << 1;
        const MESSAGE   = 1 << 2;
        const SELECTION = 1 << 3;
        const HIGHLIGHT = 1 << 4;
        const CUE       = 1 << 5;
        const HISTORY   = 1 << 6;
    }
}

pub const HISTORY_CAPACITY: usize = 8;

/// One settled spin, newest first in [`ViewState::history`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub segment: SegmentId,
    pub selected: Option<SegmentId>,
    pub is_win: bool,
}

#[derive(Clone, Debug)]
pub struct ViewState {
    pub layout: WheelLayout,
    pub angle: f64,
    /// Whole degrees of `angle`; the wheel is redrawn when this changes.
    pub angle_degrees: i64,
    pub credits: u32,
    pub message: String,
    pub selected: Option<SegmentId>,
    pub highlight: Option<(SegmentId, bool)>,
    pub spinning: bool,
    pub last_cue: Option<Cue>,
    pub history: VecDeque<HistoryEntry>,
    pub dirty: Dirty,
}

impl ViewState {
    pub fn new(layout: WheelLayout) -> Self {
        Self {
            layout,
            angle: 0.0,
            angle_degrees: 0,
            credits: 0,
            message: String::new(),
            selected: None,
            highlight: None,
            spinning: false,
            last_cue: None,
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
            dirty: Dirty::all(),
        }
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
        let degrees = angle.to_degrees().floor() as i64;
        if degrees != self.angle_degrees {
            self.angle_degrees = degrees;
            self.dirty |= Dirty::WHEEL;
        }
    }

    pub fn set_credits(&mut self, credits: u32) {
        if self.credits != credits {
            self.credits = credits;
            self.dirty |= Dirty::CREDITS;
        }
    }

    pub fn set_message(&mut self, text: &str) {
        if self.message != text {
            self.message.clear();
            self.message.push_str(text);
            self.dirty |= Dirty::MESSAGE;
        }
    }

    pub fn set_selected(&mut self, segment: Option<SegmentId>) {
        if self.selected != segment {
            self.selected = segment;
            self.dirty |= Dirty::SELECTION;
        }
    }

    pub fn record_cue(&mut self, cue: Cue) {
        self.last_cue = Some(cue);
        self.dirty |= Dirty::CUE;
    }

    /// A spin started: the wheel is busy and the old result goes away.
    pub fn clear_highlight(&mut self) {
        self.spinning = true;
        self.highlight = None;
        self.dirty |= Dirty::HIGHLIGHT | Dirty::SELECTION;
    }

    /// A spin landed on `segment`.
    pub fn show_result(&mut self, segment: SegmentId, is_win: bool) {
        self.spinning = false;
        self.highlight = Some((segment, is_win));

        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_back();
        }
        self.history.push_front(HistoryEntry {
            segment,
            selected: self.selected,
            is_win,
        });

        self.dirty |= Dirty::HIGHLIGHT | Dirty::HISTORY | Dirty::SELECTION | Dirty::WHEEL;
    }

    pub fn take_dirty(&mut self) -> Dirty {
        std::mem::take(&mut self.dirty)
    }
}
