//! Seam between the game and whatever draws it.
//!
//! The runtime never touches a terminal, canvas or audio device. It calls a
//! [`PresentationAdapter`] in a fixed order every frame, and the adapter decides
//! what "render" or "play" means for its medium.
use wheel_core::SegmentId;

/// Short sound cues triggered by the game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Cue {
    /// A segment was picked.
    Click,
    /// The wheel crossed into another segment.
    Tick,
    /// The spin matched the selection.
    Score,
    /// The spin missed.
    Fail,
}

impl Cue {
    /// Asset file the cue is loaded from.
    pub const fn file_name(self) -> &'static str {
        match self {
            Cue::Click => "click.mp3",
            Cue::Tick => "spin_tick.mp3",
            Cue::Score => "score.mp3",
            Cue::Fail => "fail.mp3",
        }
    }
}

/// Output side of the game.
///
/// Calls arrive synchronously from [`RouletteGame`](crate::RouletteGame); a
/// frame always ends with [`present`](Self::present).
pub trait PresentationAdapter {
    /// Draws the wheel at `angle` radians.
    fn render(&mut self, angle: f64);

    /// Plays a cue. Only called for cues that finished loading.
    fn play_cue(&mut self, cue: Cue);

    fn set_message(&mut self, text: &str);

    fn set_credits(&mut self, credits: u32);

    fn set_selected(&mut self, segment: Option<SegmentId>);

    /// Highlights the segment a spin landed on.
    fn show_result(&mut self, _segment: SegmentId, _is_win: bool) {}

    /// Clears the result highlight when a new spin starts.
    fn reset_highlight(&mut self) {}

    /// End of frame. Adapters that batch drawing flush here.
    fn present(&mut self) {}
}

impl<P: PresentationAdapter + ?Sized> PresentationAdapter for Box<P> {
    fn render(&mut self, angle: f64) {
        (**self).render(angle)
    }

    fn play_cue(&mut self, cue: Cue) {
        (**self).play_cue(cue)
    }

    fn set_message(&mut self, text: &str) {
        (**self).set_message(text)
    }

    fn set_credits(&mut self, credits: u32) {
        (**self).set_credits(credits)
    }

    fn set_selected(&mut self, segment: Option<SegmentId>) {
        (**self).set_selected(segment)
    }

    fn show_result(&mut self, segment: SegmentId, is_win: bool) {
        (**self).show_result(segment, is_win)
    }

    fn reset_highlight(&mut self) {
        (**self).reset_highlight()
    }

    fn present(&mut self) {
        (**self).present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn cue_names_and_files() {
        let names: Vec<String> = Cue::iter().map(|cue| cue.to_string()).collect();
        assert_eq!(names, ["click", "tick", "score", "fail"]);
        assert_eq!(Cue::Tick.file_name(), "spin_tick.mp3");
        assert_eq!(Cue::from_str("score"), Ok(Cue::Score));
    }
}
