//! [`PresentationAdapter`] backed by a ratatui terminal.
use std::io::{self, Write};

use ratatui::{Terminal, backend::Backend, layout::Size};
use tracing::warn;
use wheel_core::{SegmentId, WheelLayout};
use wheel_runtime::{Cue, PresentationAdapter};

use super::ui;
use super::view::{Dirty, ViewState};

/// Collects presentation calls into a [`ViewState`] and draws at most once per
/// frame, only when something visible changed.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
    view: ViewState,
    last_size: Option<Size>,
    bell: bool,
    draws: u64,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>, layout: WheelLayout, bell: bool) -> Self {
        Self {
            terminal,
            view: ViewState::new(layout),
            last_size: None,
            bell,
            draws: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Frames actually drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn ring_bell(&self) {
        let mut stdout = io::stdout();
        if let Err(error) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!(%error, "failed to ring terminal bell");
        }
    }
}

impl<B: Backend> PresentationAdapter for TerminalPresenter<B> {
    fn render(&mut self, angle: f64) {
        self.view.set_angle(angle);
    }

    fn play_cue(&mut self, cue: Cue) {
        self.view.record_cue(cue);
        if self.bell && matches!(cue, Cue::Score | Cue::Fail) {
            self.ring_bell();
        }
    }

    fn set_message(&mut self, text: &str) {
        self.view.set_message(text);
    }

    fn set_credits(&mut self, credits: u32) {
        self.view.set_credits(credits);
    }

    fn set_selected(&mut self, segment: Option<SegmentId>) {
        self.view.set_selected(segment);
    }

    fn show_result(&mut self, segment: SegmentId, is_win: bool) {
        self.view.show_result(segment, is_win);
    }

    fn reset_highlight(&mut self) {
        self.view.clear_highlight();
    }

    fn present(&mut self) {
        match self.terminal.size() {
            Ok(size) if self.last_size != Some(size) => {
                self.last_size = Some(size);
                self.view.dirty = Dirty::all();
            }
            Ok(_) => {}
            Err(error) => warn!(%error, "failed to query terminal size"),
        }

        if self.view.dirty.is_empty() {
            return;
        }

        let view = &self.view;
        match self.terminal.draw(|frame| ui::render(frame, view)) {
            Ok(_) => {
                self.view.take_dirty();
                self.draws += 1;
            }
            Err(error) => warn!(%error, "failed to draw frame"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn presenter() -> TerminalPresenter<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        TerminalPresenter::new(terminal, WheelLayout::default(), false)
    }

    fn screen(presenter: &TerminalPresenter<TestBackend>) -> String {
        let buffer = presenter.terminal().backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_only_when_something_changed() {
        let mut presenter = presenter();
        presenter.present();
        assert_eq!(presenter.draws(), 1);

        presenter.render(0.0001);
        presenter.present();
        assert_eq!(presenter.draws(), 1);

        presenter.set_credits(90);
        presenter.present();
        assert_eq!(presenter.draws(), 2);
        assert!(presenter.view().dirty.is_empty());
    }

    #[test]
    fn screen_shows_credits_message_and_selection() {
        let mut presenter = presenter();
        presenter.set_credits(170);
        presenter.set_selected(Some(SegmentId(3)));
        presenter.set_message("MATCH! +80 CREDITS");
        presenter.show_result(SegmentId(3), true);
        presenter.play_cue(Cue::Score);
        presenter.present();

        let text = screen(&presenter);
        assert!(text.contains("CREDITS: 170"));
        assert!(text.contains("MATCH! +80 CREDITS"));
        assert!(text.contains("[4] TROPHY"));
        assert!(text.contains("♪ score"));
        assert!(text.contains("WIN"));
    }

    #[test]
    fn spin_start_clears_result() {
        let mut presenter = presenter();
        presenter.show_result(SegmentId(1), false);
        presenter.reset_highlight();
        presenter.present();

        assert_eq!(presenter.view().highlight, None);
        assert!(presenter.view().spinning);
        assert!(screen(&presenter).contains("[SPINNING]"));
    }
}
