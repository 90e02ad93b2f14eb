//! Bet grid: one cell per segment, keyed by its digit.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme;
use crate::presentation::view::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let mut spans = Vec::new();
    for segment in view.layout.segments() {
        let key = segment.0 + 1;
        let cell = if key <= 9 {
            format!(" [{key}] {} ", theme::label(segment))
        } else {
            format!(" [-] {} ", theme::label(segment))
        };

        let mut style = if view.spinning {
            theme::disabled()
        } else {
            Style::default()
        };
        if view.selected == Some(segment) {
            style = theme::selected().add_modifier(Modifier::REVERSED);
        }
        if let Some((hit, is_win)) = view.highlight
            && hit == segment
        {
            style = style.fg(theme::result_color(is_win));
        }

        spans.push(Span::styled(cell, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .title(" BET "),
        );

    frame.render_widget(paragraph, area);
}
