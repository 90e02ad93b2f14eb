//! Message line, last cue and key help.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme;
use crate::presentation::view::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let message_style = match view.highlight {
        Some((_, is_win)) => Style::default().fg(theme::result_color(is_win)),
        None => Style::default().fg(Color::White),
    };

    let cue = view
        .last_cue
        .map(|cue| format!("♪ {cue}"))
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(view.message.as_str(), message_style)),
        Line::from(vec![
            Span::styled(cue, Style::default().fg(Color::Cyan)),
            Span::styled(
                "   1-9 bet · q quit",
                Style::default().fg(theme::BORDER),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );

    frame.render_widget(paragraph, area);
}
