//! Header widget: balance and wheel state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wheel_core::messages;

use crate::presentation::theme;
use crate::presentation::view::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let state = if view.spinning { " [SPINNING]" } else { "" };

    let text = Line::from(vec![
        Span::styled(
            messages::credits(view.credits),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(state, Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(" ROULETTE "),
    );

    frame.render_widget(paragraph, area);
}
