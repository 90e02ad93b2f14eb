//! Recent results, newest first.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme;
use crate::presentation::view::{HistoryEntry, ViewState};

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let items: Vec<ListItem> = view.history.iter().map(item).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border())
            .title(" HISTORY "),
    );

    frame.render_widget(list, area);
}

fn item(entry: &HistoryEntry) -> ListItem<'static> {
    let verdict = if entry.is_win { "WIN " } else { "MISS" };
    let picked = entry
        .selected
        .map(theme::label)
        .unwrap_or_else(|| "-".to_string());

    ListItem::new(Line::from(vec![
        Span::styled(
            verdict,
            Style::default().fg(theme::result_color(entry.is_win)),
        ),
        Span::raw(format!(" {} (bet {})", theme::label(entry.segment), picked)),
    ]))
}
