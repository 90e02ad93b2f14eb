//! Frame layout.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::view::ViewState;
use super::widgets;

pub fn render(frame: &mut Frame, view: &ViewState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(rows[1]);

    widgets::header::render(frame, rows[0], view);
    widgets::wheel::render(frame, middle[0], view);
    widgets::history::render(frame, middle[1], view);
    widgets::bets::render(frame, rows[2], view);
    widgets::status::render(frame, rows[3], view);
}
