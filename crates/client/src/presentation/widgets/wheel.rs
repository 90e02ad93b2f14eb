//! The wheel itself: a ring of labelled wedges under a fixed pointer.

use std::f64::consts::FRAC_PI_2;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Line as Spoke},
    },
};
use wheel_core::WheelLayout;

use crate::presentation::theme;
use crate::presentation::view::ViewState;

const RADIUS: f64 = 1.0;

/// Screen angle (counter-clockwise from +x) of the wheel-relative `position`
/// when the wheel is at `rotation`. The pointer sits at the top.
pub fn screen_angle(layout: &WheelLayout, rotation: f64, position: f64) -> f64 {
    let under_pointer = rotation - layout.pointer_offset();
    FRAC_PI_2 - (position - under_pointer)
}

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let layout = view.layout;
    let under_pointer = layout.segment_under_pointer(view.angle);

    let title = format!(" WHEEL {:>4}° ", view.angle_degrees.rem_euclid(360));
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border())
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.3, 1.4])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RADIUS,
                color: theme::BORDER,
            });

            for segment in layout.segments() {
                let boundary = f64::from(segment.0) * layout.segment_angle();
                let phi = screen_angle(&layout, view.angle, boundary);
                ctx.draw(&Spoke::new(
                    0.0,
                    0.0,
                    RADIUS * phi.cos(),
                    RADIUS * phi.sin(),
                    theme::BORDER,
                ));
            }

            ctx.layer();

            for segment in layout.segments() {
                let phi = screen_angle(&layout, view.angle, layout.center_of(segment));
                let style = match view.highlight {
                    Some((hit, is_win)) if hit == segment => Style::default()
                        .fg(theme::result_color(is_win))
                        .add_modifier(Modifier::BOLD),
                    _ if segment == under_pointer => Style::default().fg(Color::White),
                    _ => Style::default().fg(Color::Gray),
                };
                let radius = RADIUS * 0.65;
                ctx.print(
                    radius * phi.cos() - 0.15,
                    radius * phi.sin(),
                    Line::from(Span::styled(theme::label(segment), style)),
                );
            }

            ctx.print(
                -0.02,
                RADIUS + 0.25,
                Line::from(Span::styled("▼", theme::selected())),
            );
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn segment_under_pointer_is_drawn_at_the_top() {
        let layout = WheelLayout::default();
        for step in 0..64 {
            let rotation = f64::from(step) * 0.37;
            let segment = layout.segment_under_pointer(rotation);
            let phi = screen_angle(&layout, rotation, layout.center_of(segment));

            let offset = (phi - FRAC_PI_2 + PI).rem_euclid(TAU) - PI;
            assert!(
                offset.abs() <= layout.segment_angle() / 2.0 + 1e-9,
                "rotation {rotation}: segment {segment} is {offset} rad off the pointer"
            );
        }
    }
}
