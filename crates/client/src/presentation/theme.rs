//! Colors and segment labels.
use ratatui::style::{Color, Modifier, Style};
use wheel_core::SegmentId;

pub const WIN: Color = Color::Rgb(0xcc, 0xcc, 0xfa);
pub const LOSE: Color = Color::Rgb(0xff, 0x4a, 0x00);
pub const BORDER: Color = Color::Rgb(0x55, 0x55, 0x55);
pub const ACCENT: Color = Color::Yellow;

const ICONS: [&str; 8] = ["HEART", "ZAP", "SHIELD", "TROPHY", "SUN", "MOON", "EYE", "DINO"];

/// Label printed for a segment; wheels larger than the icon set fall back to
/// the segment number.
pub fn label(segment: SegmentId) -> String {
    ICONS
        .get(segment.index())
        .map(|icon| icon.to_string())
        .unwrap_or_else(|| format!("#{}", segment.0 + 1))
}

pub fn result_color(is_win: bool) -> Color {
    if is_win { WIN } else { LOSE }
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn disabled() -> Style {
    Style::default().fg(BORDER).add_modifier(Modifier::DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_numbers() {
        assert_eq!(label(SegmentId(0)), "HEART");
        assert_eq!(label(SegmentId(7)), "DINO");
        assert_eq!(label(SegmentId(9)), "#10");
    }
}
