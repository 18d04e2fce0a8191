use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

const CHARGE_COLORS: [Color; 10] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightRed,
];

/// Block colour for a charge code's palette slot.
pub fn charge_color(slot: Option<usize>) -> Color {
    slot.map_or(Color::Gray, |i| CHARGE_COLORS[i % CHARGE_COLORS.len()])
}

pub fn format_hours(hours: f64) -> String {
    if hours == 0.0 {
        "-".to_string()
    } else {
        format!("{hours:.2}")
    }
}

/// A one-line rect at `row` inside `area`, or `None` below its bottom edge.
pub fn line_rect(area: Rect, row: u16) -> Option<Rect> {
    let y = area.y.checked_add(row)?;
    (y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}
