use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render a partial or complete time string with a block cursor.
/// - len >= 5 ("HH:MM"): display as-is, no cursor
/// - len < 5: show typed chars + '█' + space padding to fill 5-char slot
pub fn time_input_display(s: &str, focused: bool) -> String {
    if s.len() >= 5 || !focused {
        format!("[{:<5}]", s)
    } else {
        let spaces = 5 - s.len() - 1;
        format!("[{}█{}]", s, " ".repeat(spaces))
    }
}

pub fn text_input_display(s: &str, focused: bool) -> String {
    if focused {
        format!("{s}█")
    } else {
        s.to_string()
    }
}

pub fn choice_display(s: &str, focused: bool) -> String {
    if focused {
        format!("◀ {s} ▶")
    } else {
        s.to_string()
    }
}

/// `label: value`, yellow while the field has focus.
pub fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(format!("{label:<13}"), label_style),
        Span::styled(value, value_style),
    ])
}

/// Key hints in the `Key: action` style used across the footer and dialogs.
pub fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_times_show_a_cursor_only_when_focused() {
        assert_eq!(time_input_display("09:3", true), "[09:3█]");
        assert_eq!(time_input_display("09:3", false), "[09:3 ]");
        assert_eq!(time_input_display("09:30", true), "[09:30]");
        assert_eq!(time_input_display("", true), "[█    ]");
    }
}
