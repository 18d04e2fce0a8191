use crate::app::{App, HitTarget};
use crate::time_utils::day_label;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use timegrid::minutes_to_time;

use super::utils::{charge_color, line_rect};

const TIME_COLUMN_WIDTH: u16 = 6;

/// Header row, one line per slot, two border lines.
pub(super) fn grid_height(app: &App) -> u16 {
    app.page.rows() as u16 + 3
}

pub(super) fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let page = &app.page;
    let tree = app.controller.tree();

    let title = match (page.days.first(), page.days.last()) {
        (Some(first), Some(last)) => format!(" {} – {} ", day_label(*first), day_label(*last)),
        _ => " Week ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::Cyan)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(TIME_COLUMN_WIDTH)];
    constraints.extend(page.days.iter().map(|_| Constraint::Ratio(1, page.days.len() as u32)));
    let columns = Layout::horizontal(constraints).split(inner);

    if let Some(header) = line_rect(inner, 0) {
        for (day, date) in page.days.iter().enumerate() {
            let column = columns[day + 1];
            let style = if *date == app.today {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(
                Paragraph::new(day_label(*date)).style(style),
                Rect::new(column.x, header.y, column.width, 1),
            );
        }
    }

    let mut regions = Vec::new();
    for row in 0..page.rows() {
        let Some(line) = line_rect(inner, row as u16 + 1) else {
            break;
        };
        let minute = page.slot_minute(row);
        let label_style = if minute % 60 == 0 {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(minutes_to_time(i64::from(minute))).style(label_style),
            Rect::new(columns[0].x, line.y, columns[0].width, 1),
        );

        for day in 0..page.days.len() {
            let column = columns[day + 1];
            let cell = Rect::new(column.x, line.y, column.width.saturating_sub(1), 1);
            let index = page.slot_index(day, row);
            let block_index = page.block_at(day, row);

            let (text, style) = if tree.is_slot_highlighted(index) {
                (
                    String::new(),
                    Style::default().bg(Color::Yellow).fg(Color::Black),
                )
            } else if let Some(b) = block_index {
                let calendar_block = &page.blocks[b];
                let first_row = row == 0 || page.block_at(day, row - 1) != Some(b);
                let text = if first_row {
                    format!(
                        "{} {}",
                        minutes_to_time(i64::from(calendar_block.start_minute)),
                        calendar_block.activity_text
                    )
                } else {
                    String::new()
                };
                (
                    text,
                    Style::default()
                        .bg(charge_color(calendar_block.color))
                        .fg(Color::Black),
                )
            } else {
                ("·".to_string(), Style::default().fg(Color::DarkGray))
            };

            frame.render_widget(Paragraph::new(text).style(style), cell);
            regions.push((
                cell,
                HitTarget::Slot {
                    index,
                    block: block_index,
                },
            ));
        }
    }

    for (cell, target) in regions {
        app.hit_map.push(cell, target);
    }
}
