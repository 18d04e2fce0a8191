use crate::app::{App, HitTarget};
use crate::time_utils::day_label;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::utils::{format_hours, line_rect};

const LABEL_MIN_WIDTH: u16 = 20;
const DAY_COLUMN_WIDTH: u16 = 10;
const TOTAL_COLUMN_WIDTH: u16 = 8;

/// Header, one line per charge code (at least one), totals, borders.
pub(super) fn overview_height(app: &App) -> u16 {
    app.page.overview.rows.len().max(1) as u16 + 4
}

pub(super) fn render_overview(frame: &mut Frame, area: Rect, app: &mut App) {
    let overview = &app.page.overview;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Overview ",
            Style::default().fg(Color::Cyan),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Min(LABEL_MIN_WIDTH)];
    constraints.extend(overview.days.iter().map(|_| Constraint::Length(DAY_COLUMN_WIDTH)));
    constraints.push(Constraint::Length(TOTAL_COLUMN_WIDTH));
    let columns = Layout::horizontal(constraints).split(inner);
    let total_column = columns[columns.len() - 1];

    let cell = |column: Rect, line: Rect| Rect::new(column.x, line.y, column.width, 1);
    let dim = Style::default().fg(Color::DarkGray);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    if let Some(line) = line_rect(inner, 0) {
        frame.render_widget(Paragraph::new("Charge code").style(dim), cell(columns[0], line));
        for (day, date) in overview.days.iter().enumerate() {
            let heading: String = day_label(*date).chars().take(6).collect();
            frame.render_widget(Paragraph::new(heading).style(dim), cell(columns[day + 1], line));
        }
        frame.render_widget(Paragraph::new("Total").style(dim), cell(total_column, line));
    }

    let mut regions = Vec::new();
    if overview.rows.is_empty() {
        if let Some(line) = line_rect(inner, 1) {
            frame.render_widget(Paragraph::new("No entries this week.").style(dim), line);
        }
    }
    for (row_index, row) in overview.rows.iter().enumerate() {
        let Some(line) = line_rect(inner, row_index as u16 + 1) else {
            break;
        };
        frame.render_widget(Paragraph::new(row.label.as_str()), cell(columns[0], line));
        for (day, overview_cell) in row.cells.iter().enumerate() {
            let area = cell(columns[day + 1], line);
            let style = if overview_cell.comments.is_empty() {
                dim
            } else {
                Style::default().fg(Color::White)
            };
            frame.render_widget(
                Paragraph::new(format_hours(overview_cell.hours)).style(style),
                area,
            );
            regions.push((area, HitTarget::OverviewCell { row: row_index, day }));
        }
        frame.render_widget(
            Paragraph::new(format_hours(row.total)).style(bold),
            cell(total_column, line),
        );
    }

    let totals_row = overview.rows.len().max(1) as u16 + 1;
    if let Some(line) = line_rect(inner, totals_row) {
        frame.render_widget(Paragraph::new("Total").style(bold), cell(columns[0], line));
        for (day, total) in overview.day_totals.iter().enumerate() {
            frame.render_widget(
                Paragraph::new(format_hours(*total)).style(bold),
                cell(columns[day + 1], line),
            );
        }
        frame.render_widget(
            Paragraph::new(format_hours(overview.week_total))
                .style(bold.fg(Color::Yellow)),
            cell(total_column, line),
        );
    }

    for (area, target) in regions {
        app.hit_map.push(area, target);
    }
}
