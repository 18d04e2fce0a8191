use crate::app::{App, HitTarget};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use timegrid::{Element, ModalKind};

use super::utils::centered_rect;
use super::widgets::hint_line;

const WIDTH: u16 = 72;

pub(super) fn render_notes_modal(frame: &mut Frame, app: &mut App) {
    let screen = frame.area();
    let tree = app.controller.tree();
    let items = tree.items(Element::NotesContent);
    let title = tree
        .text(Element::NotesTitle)
        .filter(|t| !t.is_empty())
        .unwrap_or("Activity Notes");

    let height = (items.len() as u16).saturating_add(6);
    let area = centered_rect(WIDTH, height, screen);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(items.iter().map(|item| Line::from(item.as_str())));
    lines.push(Line::from(""));
    lines.push(hint_line(&[("Esc", "Close")]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Cyan),
        ))
        .padding(Padding::horizontal(2));
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );

    let close = Rect::new(area.right().saturating_sub(5), area.y, 3, 1);
    frame.render_widget(
        Paragraph::new("[x]").style(Style::default().fg(Color::Cyan)),
        close,
    );

    app.hit_map
        .push(screen, HitTarget::Backdrop(ModalKind::Notes));
    app.hit_map
        .push(area, HitTarget::ModalContent(ModalKind::Notes));
    app.hit_map.push(close, HitTarget::Close(ModalKind::Notes));
}
