use crate::app::{App, HitTarget, EDITABLE_FIELDS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};
use timegrid::{Element, InterfaceTree, ModalKind};

use super::utils::{centered_rect, line_rect};
use super::widgets::{
    choice_display, field_line, hint_line, text_input_display, time_input_display,
};

const WIDTH: u16 = 64;
const HEIGHT: u16 = 15;

fn field_label(element: Element) -> &'static str {
    match element {
        Element::EntryDate => "Date",
        Element::StartTime => "Start",
        Element::EndTime => "End",
        Element::ChargeCode => "Charge code",
        Element::ActivityText => "Activity",
        _ => "",
    }
}

pub(super) fn render_entry_modal(frame: &mut Frame, app: &mut App) {
    let screen = frame.area();
    let area = centered_rect(WIDTH, HEIGHT, screen);
    let tree = app.controller.tree();
    let focused = tree.focused();

    let title = tree
        .text(Element::EntryModalTitle)
        .filter(|t| !t.is_empty())
        .unwrap_or("Entry");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let mut regions = vec![
        (screen, HitTarget::Backdrop(ModalKind::Entry)),
        (area, HitTarget::ModalContent(ModalKind::Entry)),
    ];

    let close = Rect::new(area.right().saturating_sub(5), area.y, 3, 1);
    frame.render_widget(
        Paragraph::new("[x]").style(Style::default().fg(Color::Yellow)),
        close,
    );
    regions.push((close, HitTarget::Close(ModalKind::Entry)));

    for (i, element) in EDITABLE_FIELDS.iter().enumerate() {
        let Some(line) = line_rect(inner, 1 + i as u16 * 2) else {
            break;
        };
        let is_focused = focused == Some(*element);
        let value = tree.value(*element).unwrap_or_default();
        let display = match element {
            Element::StartTime | Element::EndTime => time_input_display(&value, is_focused),
            Element::ChargeCode => {
                let label = app
                    .page
                    .charge_label(&value)
                    .unwrap_or("(choose with ←/→)")
                    .to_string();
                choice_display(&label, is_focused)
            }
            Element::EntryDate => choice_display(&value, is_focused),
            _ => text_input_display(&value, is_focused),
        };
        frame.render_widget(
            Paragraph::new(field_line(field_label(*element), display, is_focused)),
            line,
        );
        regions.push((line, HitTarget::Field(*element)));
    }

    if let Some(line) = line_rect(inner, 11) {
        let label = tree
            .text(Element::SubmitButton)
            .filter(|t| !t.is_empty())
            .unwrap_or("Save");
        let style = if tree.is_disabled(Element::SubmitButton) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        let text = format!(" {label} ");
        let button = Rect::new(line.x, line.y, text.chars().count() as u16, 1);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), button);
        regions.push((button, HitTarget::Submit));
    }

    if let Some(line) = line_rect(inner, 12) {
        frame.render_widget(
            Paragraph::new(hint_line(&[
                ("Tab", "Next field"),
                ("←/→", "Choose"),
                ("Enter", "Save"),
                ("Esc", "Cancel"),
            ])),
            line,
        );
    }

    for (rect, target) in regions {
        app.hit_map.push(rect, target);
    }
}
