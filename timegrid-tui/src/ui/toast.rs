use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use timegrid::{Element, InterfaceTree};

pub(super) fn render_toast(frame: &mut Frame, app: &App) {
    let tree = app.controller.tree();
    if tree.is_hidden(Element::Toast) {
        return;
    }
    let message = tree.text(Element::Toast).unwrap_or_default();
    let screen = frame.area();
    let width = (message.chars().count() as u16 + 4).min(screen.width);
    let height = 3.min(screen.height);
    let area = Rect::new(
        screen.right().saturating_sub(width + 1),
        screen.bottom().saturating_sub(height + 1),
        width,
        height,
    )
    .intersection(screen);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(message).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        ),
        area,
    );
}
