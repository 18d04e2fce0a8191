use crate::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use timegrid::{Element, InterfaceTree};

mod entry_modal;
mod grid;
mod notes_modal;
mod overview;
mod toast;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_map.clear();

    let root = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(grid::grid_height(app)),
        Constraint::Length(overview::overview_height(app)),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_header(frame, root[0], app);
    grid::render_grid(frame, root[1], app);
    overview::render_overview(frame, root[2], app);
    render_footer(frame, root[4], app);

    // Modals stack above the page in the order the coordinator closes them.
    if !app.controller.tree().is_hidden(Element::EntryModal) {
        entry_modal::render_entry_modal(frame, app);
    }
    if !app.controller.tree().is_hidden(Element::NotesModal) {
        notes_modal::render_notes_modal(frame, app);
    }
    toast::render_toast(frame, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.page.overview.week_total;
    let line = Line::from(vec![
        Span::styled(
            " timegrid ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{total:.2} h this week"),
            Style::default().fg(Color::Magenta),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.controller.modal_visibility().any_open() {
        widgets::hint_line(&[("Esc", "Close"), ("Click outside", "Close")])
    } else {
        widgets::hint_line(&[
            ("Drag", "New entry"),
            ("Click entry", "Edit"),
            ("Click cell", "Notes"),
            ("Right-click cell", "Copy"),
            ("←/→", "Week"),
            ("t", "Today"),
            ("q", "Quit"),
        ])
    };
    frame.render_widget(Paragraph::new(hints), area);
}
