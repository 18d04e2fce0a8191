use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::channel;
use super::actions::run_action;
use super::input::handle_event;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Drain every queued event so drags keep up with the pointer.
        if event::poll(POLL_INTERVAL)? {
            loop {
                handle_event(event::read()?, app, &action_tx);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        app.controller.tick(Instant::now());

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
