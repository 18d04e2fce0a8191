mod app;
mod bootstrap;
mod cli;
mod clipboard;
mod config;
mod logging;
mod page;
mod runtime;
mod store;
mod test_data;
mod time_utils;
mod types;
mod ui;
mod week;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::TimegridConfig;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command() {
        Commands::ConfigPath => {
            let path = TimegridConfig::config_path()?;
            if !path.exists() {
                TimegridConfig::default().save_to(&path)?;
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { date } => {
            let config = TimegridConfig::load()?;
            logging::init(&config.log_path()?)?;
            let anchor = date.as_deref().map(time_utils::parse_iso_date).transpose()?;
            let mut app = bootstrap::initialize_app(config, anchor);
            run_tui(&mut app).await
        }
    }
}

async fn run_tui(app: &mut app::App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "terminal session failed");
    }
    res
}
