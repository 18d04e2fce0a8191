use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timegrid-tui")]
#[command(about = "Terminal weekly timesheet with drag-to-create entries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the week containing DATE (defaults to today)
    Run {
        /// Anchor date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Run { date: None })
    }
}
