use crate::app::App;
use crate::clipboard::clipboard_service;
use crate::config::TimegridConfig;
use crate::store::DevStore;
use crate::time_utils::local_today;
use crate::week::week_bounds;
use time::Date;

/// Build the app for the week containing `anchor` (today when `None`), with
/// the development store seeded around that week.
pub fn initialize_app(config: TimegridConfig, anchor: Option<Date>) -> App {
    let today = local_today();
    let anchor = anchor.unwrap_or(today);
    let (week_start, _) = week_bounds(anchor, config.week_start.weekday());
    let store = DevStore::seeded(week_start);
    tracing::info!(%anchor, "starting timegrid");
    App::new(config, store, anchor, today, clipboard_service())
}
