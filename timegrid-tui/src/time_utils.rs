use anyhow::{Context, Result};
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Today's date in the local timezone, falling back to UTC.
pub fn local_today() -> Date {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset).date(),
        Err(_) => now.date(),
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(raw: &str) -> Result<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD"))
}

pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Column heading, e.g. "Thu 02 May".
pub fn day_label(date: Date) -> String {
    date.format(format_description!(
        "[weekday repr:short] [day] [month repr:short]"
    ))
    .unwrap_or_default()
}
