use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A charge code entries are booked against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChargeCode {
    pub id: i64,
    pub project_number: String,
    pub task_number: String,
    pub description: String,
    pub is_active: bool,
}

impl ChargeCode {
    /// Display label, e.g. "1001-01 Platform upkeep".
    pub fn label(&self) -> String {
        format!(
            "{}-{} {}",
            self.project_number, self.task_number, self.description
        )
    }
}

/// A stored timesheet entry. Times are minutes of the entry's day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub charge_code_id: i64,
    #[serde(with = "iso_date")]
    pub entry_date: Date,
    pub start_minute: u32,
    pub end_minute: u32,
    pub activity_text: String,
}

impl TimeEntry {
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }
}
