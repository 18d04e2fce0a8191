//! Charge codes and entries for the development store.
use time::{Date, Duration};

use crate::types::{ChargeCode, TimeEntry};

fn code(id: i64, project: &str, task: &str, description: &str, is_active: bool) -> ChargeCode {
    ChargeCode {
        id,
        project_number: project.to_string(),
        task_number: task.to_string(),
        description: description.to_string(),
        is_active,
    }
}

pub fn seed_charge_codes() -> Vec<ChargeCode> {
    vec![
        code(1, "1001", "01", "Platform upkeep", true),
        code(2, "1001", "02", "Incident response", true),
        code(3, "2040", "10", "Customer onboarding", true),
        code(4, "3300", "01", "Internal training", true),
        code(5, "9000", "99", "Legacy migration", false),
    ]
}

/// A handful of entries spread over the week starting at `week_start`.
pub fn seed_entries(week_start: Date) -> Vec<TimeEntry> {
    let day = |offset: i64| week_start + Duration::days(offset);
    let rows: [(i64, i64, u32, u32, &str); 8] = [
        (0, 1, 8 * 60, 9 * 60 + 30, "Dependency upgrades"),
        (0, 3, 10 * 60, 12 * 60, "Kickoff call with Acme"),
        (1, 2, 9 * 60, 9 * 60 + 45, "Pager handover"),
        (1, 1, 13 * 60, 16 * 60, "Disk usage alerts"),
        (2, 4, 7 * 60 + 30, 8 * 60 + 30, "Rust workshop"),
        (4, 3, 14 * 60, 17 * 60 + 30, "Data import | second pass"),
        (5, 1, 6 * 60, 8 * 60, "Early maintenance window"),
        (6, 2, 11 * 60, 12 * 60, "Postmortem write-up"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (offset, code, start, end, text))| TimeEntry {
            id: i as i64 + 1,
            charge_code_id: *code,
            entry_date: day(*offset),
            start_minute: *start,
            end_minute: *end,
            activity_text: text.to_string(),
        })
        .collect()
}
