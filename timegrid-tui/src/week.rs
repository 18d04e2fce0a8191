//! Week layout: bounds, the visible day window, calendar blocks and the
//! per-charge-code overview.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use time::{Date, Duration, Weekday};
use timegrid::minutes_to_time;

use crate::types::TimeEntry;

pub const DAYS_PER_WEEK: usize = 7;

/// First and last date of the week containing `anchor`.
pub fn week_bounds(anchor: Date, starts_on: Weekday) -> (Date, Date) {
    let days_back = (i64::from(anchor.weekday().number_days_from_monday())
        - i64::from(starts_on.number_days_from_monday()))
    .rem_euclid(7);
    let start = anchor - Duration::days(days_back);
    (start, start + Duration::days(6))
}

pub fn week_days(start: Date) -> Vec<Date> {
    (0..DAYS_PER_WEEK as i64)
        .map(|i| start + Duration::days(i))
        .collect()
}

/// Visible minutes `[start, end)` of each day, cut into fixed slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: u32,
    pub end: u32,
    pub slot_minutes: u32,
}

impl DayWindow {
    pub fn new(start: u32, end: u32, slot_minutes: u32) -> Self {
        let slot_minutes = slot_minutes.clamp(1, 24 * 60);
        let start = start.min(24 * 60 - slot_minutes);
        let end = end.clamp(start + slot_minutes, 24 * 60);
        Self {
            start,
            end,
            slot_minutes,
        }
    }

    /// Start minute of every slot.
    pub fn slot_starts(&self) -> Vec<u32> {
        (self.start..self.end)
            .step_by(self.slot_minutes as usize)
            .collect()
    }

    pub fn slot_count(&self) -> usize {
        self.slot_starts().len()
    }
}

/// An entry positioned on the grid, clipped to the window.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarBlock {
    pub entry_id: i64,
    pub day_index: usize,
    pub charge_code_id: i64,
    pub start_minute: u32,
    pub end_minute: u32,
    pub visible_start: u32,
    pub visible_end: u32,
    pub activity_text: String,
    pub color: Option<usize>,
}

impl CalendarBlock {
    /// Whether the visible span meets `[start, end)` on `day_index`.
    pub fn overlaps(&self, day_index: usize, start: u32, end: u32) -> bool {
        self.day_index == day_index && self.visible_start < end && self.visible_end > start
    }
}

/// Entries of `days` that reach into the window. Entries entirely outside it
/// are dropped; the rest keep their real times and a clipped visible span of
/// at least one minute.
pub fn calendar_blocks(
    entries: &[TimeEntry],
    days: &[Date],
    window: DayWindow,
    colors: &HashMap<i64, usize>,
) -> Vec<CalendarBlock> {
    entries
        .iter()
        .filter_map(|entry| {
            let day_index = days.iter().position(|d| *d == entry.entry_date)?;
            if entry.end_minute <= window.start || entry.start_minute >= window.end {
                return None;
            }
            let visible_start = entry.start_minute.max(window.start);
            let visible_end = entry.end_minute.min(window.end).max(visible_start + 1);
            Some(CalendarBlock {
                entry_id: entry.id,
                day_index,
                charge_code_id: entry.charge_code_id,
                start_minute: entry.start_minute,
                end_minute: entry.end_minute,
                visible_start,
                visible_end,
                activity_text: entry.activity_text.clone(),
                color: colors.get(&entry.charge_code_id).copied(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDetail {
    pub start_time: String,
    pub end_time: String,
    pub activity_text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewCell {
    pub hours: f64,
    pub comments: Vec<String>,
    pub details: Vec<NoteDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewRow {
    pub label: String,
    pub cells: Vec<OverviewCell>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekOverview {
    pub days: Vec<Date>,
    /// Sorted by label.
    pub rows: Vec<OverviewRow>,
    pub day_totals: Vec<f64>,
    pub week_total: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Hours, comments and details per charge label and day. Entries outside
/// `days` are ignored; all hour figures are rounded to two decimals.
pub fn build_week_overview(
    entries: &[TimeEntry],
    days: &[Date],
    label_for: impl Fn(i64) -> String,
) -> WeekOverview {
    let mut per_label: BTreeMap<String, Vec<OverviewCell>> = BTreeMap::new();
    let mut day_totals = vec![0.0; days.len()];

    for entry in entries {
        let Some(day) = days.iter().position(|d| *d == entry.entry_date) else {
            continue;
        };
        let cells = per_label
            .entry(label_for(entry.charge_code_id))
            .or_insert_with(|| vec![OverviewCell::default(); days.len()]);
        let cell = &mut cells[day];
        let hours = entry.hours();
        cell.hours += hours;
        cell.comments.push(entry.activity_text.clone());
        cell.details.push(NoteDetail {
            start_time: minutes_to_time(i64::from(entry.start_minute)),
            end_time: minutes_to_time(i64::from(entry.end_minute)),
            activity_text: entry.activity_text.clone(),
        });
        day_totals[day] += hours;
    }

    let rows = per_label
        .into_iter()
        .map(|(label, mut cells)| {
            for cell in &mut cells {
                cell.hours = round2(cell.hours);
            }
            let total = round2(cells.iter().map(|c| c.hours).sum());
            OverviewRow {
                label,
                cells,
                total,
            }
        })
        .collect();

    let day_totals: Vec<f64> = day_totals.into_iter().map(round2).collect();
    let week_total = round2(day_totals.iter().sum());
    WeekOverview {
        days: days.to_vec(),
        rows,
        day_totals,
        week_total,
    }
}
