use std::collections::HashMap;

use thiserror::Error;
use time::Date;
use timegrid::{minutes_to_time, time_to_minutes, FormSubmission};

use crate::test_data::{seed_charge_codes, seed_entries};
use crate::time_utils::{iso_date, parse_iso_date};
use crate::types::{ChargeCode, TimeEntry};

pub const COLOR_COUNT: usize = 10;

/// Reasons a submission is refused. Messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Entry not found.")]
    NotFound,
    #[error("Missing required fields.")]
    MissingFields,
    #[error("Invalid payload.")]
    InvalidPayload,
    #[error("Start time must be before end time.")]
    StartNotBeforeEnd,
    #[error("Activity text is required.")]
    ActivityRequired,
    #[error("Invalid charge code.")]
    InvalidChargeCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Added(i64),
    Updated(i64),
}

#[derive(Debug)]
struct Cleaned {
    charge_code_id: i64,
    entry_date: Date,
    start_minute: u32,
    end_minute: u32,
    activity_text: String,
}

/// In-memory entries and charge codes standing in for the timesheet service.
#[derive(Debug, Clone)]
pub struct DevStore {
    codes: Vec<ChargeCode>,
    entries: Vec<TimeEntry>,
    next_id: i64,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl DevStore {
    pub fn new(codes: Vec<ChargeCode>, entries: Vec<TimeEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            codes,
            entries,
            next_id,
        }
    }

    pub fn seeded(week_start: Date) -> Self {
        Self::new(seed_charge_codes(), seed_entries(week_start))
    }

    pub fn active_charge_codes(&self) -> impl Iterator<Item = &ChargeCode> {
        self.codes.iter().filter(|c| c.is_active)
    }

    /// Palette index per charge code, assigned in listing order.
    pub fn color_lookup(&self) -> HashMap<i64, usize> {
        self.codes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i % COLOR_COUNT))
            .collect()
    }

    pub fn label_for(&self, charge_code_id: i64) -> String {
        self.codes
            .iter()
            .find(|c| c.id == charge_code_id)
            .map(ChargeCode::label)
            .unwrap_or_else(|| format!("Charge code {charge_code_id}"))
    }

    pub fn entry(&self, id: i64) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries dated within `[start, end]`, ordered by day and start time.
    pub fn entries_between(&self, start: Date, end: Date) -> Vec<TimeEntry> {
        let mut entries: Vec<TimeEntry> = self
            .entries
            .iter()
            .filter(|e| e.entry_date >= start && e.entry_date <= end)
            .cloned()
            .collect();
        entries.sort_by_key(|e| (e.entry_date, e.start_minute, e.id));
        entries
    }

    /// Insert or update an entry from a submitted form. Blank fields of an
    /// edit keep the stored value.
    pub fn apply(&mut self, submission: &FormSubmission) -> Result<Saved, StoreError> {
        let existing = match non_blank(&submission.entry_id) {
            None => None,
            Some(raw) => {
                let id: i64 = raw.parse().map_err(|_| StoreError::InvalidPayload)?;
                Some(self.entry(id).cloned().ok_or(StoreError::NotFound)?)
            }
        };
        let cleaned = self.validate(submission, existing.as_ref())?;

        match existing {
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.entries.push(TimeEntry {
                    id,
                    charge_code_id: cleaned.charge_code_id,
                    entry_date: cleaned.entry_date,
                    start_minute: cleaned.start_minute,
                    end_minute: cleaned.end_minute,
                    activity_text: cleaned.activity_text,
                });
                tracing::info!(id, "entry added");
                Ok(Saved::Added(id))
            }
            Some(previous) => {
                let entry = self
                    .entries
                    .iter_mut()
                    .find(|e| e.id == previous.id)
                    .ok_or(StoreError::NotFound)?;
                entry.charge_code_id = cleaned.charge_code_id;
                entry.entry_date = cleaned.entry_date;
                entry.start_minute = cleaned.start_minute;
                entry.end_minute = cleaned.end_minute;
                entry.activity_text = cleaned.activity_text;
                tracing::info!(id = previous.id, "entry updated");
                Ok(Saved::Updated(previous.id))
            }
        }
    }

    fn validate(
        &self,
        submission: &FormSubmission,
        existing: Option<&TimeEntry>,
    ) -> Result<Cleaned, StoreError> {
        let charge = non_blank(&submission.charge_code_id)
            .or_else(|| existing.map(|e| e.charge_code_id.to_string()));
        let date =
            non_blank(&submission.entry_date).or_else(|| existing.map(|e| iso_date(e.entry_date)));
        let start = non_blank(&submission.start_time)
            .or_else(|| existing.map(|e| minutes_to_time(i64::from(e.start_minute))));
        let end = non_blank(&submission.end_time)
            .or_else(|| existing.map(|e| minutes_to_time(i64::from(e.end_minute))));
        let activity = non_blank(&submission.activity_text)
            .or_else(|| existing.map(|e| e.activity_text.clone()))
            .unwrap_or_default();

        let (Some(charge), Some(date), Some(start), Some(end)) = (charge, date, start, end) else {
            return Err(StoreError::MissingFields);
        };

        let charge_code_id: i64 = charge.parse().map_err(|_| StoreError::InvalidPayload)?;
        let entry_date = parse_iso_date(&date).map_err(|_| StoreError::InvalidPayload)?;
        let start_minute = time_to_minutes(&start).ok_or(StoreError::InvalidPayload)?;
        let end_minute = time_to_minutes(&end).ok_or(StoreError::InvalidPayload)?;

        if start_minute >= end_minute {
            return Err(StoreError::StartNotBeforeEnd);
        }
        let activity_text = activity.trim().to_string();
        if activity_text.is_empty() {
            return Err(StoreError::ActivityRequired);
        }
        if !self.codes.iter().any(|c| c.id == charge_code_id) {
            return Err(StoreError::InvalidChargeCode);
        }

        Ok(Cleaned {
            charge_code_id,
            entry_date,
            start_minute,
            end_minute,
            activity_text,
        })
    }
}
