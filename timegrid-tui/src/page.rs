use time::Date;
use timegrid::{minutes_to_time, EditRecord, Element, MemoryTree, NotesRequest};

use crate::config::TimegridConfig;
use crate::store::DevStore;
use crate::time_utils::{day_label, iso_date};
use crate::week::{
    build_week_overview, calendar_blocks, week_bounds, week_days, CalendarBlock, DayWindow,
    WeekOverview,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeOption {
    pub id: i64,
    pub label: String,
}

/// Everything needed to draw one week and to render its interface tree.
#[derive(Debug, Clone)]
pub struct WeekPage {
    pub days: Vec<Date>,
    pub window: DayWindow,
    pub blocks: Vec<CalendarBlock>,
    pub overview: WeekOverview,
    pub charge_options: Vec<ChargeOption>,
}

impl WeekPage {
    pub fn build(store: &DevStore, anchor: Date, config: &TimegridConfig) -> Self {
        let (start, end) = week_bounds(anchor, config.week_start.weekday());
        let days = week_days(start);
        let window = config.window();
        let entries = store.entries_between(start, end);
        let colors = store.color_lookup();

        let charge_options = store
            .active_charge_codes()
            .map(|code| ChargeOption {
                id: code.id,
                label: code.label(),
            })
            .collect();

        tracing::debug!(
            week_start = %iso_date(start),
            entries = entries.len(),
            "week page built"
        );

        Self {
            blocks: calendar_blocks(&entries, &days, window, &colors),
            overview: build_week_overview(&entries, &days, |id| store.label_for(id)),
            days,
            window,
            charge_options,
        }
    }

    pub fn week_start(&self) -> Option<Date> {
        self.days.first().copied()
    }

    pub fn rows(&self) -> usize {
        self.window.slot_count()
    }

    /// Slots are laid out day by day, so a slot's index is `day * rows + row`.
    pub fn slot_index(&self, day: usize, row: usize) -> usize {
        day * self.rows() + row
    }

    pub fn slot_minute(&self, row: usize) -> u32 {
        self.window.start + row as u32 * self.window.slot_minutes
    }

    /// Index into `blocks` of the entry drawn over a slot.
    pub fn block_at(&self, day: usize, row: usize) -> Option<usize> {
        let minute = self.slot_minute(row);
        self.blocks
            .iter()
            .position(|b| b.overlaps(day, minute, minute + self.window.slot_minutes))
    }

    pub fn charge_label(&self, id: &str) -> Option<&str> {
        let id: i64 = id.trim().parse().ok()?;
        self.charge_options
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.as_str())
    }

    /// A fresh interface tree for this week: every slot, the date and charge
    /// code options and the grid interval.
    pub fn tree(&self) -> MemoryTree {
        let dates: Vec<String> = self.days.iter().map(|d| iso_date(*d)).collect();
        let date_refs: Vec<&str> = dates.iter().map(String::as_str).collect();
        let charge_ids: Vec<String> = self
            .charge_options
            .iter()
            .map(|o| o.id.to_string())
            .collect();
        let charge_refs: Vec<&str> = charge_ids.iter().map(String::as_str).collect();

        let mut tree = MemoryTree::timesheet_page()
            .with_grid_interval(&self.window.slot_minutes.to_string())
            .with_options(Element::EntryDate, &date_refs)
            .with_options(Element::ChargeCode, &charge_refs);
        for date in &dates {
            tree = tree.with_day_slots(
                date,
                self.window.start,
                self.window.end,
                self.window.slot_minutes,
            );
        }
        tree
    }

    /// Notes toggle for an overview cell.
    pub fn notes_request(&self, row: usize, day: usize) -> Option<NotesRequest> {
        let overview_row = self.overview.rows.get(row)?;
        let cell = overview_row.cells.get(day)?;
        let details = match serde_json::to_string(&cell.details) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!(error = %e, "could not encode note details");
                None
            }
        };
        Some(NotesRequest {
            day_label: self.days.get(day).map(|d| day_label(*d)),
            charge_label: Some(overview_row.label.clone()),
            details,
            comments: Some(cell.comments.join("|")),
        })
    }

    /// Copy-button payload for an overview cell: its comments as a JSON array.
    pub fn copy_payload(&self, row: usize, day: usize) -> String {
        let Some(cell) = self.overview.rows.get(row).and_then(|r| r.cells.get(day)) else {
            return String::new();
        };
        serde_json::to_string(&cell.comments).unwrap_or_else(|_| cell.comments.join("|"))
    }

    /// Edit-button dataset for a calendar block.
    pub fn edit_record(&self, block: usize) -> Option<EditRecord> {
        let block = self.blocks.get(block)?;
        Some(EditRecord {
            entry_id: Some(block.entry_id.to_string()),
            entry_date: self.days.get(block.day_index).map(|d| iso_date(*d)),
            start_time: Some(minutes_to_time(i64::from(block.start_minute))),
            end_time: Some(minutes_to_time(i64::from(block.end_minute))),
            charge_code_id: Some(block.charge_code_id.to_string()),
            activity_text: Some(block.activity_text.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use timegrid::{InterfaceTree, NoteItem};

    const WEEK: Date = date!(2024 - 05 - 02);

    fn page() -> WeekPage {
        let store = DevStore::seeded(WEEK);
        WeekPage::build(&store, date!(2024 - 05 - 06), &TimegridConfig::default())
    }

    #[test]
    fn page_covers_the_thursday_week_of_the_anchor() {
        let page = page();
        assert_eq!(page.week_start(), Some(WEEK));
        assert_eq!(page.days.len(), 7);
        assert_eq!(page.rows(), 22);
    }

    #[test]
    fn tree_slots_follow_day_major_indexing() {
        let page = page();
        let tree = page.tree();

        assert_eq!(tree.slot_count(), 7 * 22);
        assert_eq!(tree.find_slot("2024-05-03", 480), Some(page.slot_index(1, 2)));
        assert_eq!(tree.grid_interval().as_deref(), Some("30"));
        assert_eq!(tree.options(Element::EntryDate).first().map(String::as_str), Some("2024-05-02"));
        assert!(!tree.options(Element::ChargeCode).contains(&"5".to_string()));
    }

    #[test]
    fn early_entry_is_clipped_but_edits_with_real_times() {
        let page = page();
        // Seeded 06:00-08:00 maintenance on the sixth day.
        let block = page.block_at(5, 0).expect("block at window start");
        let record = page.edit_record(block).unwrap();

        assert_eq!(record.start_time.as_deref(), Some("06:00"));
        assert_eq!(record.end_time.as_deref(), Some("08:00"));
        assert_eq!(record.entry_date.as_deref(), Some("2024-05-07"));
        assert_eq!(page.block_at(5, 2), None);
    }

    #[test]
    fn notes_request_prefers_structured_details() {
        let page = page();
        let row = page
            .overview
            .rows
            .iter()
            .position(|r| r.label.starts_with("2040-10"))
            .unwrap();

        let request = page.notes_request(row, 4).unwrap();

        assert_eq!(request.title(), "2040-10 Customer onboarding · Mon 06 May");
        assert_eq!(
            request.notes(),
            vec![NoteItem {
                start_time: Some("14:00".into()),
                end_time: Some("17:30".into()),
                text: "Data import | second pass".into(),
            }]
        );
    }

    #[test]
    fn copy_payload_survives_pipes_in_comments() {
        let page = page();
        let row = page
            .overview
            .rows
            .iter()
            .position(|r| r.label.starts_with("2040-10"))
            .unwrap();

        assert_eq!(
            timegrid::notes::decode_copy_text(&page.copy_payload(row, 4)),
            "Data import | second pass"
        );
        assert_eq!(page.copy_payload(99, 0), "");
    }
}
