//! Drag selection over the slot grid.
//!
//! `Idle --press--> Selecting --enter--> Selecting --release--> Idle`, with
//! `abort` returning to `Idle` without a committed range. Highlights are only
//! ever touched for the anchor's day.

use crate::interface::{InterfaceTree, RawSlot};
use crate::time_conversion::LAST_MINUTE;

const LAST: u32 = LAST_MINUTE as u32;
const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A slot whose attributes parsed cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub index: usize,
    pub day: String,
    pub minute: u32,
}

impl TimeSlot {
    pub fn parse(index: usize, raw: &RawSlot) -> Option<Self> {
        let day = raw.date.as_deref().map(str::trim).filter(|d| !d.is_empty())?;
        let minute = raw
            .minute
            .as_deref()?
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|m| *m <= LAST)?;
        Some(Self {
            index,
            day: day.to_string(),
            minute,
        })
    }

    /// Whether `[minute, minute + interval)` overlaps `[start, end)`.
    pub fn overlaps(&self, interval: u32, start: u32, end: u32) -> bool {
        self.minute < end && self.minute.saturating_add(interval) > start
    }
}

/// Slot width from the grid's raw `interval` attribute. Values outside
/// `1..=1440` count as absent.
pub fn parse_interval(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|r| r.trim().parse::<u32>().ok())
        .filter(|i| (1..=MINUTES_PER_DAY).contains(i))
        .unwrap_or(default.clamp(1, MINUTES_PER_DAY))
}

/// Every well-formed slot of the grid, in rendered order.
pub fn read_slots<T: InterfaceTree>(tree: &T) -> Vec<TimeSlot> {
    tree.slots()
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| TimeSlot::parse(i, raw))
        .collect()
}

fn slot_at<T: InterfaceTree>(tree: &T, index: usize) -> Option<TimeSlot> {
    tree.slots().get(index).and_then(|raw| TimeSlot::parse(index, raw))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub day: String,
    pub anchor_minute: u32,
    pub current_minute: u32,
}

impl SelectionState {
    /// Normalized `[start, end)`; end is clamped to 23:59.
    pub fn range(&self, interval: u32) -> (u32, u32) {
        let start = self.anchor_minute.min(self.current_minute);
        let end = self
            .anchor_minute
            .max(self.current_minute)
            .saturating_add(interval)
            .min(LAST);
        (start, end)
    }
}

/// A committed selection, ready to prefill a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRange {
    pub day: String,
    pub start: u32,
    pub end: u32,
}

impl SelectionRange {
    /// At least one slot wide, never past 23:59.
    pub fn commit(state: &SelectionState, interval: u32) -> Self {
        let (start, end) = state.range(interval);
        Self {
            day: state.day.clone(),
            start,
            end: end.max(start.saturating_add(interval)).min(LAST),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Selecting(SelectionState),
}

#[derive(Debug, Clone)]
pub struct SelectionEngine {
    interval: u32,
    phase: Phase,
}

impl SelectionEngine {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            phase: Phase::Idle,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: u32) {
        self.interval = interval.max(1);
    }

    pub fn state(&self) -> Option<&SelectionState> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Selecting(state) => Some(state),
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, Phase::Selecting(_))
    }

    /// Idle/Selecting → Selecting, anchored on `slot`.
    pub fn press<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        slot: usize,
        button: PointerButton,
    ) -> bool {
        if button != PointerButton::Primary {
            return false;
        }
        let Some(slot) = slot_at(tree, slot) else {
            tracing::debug!(slot, "press on slot without valid day/minute ignored");
            return false;
        };

        tree.clear_slot_highlights();
        tree.clear_text_selection();

        let state = SelectionState {
            day: slot.day,
            anchor_minute: slot.minute,
            current_minute: slot.minute,
        };
        self.highlight(tree, &state);
        self.phase = Phase::Selecting(state);
        true
    }

    /// Selecting → Selecting when the pointer enters a slot of the same day.
    pub fn enter<T: InterfaceTree>(&mut self, tree: &mut T, slot: usize) -> bool {
        let Phase::Selecting(state) = &self.phase else {
            return false;
        };
        let Some(slot) = slot_at(tree, slot) else {
            return false;
        };
        if slot.day != state.day {
            return false;
        }

        let state = SelectionState {
            current_minute: slot.minute,
            ..state.clone()
        };
        self.highlight(tree, &state);
        self.phase = Phase::Selecting(state);
        true
    }

    /// Selecting → Idle on a primary release, yielding the committed range.
    pub fn release<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        button: PointerButton,
    ) -> Option<SelectionRange> {
        if button != PointerButton::Primary {
            return None;
        }
        let Phase::Selecting(state) = std::mem::take(&mut self.phase) else {
            return None;
        };
        tree.clear_slot_highlights();
        Some(SelectionRange::commit(&state, self.interval))
    }

    /// Selecting → Idle without committing.
    pub fn abort<T: InterfaceTree>(&mut self, tree: &mut T) -> bool {
        if std::mem::take(&mut self.phase) == Phase::Idle {
            return false;
        }
        tree.clear_slot_highlights();
        true
    }

    /// Native drag starts over slots are always swallowed.
    pub fn suppress_drag_start(&self, _slot: usize) -> bool {
        true
    }

    fn highlight<T: InterfaceTree>(&self, tree: &mut T, state: &SelectionState) {
        let (start, end) = state.range(self.interval);
        for slot in read_slots(tree).into_iter().filter(|s| s.day == state.day) {
            let on = slot.overlaps(self.interval, start, end);
            tree.set_slot_highlighted(slot.index, on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryTree;

    const MON: &str = "2024-05-06";
    const TUE: &str = "2024-05-07";

    fn grid() -> MemoryTree {
        MemoryTree::new()
            .with_grid_interval("30")
            .with_day_slots(MON, 420, 1080, 30)
            .with_day_slots(TUE, 420, 1080, 30)
    }

    fn slot(tree: &MemoryTree, day: &str, minute: u32) -> usize {
        tree.find_slot(day, minute).expect("slot exists")
    }

    #[test]
    fn interval_attribute_falls_back_to_default() {
        assert_eq!(parse_interval(Some("15"), 30), 15);
        assert_eq!(parse_interval(Some(" 60 "), 30), 60);
        assert_eq!(parse_interval(Some("0"), 30), 30);
        assert_eq!(parse_interval(Some("abc"), 30), 30);
        assert_eq!(parse_interval(None, 30), 30);
        assert_eq!(parse_interval(Some("1440"), 30), 1440);
        assert_eq!(parse_interval(Some("1441"), 30), 30);
        assert_eq!(parse_interval(Some("4294967295"), 30), 30);
    }

    #[test]
    fn huge_interval_attribute_does_not_overflow_a_press() {
        let mut tree = MemoryTree::new()
            .with_grid_interval("4294967295")
            .with_day_slots(MON, 1380, 1440, 30);
        let interval = parse_interval(tree.grid_interval().as_deref(), 30);
        let mut engine = SelectionEngine::new(interval);

        let late = slot(&tree, MON, 1410);
        assert!(engine.press(&mut tree, late, PointerButton::Primary));
        let range = engine.release(&mut tree, PointerButton::Primary).expect("committed");
        assert_eq!((range.start, range.end), (1410, 1439));
    }

    #[test]
    fn out_of_day_minutes_are_skipped() {
        let mut tree = MemoryTree::new().with_slots([
            RawSlot::new(MON, "1410"),
            RawSlot::new(MON, "1440"),
            RawSlot::new(MON, "4294967290"),
        ]);
        assert_eq!(read_slots(&tree).len(), 1);

        let mut engine = SelectionEngine::new(30);
        assert!(!engine.press(&mut tree, 2, PointerButton::Primary));
        assert!(!engine.is_selecting());
        assert!(engine.press(&mut tree, 0, PointerButton::Primary));
        assert_eq!(tree.highlighted_slots(), vec![0]);
    }

    #[test]
    fn sums_saturate_for_extreme_intervals() {
        let state = SelectionState {
            day: MON.into(),
            anchor_minute: 1439,
            current_minute: 1439,
        };
        assert_eq!(state.range(u32::MAX), (1439, 1439));
        assert_eq!(SelectionRange::commit(&state, u32::MAX).end, 1439);

        let slot = TimeSlot {
            index: 0,
            day: MON.into(),
            minute: 1439,
        };
        assert!(slot.overlaps(u32::MAX, 0, 1440));
    }

    #[test]
    fn invalid_slots_are_skipped() {
        let tree = MemoryTree::new().with_slots([
            RawSlot::new(MON, "420"),
            RawSlot::new("", "450"),
            RawSlot::new(MON, "half past"),
            RawSlot {
                date: Some(MON.into()),
                minute: None,
            },
        ]);
        let slots = read_slots(&tree);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].minute, 420);
    }

    #[test]
    fn drag_down_commits_normalized_range() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let mon_540 = slot(&tree, MON, 540);
        assert!(engine.press(&mut tree, mon_540, PointerButton::Primary));
        let mon_600 = slot(&tree, MON, 600);
        assert!(engine.enter(&mut tree, mon_600));
        let range = engine.release(&mut tree, PointerButton::Primary).expect("committed");

        assert_eq!(
            range,
            SelectionRange {
                day: MON.into(),
                start: 540,
                end: 630
            }
        );
        assert!(!engine.is_selecting());
        assert!(tree.highlighted_slots().is_empty());
    }

    #[test]
    fn drag_up_normalizes_anchor_and_current() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let mon_720 = slot(&tree, MON, 720);
        engine.press(&mut tree, mon_720, PointerButton::Primary);
        let mon_600 = slot(&tree, MON, 600);
        engine.enter(&mut tree, mon_600);
        let range = engine.release(&mut tree, PointerButton::Primary).expect("committed");

        assert_eq!((range.start, range.end), (600, 750));
    }

    #[test]
    fn single_click_selects_one_slot() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let tue_480 = slot(&tree, TUE, 480);
        engine.press(&mut tree, tue_480, PointerButton::Primary);
        let range = engine.release(&mut tree, PointerButton::Primary).expect("committed");

        assert_eq!((range.day.as_str(), range.start, range.end), (TUE, 480, 510));
    }

    #[test]
    fn committed_range_properties_hold_for_all_pairs() {
        let interval = 30;
        for anchor in (0..=1410).step_by(30) {
            for current in (0..=1410).step_by(90) {
                let state = SelectionState {
                    day: MON.into(),
                    anchor_minute: anchor,
                    current_minute: current,
                };
                let range = SelectionRange::commit(&state, interval);
                assert_eq!(range.start, anchor.min(current));
                assert!(range.end <= LAST);
                if range.start + interval <= LAST {
                    assert!(range.end >= range.start + interval);
                }
            }
        }
    }

    #[test]
    fn end_is_clamped_to_last_minute() {
        let state = SelectionState {
            day: MON.into(),
            anchor_minute: 1410,
            current_minute: 1410,
        };
        assert_eq!(SelectionState::range(&state, 30), (1410, 1439));
        assert_eq!(SelectionRange::commit(&state, 30).end, 1439);
    }

    #[test]
    fn highlight_set_is_exactly_the_overlapping_slots_of_the_day() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let mon_600 = slot(&tree, MON, 600);
        engine.press(&mut tree, mon_600, PointerButton::Primary);
        let mon_540 = slot(&tree, MON, 540);
        engine.enter(&mut tree, mon_540);

        let expected: Vec<usize> = [540, 570, 600]
            .into_iter()
            .map(|m| slot(&tree, MON, m))
            .collect();
        assert_eq!(tree.highlighted_slots(), expected);

        // Shrinking the drag un-highlights the slots it no longer covers.
        engine.enter(&mut tree, mon_600);
        assert_eq!(tree.highlighted_slots(), vec![slot(&tree, MON, 600)]);
    }

    #[test]
    fn entering_a_slot_on_another_day_is_ignored() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let mon_540 = slot(&tree, MON, 540);
        engine.press(&mut tree, mon_540, PointerButton::Primary);
        let tue_660 = slot(&tree, TUE, 660);
        assert!(!engine.enter(&mut tree, tue_660));

        let state = engine.state().expect("still selecting");
        assert_eq!(state.day, MON);
        assert_eq!(state.current_minute, 540);
        assert_eq!(tree.highlighted_slots(), vec![slot(&tree, MON, 540)]);
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        let mon_540 = slot(&tree, MON, 540);
        assert!(!engine.press(&mut tree, mon_540, PointerButton::Secondary));
        assert!(!engine.is_selecting());

        engine.press(&mut tree, mon_540, PointerButton::Primary);
        assert_eq!(engine.release(&mut tree, PointerButton::Middle), None);
        assert!(engine.is_selecting());
    }

    #[test]
    fn press_clears_prior_highlights_and_text_selection() {
        let mut tree = grid();
        let tue_900 = slot(&tree, TUE, 900);
        tree.set_slot_highlighted(tue_900, true);
        tree.select_text("Monday");
        let mut engine = SelectionEngine::new(30);

        let mon_540 = slot(&tree, MON, 540);
        engine.press(&mut tree, mon_540, PointerButton::Primary);

        assert_eq!(tree.highlighted_slots(), vec![slot(&tree, MON, 540)]);
        assert_eq!(tree.text_selection(), None);
    }

    #[test]
    fn abort_clears_state_without_committing() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);

        assert!(!engine.abort(&mut tree));

        let mon_540 = slot(&tree, MON, 540);
        engine.press(&mut tree, mon_540, PointerButton::Primary);
        let mon_600 = slot(&tree, MON, 600);
        engine.enter(&mut tree, mon_600);
        assert!(engine.abort(&mut tree));

        assert!(!engine.is_selecting());
        assert!(tree.highlighted_slots().is_empty());
        assert_eq!(engine.release(&mut tree, PointerButton::Primary), None);
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut tree = grid();
        let mut engine = SelectionEngine::new(30);
        assert_eq!(engine.release(&mut tree, PointerButton::Primary), None);
    }
}
