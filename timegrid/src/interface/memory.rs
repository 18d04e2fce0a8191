use std::collections::{BTreeSet, HashMap};

use super::{Element, InterfaceTree, RawSlot};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub value: String,
    pub default_value: String,
    pub text: String,
    pub hidden: bool,
    pub disabled: bool,
    pub options: Vec<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    pub raw: RawSlot,
    pub highlighted: bool,
}

/// In-memory interface tree.
///
/// Holds just enough state to observe what the controller did: values, text,
/// visibility, focus, page classes and slot highlights.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    elements: HashMap<Element, ElementState>,
    page_classes: BTreeSet<String>,
    grid_interval: Option<String>,
    slots: Vec<SlotState>,
    focused: Option<Element>,
    text_selection: Option<String>,
}

impl MemoryTree {
    /// An empty page with no elements at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying every element the timesheet controller knows about.
    /// Modals and the toast start hidden.
    pub fn timesheet_page() -> Self {
        let mut tree = Self::new();
        for element in [
            Element::EntryModal,
            Element::EntryModalTitle,
            Element::EntryForm,
            Element::EntryId,
            Element::EntryDate,
            Element::StartTime,
            Element::EndTime,
            Element::ChargeCode,
            Element::ActivityText,
            Element::SubmitButton,
            Element::NotesModal,
            Element::NotesTitle,
            Element::NotesContent,
            Element::Toast,
        ] {
            tree.elements.insert(element, ElementState::default());
        }
        for element in [Element::EntryModal, Element::NotesModal, Element::Toast] {
            tree.set_hidden(element, true);
        }
        tree
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.entry(element).or_default();
        self
    }

    pub fn without_element(mut self, element: Element) -> Self {
        self.elements.remove(&element);
        self
    }

    /// Set the rendered default of a field; the current value follows it.
    pub fn with_default_value(mut self, element: Element, value: &str) -> Self {
        let state = self.elements.entry(element).or_default();
        state.default_value = value.to_string();
        state.value = value.to_string();
        self
    }

    pub fn with_options(mut self, element: Element, options: &[&str]) -> Self {
        self.elements.entry(element).or_default().options =
            options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn with_grid_interval(mut self, interval: &str) -> Self {
        self.grid_interval = Some(interval.to_string());
        self
    }

    pub fn with_slots(mut self, slots: impl IntoIterator<Item = RawSlot>) -> Self {
        self.slots = slots
            .into_iter()
            .map(|raw| SlotState {
                raw,
                highlighted: false,
            })
            .collect();
        self
    }

    /// Append one day of slots covering `[from, to)` every `step` minutes.
    pub fn with_day_slots(mut self, date: &str, from: u32, to: u32, step: u32) -> Self {
        let step = step.max(1) as usize;
        for minute in (from..to).step_by(step) {
            self.slots.push(SlotState {
                raw: RawSlot::new(date, minute.to_string()),
                highlighted: false,
            });
        }
        self
    }

    pub fn element(&self, element: Element) -> Option<&ElementState> {
        self.elements.get(&element)
    }

    pub fn focused(&self) -> Option<Element> {
        self.focused
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.elements.get(&element).map(|e| e.text.as_str())
    }

    pub fn items(&self, element: Element) -> &[String] {
        self.elements
            .get(&element)
            .map(|e| e.items.as_slice())
            .unwrap_or_default()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_slot_highlighted(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(|s| s.highlighted)
    }

    /// Indices of every highlighted slot, ascending.
    pub fn highlighted_slots(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.highlighted)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the first slot rendered with the given attributes.
    pub fn find_slot(&self, date: &str, minute: u32) -> Option<usize> {
        let minute = minute.to_string();
        self.slots.iter().position(|s| {
            s.raw.date.as_deref() == Some(date) && s.raw.minute.as_deref() == Some(&minute)
        })
    }

    pub fn text_selection(&self) -> Option<&str> {
        self.text_selection.as_deref()
    }

    /// Simulate the user selecting page text.
    pub fn select_text(&mut self, text: &str) {
        self.text_selection = Some(text.to_string());
    }

    /// Simulate the user typing into an input element.
    pub fn type_into(&mut self, element: Element, value: &str) {
        self.set_value(element, value);
    }
}

impl InterfaceTree for MemoryTree {
    fn has_element(&self, element: Element) -> bool {
        self.elements.contains_key(&element)
    }

    fn value(&self, element: Element) -> Option<String> {
        self.elements.get(&element).map(|e| e.value.clone())
    }

    fn set_value(&mut self, element: Element, value: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.value = value.to_string();
        }
    }

    fn set_text(&mut self, element: Element, text: &str) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.text = text.to_string();
        }
    }

    fn is_hidden(&self, element: Element) -> bool {
        self.elements.get(&element).map_or(true, |e| e.hidden)
    }

    fn set_hidden(&mut self, element: Element, hidden: bool) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.hidden = hidden;
        }
    }

    fn is_disabled(&self, element: Element) -> bool {
        self.elements.get(&element).is_some_and(|e| e.disabled)
    }

    fn set_disabled(&mut self, element: Element, disabled: bool) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.disabled = disabled;
        }
    }

    fn focus(&mut self, element: Element) {
        if self.elements.contains_key(&element) {
            self.focused = Some(element);
        }
    }

    fn options(&self, element: Element) -> Vec<String> {
        self.elements
            .get(&element)
            .map(|e| e.options.clone())
            .unwrap_or_default()
    }

    fn set_list_items(&mut self, element: Element, items: &[String]) {
        if let Some(state) = self.elements.get_mut(&element) {
            state.items = items.to_vec();
        }
    }

    fn reset_form(&mut self) {
        if !self.elements.contains_key(&Element::EntryForm) {
            return;
        }
        for field in Element::FORM_FIELDS {
            if let Some(state) = self.elements.get_mut(&field) {
                state.value = state.default_value.clone();
            }
        }
    }

    fn has_page_class(&self, class: &str) -> bool {
        self.page_classes.contains(class)
    }

    fn set_page_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.page_classes.insert(class.to_string());
        } else {
            self.page_classes.remove(class);
        }
    }

    fn grid_interval(&self) -> Option<String> {
        self.grid_interval.clone()
    }

    fn slots(&self) -> Vec<RawSlot> {
        self.slots.iter().map(|s| s.raw.clone()).collect()
    }

    fn set_slot_highlighted(&mut self, slot: usize, highlighted: bool) {
        if let Some(state) = self.slots.get_mut(slot) {
            state.highlighted = highlighted;
        }
    }

    fn clear_slot_highlights(&mut self) {
        for slot in &mut self.slots {
            slot.highlighted = false;
        }
    }

    fn clear_text_selection(&mut self) {
        self.text_selection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_missing_elements_are_ignored() {
        let mut tree = MemoryTree::new();
        tree.set_value(Element::StartTime, "09:00");
        tree.set_hidden(Element::EntryModal, false);
        tree.focus(Element::ActivityText);

        assert_eq!(tree.value(Element::StartTime), None);
        assert!(tree.is_hidden(Element::EntryModal));
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn reset_restores_rendered_defaults() {
        let mut tree = MemoryTree::timesheet_page().with_default_value(Element::ChargeCode, "3");
        tree.type_into(Element::ChargeCode, "7");
        tree.type_into(Element::ActivityText, "typing");

        tree.reset_form();

        assert_eq!(tree.value(Element::ChargeCode).as_deref(), Some("3"));
        assert_eq!(tree.value(Element::ActivityText).as_deref(), Some(""));
    }

    #[test]
    fn reset_without_form_element_keeps_values() {
        let mut tree = MemoryTree::timesheet_page().without_element(Element::EntryForm);
        tree.type_into(Element::ActivityText, "kept");

        tree.reset_form();

        assert_eq!(tree.value(Element::ActivityText).as_deref(), Some("kept"));
    }

    #[test]
    fn day_slots_are_indexed_in_render_order() {
        let tree = MemoryTree::new()
            .with_day_slots("2024-05-02", 420, 540, 30)
            .with_day_slots("2024-05-03", 420, 480, 30);

        assert_eq!(tree.slot_count(), 6);
        assert_eq!(tree.find_slot("2024-05-02", 450), Some(1));
        assert_eq!(tree.find_slot("2024-05-03", 420), Some(4));
        assert_eq!(tree.find_slot("2024-05-04", 420), None);
    }
}
