//! Adapter boundary between the controller and whatever renders the page.
//!
//! The controller never holds references into the rendered tree. Every read
//! and write goes through [`InterfaceTree`], which lets the same controller
//! drive a terminal front end, a browser binding, or the in-memory
//! [`MemoryTree`] used in tests.

mod memory;

pub use memory::MemoryTree;

/// Every element the controller reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    EntryModal,
    EntryModalTitle,
    EntryForm,
    EntryId,
    EntryDate,
    StartTime,
    EndTime,
    ChargeCode,
    ActivityText,
    SubmitButton,
    NotesModal,
    NotesTitle,
    NotesContent,
    Toast,
}

impl Element {
    /// Input elements owned by the entry form, in tab order.
    pub const FORM_FIELDS: [Element; 6] = [
        Element::EntryId,
        Element::EntryDate,
        Element::StartTime,
        Element::EndTime,
        Element::ChargeCode,
        Element::ActivityText,
    ];
}

/// Slot attributes exactly as rendered; parsing happens in the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSlot {
    pub date: Option<String>,
    pub minute: Option<String>,
}

impl RawSlot {
    pub fn new(date: impl Into<String>, minute: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            minute: Some(minute.into()),
        }
    }
}

/// Operations the controller needs from the rendered page.
///
/// Writes to elements that do not exist must be silent no-ops. Components
/// check [`InterfaceTree::has_element`] before relying on an element so that a
/// page missing optional markup keeps its remaining features.
pub trait InterfaceTree {
    fn has_element(&self, element: Element) -> bool;

    /// Current value of an input element.
    fn value(&self, element: Element) -> Option<String>;
    fn set_value(&mut self, element: Element, value: &str);

    fn set_text(&mut self, element: Element, text: &str);

    fn is_hidden(&self, element: Element) -> bool;
    fn set_hidden(&mut self, element: Element, hidden: bool);

    fn is_disabled(&self, element: Element) -> bool;
    fn set_disabled(&mut self, element: Element, disabled: bool);

    fn focus(&mut self, element: Element);

    /// Option values of a select element, in rendered order.
    fn options(&self, element: Element) -> Vec<String>;

    /// Replace the children of a list-like element with one item per string.
    fn set_list_items(&mut self, element: Element, items: &[String]);

    /// Restore every form field to its rendered default.
    fn reset_form(&mut self);

    fn has_page_class(&self, class: &str) -> bool;
    fn set_page_class(&mut self, class: &str, enabled: bool);

    /// Raw `interval` attribute of the slot grid, if any.
    fn grid_interval(&self) -> Option<String>;

    /// Every slot of the grid in rendered order; the index is the slot key.
    fn slots(&self) -> Vec<RawSlot>;

    fn set_slot_highlighted(&mut self, slot: usize, highlighted: bool);

    fn clear_slot_highlights(&mut self);

    /// Drop any active text selection on the page.
    fn clear_text_selection(&mut self);
}
