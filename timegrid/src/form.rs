use serde::{Deserialize, Serialize};

use crate::interface::{Element, InterfaceTree};
use crate::modal::ModalCoordinator;
use crate::time_conversion::{minutes_to_time, LAST_MINUTE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    New,
    Edit,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            FormMode::New => "New Entry",
            FormMode::Edit => "Edit Entry",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::New => "Save Entry",
            FormMode::Edit => "Update Entry",
        }
    }
}

/// Dataset carried by an entry's edit button. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub entry_id: Option<String>,
    pub entry_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub charge_code_id: Option<String>,
    pub activity_text: Option<String>,
}

/// Values written into the form when the entry modal opens. `None` fields
/// leave the corresponding input as the reset left it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFormState {
    pub id: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub charge_code: Option<String>,
    pub activity_text: Option<String>,
    pub mode: FormMode,
}

impl EntryFormState {
    /// State for a new entry covering `[start, end)` minutes of `date`.
    /// End is kept at least one minute after start and never past 23:59.
    /// A range starting at 23:59 therefore ends at 23:59 too.
    pub fn for_range(date: Option<String>, start_minute: u32, end_minute: u32) -> Self {
        let start = i64::from(start_minute).min(LAST_MINUTE);
        let end = i64::from(end_minute).max(start + 1).min(LAST_MINUTE);
        Self {
            id: Some(String::new()),
            date,
            start_time: Some(minutes_to_time(start)),
            end_time: Some(minutes_to_time(end)),
            charge_code: None,
            activity_text: Some(String::new()),
            mode: FormMode::New,
        }
    }

    pub fn from_record(record: &EditRecord) -> Self {
        Self {
            id: record.entry_id.clone(),
            date: record.entry_date.clone(),
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            charge_code: record.charge_code_id.clone(),
            activity_text: record.activity_text.clone(),
            mode: FormMode::Edit,
        }
    }

    fn fields(&self) -> [(Element, Option<&str>); 6] {
        [
            (Element::EntryId, self.id.as_deref()),
            (Element::EntryDate, self.date.as_deref()),
            (Element::StartTime, self.start_time.as_deref()),
            (Element::EndTime, self.end_time.as_deref()),
            (Element::ChargeCode, self.charge_code.as_deref()),
            (Element::ActivityText, self.activity_text.as_deref()),
        ]
    }

    pub fn write_to<T: InterfaceTree>(&self, tree: &mut T) {
        for (element, value) in self.fields() {
            if let Some(value) = value {
                tree.set_value(element, value);
            }
        }
    }
}

/// Form values at submit time, handed to whoever persists entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// Empty for a new entry.
    pub entry_id: String,
    pub entry_date: String,
    pub start_time: String,
    pub end_time: String,
    pub charge_code_id: String,
    pub activity_text: String,
}

impl FormSubmission {
    fn read_from<T: InterfaceTree>(tree: &T) -> Self {
        let value = |element| tree.value(element).unwrap_or_default();
        Self {
            entry_id: value(Element::EntryId),
            entry_date: value(Element::EntryDate),
            start_time: value(Element::StartTime),
            end_time: value(Element::EndTime),
            charge_code_id: value(Element::ChargeCode),
            activity_text: value(Element::ActivityText),
        }
    }

    pub fn is_new(&self) -> bool {
        self.entry_id.trim().is_empty()
    }
}

/// Owns the entry form while the entry modal is open.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: FormMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn reset<T: InterfaceTree>(&self, tree: &mut T) {
        tree.reset_form();
    }

    pub fn set_mode<T: InterfaceTree>(&mut self, tree: &mut T, mode: FormMode) {
        self.mode = mode;
        tree.set_text(Element::EntryModalTitle, mode.title());
        tree.set_text(Element::SubmitButton, mode.submit_label());
        tree.set_disabled(Element::SubmitButton, false);
    }

    pub fn start_new_entry<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        modals: &mut ModalCoordinator,
        date: Option<&str>,
        start_minute: u32,
        end_minute: u32,
    ) -> EntryFormState {
        self.reset(tree);

        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .or_else(|| tree.options(Element::EntryDate).into_iter().next());
        let state = EntryFormState::for_range(date, start_minute, end_minute);
        state.write_to(tree);

        self.set_mode(tree, FormMode::New);
        modals.open_entry(tree);

        let charge_code_empty = tree
            .value(Element::ChargeCode)
            .map_or(true, |v| v.trim().is_empty());
        if charge_code_empty {
            tree.focus(Element::ChargeCode);
        } else {
            tree.focus(Element::ActivityText);
        }
        state
    }

    pub fn start_edit_entry<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        modals: &mut ModalCoordinator,
        record: &EditRecord,
    ) -> EntryFormState {
        self.reset(tree);

        let state = EntryFormState::from_record(record);
        state.write_to(tree);

        self.set_mode(tree, FormMode::Edit);
        modals.open_entry(tree);
        tree.focus(Element::ActivityText);
        state
    }

    /// Disable the submit button and snapshot the form. A submit while the
    /// button is already disabled is a duplicate and yields `None`.
    pub fn submit<T: InterfaceTree>(&self, tree: &mut T) -> Option<FormSubmission> {
        if tree.is_disabled(Element::SubmitButton) {
            tracing::debug!("duplicate submit ignored");
            return None;
        }
        tree.set_disabled(Element::SubmitButton, true);
        Some(FormSubmission::read_from(tree))
    }
}
