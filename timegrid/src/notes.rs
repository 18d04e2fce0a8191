//! Read-only activity notes: payload decoding and the notes modal.

use serde::Deserialize;

use crate::error::PayloadError;
use crate::interface::{Element, InterfaceTree};
use crate::modal::ModalCoordinator;

pub const EMPTY_NOTES_PLACEHOLDER: &str = "No activity notes recorded.";
pub const GENERIC_NOTES_TITLE: &str = "Activity Notes";

/// One note line shown in the notes modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteItem {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub text: String,
}

impl NoteItem {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            start_time: None,
            end_time: None,
            text: text.into(),
        }
    }

    /// `"<index>. <start>–<end>  <text>"`, or `"<index>. <text>"` when the
    /// note has no complete time range.
    pub fn render(&self, index: usize) -> String {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => format!("{index}. {start}–{end}  {}", self.text),
            _ => format!("{index}. {}", self.text),
        }
    }
}

/// Payload shape accepted by the structured decode stage.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNote {
    Line(String),
    Detail {
        #[serde(default, alias = "startTime")]
        start_time: Option<String>,
        #[serde(default, alias = "endTime")]
        end_time: Option<String>,
        #[serde(default, alias = "activity_text", alias = "activityText")]
        text: Option<String>,
    },
}

impl From<RawNote> for NoteItem {
    fn from(raw: RawNote) -> Self {
        match raw {
            RawNote::Line(text) => NoteItem::text_only(text.trim()),
            RawNote::Detail {
                start_time,
                end_time,
                text,
            } => NoteItem {
                start_time: start_time.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
                end_time: end_time.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
                text: text.unwrap_or_default().trim().to_string(),
            },
        }
    }
}

/// Stage one: the payload as an ordered JSON array of notes.
pub fn parse_structured(payload: &str) -> Result<Vec<NoteItem>, PayloadError> {
    if payload.trim().is_empty() {
        return Err(PayloadError::Empty);
    }
    let raw: Vec<RawNote> = serde_json::from_str(payload)?;
    Ok(raw
        .into_iter()
        .map(NoteItem::from)
        .filter(|note| !note.text.is_empty() || note.start_time.is_some())
        .collect())
}

/// Stage two: trimmed, non-empty lines of a pipe-delimited string.
pub fn split_delimited(payload: &str) -> Vec<String> {
    payload
        .split('|')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a notes payload: structured first, delimited only if that fails.
pub fn decode_notes(payload: &str) -> Vec<NoteItem> {
    match parse_structured(payload) {
        Ok(notes) => notes,
        Err(e) => {
            tracing::debug!(error = %e, "falling back to delimited notes payload");
            split_delimited(payload)
                .into_iter()
                .map(NoteItem::text_only)
                .collect()
        }
    }
}

/// Decode a copy-button payload into the text placed on the clipboard.
pub fn decode_copy_text(payload: &str) -> String {
    decode_notes(payload)
        .into_iter()
        .map(|note| note.text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Everything a notes toggle button carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesRequest {
    pub day_label: Option<String>,
    pub charge_label: Option<String>,
    /// Structured detail payload (start, end, text per note).
    pub details: Option<String>,
    /// Flat comment payload, used when details yield nothing.
    pub comments: Option<String>,
}

impl NotesRequest {
    pub fn notes(&self) -> Vec<NoteItem> {
        let from_details = self.details.as_deref().map(decode_notes).unwrap_or_default();
        if !from_details.is_empty() {
            return from_details;
        }
        self.comments.as_deref().map(decode_notes).unwrap_or_default()
    }

    pub fn title(&self) -> String {
        let charge = self.charge_label.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let day = self.day_label.as_deref().map(str::trim).filter(|s| !s.is_empty());
        match (charge, day) {
            (Some(charge), Some(day)) => format!("{charge} · {day}"),
            (Some(label), None) | (None, Some(label)) => label.to_string(),
            (None, None) => GENERIC_NOTES_TITLE.to_string(),
        }
    }
}

/// Render note lines, or the placeholder line for an empty collection.
pub fn render_notes(notes: &[NoteItem]) -> Vec<String> {
    if notes.is_empty() {
        return vec![EMPTY_NOTES_PLACEHOLDER.to_string()];
    }
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| note.render(i + 1))
        .collect()
}

/// Fills and opens the notes modal.
#[derive(Debug, Clone, Default)]
pub struct NotesPresenter;

impl NotesPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Returns false when the page has no notes modal.
    pub fn show<T: InterfaceTree>(
        &self,
        tree: &mut T,
        modals: &mut ModalCoordinator,
        request: &NotesRequest,
    ) -> bool {
        if !tree.has_element(Element::NotesModal) {
            tracing::debug!("notes modal missing, notes not shown");
            return false;
        }
        let notes = request.notes();
        tree.set_text(Element::NotesTitle, &request.title());
        tree.set_list_items(Element::NotesContent, &render_notes(&notes));
        modals.open_notes(tree)
    }
}
