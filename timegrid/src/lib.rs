//! Interaction controller for a weekly timesheet grid.
//!
//! Turns drag gestures over time slots into entry ranges, drives the entry
//! form and notes modals, and coordinates toasts and clipboard copies. The
//! rendered page is reached only through [`InterfaceTree`].

pub mod clipboard;
pub mod controller;
pub mod error;
pub mod form;
pub mod interface;
pub mod modal;
pub mod notes;
pub mod selection;
pub mod settings;
pub mod time_conversion;
pub mod toast;

pub use clipboard::{ClipboardService, ClipboardWriter, LegacyCopy};
pub use controller::{EventOutcome, InputEvent, TimesheetController};
pub use error::{ClipboardError, PayloadError};
pub use form::{EditRecord, EntryFormState, FormController, FormMode, FormSubmission};
pub use interface::{Element, InterfaceTree, MemoryTree, RawSlot};
pub use modal::{ModalCoordinator, ModalKind, ModalVisibility};
pub use notes::{NoteItem, NotesPresenter, NotesRequest};
pub use selection::{PointerButton, SelectionEngine, SelectionRange, SelectionState, TimeSlot};
pub use settings::ControllerSettings;
pub use time_conversion::{minutes_to_time, time_to_minutes};
pub use toast::{HidePolicy, ToastService};
