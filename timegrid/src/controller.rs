use std::time::Instant;

use crate::clipboard::ClipboardService;
use crate::form::{EditRecord, FormController, FormSubmission};
use crate::interface::InterfaceTree;
use crate::modal::{EscapeOutcome, ModalCoordinator, ModalKind, ModalVisibility, ResetForm};
use crate::notes::{decode_copy_text, NotesPresenter, NotesRequest};
use crate::selection::{parse_interval, PointerButton, SelectionEngine};
use crate::settings::ControllerSettings;
use crate::toast::ToastService;

pub const NOTHING_TO_COPY: &str = "Nothing to copy";
pub const COPY_SUCCEEDED: &str = "Notes copied to clipboard";
pub const COPY_FAILED: &str = "Unable to copy notes";

/// Discrete input the host forwards from its event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { slot: usize, button: PointerButton },
    PointerEnter { slot: usize },
    /// A release anywhere on the page.
    PointerUp { button: PointerButton },
    /// Native drag start over a slot.
    DragStart { slot: usize },
    WindowBlur,
    Escape,
    /// A click inside a modal's overlay; `on_backdrop` is false when it
    /// landed in the modal content.
    ModalClick { modal: ModalKind, on_backdrop: bool },
    CloseClick(ModalKind),
    EditEntry(EditRecord),
    ShowNotes(NotesRequest),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Handled,
    /// The host should cancel the platform's default handling.
    Suppressed,
    Submitted(FormSubmission),
}

/// One controller per page load. Owns the interface tree and every
/// component; all mutation happens through [`TimesheetController::handle`].
pub struct TimesheetController<T: InterfaceTree> {
    tree: T,
    settings: ControllerSettings,
    selection: SelectionEngine,
    form: FormController,
    modals: ModalCoordinator,
    notes: NotesPresenter,
    toast: ToastService,
    clipboard: ClipboardService,
}

impl<T: InterfaceTree> TimesheetController<T> {
    pub fn new(tree: T, settings: ControllerSettings, clipboard: ClipboardService) -> Self {
        let interval = parse_interval(
            tree.grid_interval().as_deref(),
            settings.default_slot_interval,
        );
        let mut controller = Self {
            tree,
            selection: SelectionEngine::new(interval),
            form: FormController::new(),
            modals: ModalCoordinator::new(settings.modal_open_class.clone()),
            notes: NotesPresenter::new(),
            toast: ToastService::new(settings.toast_delay(), settings.toast_policy),
            clipboard,
            settings,
        };
        // Start closed without touching fields the platform may have restored.
        controller
            .modals
            .close_entry(&mut controller.tree, &controller.form, ResetForm::Suppress);
        controller.modals.close_notes(&mut controller.tree);
        tracing::debug!(interval, "timesheet controller ready");
        controller
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn modal_visibility(&self) -> ModalVisibility {
        self.modals.visibility()
    }

    /// Swap in a re-rendered tree. Any drag is dropped, the slot interval is
    /// re-read and the current modal visibility is written to the new tree.
    pub fn replace_tree(&mut self, tree: T) -> T {
        let old = std::mem::replace(&mut self.tree, tree);
        self.selection.abort(&mut self.tree);
        self.selection.set_interval(parse_interval(
            self.tree.grid_interval().as_deref(),
            self.settings.default_slot_interval,
        ));
        self.modals.restore(&mut self.tree);
        old
    }

    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown { slot, button } => {
                // The modal overlay sits above the grid.
                if self.modals.visibility().any_open() {
                    return EventOutcome::Ignored;
                }
                outcome(self.selection.press(&mut self.tree, slot, button))
            }
            InputEvent::PointerEnter { slot } => {
                outcome(self.selection.enter(&mut self.tree, slot))
            }
            InputEvent::PointerUp { button } => {
                let Some(range) = self.selection.release(&mut self.tree, button) else {
                    return EventOutcome::Ignored;
                };
                tracing::debug!(
                    day = %range.day,
                    start = range.start,
                    end = range.end,
                    "selection committed"
                );
                self.form.start_new_entry(
                    &mut self.tree,
                    &mut self.modals,
                    Some(&range.day),
                    range.start,
                    range.end,
                );
                EventOutcome::Handled
            }
            InputEvent::DragStart { slot } => {
                if self.selection.suppress_drag_start(slot) {
                    EventOutcome::Suppressed
                } else {
                    EventOutcome::Ignored
                }
            }
            InputEvent::WindowBlur => outcome(self.selection.abort(&mut self.tree)),
            InputEvent::Escape => match self.modals.handle_escape(&mut self.tree, &self.form) {
                EscapeOutcome::ClosedNotes | EscapeOutcome::ClosedEntry => EventOutcome::Handled,
                EscapeOutcome::NoModalOpen => outcome(self.selection.abort(&mut self.tree)),
            },
            InputEvent::ModalClick { modal, on_backdrop } => outcome(self.modals.backdrop_click(
                &mut self.tree,
                &self.form,
                modal,
                on_backdrop,
            )),
            InputEvent::CloseClick(modal) => {
                outcome(self.modals.close(&mut self.tree, &self.form, modal))
            }
            InputEvent::EditEntry(record) => {
                self.selection.abort(&mut self.tree);
                self.form
                    .start_edit_entry(&mut self.tree, &mut self.modals, &record);
                EventOutcome::Handled
            }
            InputEvent::ShowNotes(request) => {
                outcome(self.notes.show(&mut self.tree, &mut self.modals, &request))
            }
            InputEvent::Submit => {
                if !self.modals.visibility().entry_open {
                    return EventOutcome::Ignored;
                }
                match self.form.submit(&mut self.tree) {
                    Some(submission) => EventOutcome::Submitted(submission),
                    None => EventOutcome::Ignored,
                }
            }
        }
    }

    /// Close the entry modal after the host has persisted a submission.
    pub fn finish_submission(&mut self) {
        self.modals
            .close_entry(&mut self.tree, &self.form, ResetForm::Reset);
    }

    /// Re-enable the submit button after the host rejected a submission.
    pub fn reject_submission(&mut self, message: &str, now: Instant) {
        let mode = self.form.mode();
        self.form.set_mode(&mut self.tree, mode);
        self.show_toast(message, now);
    }

    /// Copy a copy-button payload and report the result with a toast.
    pub async fn copy_notes(&mut self, payload: &str, now: Instant) -> bool {
        let text = decode_copy_text(payload);
        if text.is_empty() {
            self.show_toast(NOTHING_TO_COPY, now);
            return false;
        }
        let copied = self.clipboard.copy_to_clipboard(&text).await;
        self.show_toast(if copied { COPY_SUCCEEDED } else { COPY_FAILED }, now);
        copied
    }

    pub fn show_toast(&mut self, message: &str, now: Instant) {
        self.toast.show(&mut self.tree, message, now);
    }

    /// Drive toast hide deadlines; call on every loop iteration.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toast.tick(&mut self.tree, now)
    }
}

fn outcome(handled: bool) -> EventOutcome {
    if handled {
        EventOutcome::Handled
    } else {
        EventOutcome::Ignored
    }
}
