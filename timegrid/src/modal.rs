use crate::form::FormController;
use crate::interface::{Element, InterfaceTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Entry,
    Notes,
}

impl ModalKind {
    pub fn element(self) -> Element {
        match self {
            ModalKind::Entry => Element::EntryModal,
            ModalKind::Notes => Element::NotesModal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    pub entry_open: bool,
    pub notes_open: bool,
}

impl ModalVisibility {
    pub fn any_open(&self) -> bool {
        self.entry_open || self.notes_open
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Entry => self.entry_open,
            ModalKind::Notes => self.notes_open,
        }
    }
}

/// Whether closing the entry modal also resets the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetForm {
    Reset,
    /// Leave field values alone; only used for the forced close at startup.
    Suppress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
    ClosedNotes,
    ClosedEntry,
    NoModalOpen,
}

/// Sole owner of modal visibility and the page-level "modal open" class.
#[derive(Debug, Clone)]
pub struct ModalCoordinator {
    visibility: ModalVisibility,
    page_class: String,
}

impl ModalCoordinator {
    pub fn new(page_class: impl Into<String>) -> Self {
        Self {
            visibility: ModalVisibility::default(),
            page_class: page_class.into(),
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn open_entry<T: InterfaceTree>(&mut self, tree: &mut T) -> bool {
        self.show(tree, ModalKind::Entry)
    }

    pub fn close_entry<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        form: &FormController,
        reset: ResetForm,
    ) -> bool {
        let closed = self.hide(tree, ModalKind::Entry);
        if closed && reset == ResetForm::Reset {
            form.reset(tree);
        }
        closed
    }

    pub fn open_notes<T: InterfaceTree>(&mut self, tree: &mut T) -> bool {
        self.show(tree, ModalKind::Notes)
    }

    pub fn close_notes<T: InterfaceTree>(&mut self, tree: &mut T) -> bool {
        self.hide(tree, ModalKind::Notes)
    }

    pub fn close<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        form: &FormController,
        kind: ModalKind,
    ) -> bool {
        match kind {
            ModalKind::Entry => self.close_entry(tree, form, ResetForm::Reset),
            ModalKind::Notes => self.close_notes(tree),
        }
    }

    /// Backdrop clicks close the modal they land on; clicks that reach the
    /// coordinator from inside modal content are ignored.
    pub fn backdrop_click<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        form: &FormController,
        kind: ModalKind,
        on_backdrop: bool,
    ) -> bool {
        if !on_backdrop || !self.visibility.is_open(kind) {
            return false;
        }
        self.close(tree, form, kind)
    }

    /// Escape closes the notes modal first, then the entry modal, one per
    /// press. `NoModalOpen` tells the caller to abort any drag instead.
    pub fn handle_escape<T: InterfaceTree>(
        &mut self,
        tree: &mut T,
        form: &FormController,
    ) -> EscapeOutcome {
        if self.visibility.notes_open {
            self.close_notes(tree);
            return EscapeOutcome::ClosedNotes;
        }
        if self.visibility.entry_open {
            self.close_entry(tree, form, ResetForm::Reset);
            return EscapeOutcome::ClosedEntry;
        }
        EscapeOutcome::NoModalOpen
    }

    /// Write the current visibility onto a freshly rendered tree.
    pub fn restore<T: InterfaceTree>(&self, tree: &mut T) {
        for kind in [ModalKind::Entry, ModalKind::Notes] {
            tree.set_hidden(kind.element(), !self.visibility.is_open(kind));
        }
        self.sync_page_class(tree);
    }

    fn show<T: InterfaceTree>(&mut self, tree: &mut T, kind: ModalKind) -> bool {
        let element = kind.element();
        if !tree.has_element(element) {
            tracing::debug!(?kind, "modal element missing, not opened");
            return false;
        }
        tree.set_hidden(element, false);
        self.set_open(kind, true);
        self.sync_page_class(tree);
        true
    }

    fn hide<T: InterfaceTree>(&mut self, tree: &mut T, kind: ModalKind) -> bool {
        let element = kind.element();
        if !tree.has_element(element) {
            return false;
        }
        tree.set_hidden(element, true);
        self.set_open(kind, false);
        self.sync_page_class(tree);
        true
    }

    fn set_open(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::Entry => self.visibility.entry_open = open,
            ModalKind::Notes => self.visibility.notes_open = open,
        }
    }

    fn sync_page_class<T: InterfaceTree>(&self, tree: &mut T) {
        tree.set_page_class(&self.page_class, self.visibility.any_open());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryTree;

    const CLASS: &str = "modal-open";

    fn setup() -> (MemoryTree, ModalCoordinator, FormController) {
        (
            MemoryTree::timesheet_page(),
            ModalCoordinator::new(CLASS),
            FormController::new(),
        )
    }

    #[test]
    fn page_class_stays_while_either_modal_is_visible() {
        let (mut tree, mut modals, form) = setup();

        modals.open_entry(&mut tree);
        modals.open_notes(&mut tree);
        assert!(tree.has_page_class(CLASS));

        modals.close_entry(&mut tree, &form, ResetForm::Reset);
        assert!(tree.has_page_class(CLASS));
        assert!(tree.is_hidden(Element::EntryModal));

        modals.close_notes(&mut tree);
        assert!(!tree.has_page_class(CLASS));
        assert!(!modals.visibility().any_open());
    }

    #[test]
    fn escape_closes_one_modal_per_press() {
        let (mut tree, mut modals, form) = setup();
        modals.open_entry(&mut tree);
        modals.open_notes(&mut tree);

        assert_eq!(
            modals.handle_escape(&mut tree, &form),
            EscapeOutcome::ClosedNotes
        );
        assert!(modals.visibility().entry_open);
        assert!(!tree.is_hidden(Element::EntryModal));

        assert_eq!(
            modals.handle_escape(&mut tree, &form),
            EscapeOutcome::ClosedEntry
        );
        assert_eq!(
            modals.handle_escape(&mut tree, &form),
            EscapeOutcome::NoModalOpen
        );
    }

    #[test]
    fn closing_entry_resets_form_unless_suppressed() {
        let (mut tree, mut modals, form) = setup();

        modals.open_entry(&mut tree);
        tree.type_into(Element::ActivityText, "draft");
        modals.close_entry(&mut tree, &form, ResetForm::Suppress);
        assert_eq!(tree.value(Element::ActivityText).as_deref(), Some("draft"));

        modals.open_entry(&mut tree);
        modals.close_entry(&mut tree, &form, ResetForm::Reset);
        assert_eq!(tree.value(Element::ActivityText).as_deref(), Some(""));
    }

    #[test]
    fn backdrop_click_only_closes_from_the_backdrop() {
        let (mut tree, mut modals, form) = setup();
        modals.open_notes(&mut tree);

        assert!(!modals.backdrop_click(&mut tree, &form, ModalKind::Notes, false));
        assert!(modals.visibility().notes_open);

        assert!(modals.backdrop_click(&mut tree, &form, ModalKind::Notes, true));
        assert!(!modals.visibility().notes_open);
    }

    #[test]
    fn missing_modal_element_leaves_visibility_untouched() {
        let mut tree = MemoryTree::timesheet_page().without_element(Element::EntryModal);
        let mut modals = ModalCoordinator::new(CLASS);

        assert!(!modals.open_entry(&mut tree));
        assert!(!modals.visibility().entry_open);
        assert!(!tree.has_page_class(CLASS));
    }
}
