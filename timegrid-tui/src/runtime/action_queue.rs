use timegrid::FormSubmission;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs to await or touch the store, run after input handling.
#[derive(Debug, Clone)]
pub(super) enum Action {
    CopyNotes { payload: String },
    PersistEntry(FormSubmission),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
