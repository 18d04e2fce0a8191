use crate::app::App;
use std::time::Instant;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App) {
    match action {
        Action::CopyNotes { payload } => {
            let copied = app.controller.copy_notes(&payload, Instant::now()).await;
            tracing::debug!(copied, "copy notes finished");
        }
        Action::PersistEntry(submission) => {
            app.persist_entry(&submission, Instant::now());
        }
    }
}
