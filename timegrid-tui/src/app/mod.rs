use std::time::Instant;

use time::Date;
use timegrid::{
    ClipboardService, Element, FormSubmission, InterfaceTree, MemoryTree, TimesheetController,
};

use crate::config::TimegridConfig;
use crate::page::WeekPage;
use crate::store::{DevStore, Saved};

mod edit;
mod navigation;
mod state;
pub use edit::EDITABLE_FIELDS;
pub use state::{HitMap, HitTarget};

pub struct App {
    pub running: bool,
    pub config: TimegridConfig,
    pub controller: TimesheetController<MemoryTree>,
    pub store: DevStore,
    pub page: WeekPage,
    pub anchor: Date,
    pub today: Date,

    // Rebuilt by the renderer every frame
    pub hit_map: HitMap,
    // Last slot the left button dragged over
    pub drag_slot: Option<usize>,
}

impl App {
    pub fn new(
        config: TimegridConfig,
        store: DevStore,
        anchor: Date,
        today: Date,
        clipboard: ClipboardService,
    ) -> Self {
        let page = WeekPage::build(&store, anchor, &config);
        let controller =
            TimesheetController::new(page.tree(), config.controller.clone(), clipboard);
        Self {
            running: true,
            config,
            controller,
            store,
            page,
            anchor,
            today,
            hit_map: HitMap::default(),
            drag_slot: None,
        }
    }

    /// Re-render the week from the store. A visible toast stays up.
    pub fn rebuild(&mut self) {
        self.page = WeekPage::build(&self.store, self.anchor, &self.config);
        self.drag_slot = None;
        let old = self.controller.replace_tree(self.page.tree());
        if !old.is_hidden(Element::Toast) {
            let text = old.text(Element::Toast).unwrap_or_default().to_string();
            let tree = self.controller.tree_mut();
            tree.set_text(Element::Toast, &text);
            tree.set_hidden(Element::Toast, false);
        }
    }

    /// Store a submitted entry, then close the form and redraw the week, or
    /// keep the form open and report why the store refused it.
    pub fn persist_entry(&mut self, submission: &FormSubmission, now: Instant) {
        match self.store.apply(submission) {
            Ok(saved) => {
                self.controller.finish_submission();
                self.rebuild();
                let (id, message) = match saved {
                    Saved::Added(id) => (id, "Entry added."),
                    Saved::Updated(id) => (id, "Entry updated."),
                };
                tracing::debug!(id, "week rebuilt after save");
                self.controller.show_toast(message, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "entry rejected");
                self.controller.reject_submission(&e.to_string(), now);
            }
        }
    }
}
