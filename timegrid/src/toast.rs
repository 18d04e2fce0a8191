use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::interface::{Element, InterfaceTree};

/// How a new toast treats hide timers scheduled by earlier toasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HidePolicy {
    /// Pending hides are cancelled; the newest message gets the full delay.
    /// This is the default; the legacy page script behaves as `Independent`.
    #[default]
    RestartOnShow,
    /// Every toast keeps its own timer, so an older timer can hide a newer
    /// message early. Matches the legacy page script.
    Independent,
}

/// Transient message shown on the toast element.
///
/// There is no background timer: the host calls [`ToastService::tick`] from
/// its event loop and hides happen once a deadline has passed.
#[derive(Debug, Clone)]
pub struct ToastService {
    delay: Duration,
    policy: HidePolicy,
    pending: Vec<Instant>,
}

impl ToastService {
    pub fn new(delay: Duration, policy: HidePolicy) -> Self {
        Self {
            delay,
            policy,
            pending: Vec::new(),
        }
    }

    pub fn show<T: InterfaceTree>(&mut self, tree: &mut T, message: &str, now: Instant) {
        if !tree.has_element(Element::Toast) {
            tracing::debug!(message, "toast element missing, message dropped");
            return;
        }
        tree.set_text(Element::Toast, message);
        tree.set_hidden(Element::Toast, false);

        if self.policy == HidePolicy::RestartOnShow {
            self.pending.clear();
        }
        self.pending.push(now + self.delay);
    }

    /// Fire every hide whose deadline has passed. Returns true if the toast
    /// was hidden by this call.
    pub fn tick<T: InterfaceTree>(&mut self, tree: &mut T, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|deadline| *deadline > now);
        if self.pending.len() == before {
            return false;
        }
        tree.set_hidden(Element::Toast, true);
        true
    }

    /// Earliest pending hide, for hosts that want to sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }

    pub fn policy(&self) -> HidePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemoryTree;

    const DELAY: Duration = Duration::from_millis(2000);

    fn visible(tree: &MemoryTree) -> bool {
        !tree.is_hidden(Element::Toast)
    }

    #[test]
    fn toast_is_visible_immediately_and_hidden_after_delay() {
        let mut tree = MemoryTree::timesheet_page();
        let mut toast = ToastService::new(DELAY, HidePolicy::RestartOnShow);
        let t0 = Instant::now();

        toast.show(&mut tree, "Saved", t0);
        assert!(visible(&tree));
        assert_eq!(tree.text(Element::Toast), Some("Saved"));

        assert!(!toast.tick(&mut tree, t0 + Duration::from_millis(1999)));
        assert!(visible(&tree));

        assert!(toast.tick(&mut tree, t0 + DELAY));
        assert!(!visible(&tree));
        assert_eq!(toast.next_deadline(), None);
    }

    #[test]
    fn restart_policy_gives_latest_message_the_full_delay() {
        let mut tree = MemoryTree::timesheet_page();
        let mut toast = ToastService::new(DELAY, HidePolicy::RestartOnShow);
        let t0 = Instant::now();

        toast.show(&mut tree, "first", t0);
        toast.show(&mut tree, "second", t0 + Duration::from_millis(1500));

        assert!(!toast.tick(&mut tree, t0 + Duration::from_millis(2100)));
        assert!(visible(&tree));
        assert_eq!(tree.text(Element::Toast), Some("second"));

        assert!(toast.tick(&mut tree, t0 + Duration::from_millis(3500)));
        assert!(!visible(&tree));
    }

    #[test]
    fn independent_policy_lets_earlier_timer_hide_later_message() {
        let mut tree = MemoryTree::timesheet_page();
        let mut toast = ToastService::new(DELAY, HidePolicy::Independent);
        let t0 = Instant::now();

        toast.show(&mut tree, "first", t0);
        toast.show(&mut tree, "second", t0 + Duration::from_millis(1500));

        assert!(toast.tick(&mut tree, t0 + Duration::from_millis(2100)));
        assert!(!visible(&tree));
        assert_eq!(tree.text(Element::Toast), Some("second"));

        // The second timer still fires, on an already hidden toast.
        assert!(toast.tick(&mut tree, t0 + Duration::from_millis(3500)));
        assert_eq!(toast.next_deadline(), None);
    }

    #[test]
    fn default_policy_restarts_on_show() {
        assert_eq!(HidePolicy::default(), HidePolicy::RestartOnShow);
        assert_eq!(
            serde_json::from_str::<HidePolicy>("\"independent\"").unwrap(),
            HidePolicy::Independent
        );
    }

    #[test]
    fn missing_toast_element_schedules_nothing() {
        let mut tree = MemoryTree::timesheet_page().without_element(Element::Toast);
        let mut toast = ToastService::new(DELAY, HidePolicy::RestartOnShow);

        toast.show(&mut tree, "lost", Instant::now());

        assert_eq!(toast.next_deadline(), None);
    }
}
