use serde::{Deserialize, Serialize};

use crate::toast::HidePolicy;

pub const DEFAULT_SLOT_INTERVAL: u32 = 30;
pub const DEFAULT_TOAST_DELAY_MS: u64 = 2000;

/// Tunables for [`crate::TimesheetController`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Slot width used when the grid's `interval` attribute is missing or invalid.
    pub default_slot_interval: u32,
    pub toast_delay_ms: u64,
    pub toast_policy: HidePolicy,
    /// Page class kept while any modal is visible.
    pub modal_open_class: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_slot_interval: DEFAULT_SLOT_INTERVAL,
            toast_delay_ms: DEFAULT_TOAST_DELAY_MS,
            toast_policy: HidePolicy::default(),
            modal_open_class: "modal-open".to_string(),
        }
    }
}

impl ControllerSettings {
    pub fn toast_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.toast_delay_ms)
    }
}
