use async_trait::async_trait;

use crate::error::ClipboardError;

/// Primary clipboard capability, when the platform offers one.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Legacy copy path used when the primary writer is missing or fails.
/// Returns whether the platform accepted the copy.
pub trait LegacyCopy: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<bool, ClipboardError>;
}

/// Copies text, degrading from the primary writer to the legacy path.
/// Never returns an error; failures are logged and reported as `false`.
#[derive(Default)]
pub struct ClipboardService {
    primary: Option<Box<dyn ClipboardWriter>>,
    legacy: Option<Box<dyn LegacyCopy>>,
}

impl ClipboardService {
    pub fn new(
        primary: Option<Box<dyn ClipboardWriter>>,
        legacy: Option<Box<dyn LegacyCopy>>,
    ) -> Self {
        Self { primary, legacy }
    }

    /// A service with no backends; every copy reports `false`.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub async fn copy_to_clipboard(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        if let Some(primary) = &self.primary {
            match primary.write_text(text).await {
                Ok(()) => return true,
                Err(e) => tracing::warn!(error = %e, "clipboard write failed, trying legacy copy"),
            }
        }

        let Some(legacy) = &self.legacy else {
            tracing::warn!("no clipboard backend available");
            return false;
        };
        match legacy.copy_text(text) {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "legacy copy failed");
                false
            }
        }
    }
}

impl std::fmt::Debug for ClipboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardService")
            .field("primary", &self.primary.is_some())
            .field("legacy", &self.legacy.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every write; fails when `fail` is set.
    #[derive(Clone, Default)]
    pub struct RecordingWriter {
        pub writes: Arc<Mutex<Vec<String>>>,
        pub fail: bool,
    }

    #[async_trait]
    impl ClipboardWriter for RecordingWriter {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(ClipboardError::write_failed("permission denied"));
            }
            Ok(())
        }
    }

    #[derive(Clone)]
    pub struct RecordingLegacy {
        pub copies: Arc<Mutex<Vec<String>>>,
        pub result: Result<bool, ()>,
    }

    impl Default for RecordingLegacy {
        fn default() -> Self {
            Self {
                copies: Arc::default(),
                result: Ok(true),
            }
        }
    }

    impl LegacyCopy for RecordingLegacy {
        fn copy_text(&self, text: &str) -> Result<bool, ClipboardError> {
            self.copies.lock().unwrap().push(text.to_string());
            self.result.map_err(|()| ClipboardError::CommandRejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{RecordingLegacy, RecordingWriter};
    use super::*;

    fn service(writer: &RecordingWriter, legacy: &RecordingLegacy) -> ClipboardService {
        ClipboardService::new(Some(Box::new(writer.clone())), Some(Box::new(legacy.clone())))
    }

    #[tokio::test]
    async fn empty_text_touches_no_backend() {
        let writer = RecordingWriter::default();
        let legacy = RecordingLegacy::default();

        assert!(!service(&writer, &legacy).copy_to_clipboard("").await);
        assert!(writer.writes.lock().unwrap().is_empty());
        assert!(legacy.copies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn primary_success_skips_legacy() {
        let writer = RecordingWriter::default();
        let legacy = RecordingLegacy::default();

        assert!(service(&writer, &legacy).copy_to_clipboard("notes").await);
        assert_eq!(*writer.writes.lock().unwrap(), vec!["notes"]);
        assert!(legacy.copies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn primary_failure_falls_back_to_legacy() {
        let writer = RecordingWriter {
            fail: true,
            ..Default::default()
        };
        let legacy = RecordingLegacy::default();

        assert!(service(&writer, &legacy).copy_to_clipboard("notes").await);
        assert_eq!(*legacy.copies.lock().unwrap(), vec!["notes"]);
    }

    #[tokio::test]
    async fn legacy_rejection_and_errors_report_false() {
        let rejecting = RecordingLegacy {
            result: Ok(false),
            ..Default::default()
        };
        let only_legacy = ClipboardService::new(None, Some(Box::new(rejecting)));
        assert!(!only_legacy.copy_to_clipboard("notes").await);

        let failing = RecordingLegacy {
            result: Err(()),
            ..Default::default()
        };
        let only_legacy = ClipboardService::new(None, Some(Box::new(failing)));
        assert!(!only_legacy.copy_to_clipboard("notes").await);
    }

    #[tokio::test]
    async fn no_backends_reports_false() {
        assert!(!ClipboardService::disabled().copy_to_clipboard("notes").await);
    }
}
