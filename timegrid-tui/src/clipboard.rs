//! Clipboard backends: the system clipboard through `arboard`, and an OSC 52
//! escape sequence for terminals where no system clipboard is reachable
//! (ssh sessions, headless hosts).

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use timegrid::{ClipboardError, ClipboardService, ClipboardWriter, LegacyCopy};

pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::write_failed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::write_failed(e.to_string()))?
    }
}

/// The system clipboard, if one can be opened right now.
pub fn system_clipboard() -> Option<Box<dyn ClipboardWriter>> {
    match arboard::Clipboard::new() {
        Ok(_) => Some(Box::new(SystemClipboard)),
        Err(e) => {
            tracing::info!(error = %e, "system clipboard unavailable, using OSC 52 only");
            None
        }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Writes an OSC 52 "set clipboard" sequence to the terminal. The terminal
/// gives no acknowledgement, so a successful write counts as accepted.
pub struct Osc52Copy<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> Osc52Copy<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> LegacyCopy for Osc52Copy<W> {
    fn copy_text(&self, text: &str) -> Result<bool, ClipboardError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::CommandRejected)?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(true)
    }
}

pub fn clipboard_service() -> ClipboardService {
    ClipboardService::new(
        system_clipboard(),
        Some(Box::new(Osc52Copy::new(std::io::stdout()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(std::sync::Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn osc52_wraps_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
    }

    #[test]
    fn osc52_copy_writes_sequence() {
        let buf = SharedBuf::default();
        let copy = Osc52Copy::new(buf.clone());

        assert!(copy.copy_text("a\nb").unwrap());

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, osc52_sequence("a\nb"));
    }

    #[tokio::test]
    async fn failed_terminal_write_reports_false() {
        let service = ClipboardService::new(None, Some(Box::new(Osc52Copy::new(BrokenPipe))));
        assert!(!service.copy_to_clipboard("notes").await);
    }
}
