use thiserror::Error;

/// Errors raised by clipboard backends. [`crate::clipboard::ClipboardService`]
/// never lets these escape; they are logged and turned into `false`.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
    #[error("legacy copy command rejected")]
    CommandRejected,
    #[error("clipboard io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClipboardError {
    pub fn write_failed(msg: impl Into<String>) -> Self {
        Self::WriteFailed(msg.into())
    }
}

/// Failure of the structured stage of a payload decode.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,
    #[error("payload is not a structured note list: {0}")]
    Malformed(#[from] serde_json::Error),
}
