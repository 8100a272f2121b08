//! Typed errors for the guide's surfaces
//!
//! The application layer uses `anyhow`; these are the failures the
//! controller distinguishes between.

use thiserror::Error;

/// Clipboard surface failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard mechanism available")]
    Unavailable,

    #[error("clipboard command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence surface failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not determine data directory")]
    NoDataDir,
}

/// Error taxonomy of the guide
#[derive(Debug, Error)]
pub enum GuideError {
    /// Requested identifier is not declared
    #[error("unknown {kind} `{id}`")]
    MissingTarget { kind: &'static str, id: String },

    /// Primary clipboard path failed; fallback is attempted
    #[error("primary clipboard unavailable: {0}")]
    ClipboardUnavailable(ClipboardError),

    /// Primary and fallback clipboard paths both failed
    #[error("could not copy to clipboard, fallback failed too: {0}")]
    ClipboardTotalFailure(ClipboardError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("invalid guide content: {0}")]
    Content(String),
}
