//! Error types for terminal activation

use pyintel_host::TerminalId;

/// Errors from terminal environment activation
///
/// Clonable: one activation's outcome is shared by every caller racing on
/// the same terminal, so a failure must be observable by all of them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to send command to {terminal}: {message}")]
    CommandSend {
        terminal: TerminalId,
        message: String,
    },

    #[error("activation command lookup failed: {0}")]
    CommandLookup(String),
}

pub type Result<T> = std::result::Result<T, TerminalError>;
