//! Error types for backend process management

use crate::process::BackendState;

/// Errors from spawning, talking to, or tearing down the engine process
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("failed to spawn backend process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("cannot spawn backend process in state {state:?}")]
    InvalidState { state: BackendState },

    #[error("backend process is not running")]
    NotRunning,

    #[error("backend protocol error: {0}")]
    Protocol(String),

    #[error("backend request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("backend returned error {code}: {message}")]
    Rpc { code: i32, message: String },

    #[error("backend factory already disposed")]
    Disposed,
}

pub type Result<T> = std::result::Result<T, BackendError>;
