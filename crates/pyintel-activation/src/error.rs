//! Error types for activation

use pyintel_backend::BackendError;
use pyintel_host::HostError;

/// Errors raised while activating or tearing down language intelligence
#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    /// `activate` was called on an already-active instance. The only checked
    /// error; everything else propagates unmodified.
    #[error("language intelligence already started")]
    AlreadyStarted,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Host(#[from] HostError),
}

pub type Result<T> = std::result::Result<T, ActivationError>;
