//! Error types for the host API boundary

/// Errors surfaced across the host boundary
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A provider's backend request failed
    #[error("backend request failed: {message}")]
    BackendRequest { message: String },

    /// The terminal rejected input
    #[error("terminal input rejected: {message}")]
    TerminalInput { message: String },

    /// The host refused a capability registration
    #[error("registration rejected: {message}")]
    Registration { message: String },
}

impl HostError {
    /// Wrap a backend failure for propagation through a provider trait
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::BackendRequest {
            message: err.to_string(),
        }
    }

    /// Wrap a terminal input failure
    pub fn terminal(err: impl std::fmt::Display) -> Self {
        Self::TerminalInput {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
