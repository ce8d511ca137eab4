//! Terminal handles exposed by the host

use crate::error::Result;

/// Stable identity of a host terminal, usable as a map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerminalId(pub u64);

impl std::fmt::Display for TerminalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "terminal-{}", self.0)
    }
}

/// An interactive terminal owned by the host
///
/// `show` and `send_text` are synchronous: the host queues input to the
/// underlying pty and returns. Delivery order matches call order for a
/// single terminal.
pub trait Terminal: Send + Sync {
    fn id(&self) -> TerminalId;

    /// Reveal the terminal panel; keeps keyboard focus where it is when
    /// `preserve_focus` is true
    fn show(&self, preserve_focus: bool);

    /// Queue a line of input to the shell. A trailing newline is appended by
    /// the host.
    fn send_text(&self, text: &str) -> Result<()>;
}
