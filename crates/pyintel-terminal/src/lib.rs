//! Terminal environment activation for pyintel
//!
//! Puts a Python environment (typically a virtual environment) into effect
//! inside a host terminal: classify the terminal's shell, look up the
//! activation commands for that shell and resource, and send them
//! sequentially with a settle delay between sends. Activation is memoized
//! per terminal, so racing callers share one command sequence and one
//! outcome, and completion fans out to best-effort secondary handlers.
//!
//! # Module Organization
//!
//! - `shell`: shell classification from a shell path
//! - `commands`: activation command synthesis per shell
//! - `helper`: the helper collaborator bundling path, classifier, commands
//! - `activator`: the dedup base activator and the handler fan-out wrapper
//! - `error`: error types and result alias

pub mod activator;
pub mod commands;
pub mod error;
pub mod helper;
pub mod shell;

pub use activator::{
    TerminalActivationHandler, TerminalActivator, TerminalEnvActivator, COMMAND_SETTLE_DELAY,
};
pub use commands::{ActivationCommandProvider, VenvActivationProvider};
pub use error::{Result, TerminalError};
pub use helper::{DefaultTerminalHelper, TerminalHelper};
pub use shell::{detected_shell_path, ShellKind};
