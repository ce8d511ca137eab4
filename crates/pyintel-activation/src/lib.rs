//! Language-intelligence activation for pyintel
//!
//! Wires the intelligence backend into the host editor: on activation a
//! backend factory is created and one capability provider per supported
//! operation (definition, rename, hover, references, completion, code lens,
//! document symbols, on-type formatting, signature help) is registered
//! against the host registry. Every registration handle is tracked for
//! teardown. Activation is one-shot per activator instance.
//!
//! # Module Organization
//!
//! - `activator`: activation lifecycle and the subscriptions ledger
//! - `providers`: thin capability providers delegating to the backend
//! - `formatting`: on-type formatting dispatcher and formatters
//! - `error`: error types and result alias

pub mod activator;
pub mod error;
pub mod formatting;
pub mod providers;

pub use activator::{IntelligenceActivator, DISABLE_SIGNATURE_OPTION};
pub use error::{ActivationError, Result};
pub use formatting::{BlockFormatter, OnEnterFormatter, OnTypeFormattingDispatcher};
