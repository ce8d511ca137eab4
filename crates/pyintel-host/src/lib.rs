//! Host editor extension API surface for pyintel
//!
//! This crate defines the interfaces pyintel consumes from the host text
//! editor. The host owns the actual capability registries, terminals, and
//! configuration store; pyintel only sees them through the traits here.
//!
//! # Module Organization
//!
//! - `registry`: capability registration and disposable handles
//! - `providers`: per-capability provider traits
//! - `types`: payloads crossing the host boundary
//! - `selector`: document filters and the Python selector
//! - `terminal`: terminal handles and identity
//! - `config`: read-only configuration surface and collaborator bundle
//! - `error`: error types and result alias

pub mod config;
pub mod error;
pub mod providers;
pub mod registry;
pub mod selector;
pub mod terminal;
pub mod types;

pub use config::{ConfigurationService, HostServices};
pub use error::{HostError, Result};
pub use providers::{
    CodeLensProvider, CompletionProvider, DefinitionProvider, DocumentSymbolProvider,
    HoverProvider, OnTypeFormattingProvider, ReferenceProvider, RenameProvider,
    SignatureHelpProvider,
};
pub use registry::{Disposable, LanguageRegistry};
pub use selector::{python_selector, DocumentFilter, DocumentSelector, PYTHON_LANGUAGE};
pub use terminal::{Terminal, TerminalId};
pub use types::{
    CodeLens, Command, CompletionItem, CompletionItemKind, DocumentContext, DocumentRequest,
    Hover, Location, OnTypeFormattingRequest, ParameterInformation, Position, Range,
    SignatureHelp, SignatureInformation, SymbolInformation, SymbolKind, TextEdit, WorkspaceEdit,
};
