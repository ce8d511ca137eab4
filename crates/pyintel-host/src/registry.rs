//! Capability registration against the host

use std::sync::Arc;

use crate::providers::{
    CodeLensProvider, CompletionProvider, DefinitionProvider, DocumentSymbolProvider,
    HoverProvider, OnTypeFormattingProvider, ReferenceProvider, RenameProvider,
    SignatureHelpProvider,
};
use crate::selector::DocumentSelector;

/// Handle whose release frees the resources tied to a registration
///
/// Dropping a disposable without calling [`Disposable::dispose`] leaks the
/// registration until the host shuts down; owners release their disposables
/// explicitly at teardown.
pub trait Disposable: Send {
    fn dispose(&mut self);
}

/// The host's capability registry
///
/// Each `register_*` call installs one provider for the documents matched by
/// the selector and returns a disposable that withdraws it. Registering the
/// same provider kind twice against the same selector is not an error at
/// this layer; the later registration shadows the earlier one for
/// overlapping documents, so a duplicate buys nothing.
pub trait LanguageRegistry: Send + Sync {
    /// Register a completion provider
    ///
    /// `shortcut` is the source label shown next to items in the completion
    /// list; `trigger_characters` cause the host to request completions
    /// automatically.
    fn register_completion_provider(
        &self,
        selector: DocumentSelector,
        shortcut: &str,
        trigger_characters: &[char],
        provider: Arc<dyn CompletionProvider>,
    ) -> Box<dyn Disposable>;

    fn register_hover_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn HoverProvider>,
    ) -> Box<dyn Disposable>;

    fn register_definition_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn DefinitionProvider>,
    ) -> Box<dyn Disposable>;

    fn register_reference_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn ReferenceProvider>,
    ) -> Box<dyn Disposable>;

    fn register_rename_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn RenameProvider>,
    ) -> Box<dyn Disposable>;

    fn register_code_lens_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn CodeLensProvider>,
    ) -> Box<dyn Disposable>;

    fn register_document_symbol_provider(
        &self,
        selector: DocumentSelector,
        provider: Arc<dyn DocumentSymbolProvider>,
    ) -> Box<dyn Disposable>;

    fn register_signature_help_provider(
        &self,
        selector: DocumentSelector,
        trigger_characters: &[char],
        provider: Arc<dyn SignatureHelpProvider>,
    ) -> Box<dyn Disposable>;

    fn register_on_type_formatting_provider(
        &self,
        selector: DocumentSelector,
        trigger_characters: &[char],
        provider: Arc<dyn OnTypeFormattingProvider>,
    ) -> Box<dyn Disposable>;
}
