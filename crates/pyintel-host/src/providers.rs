//! Per-capability provider traits
//!
//! One trait per editor capability. The host calls these; pyintel implements
//! them by delegating to the intelligence backend. All methods are async and
//! fallible; failures propagate to the host unmodified.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    CodeLens, CompletionItem, DocumentContext, DocumentRequest, Hover, Location,
    OnTypeFormattingRequest, SignatureHelp, SymbolInformation, TextEdit, WorkspaceEdit,
};

/// Supplies completion items at a position
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn provide_completion_items(&self, ctx: &DocumentContext) -> Result<Vec<CompletionItem>>;
}

/// Supplies hover contents at a position
#[async_trait]
pub trait HoverProvider: Send + Sync {
    async fn provide_hover(&self, ctx: &DocumentContext) -> Result<Option<Hover>>;
}

/// Resolves go-to-definition targets
#[async_trait]
pub trait DefinitionProvider: Send + Sync {
    async fn provide_definition(&self, ctx: &DocumentContext) -> Result<Vec<Location>>;
}

/// Finds references to the symbol at a position
#[async_trait]
pub trait ReferenceProvider: Send + Sync {
    async fn provide_references(&self, ctx: &DocumentContext) -> Result<Vec<Location>>;
}

/// Produces the workspace edit for a rename
#[async_trait]
pub trait RenameProvider: Send + Sync {
    async fn provide_rename_edits(
        &self,
        ctx: &DocumentContext,
        new_name: &str,
    ) -> Result<Option<WorkspaceEdit>>;
}

/// Supplies code lenses for a document
#[async_trait]
pub trait CodeLensProvider: Send + Sync {
    async fn provide_code_lenses(&self, doc: &DocumentRequest) -> Result<Vec<CodeLens>>;
}

/// Supplies the symbol outline of a document
#[async_trait]
pub trait DocumentSymbolProvider: Send + Sync {
    async fn provide_document_symbols(&self, doc: &DocumentRequest)
        -> Result<Vec<SymbolInformation>>;
}

/// Supplies signature help at a call site
#[async_trait]
pub trait SignatureHelpProvider: Send + Sync {
    async fn provide_signature_help(&self, ctx: &DocumentContext) -> Result<Option<SignatureHelp>>;
}

/// Formats a document as the user types a trigger character
#[async_trait]
pub trait OnTypeFormattingProvider: Send + Sync {
    async fn provide_on_type_edits(&self, req: &OnTypeFormattingRequest) -> Result<Vec<TextEdit>>;
}
