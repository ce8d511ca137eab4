//! Payload types crossing the host boundary
//!
//! These are the minimal serde-friendly shapes the host exchanges with
//! providers. They model only what crosses the boundary; symbol and type
//! semantics stay inside the backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Zero-based position within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    /// Zero-based line number
    pub line: u32,
    /// Zero-based character offset within the line
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A textual edit applicable to a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Range the edit replaces
    pub range: Range,
    /// Replacement text (empty for deletion)
    pub new_text: String,
}

/// A location inside a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Resource URI
    pub uri: String,
    pub range: Range,
}

/// Kind of a completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionItemKind {
    Module,
    Class,
    Function,
    Method,
    Variable,
    Keyword,
    Property,
    Text,
}

/// A single completion suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Label shown in the completion list
    pub label: String,
    /// Item kind (used for icons/sorting by the host)
    pub kind: Option<CompletionItemKind>,
    /// Short detail string (e.g. signature)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Longer documentation, markdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Text inserted on accept; defaults to the label when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}

/// Hover contents for a position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hover {
    /// Markdown blocks, rendered in order
    pub contents: Vec<String>,
    /// Range the hover applies to, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// Kind of a document symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Module,
    Class,
    Function,
    Method,
    Variable,
    Constant,
}

/// A named symbol within a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolInformation {
    pub name: String,
    pub kind: SymbolKind,
    pub location: Location,
    /// Enclosing symbol name, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

/// A command the host can execute on behalf of a lens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    /// Title shown to the user
    pub title: String,
    /// Host command identifier
    pub command: String,
    /// Command arguments, opaque to this layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<serde_json::Value>>,
}

/// An actionable annotation attached to a range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeLens {
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

/// A single parameter of a signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInformation {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One callable signature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureInformation {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub parameters: Vec<ParameterInformation>,
}

/// Signature help for a call site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInformation>,
    pub active_signature: u32,
    pub active_parameter: u32,
}

/// Workspace-wide edit, keyed by resource URI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceEdit {
    pub changes: HashMap<String, Vec<TextEdit>>,
}

/// Document plus cursor position, the common provider request shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Resource URI of the document
    pub uri: String,
    /// Full document source at request time
    pub source: String,
    pub position: Position,
}

/// Whole-document request (symbols, lenses)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub uri: String,
    pub source: String,
}

/// On-type formatting request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnTypeFormattingRequest {
    pub uri: String,
    pub source: String,
    /// Position immediately after the typed character
    pub position: Position,
    /// The character that triggered formatting
    pub trigger_character: char,
}
