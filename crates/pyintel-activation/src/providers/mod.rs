//! Capability providers backed by the intelligence engine
//!
//! Each provider is a thin adapter: build the engine request from the host
//! payload, issue it through the backend factory, shape the JSON result back
//! into host types. No ranking, caching, or resolution logic lives here.

pub mod code_lens;
pub mod completion;
pub mod hover;
pub mod navigation;
pub mod rename;
pub mod signature;
pub mod symbols;

pub use code_lens::ShebangCodeLensProvider;
pub use completion::IntelCompletionProvider;
pub use hover::IntelHoverProvider;
pub use navigation::{IntelDefinitionProvider, IntelReferenceProvider};
pub use rename::IntelRenameProvider;
pub use signature::IntelSignatureHelpProvider;
pub use symbols::IntelDocumentSymbolProvider;

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use pyintel_backend::BackendFactory;
use pyintel_host::{DocumentContext, HostError, Result};

/// Derive the engine root for a document URI
///
/// File URIs map to the containing directory; anything else (untitled
/// buffers, remote schemes) falls back to the factory's base path.
pub(crate) fn resource_root(uri: &str) -> Option<PathBuf> {
    let path = uri.strip_prefix("file://")?;
    let parent = Path::new(path).parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    Some(parent.to_path_buf())
}

/// Issue one engine request for a document/position payload
pub(crate) async fn position_request(
    factory: &BackendFactory,
    method: &str,
    ctx: &DocumentContext,
    extra: Option<(&str, Value)>,
) -> Result<Value> {
    let mut params = json!({
        "uri": ctx.uri,
        "source": ctx.source,
        "line": ctx.position.line,
        "column": ctx.position.character,
    });
    if let Some((key, value)) = extra {
        params[key] = value;
    }
    let root = resource_root(&ctx.uri);
    let proxy = factory
        .proxy_for(root.as_deref())
        .await
        .map_err(HostError::backend)?;
    proxy
        .request(method, Some(params))
        .await
        .map_err(HostError::backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_root_of_file_uri() {
        assert_eq!(
            resource_root("file:///work/app/main.py"),
            Some(PathBuf::from("/work/app"))
        );
    }

    #[test]
    fn test_resource_root_of_non_file_uri_is_none() {
        assert_eq!(resource_root("untitled:Untitled-1"), None);
    }
}
