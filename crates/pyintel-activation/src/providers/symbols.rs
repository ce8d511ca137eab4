//! Document symbol provider

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use pyintel_backend::BackendFactory;
use pyintel_host::{
    DocumentRequest, DocumentSymbolProvider, HostError, Result, SymbolInformation,
};

use super::resource_root;

/// Document outline from the intelligence engine
pub struct IntelDocumentSymbolProvider {
    factory: Arc<BackendFactory>,
}

impl IntelDocumentSymbolProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl DocumentSymbolProvider for IntelDocumentSymbolProvider {
    async fn provide_document_symbols(
        &self,
        doc: &DocumentRequest,
    ) -> Result<Vec<SymbolInformation>> {
        let root = resource_root(&doc.uri);
        let proxy = self
            .factory
            .proxy_for(root.as_deref())
            .await
            .map_err(HostError::backend)?;
        let result = proxy
            .request(
                "names",
                Some(json!({ "uri": doc.uri, "source": doc.source })),
            )
            .await
            .map_err(HostError::backend)?;
        Ok(symbols_from_result(result))
    }
}

fn symbols_from_result(result: Value) -> Vec<SymbolInformation> {
    result
        .get("symbols")
        .and_then(Value::as_array)
        .map(|symbols| {
            symbols
                .iter()
                .filter_map(|symbol| serde_json::from_value(symbol.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
