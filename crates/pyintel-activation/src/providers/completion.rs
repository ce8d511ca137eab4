//! Completion provider

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use pyintel_backend::BackendFactory;
use pyintel_host::{CompletionItem, CompletionProvider, DocumentContext, Result};

use super::position_request;

/// Completions from the intelligence engine
pub struct IntelCompletionProvider {
    factory: Arc<BackendFactory>,
}

impl IntelCompletionProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl CompletionProvider for IntelCompletionProvider {
    async fn provide_completion_items(&self, ctx: &DocumentContext) -> Result<Vec<CompletionItem>> {
        let result = position_request(&self.factory, "completions", ctx, None).await?;
        let items = items_from_result(result);
        debug!(uri = %ctx.uri, count = items.len(), "Completion items received");
        Ok(items)
    }
}

/// Shape the engine result into completion items; malformed entries drop out
fn items_from_result(result: Value) -> Vec<CompletionItem> {
    result
        .get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
