//! Hover provider

use std::sync::Arc;

use async_trait::async_trait;

use pyintel_backend::BackendFactory;
use pyintel_host::{DocumentContext, Hover, HoverProvider, Result};

use super::position_request;

/// Hover tooltips from the intelligence engine
pub struct IntelHoverProvider {
    factory: Arc<BackendFactory>,
}

impl IntelHoverProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl HoverProvider for IntelHoverProvider {
    async fn provide_hover(&self, ctx: &DocumentContext) -> Result<Option<Hover>> {
        let result = position_request(&self.factory, "tooltip", ctx, None).await?;
        // Null result means nothing to show at this position
        Ok(serde_json::from_value(result).unwrap_or(None))
    }
}
