//! Signature help provider

use std::sync::Arc;

use async_trait::async_trait;

use pyintel_backend::BackendFactory;
use pyintel_host::{DocumentContext, Result, SignatureHelp, SignatureHelpProvider};

use super::position_request;

/// Call-site signature help from the intelligence engine
pub struct IntelSignatureHelpProvider {
    factory: Arc<BackendFactory>,
}

impl IntelSignatureHelpProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl SignatureHelpProvider for IntelSignatureHelpProvider {
    async fn provide_signature_help(&self, ctx: &DocumentContext) -> Result<Option<SignatureHelp>> {
        let result = position_request(&self.factory, "signature", ctx, None).await?;
        Ok(serde_json::from_value(result).unwrap_or(None))
    }
}
