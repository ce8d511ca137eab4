//! Rename provider

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use pyintel_backend::BackendFactory;
use pyintel_host::{DocumentContext, RenameProvider, Result, WorkspaceEdit};

use super::position_request;

/// Workspace-wide rename edits from the intelligence engine
pub struct IntelRenameProvider {
    factory: Arc<BackendFactory>,
}

impl IntelRenameProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl RenameProvider for IntelRenameProvider {
    async fn provide_rename_edits(
        &self,
        ctx: &DocumentContext,
        new_name: &str,
    ) -> Result<Option<WorkspaceEdit>> {
        let result = position_request(
            &self.factory,
            "rename",
            ctx,
            Some(("new_name", json!(new_name))),
        )
        .await?;
        // Null result means the symbol cannot be renamed
        Ok(serde_json::from_value(result).unwrap_or(None))
    }
}
