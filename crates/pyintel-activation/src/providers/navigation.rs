//! Definition and reference providers

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use pyintel_backend::BackendFactory;
use pyintel_host::{
    DefinitionProvider, DocumentContext, Location, ReferenceProvider, Result,
};

use super::position_request;

/// Shape an engine result carrying a `locations` array
fn locations_from_result(result: Value) -> Vec<Location> {
    result
        .get("locations")
        .and_then(Value::as_array)
        .map(|locations| {
            locations
                .iter()
                .filter_map(|location| serde_json::from_value(location.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Go-to-definition targets from the intelligence engine
pub struct IntelDefinitionProvider {
    factory: Arc<BackendFactory>,
}

impl IntelDefinitionProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl DefinitionProvider for IntelDefinitionProvider {
    async fn provide_definition(&self, ctx: &DocumentContext) -> Result<Vec<Location>> {
        let result = position_request(&self.factory, "definitions", ctx, None).await?;
        Ok(locations_from_result(result))
    }
}

/// Symbol references from the intelligence engine
pub struct IntelReferenceProvider {
    factory: Arc<BackendFactory>,
}

impl IntelReferenceProvider {
    pub fn new(factory: Arc<BackendFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl ReferenceProvider for IntelReferenceProvider {
    async fn provide_references(&self, ctx: &DocumentContext) -> Result<Vec<Location>> {
        let result = position_request(&self.factory, "usages", ctx, None).await?;
        Ok(locations_from_result(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locations_from_result() {
        let locations = locations_from_result(json!({
            "locations": [{
                "uri": "file:///work/app/util.py",
                "range": {
                    "start": {"line": 3, "character": 4},
                    "end": {"line": 3, "character": 12}
                }
            }]
        }));
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].uri, "file:///work/app/util.py");
        assert_eq!(locations[0].range.start.line, 3);
    }

    #[test]
    fn test_locations_from_empty_result() {
        assert!(locations_from_result(json!(null)).is_empty());
    }
}
