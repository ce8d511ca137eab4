//! Read-only configuration surface and the collaborator bundle

use std::sync::Arc;

use crate::registry::LanguageRegistry;

/// Read-only view of the host's pyintel configuration
///
/// No schema enforcement here; values are consumed as-is.
pub trait ConfigurationService: Send + Sync {
    /// Source label shown next to completion items
    fn completion_shortcut(&self) -> String;

    /// Developer-only option strings (feature kill switches)
    fn dev_options(&self) -> Vec<String>;
}

/// Explicit bundle of host collaborators
///
/// Constructor-passed replacement for a service-locator container: every
/// component that needs host services takes this struct (or a clone) and
/// nothing resolves dependencies by type at runtime.
#[derive(Clone)]
pub struct HostServices {
    pub registry: Arc<dyn LanguageRegistry>,
    pub configuration: Arc<dyn ConfigurationService>,
}

impl HostServices {
    pub fn new(
        registry: Arc<dyn LanguageRegistry>,
        configuration: Arc<dyn ConfigurationService>,
    ) -> Self {
        Self {
            registry,
            configuration,
        }
    }
}
