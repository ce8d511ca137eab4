//! Activation lifecycle for language intelligence

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use pyintel_backend::{BackendConfig, BackendFactory};
use pyintel_host::{python_selector, Disposable, HostServices};

use crate::error::{ActivationError, Result};
use crate::formatting::{BlockFormatter, OnEnterFormatter, OnTypeFormattingDispatcher};
use crate::providers::{
    IntelCompletionProvider, IntelDefinitionProvider, IntelDocumentSymbolProvider,
    IntelHoverProvider, IntelReferenceProvider, IntelRenameProvider, IntelSignatureHelpProvider,
    ShebangCodeLensProvider,
};

/// Dev option disabling signature help registration
pub const DISABLE_SIGNATURE_OPTION: &str = "DISABLE_SIGNATURE";

/// Characters that trigger automatic completion requests
const COMPLETION_TRIGGERS: &[char] = &['.'];
/// Characters that trigger signature help
const SIGNATURE_TRIGGERS: &[char] = &['(', ','];

/// One-shot activator for the language-intelligence capabilities
///
/// `activate` creates the backend factory and registers every capability
/// provider; `dispose` withdraws the registrations and tears the backend
/// down. A second `activate` on the same instance fails with
/// [`ActivationError::AlreadyStarted`], even after `dispose`.
pub struct IntelligenceActivator {
    services: HostServices,
    base_path: PathBuf,
    backend_config: BackendConfig,
    factory: Option<Arc<BackendFactory>>,
    /// Registration handles, released in reverse order at teardown
    subscriptions: Vec<Box<dyn Disposable>>,
}

impl IntelligenceActivator {
    pub fn new(
        services: HostServices,
        base_path: impl Into<PathBuf>,
        backend_config: BackendConfig,
    ) -> Self {
        Self {
            services,
            base_path: base_path.into(),
            backend_config,
            factory: None,
            subscriptions: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.factory.is_some()
    }

    /// Activate language intelligence
    ///
    /// Registration calls are fire-and-forget side effects; any failure
    /// after the double-activation check propagates to the caller with no
    /// local recovery.
    pub async fn activate(&mut self, resource: Option<&Path>) -> Result<()> {
        if self.factory.is_some() {
            return Err(ActivationError::AlreadyStarted);
        }
        debug!(resource = ?resource, "Activating language intelligence");

        let factory = Arc::new(BackendFactory::new(
            &self.base_path,
            self.backend_config.clone(),
        ));
        self.factory = Some(factory.clone());

        let registry = self.services.registry.clone();
        let selector = python_selector();

        self.subscriptions.push(registry.register_definition_provider(
            selector.clone(),
            Arc::new(IntelDefinitionProvider::new(factory.clone())),
        ));
        self.subscriptions.push(registry.register_rename_provider(
            selector.clone(),
            Arc::new(IntelRenameProvider::new(factory.clone())),
        ));
        self.subscriptions.push(registry.register_hover_provider(
            selector.clone(),
            Arc::new(IntelHoverProvider::new(factory.clone())),
        ));
        self.subscriptions.push(registry.register_reference_provider(
            selector.clone(),
            Arc::new(IntelReferenceProvider::new(factory.clone())),
        ));

        let shortcut = self.services.configuration.completion_shortcut();
        self.subscriptions.push(registry.register_completion_provider(
            selector.clone(),
            &shortcut,
            COMPLETION_TRIGGERS,
            Arc::new(IntelCompletionProvider::new(factory.clone())),
        ));

        self.subscriptions.push(registry.register_code_lens_provider(
            selector.clone(),
            Arc::new(ShebangCodeLensProvider::new()),
        ));
        self.subscriptions
            .push(registry.register_document_symbol_provider(
                selector.clone(),
                Arc::new(IntelDocumentSymbolProvider::new(factory.clone())),
            ));

        let dispatcher = OnTypeFormattingDispatcher::new()
            .route('\n', Arc::new(OnEnterFormatter))
            .route(':', Arc::new(BlockFormatter));
        if !dispatcher.is_empty() {
            let triggers = dispatcher.trigger_characters();
            self.subscriptions
                .push(registry.register_on_type_formatting_provider(
                    selector.clone(),
                    &triggers,
                    Arc::new(dispatcher),
                ));
        }

        let dev_options = self.services.configuration.dev_options();
        if !dev_options.iter().any(|o| o == DISABLE_SIGNATURE_OPTION) {
            self.subscriptions
                .push(registry.register_signature_help_provider(
                    selector,
                    SIGNATURE_TRIGGERS,
                    Arc::new(IntelSignatureHelpProvider::new(factory)),
                ));
        } else {
            debug!("Signature help disabled by dev option");
        }

        info!(
            registrations = self.subscriptions.len(),
            "Language intelligence activated"
        );
        Ok(())
    }

    /// Withdraw every registration and tear the backend down
    ///
    /// The factory stays set so the one-shot guard keeps holding.
    pub async fn dispose(&mut self) {
        for mut subscription in self.subscriptions.drain(..).rev() {
            subscription.dispose();
        }
        if let Some(factory) = &self.factory {
            factory.dispose().await;
        }
        info!("Language intelligence disposed");
    }
}
