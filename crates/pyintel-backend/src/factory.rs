//! Backend factory: one proxy per workspace root

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};
use crate::proxy::BackendProxy;

/// Creates and caches engine proxies, one per workspace root
///
/// Constructed once per activation with the extension's base path; disposed
/// once at deactivation, which shuts every engine down.
pub struct BackendFactory {
    /// Root used when a request carries no resource
    base_path: PathBuf,
    config: BackendConfig,
    proxies: Mutex<HashMap<PathBuf, Arc<BackendProxy>>>,
    disposed: AtomicBool,
}

impl BackendFactory {
    pub fn new(base_path: impl Into<PathBuf>, config: BackendConfig) -> Self {
        Self {
            base_path: base_path.into(),
            config,
            proxies: Mutex::new(HashMap::new()),
            disposed: AtomicBool::new(false),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the proxy for a resource's root, creating it on first use
    ///
    /// Resources without a root share the base-path proxy.
    pub async fn proxy_for(&self, resource: Option<&Path>) -> Result<Arc<BackendProxy>> {
        if self.disposed.load(Ordering::SeqCst) {
            return Err(BackendError::Disposed);
        }
        let root = resource.unwrap_or(&self.base_path).to_path_buf();
        let mut proxies = self.proxies.lock().await;
        if let Some(existing) = proxies.get(&root) {
            return Ok(existing.clone());
        }
        debug!(root = %root.display(), "Creating engine proxy");
        let proxy = Arc::new(BackendProxy::new(self.config.clone(), root.clone()));
        proxies.insert(root, proxy.clone());
        Ok(proxy)
    }

    /// Number of live proxies
    pub async fn proxy_count(&self) -> usize {
        self.proxies.lock().await.len()
    }

    /// Shut every engine down; the factory refuses further work afterwards
    pub async fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let proxies: Vec<_> = self.proxies.lock().await.drain().collect();
        for (root, proxy) in proxies {
            if let Err(e) = proxy.shutdown().await {
                warn!(root = %root.display(), error = %e, "Engine shutdown failed");
            }
        }
        info!("Backend factory disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_factory_caches_one_proxy_per_root() {
        let factory = BackendFactory::new("/base", BackendConfig::default());
        let a = factory.proxy_for(Some(Path::new("/work/a"))).await.unwrap();
        let b = factory.proxy_for(Some(Path::new("/work/a"))).await.unwrap();
        let c = factory.proxy_for(Some(Path::new("/work/c"))).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(factory.proxy_count().await, 2);
    }

    #[tokio::test]
    async fn test_missing_resource_uses_base_path() {
        let factory = BackendFactory::new("/base", BackendConfig::default());
        let implicit = factory.proxy_for(None).await.unwrap();
        let explicit = factory.proxy_for(Some(Path::new("/base"))).await.unwrap();
        assert!(Arc::ptr_eq(&implicit, &explicit));
    }

    #[tokio::test]
    async fn test_disposed_factory_refuses_new_proxies() {
        let factory = BackendFactory::new("/base", BackendConfig::default());
        factory.proxy_for(None).await.unwrap();
        factory.dispose().await;
        assert_eq!(factory.proxy_count().await, 0);
        assert!(matches!(
            factory.proxy_for(None).await,
            Err(BackendError::Disposed)
        ));
        // Second dispose is a no-op
        factory.dispose().await;
    }
}
