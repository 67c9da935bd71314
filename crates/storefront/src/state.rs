use crate::{
    abstract_trait::cart::DynCartStore,
    cache::cart::CartStore,
    di::{Backends, DependenciesInject},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynAuthBackend, DynMediaUpload, DynProductTable},
    backend::{BackendClient, MediaUploader, SupabaseAuth, SupabaseProductTable},
    config::{Config, HttpClientFactory},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Connecting to backend at {}", config.backend.url);

        let http = HttpClientFactory::build(config.backend.timeout)
            .context("Failed to create backend http client")?;
        let client = BackendClient::new(http.clone(), &config.backend);

        let backends = Backends {
            auth: Arc::new(SupabaseAuth::new(client.clone())) as DynAuthBackend,
            products: Arc::new(SupabaseProductTable::new(client)) as DynProductTable,
            media: Arc::new(MediaUploader::new(http, config.media.clone())) as DynMediaUpload,
            carts: Arc::new(CartStore::with_idle_timeout(config.cart_idle_timeout))
                as DynCartStore,
        };

        let state = Self::with_backends(backends).await;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        Ok(state)
    }

    /// Wires services over the given backends without starting background
    /// collectors.
    pub async fn with_backends(backends: Backends) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(backends, metrics.clone());

        {
            let mut registry = registry.lock().await;
            metrics.lock().await.register(&mut registry);
            system_metrics.register(&mut registry);
        }

        Self {
            di_container,
            registry,
            metrics,
            system_metrics,
        }
    }
}
