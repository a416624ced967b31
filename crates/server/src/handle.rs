//! Process-wide engine handle.
//!
//! Loading the catalog and building the similarity matrix is the only
//! expensive step, so it runs at most once per handle. Concurrent first
//! callers share a single in-flight initialization; afterwards every call
//! returns the same `Arc`. A failed load leaves the handle empty so a
//! later call can retry.
//!
//! Reloading a different catalog means creating a new handle. Holders of
//! the old service keep a valid, unchanged engine.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::info;

use crate::config::ServiceConfig;
use crate::service::RecommendationService;

type Loader = Arc<dyn Fn() -> Result<RecommendationService> + Send + Sync>;

/// Lazily initialized, shared `RecommendationService`
#[derive(Clone)]
pub struct EngineHandle {
    cell: Arc<OnceCell<Arc<RecommendationService>>>,
    loader: Loader,
}

impl EngineHandle {
    /// Handle that loads the catalog file named in `config`
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_loader(move || RecommendationService::load(config.clone()))
    }

    /// Handle with a custom (blocking) loader
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn() -> Result<RecommendationService> + Send + Sync + 'static,
    {
        Self {
            cell: Arc::new(OnceCell::new()),
            loader: Arc::new(loader),
        }
    }

    /// The shared service, loading it on first use.
    ///
    /// The loader runs on the blocking pool so it does not stall the
    /// async runtime.
    pub async fn get(&self) -> Result<Arc<RecommendationService>> {
        let service = self
            .cell
            .get_or_try_init(|| async {
                info!("Initializing recommendation engine");
                let loader = self.loader.clone();
                let service = tokio::task::spawn_blocking(move || loader())
                    .await
                    .context("Engine initialization task panicked")??;
                Ok::<_, anyhow::Error>(Arc::new(service))
            })
            .await?;
        Ok(service.clone())
    }

    /// The service if it has already been initialized
    pub fn get_if_ready(&self) -> Option<Arc<RecommendationService>> {
        self.cell.get().cloned()
    }
}
