//! Server state shared across all connections

use crate::config::{Config, LoadPolicy};
use crate::router::Router;
use chrono::{DateTime, Utc};
use pokedex_db::{Store, StoreStats};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Failure to produce a store for a request
#[derive(Debug)]
pub enum LoadError {
    /// The dataset document could not be read or parsed
    Dataset(pokedex_loader::Error),
    /// The blocking load task did not complete
    Task(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Dataset(e) => write!(f, "Dataset error: {}", e),
            LoadError::Task(e) => write!(f, "Load task failed: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<pokedex_loader::Error> for LoadError {
    fn from(e: pokedex_loader::Error) -> Self {
        LoadError::Dataset(e)
    }
}

/// Read a dataset document off the async runtime and build a store from it
pub async fn load_store(path: PathBuf) -> Result<Store, LoadError> {
    let dataset = tokio::task::spawn_blocking(move || pokedex_loader::load_dataset(&path))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))??;
    Ok(Store::new(dataset))
}

/// Server state shared across all connections
pub struct AppState {
    config: Config,
    router: Router,
    /// Shared store under [`LoadPolicy::Startup`]. Replaced whole on reload.
    store: RwLock<Option<Arc<Store>>>,
}

impl AppState {
    /// Create state without loading anything
    pub fn new(config: Config) -> Self {
        let router = Router::new(config.enable_reload);
        Self {
            config,
            router,
            store: RwLock::new(None),
        }
    }

    /// Create state holding an already loaded store
    pub fn with_store(config: Config, store: Store) -> Self {
        let state = Self::new(config);
        Self {
            store: RwLock::new(Some(Arc::new(store))),
            ..state
        }
    }

    /// Create state for `config`, loading the dataset now when the policy asks for it
    pub async fn initialize(config: Config) -> Result<Self, LoadError> {
        match config.load_policy {
            LoadPolicy::Startup => {
                let store = load_store(PathBuf::from(&config.data_path)).await?;
                tracing::info!(stats = ?store.stats(), path = %config.data_path, "Dataset loaded");
                Ok(Self::with_store(config, store))
            }
            LoadPolicy::PerRequest => Ok(Self::new(config)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Store to answer one request with.
    ///
    /// Under [`LoadPolicy::PerRequest`] the dataset is read anew each call.
    /// Under [`LoadPolicy::Startup`] the shared store is returned, loading it
    /// first if it is missing.
    pub async fn store(&self) -> Result<Arc<Store>, LoadError> {
        match self.config.load_policy {
            LoadPolicy::PerRequest => Ok(Arc::new(self.load().await?)),
            LoadPolicy::Startup => {
                if let Some(store) = self.store.read().await.as_ref() {
                    return Ok(store.clone());
                }
                self.reload().await
            }
        }
    }

    /// Load the dataset again and swap it in as the shared store.
    ///
    /// On failure the previous store stays in place.
    pub async fn reload(&self) -> Result<Arc<Store>, LoadError> {
        let store = Arc::new(self.load().await?);
        *self.store.write().await = Some(store.clone());
        tracing::info!(stats = ?store.stats(), "Dataset reloaded");
        Ok(store)
    }

    /// Stats of the shared store, if one is loaded
    pub async fn snapshot(&self) -> Option<(StoreStats, DateTime<Utc>)> {
        self.store
            .read()
            .await
            .as_ref()
            .map(|store| (store.stats(), store.loaded_at()))
    }

    async fn load(&self) -> Result<Store, LoadError> {
        load_store(PathBuf::from(&self.config.data_path)).await
    }
}
