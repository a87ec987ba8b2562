//! Application state shared by front ends.

use std::sync::Arc;

use crate::cart::{CartStore, FileStorage, Notifier, StorageCartRepository};
use crate::catalog::{CatalogClient, CatalogError};
use crate::config::StoreConfig;

/// Cart store persisted under the configured data directory.
pub type FileCartStore = CartStore<StorageCartRepository<FileStorage>>;

/// Application state shared across views.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the catalog client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StoreConfig,
    catalog: CatalogClient,
    storage: FileStorage,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let storage = FileStorage::new(&config.data_dir);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                storage,
            }),
        })
    }

    /// Get a reference to the store configuration.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Open a cart store over the configured storage.
    ///
    /// Stores opened this way share the persisted cart.
    #[must_use]
    pub fn cart_store(&self) -> FileCartStore {
        CartStore::new(self.cart_repository())
    }

    /// Open a cart store that reports to `notifier` instead of the log.
    #[must_use]
    pub fn cart_store_with_notifier(&self, notifier: impl Notifier + 'static) -> FileCartStore {
        CartStore::with_notifier(self.cart_repository(), notifier)
    }

    fn cart_repository(&self) -> StorageCartRepository<FileStorage> {
        StorageCartRepository::new(self.inner.storage.clone())
    }
}
