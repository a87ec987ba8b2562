//! Typed cart persistence on top of key-value storage.

use super::Cart;
use super::storage::{KeyValueStorage, StorageError};

/// Storage key holding the JSON-encoded cart array.
pub const CART_STORAGE_KEY: &str = "cart";

/// Loads and saves the whole cart.
pub trait CartRepository {
    /// Read the persisted cart.
    ///
    /// Never fails: a missing, unreadable or undecodable value yields an
    /// empty cart.
    fn load(&self) -> Cart;

    /// Persist the whole cart, replacing the previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or written.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// [`CartRepository`] storing the cart as JSON under [`CART_STORAGE_KEY`].
#[derive(Debug, Clone)]
pub struct StorageCartRepository<S> {
    storage: S,
}

impl<S: KeyValueStorage> StorageCartRepository<S> {
    /// Wrap a storage backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStorage> CartRepository for StorageCartRepository<S> {
    fn load(&self) -> Cart {
        let raw = match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored cart, starting empty");
                return Cart::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored cart is corrupt, starting empty");
            Cart::new()
        })
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(cart)?;
        self.storage.set(CART_STORAGE_KEY, &encoded)
    }
}
