//! The cart store: sole writer of the persisted cart.

use product_store_core::{ProductId, Quantity};
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::repository::CartRepository;
use super::storage::StorageError;
use super::{Cart, CartTotals};
use crate::catalog::Product;

/// Message shown after a successful add.
pub const ADDED_TO_CART_MESSAGE: &str = "Product added to cart!";

/// Receives user-facing notifications from the store.
pub trait Notifier: Send + Sync {
    /// Tell the user something happened.
    fn notify(&self, message: &str);
}

/// [`Notifier`] that emits an `info!` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(message, "Cart notification");
    }
}

/// Authoritative cart state.
///
/// Holds no copy of the cart: every mutation loads from the repository,
/// applies the change and saves the whole cart in one call, so stores sharing
/// a backend see each other's writes (last writer wins).
///
/// Rejected mutations (zero quantity, unknown product, overflow, invalid
/// product) return the unchanged cart without writing.
pub struct CartStore<R> {
    repository: R,
    notifier: Box<dyn Notifier>,
    totals: watch::Sender<CartTotals>,
}

impl<R: CartRepository> CartStore<R> {
    /// Create a store that notifies through [`TracingNotifier`].
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_notifier(repository, TracingNotifier)
    }

    /// Create a store with a custom notifier.
    #[must_use]
    pub fn with_notifier(repository: R, notifier: impl Notifier + 'static) -> Self {
        let initial = repository.load().totals();
        let (totals, _) = watch::channel(initial);
        Self {
            repository,
            notifier: Box::new(notifier),
            totals,
        }
    }

    /// Subscribe to item count / total price updates (e.g. the header badge).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.totals.subscribe()
    }

    /// Read the persisted cart. Missing or corrupt data yields an empty cart.
    pub fn load(&self) -> Cart {
        let cart = self.repository.load();
        self.publish(&cart);
        cart
    }

    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// Notifies the user on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self, product), fields(product_id = %product.id, quantity = %quantity))]
    pub fn add_item(&mut self, product: &Product, quantity: Quantity) -> Result<Cart, StorageError> {
        if let Err(e) = product.validate() {
            tracing::warn!(error = %e, "Refusing to add invalid product");
            return Ok(self.load());
        }

        let mut cart = self.repository.load();
        if !cart.add(product, quantity) {
            tracing::warn!("Quantity overflow, add rejected");
            self.publish(&cart);
            return Ok(cart);
        }

        self.persist(&cart)?;
        self.notifier.notify(ADDED_TO_CART_MESSAGE);
        Ok(cart)
    }

    /// Replace a line's quantity.
    ///
    /// A quantity below one or an unknown product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<Cart, StorageError> {
        let mut cart = self.repository.load();

        let Some(quantity) = Quantity::new(quantity) else {
            debug!("Quantity below one rejected");
            self.publish(&cart);
            return Ok(cart);
        };

        if !cart.set_quantity(id, quantity) {
            debug!("Product not in cart");
            self.publish(&cart);
            return Ok(cart);
        }

        self.persist(&cart)?;
        Ok(cart)
    }

    /// Increase a line's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    pub fn increment(&mut self, id: ProductId) -> Result<Cart, StorageError> {
        let current = self.repository.load().get(id).map(|item| item.quantity);
        match current.and_then(Quantity::incremented) {
            Some(next) => self.set_quantity(id, next.get()),
            None => Ok(self.load()),
        }
    }

    /// Decrease a line's quantity by one. Rejected at quantity one.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    pub fn decrement(&mut self, id: ProductId) -> Result<Cart, StorageError> {
        let current = self.repository.load().get(id).map(|item| item.quantity);
        match current.and_then(Quantity::decremented) {
            Some(next) => self.set_quantity(id, next.get()),
            None => Ok(self.load()),
        }
    }

    /// Remove a product's line, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    #[instrument(skip(self), fields(product_id = %id))]
    pub fn remove_item(&mut self, id: ProductId) -> Result<Cart, StorageError> {
        let mut cart = self.repository.load();
        if !cart.remove(id) {
            debug!("Product not in cart");
            self.publish(&cart);
            return Ok(cart);
        }

        self.persist(&cart)?;
        Ok(cart)
    }

    /// Aggregates for `cart`. Pure.
    #[must_use]
    pub fn totals(cart: &Cart) -> CartTotals {
        cart.totals()
    }

    fn persist(&self, cart: &Cart) -> Result<(), StorageError> {
        self.repository.save(cart)?;
        self.publish(cart);
        debug!(lines = cart.len(), "Cart saved");
        Ok(())
    }

    fn publish(&self, cart: &Cart) {
        self.totals.send_if_modified(|current| {
            let next = cart.totals();
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}
