//! Locally persisted shopping cart.
//!
//! # Architecture
//!
//! - [`Cart`] is an ordered list of [`CartLineItem`]s, at most one per product
//! - [`CartStore`] is the only writer; every mutation reads the persisted cart,
//!   changes it and writes the whole array back
//! - Persistence goes through [`CartRepository`], which sits on a swappable
//!   [`KeyValueStorage`] backend (in-memory or files)
//! - Totals are derived on every read and never stored
//!
//! # Example
//!
//! ```rust,ignore
//! use product_store::cart::{CartStore, MemoryStorage, StorageCartRepository};
//!
//! let repository = StorageCartRepository::new(MemoryStorage::new());
//! let mut store = CartStore::new(repository);
//!
//! store.add_item(&product, Quantity::ONE)?;
//! let totals = store.load().totals();
//! ```

mod repository;
mod storage;
mod store;
pub mod view;

pub use repository::{CART_STORAGE_KEY, CartRepository, StorageCartRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{ADDED_TO_CART_MESSAGE, CartStore, Notifier, TracingNotifier};
pub use view::{CartItemView, CartView};

use product_store_core::{Price, ProductId, Quantity};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A product snapshot paired with a purchase quantity.
///
/// Serialized with the product fields flattened next to `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product as it was when added.
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, always at least one.
    pub quantity: Quantity,
}

impl CartLineItem {
    /// Create a line item.
    #[must_use]
    pub const fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }

    /// The product ID, which identifies the line.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart aggregates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of quantities across lines.
    pub item_count: u64,
    /// Sum of line totals.
    pub total_price: Price,
}

/// Ordered cart contents.
///
/// Persisted as a JSON array of line items. Decoding merges lines that share
/// a product ID, so a hand-edited or legacy array still yields one line per
/// product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLineItem>", into = "Vec<CartLineItem>")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up a line by product ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Item count and total price, computed from the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self
                .items
                .iter()
                .map(|item| u64::from(item.quantity.get()))
                .sum(),
            total_price: self.items.iter().map(CartLineItem::line_total).sum(),
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// Increments an existing line or appends a new one. Returns `false`
    /// without changing anything if the new quantity would overflow.
    pub(crate) fn add(&mut self, product: &Product, quantity: Quantity) -> bool {
        if let Some(item) = self.get_mut(product.id) {
            return match item.quantity.checked_add(quantity) {
                Some(total) => {
                    item.quantity = total;
                    true
                }
                None => false,
            };
        }

        self.items.push(CartLineItem::new(product.clone(), quantity));
        true
    }

    /// Replace a line's quantity. Returns `false` if the product is absent.
    pub(crate) fn set_quantity(&mut self, id: ProductId, quantity: Quantity) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` if the product is absent.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    fn get_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}

impl From<Vec<CartLineItem>> for Cart {
    fn from(items: Vec<CartLineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if !cart.add(&item.product, item.quantity) {
                tracing::warn!(product_id = %item.id(), "Dropping overflowing duplicate cart line");
            }
        }
        cart
    }
}

impl From<Cart> for Vec<CartLineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
