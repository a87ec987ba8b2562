//! Cart display data.
//!
//! Flattened, pre-formatted view of a [`Cart`] for renderers. Rebuilt from
//! the cart on every render; nothing here is stored.

use product_store_core::ProductId;

use super::{Cart, CartLineItem};
use crate::filters::sanitize_image_url;
use crate::routes::Route;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: Option<String>,
    /// Path of the product's detail view.
    pub detail_path: String,
    /// Whether the "-" control is enabled (quantity above one).
    pub can_decrement: bool,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
    /// Checkout is offered only for a non-empty cart. The action itself is inert.
    pub checkout_enabled: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self::from(&Cart::new())
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: totals.total_price.to_string(),
            item_count: totals.item_count,
            checkout_enabled: !cart.is_empty(),
        }
    }
}

impl From<&CartLineItem> for CartItemView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id(),
            title: line.product.title.clone(),
            quantity: line.quantity.get(),
            price: line.product.price.to_string(),
            line_price: line.line_total().to_string(),
            image: line
                .product
                .primary_image()
                .map(|url| sanitize_image_url(url).to_string()),
            detail_path: Route::ProductDetail(line.id()).path(),
            can_decrement: line.quantity.get() > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use product_store_core::Quantity;

    use super::*;
    use crate::cart::tests::{product, qty};

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
        assert!(!view.checkout_enabled);
    }

    #[test]
    fn test_view_lines_and_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, 12), qty(3));
        let mut wrapped = product(2, 5);
        wrapped.images = vec!["[\"https://img.example.com/2.jpeg\"]".to_string()];
        cart.add(&wrapped, Quantity::ONE);

        let view = CartView::from(&cart);
        assert!(view.checkout_enabled);
        assert_eq!(view.item_count, 4);
        assert_eq!(view.subtotal, "$41.00");

        let first = &view.items[0];
        assert_eq!(first.price, "$12.00");
        assert_eq!(first.line_price, "$36.00");
        assert_eq!(first.detail_path, "/product/1");
        assert!(first.can_decrement);

        let second = &view.items[1];
        assert_eq!(second.image.as_deref(), Some("https://img.example.com/2.jpeg"));
        assert!(!second.can_decrement);
    }
}
