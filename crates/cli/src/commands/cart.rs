//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! store cart show
//! store cart add 3 --quantity 2
//! store cart set 3 5
//! store cart inc 3
//! store cart dec 3
//! store cart remove 3
//! ```
//!
//! Every command loads the cart from the data directory and prints it after
//! the change.

use product_store::cart::{Cart, CartView};
use product_store::catalog::Product;
use product_store::{AppError, AppState};
use product_store_core::{ProductId, Quantity};

use crate::notices::Notices;
use crate::render;

fn render_cart(cart: &Cart) -> String {
    render::cart(&CartView::from(cart))
}

/// Show the persisted cart.
pub fn show(state: &AppState) -> String {
    render_cart(&state.cart_store().load())
}

/// Fetch a product from the catalog and add it to the cart.
pub async fn add(state: &AppState, id: ProductId, quantity: u32) -> product_store::Result<String> {
    let quantity = Quantity::new(quantity)
        .ok_or_else(|| AppError::BadRequest("quantity must be at least 1".to_string()))?;
    let product = state.catalog().get_product(id).await?;
    add_product(state, &product, quantity)
}

/// Add an already fetched product. The cart store's notifications are
/// printed above the cart; a rejected add prints the cart alone.
pub fn add_product(
    state: &AppState,
    product: &Product,
    quantity: Quantity,
) -> product_store::Result<String> {
    let notices = Notices::default();
    let cart = state
        .cart_store_with_notifier(notices.clone())
        .add_item(product, quantity)?;
    Ok(notices.prepend_to(render_cart(&cart)))
}

/// Set a line's quantity. Zero and unknown products leave the cart as is.
pub fn set(state: &AppState, id: ProductId, quantity: u32) -> product_store::Result<String> {
    let cart = state.cart_store().set_quantity(id, quantity)?;
    Ok(render_cart(&cart))
}

/// Add one unit to a line.
pub fn increment(state: &AppState, id: ProductId) -> product_store::Result<String> {
    let cart = state.cart_store().increment(id)?;
    Ok(render_cart(&cart))
}

/// Remove one unit from a line, never going below one.
pub fn decrement(state: &AppState, id: ProductId) -> product_store::Result<String> {
    let cart = state.cart_store().decrement(id)?;
    Ok(render_cart(&cart))
}

/// Remove a line.
pub fn remove(state: &AppState, id: ProductId) -> product_store::Result<String> {
    let cart = state.cart_store().remove_item(id)?;
    Ok(render_cart(&cart))
}
