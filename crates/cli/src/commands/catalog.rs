//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! store products --search shoe --category Shoes --sort price-asc
//! store categories
//! store product 3 --size L --add-to-cart
//! ```

use product_store::AppState;
use product_store::cart::CartView;
use product_store::catalog::SortOption;
use product_store::views::{CatalogViewModel, ProductDetailViewModel, Size};
use product_store_core::ProductId;

use crate::notices::Notices;
use crate::render;

/// List the catalog with the given filters applied.
pub async fn products(
    state: &AppState,
    search: String,
    category: Option<String>,
    sort: SortOption,
) -> String {
    let mut model = CatalogViewModel::new();
    model.load(state.catalog()).await;

    model.set_search(search);
    if let Some(category) = category {
        model.set_category(category);
    }
    model.set_sort(sort);

    render::catalog(&model)
}

/// List the category names present in the catalog.
pub async fn categories(state: &AppState) -> String {
    let mut model = CatalogViewModel::new();
    model.load(state.catalog()).await;

    if model.state().loaded().is_none() {
        return render::catalog(&model);
    }
    render::categories(&model.categories())
}

/// Show one product, optionally adding it to the cart.
pub async fn product(
    state: &AppState,
    id: ProductId,
    size: Size,
    add_to_cart: bool,
) -> product_store::Result<String> {
    let mut model = ProductDetailViewModel::new(id);
    model.load(state.catalog()).await;
    model.select_size(size);

    let mut output = render::detail(&model);
    if add_to_cart {
        let notices = Notices::default();
        let mut store = state.cart_store_with_notifier(notices.clone());
        if let Some(cart) = model.add_to_cart(&mut store)? {
            let cart = notices.prepend_to(render::cart(&CartView::from(&cart)));
            output = format!("{output}\n\n{cart}");
        }
    }
    Ok(output)
}
