//! Plain-text rendering of the store's views.

use product_store::cart::CartView;
use product_store::catalog::SortOption;
use product_store::views::{CatalogViewModel, LoadState, ProductDetailViewModel, Size};

/// Render the product list.
pub fn catalog(model: &CatalogViewModel) -> String {
    match model.state() {
        LoadState::Loading => "Loading products...".to_string(),
        LoadState::Unavailable => "Products are unavailable right now.".to_string(),
        LoadState::Loaded(_) => {
            let cards = model.cards();
            if cards.is_empty() {
                return "No products found.".to_string();
            }

            let sort = model.criteria().sort;
            let header = (sort != SortOption::None).then(|| format!("Sorted by {}", sort.label()));

            header
                .into_iter()
                .chain(cards.iter().map(|card| {
                    format!(
                        "#{}  {}  {}  [{}]\n    {}\n    {}",
                        card.id,
                        card.title,
                        card.price,
                        card.category,
                        card.description,
                        card.detail_path
                    )
                }))
                .collect::<Vec<_>>()
                .join("\n")
        }
    }
}

/// Render a category list, one name per line.
pub fn categories(names: &[&str]) -> String {
    if names.is_empty() {
        return "No categories found.".to_string();
    }
    names.join("\n")
}

/// Render the product detail view.
pub fn detail(model: &ProductDetailViewModel) -> String {
    let Some(product) = model.product() else {
        return match model.state() {
            LoadState::Loading => "Loading product...".to_string(),
            _ => format!("Product {} is unavailable.", model.id()),
        };
    };

    let sizes = Size::ALL
        .iter()
        .map(|size| {
            if *size == model.selected_size() {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![
        format!("{} ({})", product.title, product.category.name),
        product.price.to_string(),
        String::new(),
        product.description.clone(),
        String::new(),
        format!("Sizes: {sizes}"),
    ];
    if let Some(image) = model.selected_image() {
        lines.push(format!("Image: {image}"));
    }
    lines.join("\n")
}

/// Render the cart.
pub fn cart(view: &CartView) -> String {
    if view.items.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut lines: Vec<String> = view
        .items
        .iter()
        .map(|item| {
            format!(
                "#{}  {}  {} x {} = {}",
                item.id, item.title, item.quantity, item.price, item.line_price
            )
        })
        .collect();
    lines.push(format!(
        "Items: {}  Subtotal: {}",
        view.item_count, view.subtotal
    ));
    if view.checkout_enabled {
        lines.push("Checkout available".to_string());
    }
    lines.join("\n")
}
