//! Route path rendering.

use product_store::AppState;
use product_store::catalog::SortOption;
use product_store::routes::Route;
use product_store::views::Size;

use super::{cart, catalog};

/// Render the view a route path points to.
pub async fn open(state: &AppState, path: &str) -> product_store::Result<String> {
    let route: Route = path.parse()?;
    tracing::debug!(%route, "Opening route");

    match route {
        Route::Catalog => Ok(catalog::products(state, String::new(), None, SortOption::None).await),
        Route::ProductDetail(id) => catalog::product(state, id, Size::default(), false).await,
        Route::Cart => Ok(cart::show(state)),
    }
}
