//! Catalog view model.

use product_store_core::ProductId;
use tracing::instrument;

use super::LoadState;
use crate::catalog::{self, CatalogSource, FilterCriteria, Product, SortOption};
use crate::filters::{description_preview, sanitize_image_url};
use crate::routes::{Navigator, Route};

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    pub detail_path: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price.to_string(),
            description: description_preview(&product.description),
            category: product.category.name.clone(),
            image: product
                .primary_image()
                .map(|url| sanitize_image_url(url).to_string()),
            detail_path: Route::ProductDetail(product.id).path(),
        }
    }
}

/// State of the product list view.
///
/// The catalog is fetched once; the visible list is derived from it and the
/// current [`FilterCriteria`] on every read.
#[derive(Debug, Clone, Default)]
pub struct CatalogViewModel {
    state: LoadState<Vec<Product>>,
    criteria: FilterCriteria,
}

impl CatalogViewModel {
    /// A model waiting for its first fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog unless it is already loaded.
    ///
    /// A failed fetch is logged and leaves the view [`LoadState::Unavailable`].
    #[instrument(skip_all)]
    pub async fn load<C: CatalogSource>(&mut self, source: &C) {
        if self.state.loaded().is_some() {
            return;
        }

        self.state = match source.products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Catalog loaded");
                LoadState::Loaded(products)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                LoadState::Unavailable
            }
        };
    }

    /// Current fetch state.
    #[must_use]
    pub const fn state(&self) -> &LoadState<Vec<Product>> {
        &self.state
    }

    /// Whether the fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The full fetched catalog; empty until loaded.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self.state.loaded() {
            Some(products) => products,
            None => &[],
        }
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    /// Replace the category; an empty name means all categories.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.criteria.set_category(category);
    }

    /// Replace the sort order.
    pub const fn set_sort(&mut self, sort: SortOption) {
        self.criteria.sort = sort;
    }

    /// Products to show, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Product> {
        catalog::apply(self.products(), &self.criteria)
    }

    /// Cards for the visible products.
    #[must_use]
    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible().into_iter().map(ProductCard::from).collect()
    }

    /// Category names available in the loaded catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        catalog::categories(self.products())
    }

    /// Open a product's detail view.
    pub fn select(&self, id: ProductId, navigator: &impl Navigator) {
        navigator.navigate(Route::ProductDetail(id));
    }
}
