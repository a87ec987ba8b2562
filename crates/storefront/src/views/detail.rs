//! Product detail view model.

use std::fmt;
use std::str::FromStr;

use product_store_core::{ProductId, Quantity};
use thiserror::Error;
use tracing::instrument;

use super::LoadState;
use crate::cart::{Cart, CartRepository, CartStore, StorageError};
use crate::catalog::{CatalogSource, Product};
use crate::filters::sanitize_image_url;
use crate::routes::{Navigator, Route};

/// Garment size picker value.
///
/// Display state only; the cart line does not record it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Size {
    S,
    #[default]
    M,
    L,
    XL,
    XXL,
}

impl Size {
    /// All sizes in picker order.
    pub const ALL: [Self; 5] = [Self::S, Self::M, Self::L, Self::XL, Self::XXL];

    /// Label shown on the picker.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized size label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size '{0}'")]
pub struct ParseSizeError(String);

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == upper)
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}

/// State of a single product's detail view.
#[derive(Debug, Clone)]
pub struct ProductDetailViewModel {
    id: ProductId,
    state: LoadState<Product>,
    selected_image: Option<String>,
    selected_size: Size,
}

impl ProductDetailViewModel {
    /// A model for product `id`, waiting for its fetch.
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            state: LoadState::Loading,
            selected_image: None,
            selected_size: Size::default(),
        }
    }

    /// Product this view shows.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Fetch the product and select its first image.
    ///
    /// A failed fetch is logged and leaves the view [`LoadState::Unavailable`].
    #[instrument(skip_all, fields(product_id = %self.id))]
    pub async fn load<C: CatalogSource>(&mut self, source: &C) {
        match source.product(self.id).await {
            Ok(product) => {
                self.selected_image = product
                    .primary_image()
                    .map(|url| sanitize_image_url(url).to_string());
                self.state = LoadState::Loaded(product);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching product details");
                self.state = LoadState::Unavailable;
            }
        }
    }

    /// Current fetch state.
    #[must_use]
    pub const fn state(&self) -> &LoadState<Product> {
        &self.state
    }

    /// The product, once loaded.
    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        self.state.loaded()
    }

    /// Sanitized thumbnail URLs in display order.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        self.product()
            .map(|product| {
                product
                    .images
                    .iter()
                    .map(|url| sanitize_image_url(url))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The large image currently shown.
    #[must_use]
    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    /// Show one of the product's images. Returns `false` for unknown URLs.
    pub fn select_image(&mut self, url: &str) -> bool {
        let url = sanitize_image_url(url);
        if !self.images().contains(&url) {
            return false;
        }
        self.selected_image = Some(url.to_string());
        true
    }

    /// Currently selected size.
    #[must_use]
    pub const fn selected_size(&self) -> Size {
        self.selected_size
    }

    /// Change the selected size.
    pub const fn select_size(&mut self, size: Size) {
        self.selected_size = size;
    }

    /// Add one unit of the shown product to the cart.
    ///
    /// Returns `Ok(None)` while the product is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub fn add_to_cart<R: CartRepository>(
        &self,
        store: &mut CartStore<R>,
    ) -> Result<Option<Cart>, StorageError> {
        match self.product() {
            Some(product) => store.add_item(product, Quantity::ONE).map(Some),
            None => Ok(None),
        }
    }

    /// Go to the cart view.
    pub fn view_cart(&self, navigator: &impl Navigator) {
        navigator.navigate(Route::Cart);
    }
}
