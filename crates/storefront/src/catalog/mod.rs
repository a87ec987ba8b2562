//! Remote product catalog: HTTP client, domain types and the filter engine.
//!
//! # Architecture
//!
//! - The catalog service is the source of truth for products; nothing is
//!   persisted locally except cart snapshots
//! - In-memory caching via `moka` for API responses (configurable TTL)
//! - View models depend on the [`CatalogSource`] trait, not on the HTTP client
//!
//! # Example
//!
//! ```rust,ignore
//! use product_store::catalog::{CatalogClient, FilterCriteria, SortOption, apply};
//!
//! let client = CatalogClient::new(&config.catalog)?;
//! let products = client.get_products().await?;
//!
//! let criteria = FilterCriteria::all()
//!     .with_search("shoe")
//!     .with_sort(SortOption::PriceAsc);
//! for product in apply(&products, &criteria) {
//!     println!("{} {}", product.title, product.price);
//! }
//! ```

mod cache;
mod client;
pub mod filter;
pub mod types;

pub use client::CatalogClient;
pub use filter::{FilterCriteria, ParseSortOptionError, SortOption, apply, categories};
pub use types::*;

use std::future::Future;

use product_store_core::ProductId;
use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Catalog service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product does not exist.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// Product data violated an invariant.
    #[error(transparent)]
    Invalid(#[from] InvalidProduct),

    /// Rate limited by the service.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

/// Anything that can supply catalog products.
///
/// Implemented by [`CatalogClient`]; tests and embedders can provide their own.
pub trait CatalogSource {
    /// Fetch the full product list.
    fn products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// Fetch a single product's details.
    fn product(&self, id: ProductId)
    -> impl Future<Output = Result<Product, CatalogError>> + Send;
}
